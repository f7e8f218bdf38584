use crate::duration::{self, DurationBucket};
use serde::{Deserialize, Serialize};

/// A single course listing after parsing and normalization
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseRecord {
    /// Title of the course
    pub title: String,

    /// URL of the course page
    pub url: String,

    /// Platform or institution offering the course
    pub provider: String,

    /// Free-text description (may be empty)
    #[serde(default)]
    pub description: String,

    /// Estimated duration as written by the source (e.g. "8 weeks")
    pub duration: Option<String>,

    /// Difficulty level (usually Beginner, Intermediate or Advanced)
    pub level: Option<String>,

    /// Average rating if one was given
    pub rating: Option<f64>,

    /// Price information; "Free" once judged free of charge
    pub price: Option<String>,
}

impl CourseRecord {
    /// Create a record with only the required fields set
    pub fn new(title: impl Into<String>, url: impl Into<String>, provider: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
            provider: provider.into(),
            description: String::new(),
            duration: None,
            level: None,
            rating: None,
            price: None,
        }
    }

    /// Classify the duration text into a bucket, if possible
    pub fn duration_bucket(&self) -> Option<DurationBucket> {
        duration::classify(self.duration.as_deref())
    }

    /// Whether the price text marks this course as free of charge
    pub fn is_free(&self) -> bool {
        self.price
            .as_deref()
            .is_some_and(|price| price.to_lowercase().contains("free"))
    }
}

/// The records produced for one topic, as handed to the request layer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationResponse {
    /// Topic that was searched for
    pub topic: String,

    /// Recommended courses (empty when nothing matched)
    pub results: Vec<CourseRecord>,
}

impl RecommendationResponse {
    pub fn new(topic: impl Into<String>, results: Vec<CourseRecord>) -> Self {
        Self {
            topic: topic.into(),
            results,
        }
    }
}
