use crate::filter::FilterCriteria;
use crate::provider::{ProviderAlias, ProviderResolver};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Configuration for a course finder
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinderConfig {
    /// Constraints applied to every recommendation
    #[serde(default)]
    pub filters: FilterCriteria,

    /// Extra domain aliases, checked before the built-in table
    #[serde(default)]
    pub provider_aliases: Vec<ProviderAlias>,

    /// Number of courses to ask the generator for
    #[serde(default = "default_course_count")]
    pub course_count: usize,
}

/// Default value for course_count
fn default_course_count() -> usize {
    5
}

impl Default for FinderConfig {
    fn default() -> Self {
        Self {
            filters: FilterCriteria::default(),
            provider_aliases: Vec::new(),
            course_count: default_course_count(),
        }
    }
}

impl FinderConfig {
    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn Error>> {
        let mut file = File::open(path)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;

        Self::from_json(&contents)
    }

    /// Load configuration from a JSON string
    pub fn from_json(json: &str) -> Result<Self, Box<dyn Error>> {
        let config: Self = serde_json::from_str(json)?;
        Ok(config)
    }

    /// Provider resolver with the configured aliases applied
    pub fn resolver(&self) -> ProviderResolver {
        ProviderResolver::new().with_aliases(self.provider_aliases.clone())
    }
}
