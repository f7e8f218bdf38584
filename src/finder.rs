use crate::config::FinderConfig;
use crate::filter::FilterCriteria;
use crate::generator::{GeneratorError, TextGenerator};
use crate::pipeline::Pipeline;
use crate::prompts;
use crate::provider::ProviderResolver;
use crate::results::{CourseRecord, RecommendationResponse};

/// Builder and runner tying a text generator to the course pipeline
pub struct CourseFinder<G> {
    generator: G,
    pipeline: Pipeline,
    course_count: usize,
}

impl<G: TextGenerator> CourseFinder<G> {
    /// Create a finder around a generator with default settings
    pub fn new(generator: G) -> Self {
        Self::from_config(generator, &FinderConfig::default())
    }

    /// Create a finder using the provider aliases and course count of a config
    pub fn from_config(generator: G, config: &FinderConfig) -> Self {
        Self {
            generator,
            pipeline: Pipeline::new(config.resolver()),
            course_count: config.course_count,
        }
    }

    /// Use a custom provider resolver
    pub fn with_resolver(mut self, resolver: ProviderResolver) -> Self {
        self.pipeline = Pipeline::new(resolver);
        self
    }

    /// Set how many courses the generator is asked for
    pub fn with_course_count(mut self, count: usize) -> Self {
        self.course_count = count;
        self
    }

    /// The search query that would be sent for a topic
    pub fn search_query(&self, topic: &str, criteria: &FilterCriteria) -> String {
        prompts::search_query(topic.trim(), criteria, self.course_count)
    }

    /// Ask the generator for courses on a topic and return the filtered records.
    ///
    /// An empty topic gives an empty list without calling the generator.
    /// Generator failures are returned as errors; "no courses" is `Ok` with
    /// an empty list.
    pub async fn recommend(
        &self,
        topic: &str,
        criteria: &FilterCriteria,
    ) -> Result<Vec<CourseRecord>, GeneratorError> {
        let topic = topic.trim();
        if topic.is_empty() {
            ::log::warn!("Empty topic provided");
            return Ok(Vec::new());
        }

        ::log::info!("Starting course search for topic: {} with filters: {:?}", topic, criteria);
        let query = self.search_query(topic, criteria);
        let raw = self.generator.generate(&query).await.inspect_err(|e| {
            ::log::error!("Generator failed for topic '{}': {}", topic, e);
        })?;
        ::log::debug!("Generator returned {} chars", raw.len());

        let courses = self.pipeline.process(&raw, criteria);
        ::log::info!("Found {} courses for topic '{}' after filtering", courses.len(), topic);
        Ok(courses)
    }

    /// Like [`recommend`](Self::recommend), wrapped in a response envelope
    pub async fn respond(
        &self,
        topic: &str,
        criteria: &FilterCriteria,
    ) -> Result<RecommendationResponse, GeneratorError> {
        let results = self.recommend(topic, criteria).await?;
        Ok(RecommendationResponse::new(topic.trim(), results))
    }

    /// Ask the generator to narrow a course list down to a free-text request
    /// such as "the cheapest one" or "only Coursera".
    pub async fn refine(
        &self,
        courses: &[CourseRecord],
        request: &str,
    ) -> Result<Vec<CourseRecord>, GeneratorError> {
        if courses.is_empty() {
            ::log::warn!("No courses provided for refinement");
            return Ok(Vec::new());
        }
        let request = request.trim();
        if request.is_empty() {
            ::log::warn!("Empty refinement request");
            return Ok(Vec::new());
        }

        ::log::info!("Refining {} courses with request: {}", courses.len(), request);
        let query = prompts::refinement_query(courses, request);
        let raw = self.generator.generate(&query).await.inspect_err(|e| {
            ::log::error!("Generator failed while refining: {}", e);
        })?;

        let refined = self.pipeline.assemble(&raw);
        ::log::info!("Refined to {} courses", refined.len());
        Ok(refined)
    }
}
