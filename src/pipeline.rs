//! Raw generator text in, filtered course records out.
//!
//! Every step is pure: the same text and criteria always give the same
//! records, and nothing is shared between calls.

use crate::assembler::RecordAssembler;
use crate::filter::{ConstraintFilter, FilterCriteria};
use crate::parsers::Parser;
use crate::provider::ProviderResolver;
use crate::results::CourseRecord;

/// Parse, assemble and filter with the built-in provider table
pub fn process(raw_text: &str, criteria: &FilterCriteria) -> Vec<CourseRecord> {
    Pipeline::default().process(raw_text, criteria)
}

/// The normalization-and-filtering pipeline
#[derive(Debug, Clone, Default)]
pub struct Pipeline {
    assembler: RecordAssembler,
}

impl Pipeline {
    pub fn new(resolver: ProviderResolver) -> Self {
        Self {
            assembler: RecordAssembler::new(resolver),
        }
    }

    /// Parse and assemble without filtering
    pub fn assemble(&self, raw_text: &str) -> Vec<CourseRecord> {
        let field_sets = Parser::parse(raw_text);
        let parsed = field_sets.len();
        let records = self.assembler.assemble(field_sets);
        ::log::debug!("Assembled {} courses from {} parsed blocks", records.len(), parsed);
        records
    }

    /// Parse, assemble and apply the criteria
    pub fn process(&self, raw_text: &str, criteria: &FilterCriteria) -> Vec<CourseRecord> {
        let records = self.assemble(raw_text);
        ConstraintFilter::new(criteria).apply(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::duration::DurationBucket;
    use crate::filter::Pricing;

    const RAW: &str = "\
Title: Machine Learning Specialization
URL: https://www.coursera.org/specializations/machine-learning-introduction/
Provider: CourseraX
Duration: 12 weeks
Level: Beginner
Rating: 4.9
Price: Free to audit
Description: Build ML models with NumPy and scikit-learn.

Title: Duplicate of the first
URL: https://WWW.Coursera.org/specializations/machine-learning-introduction
Provider: Coursera
Level: Advanced

Title: CS50's Introduction to Artificial Intelligence with Python
URL: https://www.edx.org/course/cs50s-introduction-to-artificial-intelligence-with-python
Provider: Udemy
Duration: 7 weeks
Level: Intermediate
Rating: great
Price: $199
Description: Graph search, knowledge, uncertainty.

Title: Broken link
URL: see the course page

Title: Deep Learning A-Z
URL: https://www.udemy.com/course/deeplearning/
Duration: 22.5 hours
Level: Intermediate
Price: $84.99
Description: Hands-on deep learning.";

    fn titles(records: &[CourseRecord]) -> Vec<&str> {
        records.iter().map(|r| r.title.as_str()).collect()
    }

    #[test]
    fn test_nothing_found_is_empty() {
        assert!(process("", &FilterCriteria::default()).is_empty());
        assert!(process("No courses today.", &FilterCriteria::default()).is_empty());
    }

    #[test]
    fn test_full_pipeline_unfiltered() {
        let records = process(RAW, &FilterCriteria::default());
        assert_eq!(
            titles(&records),
            vec![
                "Machine Learning Specialization",
                "CS50's Introduction to Artificial Intelligence with Python",
                "Deep Learning A-Z",
            ]
        );

        let first = &records[0];
        assert_eq!(first.provider, "CourseraX");
        assert_eq!(first.price.as_deref(), Some("Free"));
        assert_eq!(first.level.as_deref(), Some("Beginner"));
        assert_eq!(first.rating, Some(4.9));

        let second = &records[1];
        assert_eq!(second.provider, "edX");
        assert_eq!(second.rating, None);
        assert_eq!(second.price.as_deref(), Some("$199"));

        let third = &records[2];
        assert_eq!(third.provider, "Udemy");
        assert_eq!(third.duration_bucket(), Some(DurationBucket::Medium));
    }

    #[test]
    fn test_full_pipeline_filtered() {
        let criteria = FilterCriteria {
            pricing: vec![Pricing::Paid],
            level: vec!["intermediate".to_string()],
            duration: vec![DurationBucket::Medium],
            ..FilterCriteria::default()
        };
        let records = process(RAW, &criteria);
        assert_eq!(
            titles(&records),
            vec![
                "CS50's Introduction to Artificial Intelligence with Python",
                "Deep Learning A-Z",
            ]
        );

        let criteria = FilterCriteria {
            provider: vec!["coursera".to_string()],
            ..FilterCriteria::default()
        };
        assert!(process(RAW, &criteria).is_empty(), "CourseraX is not Coursera");
    }

    #[test]
    fn test_price_after_description_is_filtered_as_free() {
        let raw = "Title: Rust\nURL: https://udemy.com/course/rust\nDescription: Learn Rust.\nPrice: Free\nLevel: Beginner\nDuration: 3 weeks";
        let criteria = FilterCriteria {
            pricing: vec![Pricing::Free],
            ..FilterCriteria::default()
        };
        let records = process(raw, &criteria);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].price.as_deref(), Some("Free"));
        assert_eq!(records[0].level.as_deref(), Some("Beginner"));
        assert_eq!(records[0].duration_bucket(), Some(DurationBucket::Short));
    }

    #[test]
    fn test_custom_resolver() {
        let pipeline = Pipeline::new(ProviderResolver::new().with_alias("udemy", "Udemy Business"));
        let records = pipeline.assemble(RAW);
        assert_eq!(records[2].provider, "Udemy Business");
    }
}
