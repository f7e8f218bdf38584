use crate::parsers::FieldSet;
use crate::provider::ProviderResolver;
use crate::results::CourseRecord;
use crate::utils;
use std::collections::HashSet;
use std::fmt;

/// Why a parsed block could not become a record
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockError {
    /// Title or URL missing
    MissingField(&'static str),
    /// URL does not parse as an http(s) URL
    InvalidUrl(String),
}

impl fmt::Display for BlockError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BlockError::MissingField(name) => write!(f, "missing required field {}", name),
            BlockError::InvalidUrl(url) => write!(f, "invalid course URL {:?}", url),
        }
    }
}

impl std::error::Error for BlockError {}

/// Turns field-sets into deduplicated, normalized course records
#[derive(Debug, Clone, Default)]
pub struct RecordAssembler {
    resolver: ProviderResolver,
}

impl RecordAssembler {
    pub fn new(resolver: ProviderResolver) -> Self {
        Self { resolver }
    }

    /// Build records in input order.
    ///
    /// Invalid blocks are logged and skipped. A record whose normalized
    /// URL was already seen is dropped, so the first occurrence wins.
    pub fn assemble(&self, field_sets: Vec<FieldSet>) -> Vec<CourseRecord> {
        let mut seen = HashSet::new();
        let mut records = Vec::with_capacity(field_sets.len());

        for fields in field_sets {
            let record = match self.build(fields) {
                Ok(record) => record,
                Err(e) => {
                    ::log::warn!("Skipping course block: {}", e);
                    continue;
                }
            };

            let key = utils::normalize_url(&record.url);
            if !seen.insert(key) {
                ::log::debug!("Dropping duplicate course URL: {}", record.url);
                continue;
            }

            records.push(record);
        }

        records
    }

    /// Build a single record with provider and price normalized
    pub fn build(&self, fields: FieldSet) -> Result<CourseRecord, BlockError> {
        let title = fields.title.ok_or(BlockError::MissingField("Title"))?;
        let url = fields.url.ok_or(BlockError::MissingField("URL"))?;
        if !utils::is_web_url(&url) {
            return Err(BlockError::InvalidUrl(url));
        }

        let provider = self.resolver.reconcile(fields.provider.as_deref(), &url);

        Ok(CourseRecord {
            title,
            url,
            provider,
            description: fields.description.unwrap_or_default(),
            duration: fields.duration,
            level: fields.level,
            rating: fields.rating,
            price: fields.price.map(normalize_price),
        })
    }
}

/// Any price mentioning "free" becomes the literal "Free"
pub fn normalize_price(price: String) -> String {
    if price.to_lowercase().contains("free") {
        "Free".to_string()
    } else {
        price
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(title: &str, url: &str) -> FieldSet {
        FieldSet {
            title: Some(title.to_string()),
            url: Some(url.to_string()),
            ..FieldSet::default()
        }
    }

    #[test]
    fn test_build_fills_defaults() {
        let assembler = RecordAssembler::default();
        let record = assembler
            .build(fields("ML", "https://www.coursera.org/learn/ml"))
            .unwrap();

        assert_eq!(record.provider, "Coursera");
        assert_eq!(record.description, "");
        assert_eq!(record.duration, None);
        assert_eq!(record.price, None);
    }

    #[test]
    fn test_build_rejects_bad_url() {
        let assembler = RecordAssembler::default();
        assert_eq!(
            assembler.build(fields("ML", "coursera ml course")),
            Err(BlockError::InvalidUrl("coursera ml course".to_string()))
        );
        assert_eq!(
            assembler.build(FieldSet::default()),
            Err(BlockError::MissingField("Title"))
        );
    }

    #[test]
    fn test_provider_reconciliation() {
        let assembler = RecordAssembler::default();

        let mut kept = fields("ML", "https://coursera.org/learn/x");
        kept.provider = Some("CourseraX".to_string());
        assert_eq!(assembler.build(kept).unwrap().provider, "CourseraX");

        let mut corrected = fields("CS50", "https://edx.org/course/cs50");
        corrected.provider = Some("Udemy".to_string());
        assert_eq!(assembler.build(corrected).unwrap().provider, "edX");
    }

    #[test]
    fn test_price_normalization() {
        assert_eq!(normalize_price("FREE (audit)".to_string()), "Free");
        assert_eq!(normalize_price("Free trial, then $39/month".to_string()), "Free");
        assert_eq!(normalize_price("$49.99".to_string()), "$49.99");
        assert_eq!(normalize_price("Subscription required".to_string()), "Subscription required");
    }

    #[test]
    fn test_dedup_keeps_first_occurrence() {
        let assembler = RecordAssembler::default();
        let mut first = fields("First", "https://Coursera.org/learn/x/");
        first.level = Some("Beginner".to_string());
        let mut second = fields("Second", "https://coursera.org/learn/x");
        second.level = Some("Advanced".to_string());
        let third = fields("Third", "https://coursera.org/learn/y");

        let records = assembler.assemble(vec![first, second, third]);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].title, "First");
        assert_eq!(records[0].url, "https://Coursera.org/learn/x/");
        assert_eq!(records[0].level.as_deref(), Some("Beginner"));
        assert_eq!(records[1].title, "Third");
    }

    #[test]
    fn test_single_slash_url_is_rejected() {
        let assembler = RecordAssembler::default();
        assert_eq!(
            assembler.build(fields("ML", "https:/Coursera.org/x/")),
            Err(BlockError::InvalidUrl("https:/Coursera.org/x/".to_string()))
        );
    }

    #[test]
    fn test_invalid_block_does_not_abort_others() {
        let assembler = RecordAssembler::default();
        let records = assembler.assemble(vec![
            fields("Broken", "not a url"),
            fields("Good", "https://udemy.com/course/rust"),
        ]);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].title, "Good");
    }
}
