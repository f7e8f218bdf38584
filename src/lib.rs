// Re-export modules
pub mod assembler;
pub mod config;
pub mod duration;
pub mod filter;
pub mod finder;
pub mod generator;
pub mod parsers;
pub mod pipeline;
pub mod prompts;
pub mod provider;
pub mod results;
pub mod utils;

// Re-export commonly used types for convenience
pub use config::FinderConfig;
pub use duration::DurationBucket;
pub use filter::{ConstraintFilter, FilterCriteria, Pricing};
pub use finder::CourseFinder;
pub use generator::{CannedText, GeneratorError, TextGenerator};
pub use pipeline::{Pipeline, process};
pub use provider::ProviderResolver;
pub use results::{CourseRecord, RecommendationResponse};
