use clap::{Parser, ValueEnum};
use course_finder::{DurationBucket, FilterCriteria, Pricing};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "course-finder")]
#[command(about = "Turns generated course listings into clean, filtered course records")]
#[command(version)]
pub struct Args {
    /// File containing the generator's output ("-" or omitted reads stdin)
    pub input: Option<PathBuf>,

    /// Topic the listings were generated for
    #[arg(short, long, default_value = "courses")]
    pub topic: String,

    /// JSON configuration file (filters, provider aliases, course count)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Accepted level (repeatable)
    #[arg(long)]
    pub level: Vec<String>,

    /// Accepted pricing (repeatable)
    #[arg(long, value_enum)]
    pub pricing: Vec<PricingArg>,

    /// Accepted provider (repeatable)
    #[arg(long)]
    pub provider: Vec<String>,

    /// Accepted duration bucket (repeatable)
    #[arg(long, value_enum)]
    pub duration: Vec<DurationArg>,

    /// Number of courses to request from a live generator
    #[arg(long)]
    pub count: Option<usize>,

    /// Print the search query for the topic and exit
    #[arg(long)]
    pub print_query: bool,

    /// Pretty-print the JSON output
    #[arg(long)]
    pub pretty: bool,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum PricingArg {
    Free,
    Paid,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum DurationArg {
    Short,
    Medium,
    Long,
}

impl Args {
    /// Filter criteria given on the command line
    pub fn criteria(&self) -> FilterCriteria {
        FilterCriteria {
            level: self.level.clone(),
            pricing: self.pricing.iter().map(|p| convert_pricing(*p)).collect(),
            provider: self.provider.clone(),
            duration: self.duration.iter().map(|d| convert_duration(*d)).collect(),
        }
    }
}

/// Convert from CLI pricing argument to the library label
pub fn convert_pricing(arg: PricingArg) -> Pricing {
    match arg {
        PricingArg::Free => Pricing::Free,
        PricingArg::Paid => Pricing::Paid,
    }
}

/// Convert from CLI duration argument to the library bucket
pub fn convert_duration(arg: DurationArg) -> DurationBucket {
    match arg {
        DurationArg::Short => DurationBucket::Short,
        DurationArg::Medium => DurationBucket::Medium,
        DurationArg::Long => DurationBucket::Long,
    }
}
