use crate::duration::DurationBucket;
use crate::results::CourseRecord;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

/// Pricing label derived from a record's price text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Pricing {
    Free,
    Paid,
}

impl Pricing {
    pub fn of(record: &CourseRecord) -> Self {
        if record.is_free() {
            Pricing::Free
        } else {
            Pricing::Paid
        }
    }
}

impl fmt::Display for Pricing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Pricing::Free => f.write_str("free"),
            Pricing::Paid => f.write_str("paid"),
        }
    }
}

impl FromStr for Pricing {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "free" => Ok(Pricing::Free),
            "paid" => Ok(Pricing::Paid),
            _ => Err(format!("unknown pricing label: {}", s)),
        }
    }
}

/// Caller-supplied constraints on a record set.
///
/// Each dimension is a set of accepted values; an empty set places no
/// constraint on that dimension.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterCriteria {
    /// Accepted levels (matched case-insensitively)
    #[serde(default)]
    pub level: Vec<String>,

    /// Accepted pricing labels
    #[serde(default)]
    pub pricing: Vec<Pricing>,

    /// Accepted provider names (matched case-insensitively)
    #[serde(default)]
    pub provider: Vec<String>,

    /// Accepted duration buckets
    #[serde(default)]
    pub duration: Vec<DurationBucket>,
}

impl FilterCriteria {
    /// True when no dimension constrains anything
    pub fn is_empty(&self) -> bool {
        self.level.is_empty()
            && self.pricing.is_empty()
            && self.provider.is_empty()
            && self.duration.is_empty()
    }

    /// Add the values of another criteria set to this one
    pub fn extend(&mut self, other: FilterCriteria) {
        self.level.extend(other.level);
        self.pricing.extend(other.pricing);
        self.provider.extend(other.provider);
        self.duration.extend(other.duration);
    }
}

/// Applies [`FilterCriteria`] to assembled records
#[derive(Debug, Clone)]
pub struct ConstraintFilter {
    levels: HashSet<String>,
    pricing: HashSet<Pricing>,
    providers: HashSet<String>,
    durations: HashSet<DurationBucket>,
}

impl ConstraintFilter {
    /// Create a filter from criteria, normalizing text values for lookup
    pub fn new(criteria: &FilterCriteria) -> Self {
        Self {
            levels: lowercase_set(&criteria.level),
            pricing: criteria.pricing.iter().copied().collect(),
            providers: lowercase_set(&criteria.provider),
            durations: criteria.duration.iter().copied().collect(),
        }
    }

    /// True when every record passes
    pub fn is_unconstrained(&self) -> bool {
        self.levels.is_empty()
            && self.pricing.is_empty()
            && self.providers.is_empty()
            && self.durations.is_empty()
    }

    /// Keep the records that satisfy every non-empty dimension, in order
    pub fn apply(&self, records: Vec<CourseRecord>) -> Vec<CourseRecord> {
        if self.is_unconstrained() {
            return records;
        }

        let before = records.len();
        let kept: Vec<CourseRecord> = records.into_iter().filter(|r| self.accepts(r)).collect();
        ::log::debug!("Constraint filter kept {} of {} courses", kept.len(), before);
        kept
    }

    /// Determine if a single record satisfies all constraints
    pub fn accepts(&self, record: &CourseRecord) -> bool {
        // Level: an absent level can't satisfy a level constraint
        if !self.levels.is_empty() {
            let level = record.level.as_deref().map(|l| l.trim().to_lowercase());
            if !level.is_some_and(|l| self.levels.contains(&l)) {
                ::log::debug!("Rejected {} on level {:?}", record.url, record.level);
                return false;
            }
        }

        if !self.pricing.is_empty() && !self.pricing.contains(&Pricing::of(record)) {
            ::log::debug!("Rejected {} on price {:?}", record.url, record.price);
            return false;
        }

        if !self.providers.is_empty()
            && !self.providers.contains(&record.provider.trim().to_lowercase())
        {
            ::log::debug!("Rejected {} on provider {}", record.url, record.provider);
            return false;
        }

        // Duration: unclassifiable durations never match
        if !self.durations.is_empty()
            && !record
                .duration_bucket()
                .is_some_and(|bucket| self.durations.contains(&bucket))
        {
            ::log::debug!("Rejected {} on duration {:?}", record.url, record.duration);
            return false;
        }

        true
    }
}

fn lowercase_set(values: &[String]) -> HashSet<String> {
    values
        .iter()
        .map(|v| v.trim().to_lowercase())
        .filter(|v| !v.is_empty())
        .collect()
}
