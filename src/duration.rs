use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

static FIRST_INTEGER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]+").expect("integer pattern should be valid"));

/// Coarse duration classes used for filtering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum DurationBucket {
    /// Under 4 weeks
    #[serde(rename = "Short (< 4 weeks)", alias = "short", alias = "Short")]
    Short,
    /// 4 to 12 weeks inclusive
    #[serde(rename = "Medium (4-12 weeks)", alias = "medium", alias = "Medium")]
    Medium,
    /// Over 12 weeks
    #[serde(rename = "Long (> 12 weeks)", alias = "long", alias = "Long")]
    Long,
}

impl DurationBucket {
    /// Human-readable label, also used as the serialized form
    pub fn label(&self) -> &'static str {
        match self {
            DurationBucket::Short => "Short (< 4 weeks)",
            DurationBucket::Medium => "Medium (4-12 weeks)",
            DurationBucket::Long => "Long (> 12 weeks)",
        }
    }
}

impl fmt::Display for DurationBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for DurationBucket {
    type Err = String;

    /// Accepts either the full label or the short name (case-insensitive)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        for bucket in [DurationBucket::Short, DurationBucket::Medium, DurationBucket::Long] {
            if wanted.eq_ignore_ascii_case(bucket.label()) {
                return Ok(bucket);
            }
        }
        match wanted.to_lowercase().as_str() {
            "short" => Ok(DurationBucket::Short),
            "medium" => Ok(DurationBucket::Medium),
            "long" => Ok(DurationBucket::Long),
            _ => Err(format!("unknown duration bucket: {}", s)),
        }
    }
}

/// Classifies free-text duration into a bucket.
///
/// Rules, checked in order on the lowercased text:
/// - mentions "week": `< 4` Short, `4..=12` Medium, `> 12` Long
/// - mentions "month": always Long
/// - mentions "hour" or "hr": `< 20` Short, `20..60` Medium, `>= 60` Long
///
/// The number is the first integer in the text. A week or hour duration
/// without a number, or text matching none of the units, has no bucket.
pub fn classify(duration: Option<&str>) -> Option<DurationBucket> {
    let text = duration?.to_lowercase();
    if text.trim().is_empty() {
        return None;
    }

    let number = first_integer(&text);

    if text.contains("week") {
        return number.map(|weeks| match weeks {
            0..=3 => DurationBucket::Short,
            4..=12 => DurationBucket::Medium,
            _ => DurationBucket::Long,
        });
    }

    if text.contains("month") {
        return Some(DurationBucket::Long);
    }

    if text.contains("hour") || text.contains("hr") {
        return number.map(|hours| match hours {
            0..=19 => DurationBucket::Short,
            20..=59 => DurationBucket::Medium,
            _ => DurationBucket::Long,
        });
    }

    ::log::debug!("Unclassifiable duration: {:?}", text);
    None
}

/// First run of ASCII digits in the text; saturates on overflow
fn first_integer(text: &str) -> Option<u64> {
    FIRST_INTEGER
        .find(text)
        .map(|m| m.as_str().parse::<u64>().unwrap_or(u64::MAX))
}
