use crate::utils;
use serde::{Deserialize, Serialize};

/// Provider name used when nothing can be derived from the URL
pub const UNKNOWN_PROVIDER: &str = "Unknown";

/// Built-in domain aliases, checked in order against the main domain label
const DEFAULT_ALIASES: &[(&str, &str)] = &[
    ("coursera", "Coursera"),
    ("edx", "edX"),
    ("udemy", "Udemy"),
    ("khan", "Khan Academy"),
    ("khanacademy", "Khan Academy"),
    ("udacity", "Udacity"),
    ("pluralsight", "Pluralsight"),
    ("linkedin", "LinkedIn Learning"),
    ("linkedinlearning", "LinkedIn Learning"),
    ("skillshare", "Skillshare"),
    ("codecademy", "Codecademy"),
    ("freecodecamp", "freeCodeCamp"),
    ("mit", "MIT OpenCourseWare"),
    ("youtube", "YouTube"),
    ("youtu", "YouTube"),
];

/// Maps a lowercase domain substring to a canonical provider name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderAlias {
    /// Substring looked for in the main domain label
    pub pattern: String,

    /// Canonical provider name returned on a match
    pub provider: String,
}

impl ProviderAlias {
    pub fn new(pattern: impl Into<String>, provider: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into().to_lowercase(),
            provider: provider.into(),
        }
    }
}

/// Derives canonical provider names from course URLs
#[derive(Debug, Clone)]
pub struct ProviderResolver {
    aliases: Vec<ProviderAlias>,
}

impl Default for ProviderResolver {
    fn default() -> Self {
        Self {
            aliases: DEFAULT_ALIASES
                .iter()
                .map(|(pattern, provider)| ProviderAlias::new(*pattern, *provider))
                .collect(),
        }
    }
}

impl ProviderResolver {
    /// Create a resolver with the built-in alias table
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an alias that is checked before the built-in ones
    pub fn with_alias(self, pattern: impl Into<String>, provider: impl Into<String>) -> Self {
        self.with_aliases([ProviderAlias::new(pattern, provider)])
    }

    /// Add several aliases, keeping their relative order, ahead of existing entries
    pub fn with_aliases(mut self, extra: impl IntoIterator<Item = ProviderAlias>) -> Self {
        let mut aliases: Vec<ProviderAlias> = extra
            .into_iter()
            .map(|alias| ProviderAlias::new(alias.pattern, alias.provider))
            .filter(|alias| !alias.pattern.is_empty())
            .collect();
        aliases.append(&mut self.aliases);
        self.aliases = aliases;
        self
    }

    /// Derive the provider name from a URL's domain.
    ///
    /// The host (minus a leading `www.`) is split on `.` and the
    /// second-to-last label is matched against the alias table by
    /// substring. Unmatched domains are returned capitalized. URLs
    /// without a usable host resolve to [`UNKNOWN_PROVIDER`].
    pub fn resolve(&self, url: &str) -> String {
        let Some(host) = utils::host_of(url) else {
            ::log::debug!("No host in URL {:?}, provider unknown", url);
            return UNKNOWN_PROVIDER.to_string();
        };

        let host = host.strip_prefix("www.").unwrap_or(&host);
        let main_domain = main_domain(host);
        if main_domain.is_empty() {
            return UNKNOWN_PROVIDER.to_string();
        }

        for alias in &self.aliases {
            if main_domain.contains(alias.pattern.as_str()) {
                return alias.provider.clone();
            }
        }

        capitalize(main_domain)
    }

    /// Pick between a supplied provider and the one derived from the URL.
    ///
    /// The supplied name is kept unless the derived name is known and
    /// neither name contains the other (case-insensitively); then the
    /// URL wins. A missing supplied name always yields the derived one.
    pub fn reconcile(&self, supplied: Option<&str>, url: &str) -> String {
        let derived = self.resolve(url);
        reconcile(supplied, &derived)
    }
}

/// Reconciliation rule between a supplied and a URL-derived provider
pub fn reconcile(supplied: Option<&str>, derived: &str) -> String {
    let supplied = match supplied.map(str::trim) {
        Some(s) if !s.is_empty() => s,
        _ => return derived.to_string(),
    };

    let supplied_lower = supplied.to_lowercase();
    let derived_lower = derived.to_lowercase();
    if derived != UNKNOWN_PROVIDER
        && !supplied_lower.contains(&derived_lower)
        && !derived_lower.contains(&supplied_lower)
    {
        ::log::info!(
            "Provider mismatch: source said '{}', URL suggests '{}'; using URL-based provider",
            supplied,
            derived
        );
        return derived.to_string();
    }

    supplied.to_string()
}

/// Second-to-last label of the host, or the only label
fn main_domain(host: &str) -> &str {
    let labels: Vec<&str> = host.split('.').collect();
    if labels.len() >= 2 {
        labels[labels.len() - 2]
    } else {
        labels[0]
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
