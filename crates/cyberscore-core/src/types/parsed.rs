use crate::{Result, ScoreError};
use serde::{Deserialize, Serialize};
use url::Url;

/// Scheme prepended to inputs that carry none.
pub const DEFAULT_SCHEME: &str = "http";

/// A URL reduced to the parts the heuristics inspect.
///
/// Derived once per evaluation and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedUrl {
    /// Lower-cased scheme (e.g. `https`)
    pub scheme: String,

    /// Lower-cased hostname, without the trailing root dot
    pub hostname: String,

    /// Dot-separated hostname segments, in order
    pub labels: Vec<String>,

    /// Last label
    pub tld: String,
}

impl ParsedUrl {
    /// Parse user input, prepending `http://` when no scheme is present.
    ///
    /// Unicode hostnames come back in their ASCII-compatible (`xn--`) form.
    pub fn parse(input: &str) -> Result<Self> {
        let normalized = normalize(input);
        let url = Url::parse(&normalized)
            .map_err(|e| ScoreError::InvalidUrl(format!("{}: {e}", input.trim())))?;

        let hostname = url
            .host_str()
            .map(|h| h.trim_end_matches('.').to_lowercase())
            .filter(|h| !h.is_empty())
            .ok_or_else(|| ScoreError::InvalidUrl(format!("{}: missing host", input.trim())))?;

        let labels: Vec<String> = hostname.split('.').map(String::from).collect();
        let tld = labels.last().cloned().unwrap_or_default();

        Ok(Self {
            scheme: url.scheme().to_lowercase(),
            hostname,
            labels,
            tld,
        })
    }

    /// Number of labels in front of the registrable domain (`label.tld`)
    #[must_use]
    pub fn subdomain_count(&self) -> usize {
        self.labels.len().saturating_sub(2)
    }

    /// Number of `-` characters anywhere in the hostname
    #[must_use]
    pub fn hyphen_count(&self) -> usize {
        self.hostname.matches('-').count()
    }
}

/// Trim the input and give it a scheme if it has none.
#[must_use]
pub fn normalize(input: &str) -> String {
    let trimmed = input.trim();
    if trimmed.contains("://") {
        trimmed.to_string()
    } else {
        format!("{DEFAULT_SCHEME}://{trimmed}")
    }
}
