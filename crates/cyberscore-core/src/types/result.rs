use super::CheckOutcome;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Qualitative bucket derived from the numeric score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    /// Score at or above the secure threshold
    Secure,
    /// Score between the moderate and secure thresholds
    Moderate,
    /// Score below the moderate threshold
    Risky,
    /// Input could not be parsed; never reached through the thresholds
    Invalid,
}

impl Tier {
    /// Identifier as serialized
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Secure => "secure",
            Self::Moderate => "moderate",
            Self::Risky => "risky",
            Self::Invalid => "invalid",
        }
    }
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tier {
    type Err = crate::ScoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "secure" => Ok(Self::Secure),
            "moderate" => Ok(Self::Moderate),
            "risky" => Ok(Self::Risky),
            "invalid" => Ok(Self::Invalid),
            other => Err(crate::ScoreError::ConfigurationInvalid(format!(
                "unknown tier: {other}"
            ))),
        }
    }
}

/// Outcome of one evaluation.
///
/// Built once and handed to the caller; a new evaluation builds a new result.
/// Deserialized results go through the same rules as [`ScoreResult::new`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "StoredResult")]
pub struct ScoreResult {
    url: String,
    score: u8,
    tier: Tier,
    details: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    checks: Vec<CheckOutcome>,
}

/// Wire shape of a [`ScoreResult`] read back from storage.
#[derive(Deserialize)]
struct StoredResult {
    url: String,
    score: u8,
    tier: Tier,
    #[serde(default)]
    details: Vec<String>,
    #[serde(default)]
    checks: Vec<CheckOutcome>,
}

impl From<StoredResult> for ScoreResult {
    fn from(stored: StoredResult) -> Self {
        if stored.tier == Tier::Invalid {
            let mut result = Self::invalid(stored.url, String::new());
            result.details = stored.details;
            return result;
        }
        if stored.checks.is_empty() {
            // Older entries carry report lines only
            let mut result = Self::new(stored.url, stored.score, stored.tier, Vec::new());
            result.details = stored.details;
            return result;
        }
        Self::new(stored.url, stored.score, stored.tier, stored.checks)
    }
}

impl ScoreResult {
    /// Build a scored result. `details` follow the order of `checks`.
    #[must_use]
    pub fn new(url: impl Into<String>, score: u8, tier: Tier, checks: Vec<CheckOutcome>) -> Self {
        let details = checks.iter().map(|c| c.message.clone()).collect();
        Self {
            url: url.into(),
            score: score.min(100),
            tier,
            details,
            checks,
        }
    }

    /// Build the result for unparseable input: score 0, one explanatory message.
    #[must_use]
    pub fn invalid(url: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            score: 0,
            tier: Tier::Invalid,
            details: vec![message.into()],
            checks: Vec::new(),
        }
    }

    /// Input exactly as supplied
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Final score, 0..=100
    #[must_use]
    pub const fn score(&self) -> u8 {
        self.score
    }

    /// Qualitative tier
    #[must_use]
    pub const fn tier(&self) -> Tier {
        self.tier
    }

    /// Report lines, in check order
    #[must_use]
    pub fn details(&self) -> &[String] {
        &self.details
    }

    /// Full per-check outcomes (empty for invalid input)
    #[must_use]
    pub fn checks(&self) -> &[CheckOutcome] {
        &self.checks
    }

    /// Returns true if the input could not be parsed
    #[must_use]
    pub fn is_invalid(&self) -> bool {
        self.tier == Tier::Invalid
    }
}
