use serde::{Deserialize, Serialize};

/// Identifier of a heuristic check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckId {
    /// Scheme is `https`
    Scheme,
    /// Hostname contains a trust-exploiting word
    SuspiciousKeyword,
    /// Top-level domain reputation
    TldTrust,
    /// Hostname characters and IDN encoding
    Characters,
    /// Sub-domain depth and hyphen count
    Structure,
    /// Host answered a network request
    Liveness,
}

impl CheckId {
    /// Every check, in reporting order.
    pub const ALL: [Self; 6] = [
        Self::Scheme,
        Self::SuspiciousKeyword,
        Self::TldTrust,
        Self::Characters,
        Self::Structure,
        Self::Liveness,
    ];

    /// Identifier as used in configuration files
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Scheme => "scheme",
            Self::SuspiciousKeyword => "suspicious_keyword",
            Self::TldTrust => "tld_trust",
            Self::Characters => "characters",
            Self::Structure => "structure",
            Self::Liveness => "liveness",
        }
    }
}

impl std::fmt::Display for CheckId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Display styling of a check outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckStatus {
    /// Check passed
    Success,
    /// Check flagged something worth a second look
    Warning,
    /// Check failed
    Error,
    /// Neutral finding
    Info,
}

impl std::fmt::Display for CheckStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Success => write!(f, "success"),
            Self::Warning => write!(f, "warning"),
            Self::Error => write!(f, "error"),
            Self::Info => write!(f, "info"),
        }
    }
}

/// Result of one heuristic check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckOutcome {
    /// Which check produced this outcome
    pub check: CheckId,

    /// Independent sub-score, 0..=100
    pub sub_score: u8,

    /// Weight applied to the sub-score
    pub weight: f64,

    /// Points added to the final score (`sub_score * weight`)
    pub contribution: f64,

    /// Pass/fail classification
    pub passed: bool,

    /// Display styling
    pub status: CheckStatus,

    /// Human-readable explanation
    pub message: String,
}

impl CheckOutcome {
    /// Build an outcome, deriving the contribution from sub-score and weight.
    #[must_use]
    pub fn new(
        check: CheckId,
        sub_score: u8,
        weight: f64,
        passed: bool,
        status: CheckStatus,
        message: impl Into<String>,
    ) -> Self {
        let sub_score = sub_score.min(100);
        Self {
            check,
            sub_score,
            weight,
            contribution: f64::from(sub_score) * weight,
            passed,
            status,
            message: message.into(),
        }
    }

    /// Highest contribution this check could have made
    #[must_use]
    pub fn max_contribution(&self) -> f64 {
        100.0 * self.weight
    }
}
