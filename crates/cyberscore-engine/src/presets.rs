//! Weight presets.
//!
//! Every preset sums to 1.0 and keeps the liveness weight small enough that an
//! unreachable host alone cannot push an otherwise perfect URL out of the
//! moderate tier.

use crate::config::CheckWeights;
use cyberscore_core::ScoreError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Named weighting schemes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Preset {
    /// All six checks, liveness included
    #[default]
    Standard,
    /// No network access: liveness weight redistributed
    Offline,
    /// Lexical structure only: no keyword list, no liveness
    Lexical,
}

impl Preset {
    /// Weights for this preset
    #[must_use]
    pub const fn weights(self) -> CheckWeights {
        match self {
            Self::Standard => standard_weights(),
            Self::Offline => offline_weights(),
            Self::Lexical => lexical_weights(),
        }
    }

    /// Returns true if this preset needs a liveness probe
    #[must_use]
    pub fn uses_liveness(self) -> bool {
        self.weights().liveness > 0.0
    }
}

impl FromStr for Preset {
    type Err = ScoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "standard" | "default" => Ok(Self::Standard),
            "offline" => Ok(Self::Offline),
            "lexical" => Ok(Self::Lexical),
            other => Err(ScoreError::ConfigurationInvalid(format!(
                "unknown preset: {other} (expected standard, offline or lexical)"
            ))),
        }
    }
}

impl std::fmt::Display for Preset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Standard => write!(f, "standard"),
            Self::Offline => write!(f, "offline"),
            Self::Lexical => write!(f, "lexical"),
        }
    }
}

/// Default weights: every check runs, liveness is advisory.
#[must_use]
pub const fn standard_weights() -> CheckWeights {
    CheckWeights {
        scheme: 0.25,
        suspicious_keyword: 0.10,
        tld_trust: 0.15,
        characters: 0.20,
        structure: 0.15,
        liveness: 0.15,
    }
}

/// Offline weights: no probe available, redistribute its weight.
#[must_use]
pub const fn offline_weights() -> CheckWeights {
    CheckWeights {
        scheme: 0.30,
        suspicious_keyword: 0.10,
        tld_trust: 0.20,
        characters: 0.20,
        structure: 0.20,
        liveness: 0.0,
    }
}

/// Lexical weights: scheme, TLD, characters and structure only.
#[must_use]
pub const fn lexical_weights() -> CheckWeights {
    CheckWeights {
        scheme: 0.30,
        suspicious_keyword: 0.0,
        tld_trust: 0.25,
        characters: 0.25,
        structure: 0.20,
        liveness: 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_sum_to_one() {
        for preset in [Preset::Standard, Preset::Offline, Preset::Lexical] {
            let sum = preset.weights().sum();
            assert!((sum - 1.0).abs() < 1e-9, "{preset} sums to {sum}");
        }
    }

    #[test]
    fn only_standard_needs_a_probe() {
        assert!(Preset::Standard.uses_liveness());
        assert!(!Preset::Offline.uses_liveness());
        assert!(!Preset::Lexical.uses_liveness());
    }

    #[test]
    fn parses_names() {
        assert_eq!("OFFLINE".parse::<Preset>().unwrap(), Preset::Offline);
        assert_eq!("default".parse::<Preset>().unwrap(), Preset::Standard);
        assert!("paranoid".parse::<Preset>().is_err());
    }
}
