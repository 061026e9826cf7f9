//! Scoring configuration.
//!
//! A [`ScoringConfig`] is fully enumerated: every value the engine reads lives
//! here, and [`ScoringConfig::default`] is the `standard` preset. Configs are
//! validated once, before the first evaluation.

use crate::messages::Locale;
use crate::presets::Preset;
use cyberscore_core::{CheckId, Result, ScoreError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::Path;
use std::time::Duration;

/// Allowed distance between the weight sum and 1.0.
const WEIGHT_SUM_TOLERANCE: f64 = 1e-6;

/// Upper bound for the liveness probe budget.
pub const MAX_PROBE_TIMEOUT_MS: u64 = 10_000;

/// Configuration for the heuristic checks and the aggregator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScoringConfig {
    /// Weight of each check; must sum to 1.0
    pub weights: CheckWeights,

    /// TLDs scored as trustworthy
    pub trusted_tlds: Vec<String>,

    /// TLDs often seen on throwaway or abusive sites
    pub exotic_tlds: Vec<String>,

    /// Substrings that flag a hostname when present anywhere in it
    pub suspicious_keywords: Vec<String>,

    /// Score boundaries between tiers
    pub tier_thresholds: TierThresholds,

    /// Sub-scores for TLDs that are not trusted
    pub tld_scores: TldScores,

    /// Sub-domain and hyphen limits
    pub structure: StructureRules,

    /// Budget for the liveness probe, in milliseconds
    pub probe_timeout_ms: u64,

    /// Language of report messages
    pub locale: Locale,
}

/// Weight of each check.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CheckWeights {
    /// `https` scheme
    pub scheme: f64,
    /// No suspicious keyword in the hostname
    pub suspicious_keyword: f64,
    /// TLD reputation
    pub tld_trust: f64,
    /// Plain ASCII hostname, no IDN encoding
    pub characters: f64,
    /// Sub-domain depth and hyphen count
    pub structure: f64,
    /// Host reachable
    pub liveness: f64,
}

impl CheckWeights {
    /// Weight of a single check
    #[must_use]
    pub const fn weight(&self, check: CheckId) -> f64 {
        match check {
            CheckId::Scheme => self.scheme,
            CheckId::SuspiciousKeyword => self.suspicious_keyword,
            CheckId::TldTrust => self.tld_trust,
            CheckId::Characters => self.characters,
            CheckId::Structure => self.structure,
            CheckId::Liveness => self.liveness,
        }
    }

    /// Sum of all weights
    #[must_use]
    pub fn sum(&self) -> f64 {
        CheckId::ALL.iter().map(|&c| self.weight(c)).sum()
    }
}

impl Default for CheckWeights {
    fn default() -> Self {
        Preset::Standard.weights()
    }
}

/// Inclusive lower bounds of the `secure` and `moderate` tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TierThresholds {
    /// Lowest score rated `secure`
    pub secure_min: u8,
    /// Lowest score rated `moderate`
    pub moderate_min: u8,
}

impl Default for TierThresholds {
    fn default() -> Self {
        Self {
            secure_min: 80,
            moderate_min: 60,
        }
    }
}

/// Sub-scores for TLDs outside the trusted set. Trusted TLDs score 100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TldScores {
    /// TLD in neither configured set
    pub unclassified: u8,
    /// TLD in the exotic set
    pub exotic: u8,
}

impl Default for TldScores {
    fn default() -> Self {
        Self {
            unclassified: 60,
            exotic: 20,
        }
    }
}

/// Limits enforced by the structure check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StructureRules {
    /// Most sub-domain labels allowed before the registrable domain
    pub max_subdomains: usize,
    /// Most hyphens allowed in the hostname
    pub max_hyphens: usize,
    /// Points removed from the structure sub-score per violated limit
    pub penalty: u8,
}

impl Default for StructureRules {
    fn default() -> Self {
        Self {
            max_subdomains: 2,
            max_hyphens: 2,
            penalty: 50,
        }
    }
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self::for_preset(Preset::Standard)
    }
}

impl ScoringConfig {
    /// Default lists and thresholds with the given preset's weights
    #[must_use]
    pub fn for_preset(preset: Preset) -> Self {
        Self {
            weights: preset.weights(),
            trusted_tlds: to_strings(DEFAULT_TRUSTED_TLDS),
            exotic_tlds: to_strings(DEFAULT_EXOTIC_TLDS),
            suspicious_keywords: to_strings(DEFAULT_SUSPICIOUS_KEYWORDS),
            tier_thresholds: TierThresholds::default(),
            tld_scores: TldScores::default(),
            structure: StructureRules::default(),
            probe_timeout_ms: 3_000,
            locale: Locale::default(),
        }
    }

    /// Parse a TOML document. Missing keys take their `standard` defaults.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| ScoreError::ConfigurationInvalid(e.to_string()))
    }

    /// Load a config from a TOML file, falling back to defaults if absent.
    pub fn load(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            Self::from_toml_str(&content)
        } else {
            Ok(Self::default())
        }
    }

    /// Probe budget as a [`Duration`]
    #[must_use]
    pub const fn probe_timeout(&self) -> Duration {
        Duration::from_millis(self.probe_timeout_ms)
    }

    /// Returns true if the liveness check takes part in scoring
    #[must_use]
    pub fn uses_liveness(&self) -> bool {
        self.weights.liveness > 0.0
    }

    /// Reject malformed configuration.
    pub fn validate(&self) -> Result<()> {
        self.validate_weights()?;
        validate_list("trusted_tlds", &self.trusted_tlds, true)?;
        validate_list("exotic_tlds", &self.exotic_tlds, true)?;
        validate_list("suspicious_keywords", &self.suspicious_keywords, false)?;

        let trusted: BTreeSet<&str> = self.trusted_tlds.iter().map(String::as_str).collect();
        if let Some(both) = self.exotic_tlds.iter().find(|t| trusted.contains(t.as_str())) {
            return invalid(format!("TLD '{both}' is both trusted and exotic"));
        }

        let TierThresholds {
            secure_min,
            moderate_min,
        } = self.tier_thresholds;
        if !(0 < moderate_min && moderate_min < secure_min && secure_min <= 100) {
            return invalid(format!(
                "tier thresholds must satisfy 0 < moderate_min < secure_min <= 100 \
                 (got moderate_min={moderate_min}, secure_min={secure_min})"
            ));
        }

        let TldScores {
            unclassified,
            exotic,
        } = self.tld_scores;
        if !(0 < exotic && exotic <= unclassified && unclassified <= 100) {
            return invalid(format!(
                "TLD scores must satisfy 0 < exotic <= unclassified <= 100 \
                 (got exotic={exotic}, unclassified={unclassified})"
            ));
        }

        if self.structure.penalty > 100 {
            return invalid(format!(
                "structure penalty {} exceeds 100",
                self.structure.penalty
            ));
        }

        if self.probe_timeout_ms == 0 || self.probe_timeout_ms > MAX_PROBE_TIMEOUT_MS {
            return invalid(format!(
                "probe_timeout_ms must be within 1..={MAX_PROBE_TIMEOUT_MS} (got {})",
                self.probe_timeout_ms
            ));
        }

        Ok(())
    }

    fn validate_weights(&self) -> Result<()> {
        for check in CheckId::ALL {
            let w = self.weights.weight(check);
            if !w.is_finite() || w < 0.0 {
                return invalid(format!("weight for {check} must be a non-negative number (got {w})"));
            }
        }

        let sum = self.weights.sum();
        if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return invalid(format!("weights must sum to 1.0 (got {sum})"));
        }

        // Losing liveness alone must leave a perfect URL at least moderate.
        let headroom = f64::from(100 - self.tier_thresholds.moderate_min.min(100)) / 100.0;
        if self.weights.liveness > headroom + WEIGHT_SUM_TOLERANCE {
            return invalid(format!(
                "liveness weight {} exceeds {headroom}: an unreachable host alone could rate a \
                 well-formed URL below moderate",
                self.weights.liveness
            ));
        }

        Ok(())
    }
}

fn validate_list(name: &str, entries: &[String], is_tld: bool) -> Result<()> {
    for entry in entries {
        if entry.is_empty() {
            return invalid(format!("{name} contains an empty entry"));
        }
        if entry.chars().any(char::is_whitespace) {
            return invalid(format!("{name} entry '{entry}' contains whitespace"));
        }
        if entry.chars().any(char::is_uppercase) {
            return invalid(format!("{name} entry '{entry}' must be lower-case"));
        }
        if is_tld && entry.contains('.') {
            return invalid(format!("{name} entry '{entry}' must not contain a dot"));
        }
    }
    Ok(())
}

fn invalid<T>(message: String) -> Result<T> {
    Err(ScoreError::ConfigurationInvalid(message))
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

const DEFAULT_TRUSTED_TLDS: &[&str] = &[
    "com", "fr", "org", "net", "gov", "edu", "gouv", "be", "ca", "ch", "de", "eu", "uk",
];

const DEFAULT_EXOTIC_TLDS: &[&str] = &["xyz", "tk", "top", "loan", "club", "ru", "biz"];

const DEFAULT_SUSPICIOUS_KEYWORDS: &[&str] = &[
    "secure",
    "login",
    "verify",
    "confirm",
    "update",
    "support",
    "connexion",
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn default_config_is_valid() {
        let config = ScoringConfig::default();
        config.validate().unwrap();
        assert_eq!(config.tier_thresholds.secure_min, 80);
        assert_eq!(config.tier_thresholds.moderate_min, 60);
        assert_eq!(config.probe_timeout(), Duration::from_secs(3));
        assert!(config.uses_liveness());
    }

    #[test]
    fn every_preset_is_valid() {
        for preset in [Preset::Standard, Preset::Offline, Preset::Lexical] {
            ScoringConfig::for_preset(preset).validate().unwrap();
        }
    }

    #[test]
    fn rejects_weights_not_summing_to_one() {
        let mut config = ScoringConfig::default();
        config.weights.scheme = 0.5;
        let err = config.validate().unwrap_err();
        assert!(matches!(err, ScoreError::ConfigurationInvalid(_)));
        assert!(err.to_string().contains("sum to 1.0"));
    }

    #[test]
    fn rejects_negative_weight() {
        let mut config = ScoringConfig::for_preset(Preset::Offline);
        config.weights.scheme = 0.45;
        config.weights.structure = -0.05;
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_dominant_liveness_weight() {
        let mut config = ScoringConfig::default();
        config.weights = CheckWeights {
            scheme: 0.10,
            suspicious_keyword: 0.10,
            tld_trust: 0.10,
            characters: 0.10,
            structure: 0.10,
            liveness: 0.50,
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("liveness"));
    }

    #[test]
    fn rejects_malformed_lists() {
        let mut config = ScoringConfig::default();
        config.trusted_tlds.push("co.uk".into());
        assert!(config.validate().is_err());

        let mut config = ScoringConfig::default();
        config.suspicious_keywords.push("Login".into());
        assert!(config.validate().is_err());

        let mut config = ScoringConfig::default();
        config.suspicious_keywords.push(String::new());
        assert!(config.validate().is_err());

        let mut config = ScoringConfig::default();
        config.exotic_tlds.push("com".into());
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("both trusted and exotic"));
    }

    #[test]
    fn rejects_inverted_thresholds() {
        let mut config = ScoringConfig::default();
        config.tier_thresholds = TierThresholds {
            secure_min: 50,
            moderate_min: 70,
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_bad_tld_scores_and_timeouts() {
        let mut config = ScoringConfig::default();
        config.tld_scores.exotic = 0;
        assert!(config.validate().is_err());

        let mut config = ScoringConfig::default();
        config.tld_scores = TldScores {
            unclassified: 10,
            exotic: 40,
        };
        assert!(config.validate().is_err());

        let mut config = ScoringConfig::default();
        config.probe_timeout_ms = 0;
        assert!(config.validate().is_err());
        config.probe_timeout_ms = MAX_PROBE_TIMEOUT_MS + 1;
        assert!(config.validate().is_err());
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let config = ScoringConfig::from_toml_str(
            r#"
            suspicious_keywords = ["login", "bank"]
            locale = "fr"

            [tier_thresholds]
            secure_min = 85
            moderate_min = 65
            "#,
        )
        .unwrap();

        assert_eq!(config.suspicious_keywords, vec!["login", "bank"]);
        assert_eq!(config.locale, Locale::Fr);
        assert_eq!(config.tier_thresholds.secure_min, 85);
        assert_eq!(config.weights, Preset::Standard.weights());
        config.validate().unwrap();
    }

    #[test]
    fn malformed_toml_is_a_configuration_error() {
        let err = ScoringConfig::from_toml_str("weights = 3").unwrap_err();
        assert!(matches!(err, ScoreError::ConfigurationInvalid(_)));
    }

    #[test]
    fn misspelled_keys_are_rejected() {
        let inputs = [
            "suspicious_keyword = [\"bank\"]",
            "[tier_threshold]\nsecure_min = 95\nmoderate_min = 60",
            "[tier_thresholds]\nsecure_min = 95\nmoderate_min = 60\nrisky_min = 10",
            "[weights]\nscheme = 0.3\nkeyword = 0.1\ntld_trust = 0.2\ncharacters = 0.2\nstructure = 0.2\nliveness = 0.0",
            "[tld_scores]\nunclassified = 60\nexotic = 20\ntrusted = 100",
            "[structure]\nmax_subdomains = 2\nmax_hyphens = 2\npenalty = 50\nmax_depth = 4",
        ];
        for input in inputs {
            let err = ScoringConfig::from_toml_str(input).unwrap_err();
            assert!(matches!(err, ScoreError::ConfigurationInvalid(_)), "{input}");
        }
    }

    #[test]
    fn load_reads_file_or_falls_back() {
        let mut tmp = NamedTempFile::new().unwrap();
        write!(tmp, "probe_timeout_ms = 1500").unwrap();
        tmp.flush().unwrap();

        let config = ScoringConfig::load(tmp.path()).unwrap();
        assert_eq!(config.probe_timeout_ms, 1500);

        let missing = tmp.path().with_extension("does-not-exist");
        assert_eq!(ScoringConfig::load(&missing).unwrap(), ScoringConfig::default());
    }

    #[test]
    fn toml_round_trip() {
        let config = ScoringConfig::for_preset(Preset::Lexical);
        let text = toml::to_string(&config).unwrap();
        assert_eq!(ScoringConfig::from_toml_str(&text).unwrap(), config);
    }
}
