//! TLD trust check.

use crate::config::ScoringConfig;
use crate::messages::Message;
use cyberscore_core::{CheckId, CheckOutcome, CheckStatus, ParsedUrl};

/// Reputation bucket of a TLD. Every TLD lands in exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TldClass {
    /// In the trusted set
    Trusted,
    /// In neither set
    Unclassified,
    /// In the exotic set
    Exotic,
}

/// Classify `tld` against the configured sets.
pub fn classify(tld: &str, config: &ScoringConfig) -> TldClass {
    if config.trusted_tlds.iter().any(|t| t == tld) {
        TldClass::Trusted
    } else if config.exotic_tlds.iter().any(|t| t == tld) {
        TldClass::Exotic
    } else {
        TldClass::Unclassified
    }
}

/// Full weight for trusted TLDs, a neutral share when unclassified and a low
/// but non-zero share for exotic ones.
pub fn check(parsed: &ParsedUrl, config: &ScoringConfig) -> CheckOutcome {
    let weight = config.weights.tld_trust;
    let tld = parsed.tld.as_str();

    match classify(tld, config) {
        TldClass::Trusted => CheckOutcome::new(
            CheckId::TldTrust,
            100,
            weight,
            true,
            CheckStatus::Success,
            Message::TrustedTld(tld).render(config.locale),
        ),
        TldClass::Unclassified => CheckOutcome::new(
            CheckId::TldTrust,
            config.tld_scores.unclassified,
            weight,
            true,
            CheckStatus::Info,
            Message::UnclassifiedTld(tld).render(config.locale),
        ),
        TldClass::Exotic => CheckOutcome::new(
            CheckId::TldTrust,
            config.tld_scores.exotic,
            weight,
            false,
            CheckStatus::Warning,
            Message::ExoticTld(tld).render(config.locale),
        ),
    }
}
