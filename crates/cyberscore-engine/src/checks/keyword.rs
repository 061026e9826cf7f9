//! Suspicious-keyword check.
//!
//! Matching is an unanchored substring search over the whole hostname, so
//! legitimate domains that happen to contain a keyword (`supportforum.org`)
//! are flagged too. That is a known limitation of the heuristic.

use crate::config::ScoringConfig;
use crate::messages::Message;
use cyberscore_core::{CheckId, CheckOutcome, CheckStatus, ParsedUrl};

/// Keywords found in `hostname`, in configuration order.
pub fn matched_keywords<'a>(hostname: &str, keywords: &'a [String]) -> Vec<&'a str> {
    let hostname = hostname.to_lowercase();
    keywords
        .iter()
        .filter(|kw| hostname.contains(kw.to_lowercase().as_str()))
        .map(String::as_str)
        .collect()
}

/// Fails iff the hostname contains any configured keyword.
pub fn check(parsed: &ParsedUrl, config: &ScoringConfig) -> CheckOutcome {
    let weight = config.weights.suspicious_keyword;
    let hits = matched_keywords(&parsed.hostname, &config.suspicious_keywords);

    if hits.is_empty() {
        CheckOutcome::new(
            CheckId::SuspiciousKeyword,
            100,
            weight,
            true,
            CheckStatus::Success,
            Message::NoSuspiciousKeyword.render(config.locale),
        )
    } else {
        CheckOutcome::new(
            CheckId::SuspiciousKeyword,
            0,
            weight,
            false,
            CheckStatus::Warning,
            Message::SuspiciousKeywords(&hits).render(config.locale),
        )
    }
}
