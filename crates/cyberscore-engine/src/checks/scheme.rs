//! `https` scheme check.

use crate::config::ScoringConfig;
use crate::messages::Message;
use cyberscore_core::{CheckId, CheckOutcome, CheckStatus, ParsedUrl};

/// Passes iff the scheme is `https`.
pub fn check(parsed: &ParsedUrl, config: &ScoringConfig) -> CheckOutcome {
    let weight = config.weights.scheme;
    if parsed.scheme == "https" {
        CheckOutcome::new(
            CheckId::Scheme,
            100,
            weight,
            true,
            CheckStatus::Success,
            Message::HttpsUsed.render(config.locale),
        )
    } else {
        CheckOutcome::new(
            CheckId::Scheme,
            0,
            weight,
            false,
            CheckStatus::Error,
            Message::HttpsMissing.render(config.locale),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(url: &str) -> CheckOutcome {
        check(&ParsedUrl::parse(url).unwrap(), &ScoringConfig::default())
    }

    #[test]
    fn https_passes() {
        let outcome = run("https://example.com");
        assert!(outcome.passed);
        assert_eq!(outcome.sub_score, 100);
    }

    #[test]
    fn http_and_others_fail() {
        assert!(!run("http://example.com").passed);
        assert!(!run("example.com").passed);
        assert_eq!(run("ftp://example.com").sub_score, 0);
    }
}
