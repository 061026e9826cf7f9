//! # cyberscore-engine
//!
//! Heuristic URL trust scoring from the URL string alone.
//!
//! ## Checks
//!
//! Reported in this order, each producing a 0..=100 sub-score:
//!
//! - **Scheme** -- `https` or not
//! - **Suspicious keyword** -- trust-exploiting words anywhere in the hostname
//! - **TLD trust** -- trusted, unclassified or exotic extension
//! - **Characters** -- non-ASCII look-alikes and `xn--` labels
//! - **Structure** -- sub-domain depth and hyphen count, two penalties
//! - **Liveness** -- optional network probe, advisory only
//!
//! ## Data Flow
//!
//! ```text
//! raw string -> ParsedUrl::parse()          (failure -> `invalid`, score 0)
//!   -> [liveness probe, bounded by probe_timeout]
//!   -> run_checks()                          (one CheckOutcome per weighted check)
//!   -> aggregate()                           (round(sum(sub_score * weight)), tier)
//!   -> ScoreResult
//! ```
//!
//! The synchronous path is [`score_url`]; [`Engine`] adds the probe.

pub mod aggregate;
pub mod checks;
pub mod config;
mod engine;
pub mod messages;
pub mod presets;

pub use aggregate::{aggregate, invalid_result, tier_for};
pub use checks::run_checks;
pub use config::{CheckWeights, ScoringConfig, StructureRules, TierThresholds, TldScores};
pub use engine::{Engine, EngineBuilder, DEFAULT_CONCURRENCY};
pub use messages::{tier_label, Locale};
pub use presets::Preset;

use cyberscore_core::{ParsedUrl, ProbeOutcome, ScoreResult};

/// Score `url` with an explicit liveness signal.
///
/// Pure: the same input, config and signal always give the same result.
/// A missing signal counts as a failed liveness check when liveness is weighted.
#[must_use]
pub fn score_url(url: &str, config: &ScoringConfig, liveness: Option<ProbeOutcome>) -> ScoreResult {
    match ParsedUrl::parse(url) {
        Ok(parsed) => score_parsed(url, &parsed, config, liveness),
        Err(_) => invalid_result(url, config),
    }
}

/// Score an already parsed URL.
#[must_use]
pub fn score_parsed(
    url: &str,
    parsed: &ParsedUrl,
    config: &ScoringConfig,
    liveness: Option<ProbeOutcome>,
) -> ScoreResult {
    let outcomes = run_checks(parsed, config, liveness);
    aggregate(url, outcomes, config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use cyberscore_core::{CheckId, Tier};

    const UP: Option<ProbeOutcome> = Some(ProbeOutcome::REACHABLE);
    const DOWN: Option<ProbeOutcome> = Some(ProbeOutcome::UNREACHABLE);

    #[test]
    fn perfect_url_scores_maximum() {
        let result = score_url("https://www.example.com", &ScoringConfig::default(), UP);
        assert_eq!(result.score(), 100);
        assert_eq!(result.tier(), Tier::Secure);
        assert_eq!(result.details().len(), 6);
        assert!(result.checks().iter().all(|c| c.passed));
    }

    #[test]
    fn perfect_url_offline_preset() {
        let config = ScoringConfig::for_preset(Preset::Offline);
        let result = score_url("https://www.example.com", &config, None);
        assert_eq!(result.score(), 100);
        assert_eq!(result.details().len(), 5);
    }

    #[test]
    fn phishing_lookalike_is_risky() {
        let url = "http://paypa1-login.secure-xn--verify.tk";
        let config = ScoringConfig::default();

        for signal in [UP, DOWN] {
            let result = score_url(url, &config, signal);
            assert_eq!(result.tier(), Tier::Risky);
            assert!(result.score() < 30, "score {}", result.score());
        }

        let result = score_url(url, &config, DOWN);
        let failed: Vec<CheckId> = result
            .checks()
            .iter()
            .filter(|c| !c.passed)
            .map(|c| c.check)
            .collect();
        assert_eq!(failed, CheckId::ALL);
        assert!(result.details()[1].contains("secure, login, verify"));
    }

    #[test]
    fn unreachable_perfect_url_stays_above_risky() {
        let result = score_url("https://www.example.com", &ScoringConfig::default(), DOWN);
        assert!(matches!(result.tier(), Tier::Secure | Tier::Moderate));
        assert_eq!(result.score(), 85);
    }

    #[test]
    fn unparseable_input_is_invalid() {
        for input in ["not a url", "", "   ", "https://", "http://exa mple.com"] {
            let result = score_url(input, &ScoringConfig::default(), UP);
            assert_eq!(result.tier(), Tier::Invalid, "{input:?}");
            assert_eq!(result.score(), 0);
            assert_eq!(result.details().len(), 1);
            assert_eq!(result.url(), input);
        }
    }

    #[test]
    fn url_is_kept_verbatim() {
        let input = "  WWW.Example.com ";
        let result = score_url(input, &ScoringConfig::default(), UP);
        assert_eq!(result.url(), input);
    }

    #[test]
    fn evaluation_is_idempotent() {
        let config = ScoringConfig::default();
        for url in ["https://www.example.com", "http://login-update.biz", "goögle.com"] {
            assert_eq!(score_url(url, &config, DOWN), score_url(url, &config, DOWN));
        }
    }

    #[test]
    fn scores_stay_in_range_for_odd_hosts() {
        let config = ScoringConfig::default();
        let inputs = [
            "http://a..b.com",
            "http://---.-.--.com",
            "http://xn--.xn--.xn--",
            "http://ünïcödé.تست",
            "http://1.2.3.4",
            "http://[2001:db8::1]:8080/x",
            "http://a.b.c.d.e.f.g.h.i.j.k.l.m.n.o.p",
            "http://-",
            "https://example.com.",
            "http://secure-login-verify-confirm-update-support-connexion.tk",
        ];
        for input in inputs {
            let result = score_url(input, &config, DOWN);
            assert!(result.score() <= 100);
            if !result.is_invalid() {
                assert_ne!(result.tier(), Tier::Invalid);
                assert_eq!(
                    result.tier(),
                    tier_for(result.score(), &config.tier_thresholds)
                );
            }
        }
    }

    #[test]
    fn failing_one_check_never_raises_the_score() {
        let config = ScoringConfig::default();
        let base = score_url("https://www.example.com", &config, UP).score();

        let variants = [
            ("http://www.example.com", UP),
            ("https://www.login.com", UP),
            ("https://www.example.tk", UP),
            ("https://www.example.io", UP),
            ("https://xn--exmple-cua.com", UP),
            ("https://a.b.c.example.com", UP),
            ("https://www.ex-am-pl-e.com", UP),
            ("https://www.example.com", DOWN),
        ];
        for (url, signal) in variants {
            let score = score_url(url, &config, signal).score();
            assert!(score < base, "{url} scored {score}, base {base}");
        }
    }

    #[test]
    fn details_follow_check_order_for_every_preset() {
        for preset in [Preset::Standard, Preset::Offline, Preset::Lexical] {
            let config = ScoringConfig::for_preset(preset);
            let result = score_url("http://login.example.xyz", &config, DOWN);
            let ids: Vec<CheckId> = result.checks().iter().map(|c| c.check).collect();
            let mut sorted = ids.clone();
            sorted.sort();
            assert_eq!(ids, sorted);
            let messages: Vec<&str> = result.checks().iter().map(|c| c.message.as_str()).collect();
            assert_eq!(result.details(), messages.as_slice());
        }
    }

    #[test]
    fn french_report() {
        let mut config = ScoringConfig::default();
        config.locale = Locale::Fr;
        let result = score_url("https://www.example.com", &config, UP);
        assert!(result.details()[0].contains("HTTPS"));
        assert_eq!(result.details()[5], "Le site répond.");
    }
}
