//! Score aggregation.
//!
//! Weighted-percentage mode: every check contributes `sub_score * weight`,
//! the sum is rounded to the nearest integer and clamped to `[0, 100]`.

use crate::config::{ScoringConfig, TierThresholds};
use crate::messages::Message;
use cyberscore_core::{CheckOutcome, ScoreResult, Tier};

/// Tier for a numeric score. Never returns [`Tier::Invalid`].
#[must_use]
pub const fn tier_for(score: u8, thresholds: &TierThresholds) -> Tier {
    if score >= thresholds.secure_min {
        Tier::Secure
    } else if score >= thresholds.moderate_min {
        Tier::Moderate
    } else {
        Tier::Risky
    }
}

/// Final score from a set of outcomes.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn weighted_score(outcomes: &[CheckOutcome]) -> u8 {
    let total: f64 = outcomes.iter().map(|o| o.contribution).sum();
    if total.is_nan() {
        return 0;
    }
    total.round().clamp(0.0, 100.0) as u8
}

/// Combine outcomes into a result for `url`.
#[must_use]
pub fn aggregate(url: &str, outcomes: Vec<CheckOutcome>, config: &ScoringConfig) -> ScoreResult {
    let score = weighted_score(&outcomes);
    let tier = tier_for(score, &config.tier_thresholds);
    ScoreResult::new(url, score, tier, outcomes)
}

/// Result for input that could not be parsed.
#[must_use]
pub fn invalid_result(url: &str, config: &ScoringConfig) -> ScoreResult {
    ScoreResult::invalid(url, Message::InvalidUrl.render(config.locale))
}
