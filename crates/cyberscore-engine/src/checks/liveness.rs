//! Liveness check. Advisory: a failed or missing probe only costs this
//! check's weight.

use crate::config::ScoringConfig;
use crate::messages::Message;
use cyberscore_core::{CheckId, CheckOutcome, CheckStatus, ProbeOutcome};

/// Passes iff the probe reported the host reachable.
pub fn check(signal: Option<ProbeOutcome>, config: &ScoringConfig) -> CheckOutcome {
    let weight = config.weights.liveness;
    let (sub_score, passed, status, message) = match signal {
        Some(ProbeOutcome { reachable: true }) => (100, true, CheckStatus::Success, Message::Reachable),
        Some(ProbeOutcome { reachable: false }) => (0, false, CheckStatus::Warning, Message::Unreachable),
        None => (0, false, CheckStatus::Warning, Message::NotProbed),
    };

    CheckOutcome::new(
        CheckId::Liveness,
        sub_score,
        weight,
        passed,
        status,
        message.render(config.locale),
    )
}
