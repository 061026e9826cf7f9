//! The heuristic check set.
//!
//! Each check reads only the parsed URL (or the liveness signal) and the
//! config; none looks at another check's outcome, so they can run in any
//! order. [`run_checks`] always reports in [`CheckId::ALL`] order.

pub mod characters;
pub mod keyword;
pub mod liveness;
pub mod scheme;
pub mod structure;
pub mod tld;

use crate::config::ScoringConfig;
use cyberscore_core::{CheckId, CheckOutcome, ParsedUrl, ProbeOutcome};
use tracing::debug;

/// Run every check with a non-zero weight, in reporting order.
///
/// A missing `liveness` signal counts as a failed liveness check.
pub fn run_checks(
    parsed: &ParsedUrl,
    config: &ScoringConfig,
    liveness: Option<ProbeOutcome>,
) -> Vec<CheckOutcome> {
    CheckId::ALL
        .iter()
        .filter(|&&check| config.weights.weight(check) > 0.0)
        .map(|&check| {
            let outcome = run_check(check, parsed, config, liveness);
            debug!(
                check = %outcome.check,
                sub_score = outcome.sub_score,
                passed = outcome.passed,
                "check evaluated"
            );
            outcome
        })
        .collect()
}

/// Run a single check
pub fn run_check(
    check: CheckId,
    parsed: &ParsedUrl,
    config: &ScoringConfig,
    liveness: Option<ProbeOutcome>,
) -> CheckOutcome {
    match check {
        CheckId::Scheme => scheme::check(parsed, config),
        CheckId::SuspiciousKeyword => keyword::check(parsed, config),
        CheckId::TldTrust => tld::check(parsed, config),
        CheckId::Characters => characters::check(parsed, config),
        CheckId::Structure => structure::check(parsed, config),
        CheckId::Liveness => liveness::check(liveness, config),
    }
}
