//! Domain structure check.
//!
//! A small aggregate of its own: the check starts from a full budget and each
//! violated limit removes the configured penalty, floored at zero.

use crate::config::ScoringConfig;
use crate::messages::Message;
use cyberscore_core::{CheckId, CheckOutcome, CheckStatus, ParsedUrl};

/// Which structural limits a hostname violates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StructureFindings {
    /// More sub-domain labels than allowed
    pub excess_subdomains: bool,
    /// More hyphens than allowed
    pub excess_hyphens: bool,
}

impl StructureFindings {
    /// Inspect a parsed URL
    pub fn of(parsed: &ParsedUrl, config: &ScoringConfig) -> Self {
        Self {
            excess_subdomains: parsed.subdomain_count() > config.structure.max_subdomains,
            excess_hyphens: parsed.hyphen_count() > config.structure.max_hyphens,
        }
    }

    /// Number of violated limits
    pub fn count(self) -> u8 {
        u8::from(self.excess_subdomains) + u8::from(self.excess_hyphens)
    }

    /// Returns true if no limit is violated
    pub fn is_clean(self) -> bool {
        self.count() == 0
    }

    /// Remaining budget out of 100
    pub fn sub_score(self, penalty: u8) -> u8 {
        100u8.saturating_sub(penalty.saturating_mul(self.count()))
    }
}

/// Penalizes deep sub-domain chains and hyphen-heavy hostnames.
pub fn check(parsed: &ParsedUrl, config: &ScoringConfig) -> CheckOutcome {
    let weight = config.weights.structure;
    let findings = StructureFindings::of(parsed, config);
    let sub_score = findings.sub_score(config.structure.penalty);

    if findings.is_clean() {
        CheckOutcome::new(
            CheckId::Structure,
            sub_score,
            weight,
            true,
            CheckStatus::Success,
            Message::StandardStructure.render(config.locale),
        )
    } else {
        CheckOutcome::new(
            CheckId::Structure,
            sub_score,
            weight,
            false,
            CheckStatus::Warning,
            Message::StructureIssues {
                subdomains: findings.excess_subdomains,
                hyphens: findings.excess_hyphens,
            }
            .render(config.locale),
        )
    }
}
