//! Educational features: explanations of what each command does.

use colored::Colorize;
use cyberscore::{CheckId, ScoringConfig};

/// Command explanation builder.
pub struct Explain {
    description: String,
    network: Option<String>,
    what_happens: Vec<String>,
    caveats: Vec<String>,
}

impl Explain {
    fn new(description: &str) -> Self {
        Self {
            description: description.to_string(),
            network: None,
            what_happens: Vec::new(),
            caveats: Vec::new(),
        }
    }

    fn network(mut self, note: &str) -> Self {
        self.network = Some(note.to_string());
        self
    }

    fn step(mut self, step: &str) -> Self {
        self.what_happens.push(step.to_string());
        self
    }

    fn caveat(mut self, caveat: &str) -> Self {
        self.caveats.push(caveat.to_string());
        self
    }

    /// Print the explanation to stdout.
    pub fn print(&self) {
        println!();
        println!("{}", "=== What This Does ===".bold().cyan());
        println!("{}", self.description);
        println!();

        if !self.what_happens.is_empty() {
            println!("{}", "How it works:".bold());
            for (i, step) in self.what_happens.iter().enumerate() {
                println!("  {}. {}", i + 1, step);
            }
            println!();
        }

        if let Some(network) = &self.network {
            println!("{} {}", "Network:".bold(), network.dimmed());
        }

        for caveat in &self.caveats {
            println!("{} {}", "Note:".bold().yellow(), caveat);
        }

        println!();
        println!("{}", "=== Results ===".bold().cyan());
        println!();
    }

    // ========================================================================
    // Factory methods for each command
    // ========================================================================

    pub fn check(config: &ScoringConfig) -> Self {
        let mut explain = Self::new(
            "Rates each URL from 0 to 100 by looking at the URL text itself. \
             Each check scores 0-100 and the final score is their weighted sum.",
        );

        for check in CheckId::ALL {
            let weight = config.weights.weight(check);
            if weight <= 0.0 {
                continue;
            }
            let what = match check {
                CheckId::Scheme => "uses https",
                CheckId::SuspiciousKeyword => "no words like 'login' or 'secure' in the host",
                CheckId::TldTrust => "extension is a common, trusted one",
                CheckId::Characters => "plain ASCII host, no xn-- (punycode) labels",
                CheckId::Structure => "few sub-domains and few hyphens",
                CheckId::Liveness => "the site answers a HEAD request",
            };
            explain = explain.step(&format!("{check} ({:.0}%): {what}", weight * 100.0));
        }

        let t = config.tier_thresholds;
        explain = explain.step(&format!(
            "Tier: secure >= {}, moderate >= {}, risky below",
            t.secure_min, t.moderate_min
        ));

        if config.uses_liveness() {
            explain = explain.network(&format!(
                "one request per URL, abandoned after {} ms",
                config.probe_timeout_ms
            ));
        } else {
            explain = explain.network("none (offline scoring)");
        }

        explain
            .caveat("Keyword matching is deliberately loose: legitimate sites containing 'support' are flagged too.")
            .caveat("A high score is not a certificate check, a blocklist lookup or a content scan.")
    }

    pub fn top() -> Self {
        Self::new("Ranks every URL recorded in the history file by score, best first.")
            .step("Loads the history file (an empty list if it is missing or unreadable)")
            .step("Sorts by score; equal scores keep the order they were checked in")
            .network("none")
    }

    pub fn history() -> Self {
        Self::new("Lists the most recently checked URLs, newest first.")
            .step("Loads the history file written by `cyberscore check`")
            .network("none")
    }
}
