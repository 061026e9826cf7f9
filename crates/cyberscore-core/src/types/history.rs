use super::ScoreResult;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Leaderboard size used when none is given.
pub const DEFAULT_TOP_N: usize = 5;

/// A result recorded at a point in time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// The recorded result
    #[serde(flatten)]
    pub result: ScoreResult,

    /// When the caller recorded it
    pub timestamp: DateTime<Utc>,
}

/// Append-only sequence of past results.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct History {
    entries: Vec<HistoryEntry>,
}

impl History {
    /// Create an empty history
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Append a result stamped with `at`
    pub fn record(&mut self, result: ScoreResult, at: DateTime<Utc>) {
        self.entries.push(HistoryEntry {
            result,
            timestamp: at,
        });
    }

    /// All entries, oldest first
    #[must_use]
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// Number of recorded entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing was recorded
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Highest-scoring entries, best first. Ties keep recording order.
    #[must_use]
    pub fn top(&self, n: usize) -> Vec<&HistoryEntry> {
        let mut ranked: Vec<&HistoryEntry> = self.entries.iter().collect();
        ranked.sort_by(|a, b| b.result.score().cmp(&a.result.score()));
        ranked.truncate(n);
        ranked
    }

    /// Most recent entries, newest first
    #[must_use]
    pub fn recent(&self, n: usize) -> Vec<&HistoryEntry> {
        self.entries.iter().rev().take(n).collect()
    }
}

impl From<Vec<HistoryEntry>> for History {
    fn from(entries: Vec<HistoryEntry>) -> Self {
        Self { entries }
    }
}
