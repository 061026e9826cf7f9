//! History file persistence.
//!
//! The history is a JSON array of recorded results. A file that cannot be
//! read or parsed loads as an empty history, so a damaged leaderboard never
//! blocks scoring. Appending to such a file first moves it aside to
//! `<name>.corrupt`; recorded entries are never overwritten.

use anyhow::{Context as _, Result};
use chrono::{DateTime, Utc};
use cyberscore::{History, ScoreResult};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// JSON-file backed store for [`History`].
#[derive(Debug, Clone)]
pub struct HistoryStore {
    path: PathBuf,
}

/// What reading the history file produced.
enum Stored {
    Missing,
    Parsed(History),
    Unreadable(String),
}

impl HistoryStore {
    /// Store backed by `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// File location
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> Stored {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Stored::Missing,
            Err(e) => return Stored::Unreadable(e.to_string()),
        };

        match serde_json::from_str(&content) {
            Ok(history) => Stored::Parsed(history),
            Err(e) => Stored::Unreadable(e.to_string()),
        }
    }

    /// Load the history; missing or unreadable files give an empty one.
    pub fn load(&self) -> History {
        match self.read() {
            Stored::Parsed(history) => history,
            Stored::Missing => {
                debug!(path = %self.path.display(), "no history file yet");
                History::new()
            }
            Stored::Unreadable(reason) => {
                warn!(path = %self.path.display(), error = %reason, "could not read history");
                History::new()
            }
        }
    }

    /// Write the whole history.
    pub fn save(&self, history: &History) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(history)?;
        let tmp = self.path.with_extension("json.tmp");
        std::fs::write(&tmp, content)
            .with_context(|| format!("Failed to write {}", tmp.display()))?;
        std::fs::rename(&tmp, &self.path)
            .with_context(|| format!("Failed to replace {}", self.path.display()))?;

        Ok(())
    }

    /// Append results stamped with `at` and save.
    ///
    /// An unreadable file is moved aside before a fresh history is written;
    /// if it cannot be moved, nothing is saved.
    pub fn append(&self, results: &[ScoreResult], at: DateTime<Utc>) -> Result<History> {
        let mut history = match self.read() {
            Stored::Parsed(history) => history,
            Stored::Missing => History::new(),
            Stored::Unreadable(reason) => {
                let aside = self.set_aside()?;
                warn!(
                    path = %self.path.display(),
                    moved_to = %aside.display(),
                    error = %reason,
                    "history file unreadable, starting a new one"
                );
                History::new()
            }
        };

        for result in results {
            history.record(result.clone(), at);
        }
        self.save(&history)?;
        debug!(path = %self.path.display(), entries = history.len(), "history saved");
        Ok(history)
    }

    /// Rename the current file to the first free `<name>.corrupt[.N]`.
    fn set_aside(&self) -> Result<PathBuf> {
        let name = self
            .path
            .file_name()
            .map_or_else(|| "history".into(), |n| n.to_string_lossy().into_owned());

        let mut aside = self.path.with_file_name(format!("{name}.corrupt"));
        let mut n = 1;
        while aside.exists() {
            aside = self.path.with_file_name(format!("{name}.corrupt.{n}"));
            n += 1;
        }

        std::fs::rename(&self.path, &aside).with_context(|| {
            format!(
                "Refusing to overwrite unreadable history {}: could not move it to {}",
                self.path.display(),
                aside.display()
            )
        })?;
        Ok(aside)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cyberscore::Tier;
    use tempfile::tempdir;

    #[test]
    fn missing_file_is_empty() {
        let dir = tempdir().unwrap();
        let store = HistoryStore::new(dir.path().join("history.json"));
        assert!(store.load().is_empty());
    }

    #[test]
    fn corrupt_file_is_empty() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("history.json");
        std::fs::write(&path, "{ not json").unwrap();
        assert!(HistoryStore::new(path).load().is_empty());
    }

    #[test]
    fn append_keeps_unreadable_file_aside() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("history.json");
        let old = r#"[
            {"url":"bank.com","score":90,"tier":"secure","details":[],"timestamp":"2024-01-01T00:00:00Z"},
            {"url":"a.com","score":70,"tier":"moderate","details":[],"timestamp":"yesterday"}
        ]"#;
        std::fs::write(&path, old).unwrap();

        let store = HistoryStore::new(&path);
        let history = store
            .append(&[ScoreResult::new("new.com", 80, Tier::Secure, Vec::new())], Utc::now())
            .unwrap();
        assert_eq!(history.len(), 1);

        let aside = dir.path().join("history.json.corrupt");
        assert_eq!(std::fs::read_to_string(&aside).unwrap(), old);
        assert_eq!(store.load().len(), 1);

        // A second bad file does not replace the first one set aside
        std::fs::write(&path, "{ not json").unwrap();
        store.append(&[], Utc::now()).unwrap();
        assert_eq!(std::fs::read_to_string(&aside).unwrap(), old);
        assert_eq!(
            std::fs::read_to_string(dir.path().join("history.json.corrupt.1")).unwrap(),
            "{ not json"
        );
    }

    #[test]
    fn append_accumulates() {
        let dir = tempdir().unwrap();
        let store = HistoryStore::new(dir.path().join("data").join("history.json"));

        store
            .append(&[ScoreResult::new("a.com", 70, Tier::Moderate, Vec::new())], Utc::now())
            .unwrap();
        store
            .append(&[ScoreResult::new("b.com", 90, Tier::Secure, Vec::new())], Utc::now())
            .unwrap();

        let history = store.load();
        assert_eq!(history.len(), 2);
        assert_eq!(history.top(1)[0].result.url(), "b.com");
        assert!(!store.path().with_extension("json.tmp").exists());
    }
}
