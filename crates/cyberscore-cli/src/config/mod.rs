//! Configuration management.

use anyhow::{Context as _, Result};
use cyberscore::{Locale, Preset, ScoringConfig};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::output::OutputFormat;

/// CLI configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Default output format.
    pub output_format: Option<OutputFormat>,

    /// Weighting preset used when no `[scoring]` table is present.
    pub preset: Option<Preset>,

    /// Report language.
    pub locale: Option<Locale>,

    /// Append every result to the history file.
    #[serde(default = "default_true")]
    pub record_history: bool,

    /// History file location.
    pub history_path: Option<PathBuf>,

    /// Liveness probe budget in milliseconds.
    pub probe_timeout_ms: Option<u64>,

    /// Always show explanations (as if --explain was passed).
    #[serde(default)]
    pub explain_by_default: bool,

    /// Full scoring configuration; overrides `preset` when present.
    pub scoring: Option<ScoringConfig>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_format: None,
            preset: None,
            locale: None,
            record_history: true,
            history_path: None,
            probe_timeout_ms: None,
            explain_by_default: false,
            scoring: None,
        }
    }
}

const fn default_true() -> bool {
    true
}

fn project_dirs() -> Result<ProjectDirs> {
    ProjectDirs::from("org", "cyberscore", "cyberscore")
        .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))
}

impl Config {
    /// Get the default config file path.
    pub fn default_path() -> Result<PathBuf> {
        Ok(project_dirs()?.config_dir().join("config.toml"))
    }

    /// Get the default history file path.
    pub fn default_history_path() -> Result<PathBuf> {
        Ok(project_dirs()?.data_dir().join("history.json"))
    }

    /// Load configuration from `path`, or defaults if it does not exist.
    ///
    /// A `[scoring]` table is validated here so a bad config stops the CLI
    /// before any URL is scored.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Invalid configuration in {}", path.display()))?;

        if let Some(scoring) = &config.scoring {
            scoring
                .validate()
                .with_context(|| format!("Invalid [scoring] table in {}", path.display()))?;
        }

        Ok(config)
    }

    /// Save configuration to `path`.
    pub fn save(&self, path: &Path) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;

        Ok(())
    }

    /// Scoring configuration before command-line overrides.
    pub fn base_scoring(&self) -> ScoringConfig {
        self.scoring.clone().unwrap_or_else(|| {
            ScoringConfig::for_preset(self.preset.unwrap_or_default())
        })
    }
}
