//! Command implementations.

pub mod check;
pub mod config;
pub mod history;
pub mod top;

use std::path::PathBuf;

use crate::config::Config;
use crate::history::HistoryStore;
use crate::output::OutputFormat;

/// Shared context for all commands.
#[derive(Debug, Clone)]
pub struct Context {
    /// Loaded configuration
    pub config: Config,

    /// Where the configuration was loaded from
    pub config_path: PathBuf,

    /// History file location
    pub history_path: PathBuf,

    /// Output format
    pub output_format: OutputFormat,

    /// Whether to show educational explanations
    pub explain: bool,

    /// Verbose output
    pub verbose: bool,

    /// Disable colors
    pub no_color: bool,
}

impl Context {
    /// History store for this invocation.
    pub fn history(&self) -> HistoryStore {
        HistoryStore::new(&self.history_path)
    }
}
