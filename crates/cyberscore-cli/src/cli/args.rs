//! Command-line argument definitions using clap.

use clap::{Args, Parser, Subcommand};
use cyberscore::{Locale, Preset};
use std::path::PathBuf;

use crate::output::OutputFormat;

/// Heuristic URL trust scoring
///
/// Rates a URL from 0 to 100 using its structure alone (scheme, keywords,
/// extension, characters, sub-domains) plus an optional reachability probe.
#[derive(Parser, Debug)]
#[command(name = "cyberscore")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(short, long, global = true, value_enum)]
    pub output: Option<OutputFormat>,

    /// Configuration file (defaults to the platform config directory)
    #[arg(long, env = "CYBERSCORE_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// History file (defaults to the platform data directory)
    #[arg(long, env = "CYBERSCORE_HISTORY", global = true)]
    pub history_file: Option<PathBuf>,

    /// Explain what this command does (educational mode)
    #[arg(long, global = true)]
    pub explain: bool,

    /// Increase verbosity
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Score one or more URLs
    Check(CheckArgs),

    /// Show the best-scoring URLs checked so far
    Top(TopArgs),

    /// Show recently checked URLs
    History(HistoryArgs),

    /// Manage CLI configuration
    Config(ConfigArgs),
}

// ============================================================================
// Check command
// ============================================================================

#[derive(Args, Debug)]
pub struct CheckArgs {
    /// URLs to score (scheme optional, e.g. www.example.com)
    #[arg(required = true, num_args = 1..)]
    pub urls: Vec<String>,

    /// Weighting preset: standard, offline or lexical
    #[arg(short, long)]
    pub preset: Option<Preset>,

    /// Skip the network probe (uses the offline preset)
    #[arg(long)]
    pub offline: bool,

    /// Liveness probe budget in milliseconds
    #[arg(long)]
    pub timeout_ms: Option<u64>,

    /// Report language: en or fr
    #[arg(short, long)]
    pub locale: Option<Locale>,

    /// Do not record results in the history file
    #[arg(long)]
    pub no_history: bool,
}

// ============================================================================
// Top / history commands
// ============================================================================

#[derive(Args, Debug)]
pub struct TopArgs {
    /// Number of entries to show
    #[arg(short = 'n', long, default_value_t = cyberscore::DEFAULT_TOP_N)]
    pub count: usize,
}

#[derive(Args, Debug)]
pub struct HistoryArgs {
    /// Number of entries to show
    #[arg(short, long, default_value = "20")]
    pub limit: usize,
}

// ============================================================================
// Config command
// ============================================================================

#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show current configuration
    Show,

    /// Set a configuration value
    Set {
        /// Configuration key
        key: String,
        /// Value to set
        value: String,
    },

    /// Show configuration file path
    Path,

    /// Write a default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,

        /// Include the full scoring table for editing
        #[arg(long)]
        with_scoring: bool,
    },
}
