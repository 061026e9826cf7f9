//! CLI argument parsing and command dispatch.

pub mod args;
pub mod commands;

use anyhow::Result;
use args::{Cli, Commands};
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::Config;

/// Run the CLI application.
pub async fn run() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    if cli.no_color {
        colored::control::set_override(false);
    }

    // Load configuration; a malformed file stops here
    let config_path = match cli.config {
        Some(path) => path,
        None => Config::default_path()?,
    };
    let config = Config::load(&config_path)?;

    // Determine output format
    let output_format = cli.output.or(config.output_format).unwrap_or_default();

    // History file from CLI, env, config, or platform default
    let history_path = match cli.history_file.or_else(|| config.history_path.clone()) {
        Some(path) => path,
        None => Config::default_history_path()?,
    };

    // Create context for commands
    let ctx = commands::Context {
        explain: cli.explain || config.explain_by_default,
        config,
        config_path,
        history_path,
        output_format,
        verbose: cli.verbose,
        no_color: cli.no_color,
    };

    // Dispatch to appropriate command
    match cli.command {
        Commands::Check(args) => commands::check::execute(ctx, args).await,
        Commands::Top(args) => commands::top::execute(ctx, args).await,
        Commands::History(args) => commands::history::execute(ctx, args).await,
        Commands::Config(args) => commands::config::execute(ctx, args).await,
    }
}

/// Log to stderr so structured output on stdout stays clean.
///
/// `RUST_LOG` wins over `--verbose`.
fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    // A second init (e.g. in tests) is harmless
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();
}
