//! `cyberscore check` - Score one or more URLs.

use anyhow::{Context as _, Result};
use chrono::Utc;
use colored::Colorize;
use cyberscore::{Engine, HttpProbe, Preset, ScoreResult, ScoringConfig, Tier};
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;
use tracing::warn;

use super::Context;
use crate::cli::args::CheckArgs;
use crate::config::Config;
use crate::education::Explain;
use crate::output::{self, OutputFormat};

pub async fn execute(ctx: Context, args: CheckArgs) -> Result<()> {
    let scoring = resolve_scoring(&ctx.config, &args)?;

    if ctx.explain {
        Explain::check(&scoring).print();
    }

    let engine = build_engine(scoring)?;

    let spinner = (ctx.output_format == OutputFormat::Pretty && engine.config().uses_liveness())
        .then(|| spinner(args.urls.len()));

    let results = engine.evaluate_many(&args.urls).await;

    if let Some(spinner) = spinner {
        spinner.finish_and_clear();
    }

    if ctx.config.record_history && !args.no_history {
        if let Err(e) = ctx.history().append(&results, Utc::now()) {
            warn!(error = %e, "could not save history");
        }
    }

    let config = engine.config();
    match ctx.output_format {
        OutputFormat::Json => output::print_results_json(&results)?,
        OutputFormat::Yaml => output::print_results_yaml(&results)?,
        OutputFormat::Csv => output::write_results_csv(std::io::stdout().lock(), &results)?,
        OutputFormat::Pretty => {
            for result in &results {
                output::print_result_pretty(result, &config.tier_thresholds, config.locale);
            }
            print_summary(&results, &ctx);
        }
    }

    Ok(())
}

/// Effective scoring config: `[scoring]` table or preset, then flags.
pub fn resolve_scoring(config: &Config, args: &CheckArgs) -> Result<ScoringConfig> {
    let mut scoring = config.base_scoring();

    if let Some(preset) = args.preset {
        scoring.weights = preset.weights();
    } else if args.offline && config.scoring.is_none() {
        scoring.weights = Preset::Offline.weights();
    }

    if args.offline && scoring.uses_liveness() {
        anyhow::bail!(
            "--offline needs weights without a liveness share.\n\
             Pass --preset offline or --preset lexical, or set liveness = 0.0 in [scoring.weights]."
        );
    }

    if let Some(ms) = args.timeout_ms.or(config.probe_timeout_ms) {
        scoring.probe_timeout_ms = ms;
    }
    if let Some(locale) = args.locale.or(config.locale) {
        scoring.locale = locale;
    }

    scoring
        .validate()
        .context("Invalid scoring configuration")?;
    Ok(scoring)
}

fn build_engine(scoring: ScoringConfig) -> Result<Engine> {
    let mut builder = Engine::builder(scoring.clone());

    if scoring.uses_liveness() {
        let probe = HttpProbe::builder().timeout(scoring.probe_timeout()).build()?;
        builder = builder.probe(probe);
    }

    Ok(builder.build()?)
}

fn spinner(count: usize) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::with_template("{spinner} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message(format!("Analyzing {count} URL(s)..."));
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}

fn print_summary(results: &[ScoreResult], ctx: &Context) {
    if results.len() > 1 {
        let count = |tier: Tier| results.iter().filter(|r| r.tier() == tier).count();
        println!(
            "{} {} secure, {} moderate, {} risky, {} invalid",
            "Summary:".bold(),
            count(Tier::Secure).to_string().green(),
            count(Tier::Moderate).to_string().yellow(),
            count(Tier::Risky).to_string().red(),
            count(Tier::Invalid),
        );
    }

    if ctx.verbose {
        println!("{} {}", "History:".bold(), ctx.history_path.display());
    }
    println!("{}", "Tip: run `cyberscore top` to see the best-rated URLs so far".dimmed());
}
