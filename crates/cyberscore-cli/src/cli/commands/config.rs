//! `cyberscore config` - CLI configuration management.

use anyhow::Result;
use colored::Colorize;
use cyberscore::ScoringConfig;

use super::Context;
use crate::cli::args::{ConfigArgs, ConfigCommands};
use crate::config::Config;
use crate::output::OutputFormat;

pub async fn execute(ctx: Context, args: ConfigArgs) -> Result<()> {
    match args.command {
        ConfigCommands::Show => show_config(&ctx),
        ConfigCommands::Set { key, value } => set_config(&ctx, &key, &value),
        ConfigCommands::Path => show_path(&ctx),
        ConfigCommands::Init {
            force,
            with_scoring,
        } => init_config(&ctx, force, with_scoring),
    }
}

fn show_config(ctx: &Context) -> Result<()> {
    let config = &ctx.config;

    match ctx.output_format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(config)?);
        }
        OutputFormat::Yaml => {
            print!("{}", serde_yaml::to_string(config)?);
        }
        _ => {
            let unset = || "(not set)".dimmed().to_string();

            println!("{}", "Current Configuration:".bold());
            println!();
            println!(
                "  {} {}",
                "output_format:".bold(),
                config.output_format.unwrap_or_default()
            );
            println!(
                "  {} {}",
                "preset:".bold(),
                config.preset.map_or_else(unset, |p| p.to_string())
            );
            println!(
                "  {} {}",
                "locale:".bold(),
                config.locale.map_or_else(unset, |l| l.to_string())
            );
            println!(
                "  {} {}",
                "probe_timeout_ms:".bold(),
                config.probe_timeout_ms.map_or_else(unset, |ms| ms.to_string())
            );
            println!("  {} {}", "record_history:".bold(), config.record_history);
            println!("  {} {}", "history_path:".bold(), ctx.history_path.display());
            println!("  {} {}", "explain_by_default:".bold(), config.explain_by_default);
            println!(
                "  {} {}",
                "scoring:".bold(),
                if config.scoring.is_some() {
                    "custom [scoring] table".to_string()
                } else {
                    "from preset".dimmed().to_string()
                }
            );
        }
    }

    Ok(())
}

fn set_config(ctx: &Context, key: &str, value: &str) -> Result<()> {
    let mut config = ctx.config.clone();

    match key {
        "output_format" | "output" => {
            config.output_format = Some(value.parse()?);
        }
        "preset" => {
            config.preset = Some(value.parse()?);
        }
        "locale" | "lang" => {
            config.locale = Some(value.parse()?);
        }
        "probe_timeout_ms" | "timeout" => {
            let ms: u64 = value.parse()?;
            let mut scoring = config.base_scoring();
            scoring.probe_timeout_ms = ms;
            scoring.validate()?;
            config.probe_timeout_ms = Some(ms);
        }
        "record_history" => {
            config.record_history = value.parse()?;
        }
        "history_path" => {
            config.history_path = Some(value.into());
        }
        "explain_by_default" | "explain" => {
            config.explain_by_default = value.parse()?;
        }
        _ => {
            anyhow::bail!(
                "Unknown config key: {}\n\n\
                 Available keys:\n  \
                 output_format      - Default output format (pretty/json/csv/yaml)\n  \
                 preset             - Weighting preset (standard/offline/lexical)\n  \
                 locale             - Report language (en/fr)\n  \
                 probe_timeout_ms   - Liveness probe budget (1-10000)\n  \
                 record_history     - Record checked URLs (true/false)\n  \
                 history_path       - History file location\n  \
                 explain_by_default - Always explain commands (true/false)",
                key
            );
        }
    }

    config.save(&ctx.config_path)?;
    println!("{} {} set to {}.", "Success:".green().bold(), key, value.cyan());

    Ok(())
}

fn show_path(ctx: &Context) -> Result<()> {
    println!("{}", ctx.config_path.display());
    Ok(())
}

fn init_config(ctx: &Context, force: bool, with_scoring: bool) -> Result<()> {
    let path = &ctx.config_path;
    if path.exists() && !force {
        anyhow::bail!(
            "{} already exists.\n\
             Use --force to overwrite it.",
            path.display()
        );
    }

    let config = Config {
        scoring: with_scoring.then(ScoringConfig::default),
        ..Config::default()
    };
    config.save(path)?;

    println!("{} Wrote {}", "Success:".green().bold(), path.display());
    Ok(())
}
