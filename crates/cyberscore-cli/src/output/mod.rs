//! Output formatting for different formats.

use clap::ValueEnum;
use colored::{ColoredString, Colorize};
use cyberscore::{tier_label, CheckStatus, HistoryEntry, Locale, ScoreResult, Tier, TierThresholds};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tabled::{settings::Style, Table, Tabled};

/// Width of the pretty score bar, in cells.
const BAR_WIDTH: usize = 20;

/// Available output formats.
#[derive(Debug, Clone, Copy, Default, ValueEnum, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable report with colors
    #[default]
    Pretty,
    /// JSON output
    Json,
    /// CSV output
    Csv,
    /// YAML output
    Yaml,
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pretty" | "table" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            "yaml" | "yml" => Ok(Self::Yaml),
            _ => anyhow::bail!(
                "Unknown output format: {}\n\
                 Valid formats: pretty, json, csv, yaml",
                s
            ),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pretty => write!(f, "pretty"),
            Self::Json => write!(f, "json"),
            Self::Csv => write!(f, "csv"),
            Self::Yaml => write!(f, "yaml"),
        }
    }
}

/// Color a score the way the bar is colored.
pub fn paint_score(text: &str, score: u8, thresholds: &TierThresholds) -> ColoredString {
    if score < thresholds.moderate_min {
        text.red()
    } else if score < thresholds.secure_min {
        text.yellow()
    } else {
        text.green()
    }
}

/// Fixed-width bar, filled proportionally to `score`.
pub fn score_bar(score: u8) -> String {
    let filled = (usize::from(score.min(100)) * BAR_WIDTH + 50) / 100;
    format!(
        "[{}{}]",
        "#".repeat(filled),
        "-".repeat(BAR_WIDTH - filled)
    )
}

/// Marker shown in front of a report line.
pub fn status_marker(status: CheckStatus) -> ColoredString {
    match status {
        CheckStatus::Success => "ok".green().bold(),
        CheckStatus::Warning => "!!".yellow().bold(),
        CheckStatus::Error => "xx".red().bold(),
        CheckStatus::Info => "--".cyan().bold(),
    }
}

/// Print one result as a human-readable report.
pub fn print_result_pretty(result: &ScoreResult, thresholds: &TierThresholds, locale: Locale) {
    let score = result.score();
    let label = tier_label(result.tier(), locale);

    println!("{} {}", "URL:".bold(), result.url().cyan());

    let headline = format!("{score}/100");
    println!(
        "{} {}  {}",
        "Score:".bold(),
        paint_score(&headline, score, thresholds).bold(),
        paint_score(label, score, thresholds)
    );
    println!("       {}", paint_score(&score_bar(score), score, thresholds));
    println!();

    if result.tier() == Tier::Invalid {
        for line in result.details() {
            println!("  {} {}", status_marker(CheckStatus::Error), line);
        }
    } else {
        for check in result.checks() {
            println!("  {} {}", status_marker(check.status), check.message);
        }
    }
    println!();
}

/// Write results as CSV: one row per URL, report lines joined with ` | `.
pub fn write_results_csv<W: std::io::Write>(writer: W, results: &[ScoreResult]) -> anyhow::Result<()> {
    let mut csv = csv::Writer::from_writer(writer);
    csv.write_record(["url", "score", "tier", "details"])?;
    for result in results {
        let score = result.score().to_string();
        let details = result.details().join(" | ");
        csv.write_record([
            result.url(),
            score.as_str(),
            result.tier().as_str(),
            details.as_str(),
        ])?;
    }
    csv.flush()?;
    Ok(())
}

/// Print results as JSON: a single object for one URL, an array otherwise.
pub fn print_results_json(results: &[ScoreResult]) -> anyhow::Result<()> {
    match results {
        [single] => println!("{}", serde_json::to_string_pretty(single)?),
        many => println!("{}", serde_json::to_string_pretty(many)?),
    }
    Ok(())
}

/// Print results as YAML, shaped like the JSON output.
pub fn print_results_yaml(results: &[ScoreResult]) -> anyhow::Result<()> {
    match results {
        [single] => print!("{}", serde_yaml::to_string(single)?),
        many => print!("{}", serde_yaml::to_string(many)?),
    }
    Ok(())
}

/// Table row for recorded results.
#[derive(Tabled)]
struct EntryRow {
    #[tabled(rename = "#")]
    rank: usize,
    #[tabled(rename = "URL")]
    url: String,
    #[tabled(rename = "Score")]
    score: u8,
    #[tabled(rename = "Tier")]
    tier: Tier,
    #[tabled(rename = "Checked")]
    checked: String,
}

/// Print recorded results in `format`, numbered in the given order.
pub fn print_entries(entries: &[&HistoryEntry], format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(entries)?),
        OutputFormat::Yaml => print!("{}", serde_yaml::to_string(entries)?),
        OutputFormat::Csv => write_entries_csv(std::io::stdout().lock(), entries)?,
        OutputFormat::Pretty => {
            let rows: Vec<EntryRow> = entries
                .iter()
                .enumerate()
                .map(|(i, entry)| EntryRow {
                    rank: i + 1,
                    url: entry.result.url().to_string(),
                    score: entry.result.score(),
                    tier: entry.result.tier(),
                    checked: entry.timestamp.format("%Y-%m-%d %H:%M").to_string(),
                })
                .collect();

            let table = Table::new(&rows).with(Style::rounded()).to_string();
            println!("{table}");
        }
    }
    Ok(())
}

/// Write recorded results as CSV with an RFC 3339 timestamp column.
pub fn write_entries_csv<W: std::io::Write>(
    writer: W,
    entries: &[&HistoryEntry],
) -> anyhow::Result<()> {
    let mut csv = csv::Writer::from_writer(writer);
    csv.write_record(["rank", "url", "score", "tier", "timestamp"])?;
    for (i, entry) in entries.iter().enumerate() {
        let rank = (i + 1).to_string();
        let score = entry.result.score().to_string();
        let timestamp = entry.timestamp.to_rfc3339();
        csv.write_record([
            rank.as_str(),
            entry.result.url(),
            score.as_str(),
            entry.result.tier().as_str(),
            timestamp.as_str(),
        ])?;
    }
    csv.flush()?;
    Ok(())
}
