//! `cyberscore top` - Best-scoring URLs from the history file.

use anyhow::Result;
use colored::Colorize;
use tracing::debug;

use super::Context;
use crate::cli::args::TopArgs;
use crate::education::Explain;
use crate::output::{self, OutputFormat};

pub async fn execute(ctx: Context, args: TopArgs) -> Result<()> {
    if ctx.explain {
        Explain::top().print();
    }

    let history = ctx.history().load();
    let top = history.top(args.count);
    debug!(recorded = history.len(), shown = top.len(), "leaderboard");

    if top.is_empty() && ctx.output_format == OutputFormat::Pretty {
        println!("{}", "No URLs checked yet.".yellow());
        println!(
            "{}",
            "Tip: run `cyberscore check <url>` to start the leaderboard".dimmed()
        );
        return Ok(());
    }

    if ctx.output_format == OutputFormat::Pretty {
        println!(
            "{} {} of {} recorded",
            "Top URLs:".bold(),
            top.len(),
            history.len()
        );
    }

    output::print_entries(&top, ctx.output_format)
}
