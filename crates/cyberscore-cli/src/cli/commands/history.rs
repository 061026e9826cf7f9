//! `cyberscore history` - Recently checked URLs.

use anyhow::Result;
use colored::Colorize;

use super::Context;
use crate::cli::args::HistoryArgs;
use crate::education::Explain;
use crate::output::{self, OutputFormat};

pub async fn execute(ctx: Context, args: HistoryArgs) -> Result<()> {
    if ctx.explain {
        Explain::history().print();
    }

    let history = ctx.history().load();
    let recent = history.recent(args.limit);

    if recent.is_empty() && ctx.output_format == OutputFormat::Pretty {
        println!("{}", "History is empty.".yellow());
        if ctx.verbose {
            println!("{} {}", "File:".bold(), ctx.history_path.display());
        }
        return Ok(());
    }

    output::print_entries(&recent, ctx.output_format)
}
