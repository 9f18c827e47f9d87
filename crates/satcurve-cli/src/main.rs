//! Satcurve CLI - regression tables in, interactive charts out.
//!
//! # Usage
//!
//! ```bash
//! # Generate both charts from a pasted/saved table
//! satcurve generate --input summary.tsv --out-dir charts --models both
//!
//! # See what a table parses into before plotting
//! satcurve inspect --input summary.tsv
//!
//! # Pipe straight from the clipboard
//! xclip -o | satcurve generate --title "Q3 saturation"
//! ```

use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;
mod output;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate(args) => commands::generate::execute(args)?,
        Commands::Inspect(args) => commands::inspect::execute(args)?,
    }

    Ok(())
}
