//! The `inspect` command.

use anyhow::Result;
use clap::Args;

use satcurve_core::table::parse_table;

use crate::cli::OutputFormat;
use crate::commands::{print_warning, read_input};
use crate::output;

/// Arguments for `satcurve inspect`.
#[derive(Args)]
pub struct InspectArgs {
    /// Input table file (tab-separated, header row); '-' reads stdin
    #[arg(short, long, default_value = "-")]
    pub input: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,
}

/// Executes the inspect command.
pub fn execute(args: InspectArgs) -> Result<()> {
    let input = read_input(&args.input)?;
    let table = parse_table(&input)?;

    for skip in &table.skips {
        print_warning(&skip.to_string());
    }

    output::print_segments(&table.records, args.format)
}
