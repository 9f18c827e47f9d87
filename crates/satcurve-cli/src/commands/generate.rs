//! The `generate` command.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use satcurve_charts::document::Metric;
use satcurve_charts::pipeline::generate_charts;
use satcurve_charts::render;
use satcurve_core::settings::GraphSettings;
use satcurve_core::table::parse_table;

use crate::cli::ModelChoice;
use crate::commands::{print_warning, read_input};

/// Arguments for `satcurve generate`.
#[derive(Args)]
pub struct GenerateArgs {
    /// Input table file (tab-separated, header row); '-' reads stdin
    #[arg(short, long, default_value = "-")]
    pub input: String,

    /// Directory the chart HTML files are written into
    #[arg(short, long, default_value = ".")]
    pub out_dir: PathBuf,

    /// Regression model(s) to display
    #[arg(short, long, value_enum, default_value = "log")]
    pub models: ModelChoice,

    /// Skip the extrapolated (dashed) ranges
    #[arg(long)]
    pub no_extrapolation: bool,

    /// Extrapolation reach as a multiple of the largest observed max
    #[arg(short, long, default_value_t = 1.5)]
    pub ratio: f64,

    /// Chart title
    #[arg(short, long, default_value = "Ad spend saturation by segment")]
    pub title: String,
}

/// Executes the generate command.
pub fn execute(args: GenerateArgs) -> Result<()> {
    let input = read_input(&args.input)?;
    let table = parse_table(&input)?;

    for skip in &table.skips {
        print_warning(&skip.to_string());
    }

    let settings = GraphSettings {
        models: args.models.into(),
        show_extrapolation: !args.no_extrapolation,
        extrapolation_ratio: args.ratio,
        title: args.title,
    };

    let charts = generate_charts(&table.records, &settings)?;
    for message in charts.report.messages() {
        print_warning(&message);
    }

    std::fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("creating output directory '{}'", args.out_dir.display()))?;

    for metric in [Metric::Acquisition, Metric::CostPerAcquisition] {
        let doc = charts.document(metric);
        let path = args.out_dir.join(format!("{}.html", metric.slug()));
        std::fs::write(&path, render::to_html(doc))
            .with_context(|| format!("writing '{}'", path.display()))?;
        println!(
            "wrote {} ({} segments, {} traces)",
            path.display(),
            doc.legend_entries(),
            doc.traces.len()
        );
    }

    Ok(())
}
