//! Output formatting utilities.

use tabled::{
    settings::{object::Columns, Alignment, Modify, Style},
    Table, Tabled,
};

use satcurve_charts::format::thousands;
use satcurve_core::types::{ModelKind, SegmentRecord};
use satcurve_curves::equation::parse_equation;

use crate::cli::OutputFormat;

/// One segment row of the inspect table.
#[derive(Tabled)]
struct SegmentRow {
    #[tabled(rename = "Segment")]
    segment: String,
    #[tabled(rename = "Spend range")]
    range: String,
    #[tabled(rename = "Log fit (a, b)")]
    log_fit: String,
    #[tabled(rename = "R² (log)")]
    log_r2: String,
    #[tabled(rename = "Linear fit (a, b)")]
    linear_fit: String,
    #[tabled(rename = "R² (linear)")]
    linear_r2: String,
}

fn fit_cell(record: &SegmentRecord, kind: ModelKind) -> String {
    record
        .equation(kind)
        .and_then(|raw| parse_equation(raw, kind))
        .map_or_else(|| "-".to_string(), |curve| format!("{}, {}", curve.a, curve.b))
}

fn r2_cell(r2: Option<f64>) -> String {
    r2.map_or_else(|| "-".to_string(), |v| format!("{v:.3}"))
}

impl SegmentRow {
    fn from_record(record: &SegmentRecord) -> Self {
        Self {
            segment: record.name.clone(),
            range: format!("{} - {}", thousands(record.x_min), thousands(record.x_max)),
            log_fit: fit_cell(record, ModelKind::Logarithmic),
            log_r2: r2_cell(record.log_r2),
            linear_fit: fit_cell(record, ModelKind::Linear),
            linear_r2: r2_cell(record.linear_r2),
        }
    }
}

/// Prints parsed segments in the requested format.
pub fn print_segments(records: &[SegmentRecord], format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Table => {
            if records.is_empty() {
                println!("No plottable segments.");
                return Ok(());
            }

            let rows: Vec<SegmentRow> = records.iter().map(SegmentRow::from_record).collect();
            let table = Table::new(rows)
                .with(Style::rounded())
                .with(Modify::new(Columns::first()).with(Alignment::left()))
                .to_string();
            println!("{table}");
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(records)?);
        }
    }

    Ok(())
}
