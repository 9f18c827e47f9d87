//! Tabular input adapter.
//!
//! Parses a tab-separated text block (typically pasted from a spreadsheet)
//! into [`SegmentRecord`]s. Column names are matched exactly against a
//! fixed, case-sensitive set; missing required columns abort the run,
//! while per-row problems are downgraded to [`Skip`] entries.

use csv::{ReaderBuilder, StringRecord};

use crate::error::{CoreError, CoreResult};
use crate::report::{Skip, SkipReason};
use crate::types::SegmentRecord;

/// Expected column names.
pub mod columns {
    /// Segment identifier (required).
    pub const SEGMENT: &str = "segment";
    /// Logarithmic regression equation text.
    pub const LOG_EQUATION: &str = "log_equation";
    /// R² of the logarithmic fit.
    pub const LOG_R2: &str = "log_r2";
    /// Lower end of the observed spend range (required).
    pub const X_MIN: &str = "x_min";
    /// Upper end of the observed spend range (required).
    pub const X_MAX: &str = "x_max";
    /// Linear regression equation text.
    pub const LINEAR_EQUATION: &str = "linear_equation";
    /// R² of the linear fit.
    pub const LINEAR_R2: &str = "linear_r2";

    /// Columns that must be present for any chart to be generated.
    pub const REQUIRED: [&str; 3] = [SEGMENT, X_MIN, X_MAX];
}

/// Sample input in the expected shape, used by the shells as placeholder
/// data and by tests as a known-good fixture.
pub const SAMPLE_TSV: &str = "segment\tlog_equation\tlog_r2\tx_min\tx_max\tlinear_equation\tlinear_r2\n\
    Brand A / Category 1\ty = 77.1095 * ln(x) + -656.0219\t0.61\t150\t195023\ty = 0.0013 * x + 54.4297\t0.60\n\
    Brand A / Category 2\ty = 365.3877 * ln(x) + -3853.9650\t0.81\t2198\t833174\ty = 0.0015 * x + 178.5103\t0.83\n\
    Brand A / Category 3\ty = 1051.4716 * ln(x) + -12066.0985\t0.82\t525\t2850648\ty = 0.0003 * x + 1977.5350\t0.76\n";

/// Result of parsing one input block.
#[derive(Debug, Clone, Default)]
pub struct ParsedTable {
    /// Rows that passed validation, in input order.
    pub records: Vec<SegmentRecord>,
    /// Rows dropped during parsing, with reasons.
    pub skips: Vec<Skip>,
}

/// Resolved positions of the known columns in the header row.
struct ColumnIndex {
    segment: usize,
    x_min: usize,
    x_max: usize,
    log_equation: Option<usize>,
    log_r2: Option<usize>,
    linear_equation: Option<usize>,
    linear_r2: Option<usize>,
}

impl ColumnIndex {
    fn locate(headers: &StringRecord) -> CoreResult<Self> {
        let find = |name: &str| headers.iter().position(|h| h == name);

        let missing: Vec<String> = columns::REQUIRED
            .iter()
            .filter(|&&name| find(name).is_none())
            .map(|&name| name.to_string())
            .collect();
        if !missing.is_empty() {
            return Err(CoreError::MissingColumns { columns: missing });
        }

        Ok(Self {
            segment: find(columns::SEGMENT).unwrap_or_default(),
            x_min: find(columns::X_MIN).unwrap_or_default(),
            x_max: find(columns::X_MAX).unwrap_or_default(),
            log_equation: find(columns::LOG_EQUATION),
            log_r2: find(columns::LOG_R2),
            linear_equation: find(columns::LINEAR_EQUATION),
            linear_r2: find(columns::LINEAR_R2),
        })
    }
}

/// Non-empty, trimmed cell text at `index`, if the row has one.
fn cell(row: &StringRecord, index: usize) -> Option<&str> {
    row.get(index).map(str::trim).filter(|s| !s.is_empty())
}

/// Cell coerced to a finite number; anything else is treated as missing.
fn numeric_cell(row: &StringRecord, index: usize) -> Option<f64> {
    cell(row, index)?.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Parses a tab-separated block into segment records.
///
/// # Errors
///
/// Returns [`CoreError::EmptyInput`] for blank input,
/// [`CoreError::MissingColumns`] when a required column is absent from the
/// header, and [`CoreError::Table`] if the reader fails below the row
/// level. Row-level problems (missing name, non-numeric range, unusable
/// domain) are reported as skips, not errors.
pub fn parse_table(input: &str) -> CoreResult<ParsedTable> {
    if input.trim().is_empty() {
        return Err(CoreError::EmptyInput);
    }

    let mut reader = ReaderBuilder::new()
        .delimiter(b'\t')
        .flexible(true)
        .from_reader(input.as_bytes());

    let headers = reader
        .headers()
        .map_err(|e| CoreError::table(e.to_string()))?
        .clone();
    let index = ColumnIndex::locate(&headers)?;

    let mut table = ParsedTable::default();

    for (i, row) in reader.records().enumerate() {
        let line = i + 2; // 1-based, after the header row
        let row = row.map_err(|e| CoreError::table(format!("line {line}: {e}")))?;

        let Some(name) = cell(&row, index.segment) else {
            table
                .skips
                .push(Skip::row(format!("row {line}"), SkipReason::MissingSegmentName));
            continue;
        };

        let (Some(x_min), Some(x_max)) = (
            numeric_cell(&row, index.x_min),
            numeric_cell(&row, index.x_max),
        ) else {
            table.skips.push(Skip::row(name, SkipReason::MissingRange));
            continue;
        };

        let record = SegmentRecord {
            name: name.to_string(),
            log_equation: index
                .log_equation
                .and_then(|i| cell(&row, i))
                .map(str::to_string),
            linear_equation: index
                .linear_equation
                .and_then(|i| cell(&row, i))
                .map(str::to_string),
            log_r2: index.log_r2.and_then(|i| numeric_cell(&row, i)),
            linear_r2: index.linear_r2.and_then(|i| numeric_cell(&row, i)),
            x_min,
            x_max,
        };

        if !record.is_valid_domain() {
            table
                .skips
                .push(Skip::row(record.name, SkipReason::InvalidDomain { x_min, x_max }));
            continue;
        }

        table.records.push(record);
    }

    log::debug!(
        "parsed table: {} records, {} skipped rows",
        table.records.len(),
        table.skips.len()
    );

    Ok(table)
}
