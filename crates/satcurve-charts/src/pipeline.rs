//! The generation pipeline: records + settings in, chart documents out.
//!
//! One synchronous pass over all segments and models. Per-row and
//! per-model misses are downgraded to report entries; only settings
//! validation and structural failures abort the run.

use satcurve_core::report::{GenerationReport, Skip, SkipReason};
use satcurve_core::settings::GraphSettings;
use satcurve_core::types::SegmentRecord;
use satcurve_curves::cost::{cost_series, cost_start};
use satcurve_curves::equation::parse_equation;
use satcurve_curves::evaluate::{acquisition_series, global_domain};
use satcurve_curves::CurveError;

use crate::assemble::{series_traces, SegmentContext};
use crate::document::{ChartDocument, Metric};
use crate::error::ChartResult;
use crate::palette::color_for;

/// Output of one generation pass: both chart documents plus the report.
///
/// Immutable once produced; the shells hold on to it between the generate
/// and download actions.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedCharts {
    /// Acquisition volume vs. spend.
    pub acquisition: ChartDocument,
    /// Cost per acquisition vs. spend.
    pub cost: ChartDocument,
    /// Non-fatal findings collected along the way.
    pub report: GenerationReport,
}

impl GeneratedCharts {
    /// The document for a metric.
    #[must_use]
    pub fn document(&self, metric: Metric) -> &ChartDocument {
        match metric {
            Metric::Acquisition => &self.acquisition,
            Metric::CostPerAcquisition => &self.cost,
        }
    }
}

/// Generates both chart documents from parsed records.
///
/// Pure function of its inputs: identical records and settings always
/// produce identical documents.
///
/// # Errors
///
/// Returns an error for invalid settings or a structural series failure;
/// everything per-row/per-model lands in the report instead.
pub fn generate_charts(
    records: &[SegmentRecord],
    settings: &GraphSettings,
) -> ChartResult<GeneratedCharts> {
    settings.validate()?;

    let mut report = GenerationReport::new();
    let mut acquisition = ChartDocument::new(Metric::Acquisition, settings.title.clone());
    let mut cost = ChartDocument::new(
        Metric::CostPerAcquisition,
        format!("{} - CPA", settings.title),
    );

    let Some(global) = global_domain(records, settings.extrapolation_ratio) else {
        // Nothing usable to plot; both documents stay empty.
        return Ok(GeneratedCharts {
            acquisition,
            cost,
            report,
        });
    };

    for (index, record) in records.iter().enumerate() {
        if !record.is_valid_domain() {
            report.record(Skip::row(
                record.name.clone(),
                SkipReason::InvalidDomain {
                    x_min: record.x_min,
                    x_max: record.x_max,
                },
            ));
            continue;
        }

        let color = color_for(index);

        for &kind in settings.models.kinds() {
            // An absent equation cell is a quiet skip; only a non-empty
            // string that fails to parse is worth reporting.
            let Some(raw) = record.equation(kind) else {
                continue;
            };
            let Some(curve) = parse_equation(raw, kind) else {
                report.record(Skip::model(
                    record.name.clone(),
                    kind,
                    SkipReason::EquationMismatch,
                ));
                continue;
            };

            let ctx = SegmentContext {
                segment: &record.name,
                kind,
                r2: record.r2(kind),
                color,
                both_models: settings.models.is_both(),
                metric: Metric::Acquisition,
            };

            match acquisition_series(&curve, record, global, settings.show_extrapolation) {
                Ok(series) => acquisition.traces.extend(series_traces(series, &ctx)),
                Err(CurveError::NonPositiveDomain { x_min, .. }) => {
                    report.record(Skip::model(
                        record.name.clone(),
                        kind,
                        SkipReason::NonPositiveDomain { x_min },
                    ));
                    // The cost chart needs the same positive domain.
                    continue;
                }
                Err(e) => return Err(e.into()),
            }

            let cost_ctx = SegmentContext {
                metric: Metric::CostPerAcquisition,
                ..ctx
            };

            match cost_series(&curve, record, global.max, settings.show_extrapolation) {
                Ok(Some(series)) => cost.traces.extend(series_traces(series, &cost_ctx)),
                Ok(None) => report.record(Skip::model(
                    record.name.clone(),
                    kind,
                    SkipReason::EmptyCostDomain {
                        start: cost_start(&curve, record.x_min),
                        end: record.x_max,
                    },
                )),
                Err(CurveError::NonPositiveDomain { x_min, .. }) => {
                    report.record(Skip::model(
                        record.name.clone(),
                        kind,
                        SkipReason::NonPositiveDomain { x_min },
                    ));
                }
                Err(e) => return Err(e.into()),
            }
        }
    }

    log::info!(
        "generated charts: {} acquisition traces, {} cost traces, {} skips",
        acquisition.traces.len(),
        cost.traces.len(),
        report.skips.len()
    );

    Ok(GeneratedCharts {
        acquisition,
        cost,
        report,
    })
}
