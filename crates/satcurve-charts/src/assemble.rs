//! Trace assembly: styling evaluated series into chart traces.

use satcurve_core::types::{EvaluatedSeries, ModelKind, Region};

use crate::document::{LineStyle, Metric, TraceSpec};

/// Line width of observed traces.
pub const OBSERVED_WIDTH: f64 = 2.0;

/// Line width of extrapolated traces (thinner than observed).
pub const EXTRAPOLATED_WIDTH: f64 = 1.5;

/// Opacity of extrapolated traces.
pub const EXTRAPOLATED_OPACITY: f64 = 0.5;

/// Everything the assembler needs to style one segment/model pair.
#[derive(Debug, Clone, Copy)]
pub struct SegmentContext<'a> {
    /// Segment display name.
    pub segment: &'a str,
    /// Model the traces belong to.
    pub kind: ModelKind,
    /// Supplied fit quality, echoed into the legend label.
    pub r2: Option<f64>,
    /// Segment color (by row order).
    pub color: &'static str,
    /// Whether both model families share the chart, which switches on
    /// name suffixes and per-model line styles.
    pub both_models: bool,
    /// Metric of the chart being assembled.
    pub metric: Metric,
}

impl SegmentContext<'_> {
    /// Legend label: segment name, optional model suffix, optional R².
    #[must_use]
    pub fn trace_name(&self) -> String {
        let mut name = self.segment.to_string();
        if self.both_models {
            name.push(' ');
            name.push_str(self.kind.suffix());
        }
        if let Some(r2) = self.r2 {
            name.push_str(&format!(" (R²={r2:.3})"));
        }
        name
    }

    /// Legend group key shared by a pair's observed and extrapolated
    /// traces.
    #[must_use]
    pub fn legend_group(&self) -> String {
        format!("{}/{}", self.segment, self.kind.suffix())
    }

    /// Line style of the observed trace. Color is reserved for segment
    /// identity, so with both models on one chart the linear model is
    /// drawn dotted instead of recolored.
    #[must_use]
    pub fn observed_style(&self) -> LineStyle {
        if self.both_models && self.kind == ModelKind::Linear {
            LineStyle::Dot
        } else {
            LineStyle::Solid
        }
    }

    /// Hover template with thousands-grouped values.
    #[must_use]
    pub fn hover_template(&self, extrapolated: bool) -> String {
        let value_label = match self.metric {
            Metric::Acquisition => "New users",
            Metric::CostPerAcquisition => "CPA",
        };
        let tag = if extrapolated { " (extrapolated)" } else { "" };
        format!(
            "<b>{}{}</b><br>Spend: %{{x:,.0f}}<br>{}: %{{y:,.0f}}<extra></extra>",
            self.segment, tag, value_label
        )
    }
}

/// Styles a pair's evaluated series into chart traces.
///
/// The observed trace carries the legend entry; extrapolated traces are
/// thinner, semi-transparent, dashed, and legend-hidden but share the
/// observed trace's legend group.
#[must_use]
pub fn series_traces(series: Vec<EvaluatedSeries>, ctx: &SegmentContext<'_>) -> Vec<TraceSpec> {
    let legend_group = ctx.legend_group();

    series
        .into_iter()
        .map(|s| {
            if s.region.is_extrapolated() {
                TraceSpec {
                    name: format!("{} (extrapolated)", ctx.segment),
                    legend_group: legend_group.clone(),
                    show_legend: false,
                    color: ctx.color.to_string(),
                    width: EXTRAPOLATED_WIDTH,
                    style: LineStyle::Dash,
                    opacity: Some(EXTRAPOLATED_OPACITY),
                    hover_template: ctx.hover_template(true),
                    region: s.region,
                    xs: s.xs,
                    ys: s.ys,
                }
            } else {
                TraceSpec {
                    name: ctx.trace_name(),
                    legend_group: legend_group.clone(),
                    show_legend: true,
                    color: ctx.color.to_string(),
                    width: OBSERVED_WIDTH,
                    style: ctx.observed_style(),
                    opacity: None,
                    hover_template: ctx.hover_template(false),
                    region: s.region,
                    xs: s.xs,
                    ys: s.ys,
                }
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx(both: bool, kind: ModelKind) -> SegmentContext<'static> {
        SegmentContext {
            segment: "Seg1",
            kind,
            r2: Some(0.61),
            color: "#1f77b4",
            both_models: both,
            metric: Metric::Acquisition,
        }
    }

    fn series(region: Region) -> EvaluatedSeries {
        EvaluatedSeries::new(region, vec![1.0, 2.0], vec![Some(1.0), Some(2.0)]).unwrap()
    }

    #[test]
    fn test_trace_name_single_model() {
        assert_eq!(
            ctx(false, ModelKind::Logarithmic).trace_name(),
            "Seg1 (R²=0.610)"
        );
    }

    #[test]
    fn test_trace_name_both_models() {
        assert_eq!(
            ctx(true, ModelKind::Logarithmic).trace_name(),
            "Seg1 log (R²=0.610)"
        );
        assert_eq!(ctx(true, ModelKind::Linear).trace_name(), "Seg1 linear (R²=0.610)");
    }

    #[test]
    fn test_trace_name_without_r2() {
        let mut c = ctx(false, ModelKind::Logarithmic);
        c.r2 = None;
        assert_eq!(c.trace_name(), "Seg1");
    }

    #[test]
    fn test_linear_dotted_only_when_both() {
        assert_eq!(ctx(false, ModelKind::Linear).observed_style(), LineStyle::Solid);
        assert_eq!(ctx(true, ModelKind::Linear).observed_style(), LineStyle::Dot);
        assert_eq!(
            ctx(true, ModelKind::Logarithmic).observed_style(),
            LineStyle::Solid
        );
    }

    #[test]
    fn test_extrapolated_trace_styling() {
        let traces = series_traces(
            vec![series(Region::Observed), series(Region::ExtrapolatedHigh)],
            &ctx(false, ModelKind::Logarithmic),
        );
        assert_eq!(traces.len(), 2);

        let observed = &traces[0];
        assert!(observed.show_legend);
        assert!((observed.width - OBSERVED_WIDTH).abs() < f64::EPSILON);
        assert_eq!(observed.style, LineStyle::Solid);
        assert!(observed.opacity.is_none());

        let extrapolated = &traces[1];
        assert!(!extrapolated.show_legend);
        assert_eq!(extrapolated.style, LineStyle::Dash);
        assert_eq!(extrapolated.opacity, Some(EXTRAPOLATED_OPACITY));
        assert!((extrapolated.width - EXTRAPOLATED_WIDTH).abs() < f64::EPSILON);
        assert_eq!(extrapolated.legend_group, observed.legend_group);
        assert_eq!(extrapolated.color, observed.color);
        assert!(extrapolated.name.contains("extrapolated"));
    }

    #[test]
    fn test_hover_template_mentions_metric() {
        let c = SegmentContext {
            metric: Metric::CostPerAcquisition,
            ..ctx(false, ModelKind::Logarithmic)
        };
        let template = c.hover_template(false);
        assert!(template.contains("CPA"));
        assert!(template.contains("%{x:,.0f}"));
        assert!(template.contains("<extra></extra>"));
    }
}
