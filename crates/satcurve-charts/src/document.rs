//! Chart documents: fully styled, renderer-independent chart data.
//!
//! A [`ChartDocument`] is the assembler's output and the renderer's input.
//! It carries everything a chart needs (series data, styling, legend
//! grouping, labels) as plain data so assembly stays unit-testable without
//! touching the rendering library.

use serde::{Deserialize, Serialize};
use std::fmt;

use satcurve_core::types::Region;

/// Which metric a chart document plots against spend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    /// Predicted new-user acquisition volume.
    Acquisition,
    /// Derived cost per acquisition (spend / volume).
    CostPerAcquisition,
}

impl Metric {
    /// Stable identifier used in routes and file names.
    #[must_use]
    pub fn slug(&self) -> &'static str {
        match self {
            Metric::Acquisition => "acquisition",
            Metric::CostPerAcquisition => "cpa",
        }
    }

    /// X-axis label (shared by both charts).
    #[must_use]
    pub fn x_label(&self) -> &'static str {
        "Ad spend"
    }

    /// Y-axis label.
    #[must_use]
    pub fn y_label(&self) -> &'static str {
        match self {
            Metric::Acquisition => "New users acquired",
            Metric::CostPerAcquisition => "Cost per acquisition (spend / user)",
        }
    }

    /// Parses a route/file slug back into a metric.
    #[must_use]
    pub fn from_slug(slug: &str) -> Option<Self> {
        match slug {
            "acquisition" => Some(Metric::Acquisition),
            "cpa" => Some(Metric::CostPerAcquisition),
            _ => None,
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.slug())
    }
}

/// Line style of a trace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineStyle {
    /// Solid line (observed data).
    Solid,
    /// Dotted line (linear model when both models are shown).
    Dot,
    /// Dashed line (extrapolated ranges).
    Dash,
}

/// One styled series on a chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraceSpec {
    /// Legend / hover display name.
    pub name: String,
    /// Legend group key; extrapolated traces share their observed trace's
    /// group so toggling the legend entry hides all of them together.
    pub legend_group: String,
    /// Whether this trace gets its own legend row.
    pub show_legend: bool,
    /// Segment color (hex).
    pub color: String,
    /// Line width in pixels.
    pub width: f64,
    /// Line style.
    pub style: LineStyle,
    /// Trace opacity; `None` means fully opaque.
    pub opacity: Option<f64>,
    /// Plotly hover template with thousands-grouped value formatting.
    pub hover_template: String,
    /// Domain region the trace covers.
    pub region: Region,
    /// Sampled x values.
    pub xs: Vec<f64>,
    /// Sampled y values, `None` rendered as a gap.
    pub ys: Vec<Option<f64>>,
}

/// All traces and layout metadata for one chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartDocument {
    /// Metric the chart plots.
    pub metric: Metric,
    /// Chart title.
    pub title: String,
    /// Styled traces in draw order.
    pub traces: Vec<TraceSpec>,
}

impl ChartDocument {
    /// Creates an empty document for a metric.
    #[must_use]
    pub fn new(metric: Metric, title: impl Into<String>) -> Self {
        Self {
            metric,
            title: title.into(),
            traces: Vec::new(),
        }
    }

    /// Returns true when no trace made it onto the chart.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.traces.is_empty()
    }

    /// Number of legend entries (observed traces).
    #[must_use]
    pub fn legend_entries(&self) -> usize {
        self.traces.iter().filter(|t| t.show_legend).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metric_slug_round_trip() {
        for metric in [Metric::Acquisition, Metric::CostPerAcquisition] {
            assert_eq!(Metric::from_slug(metric.slug()), Some(metric));
        }
        assert_eq!(Metric::from_slug("unknown"), None);
    }

    #[test]
    fn test_empty_document() {
        let doc = ChartDocument::new(Metric::Acquisition, "Title");
        assert!(doc.is_empty());
        assert_eq!(doc.legend_entries(), 0);
    }
}
