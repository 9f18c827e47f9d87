//! Rendering chart documents with plotly.
//!
//! The only module allowed to touch the rendering library. Everything it
//! consumes is plain data from [`ChartDocument`], so a rendering change
//! never reaches into assembly or evaluation.
//!
//! With the `plotly_embed_js` feature the generated HTML embeds
//! plotly.min.js itself, making the exported file fully viewable offline.

use plotly::common::{Anchor, DashType, Font, Line, Mode, Title};
use plotly::layout::{Axis, HoverMode, Layout, Legend, Margin, RangeMode};
use plotly::{Plot, Scatter};

use crate::document::{ChartDocument, LineStyle, TraceSpec};

fn dash_type(style: LineStyle) -> DashType {
    match style {
        LineStyle::Solid => DashType::Solid,
        LineStyle::Dot => DashType::Dot,
        LineStyle::Dash => DashType::Dash,
    }
}

fn scatter(trace: &TraceSpec) -> Box<Scatter<f64, Option<f64>>> {
    let mut scatter = Scatter::new(trace.xs.clone(), trace.ys.clone())
        .mode(Mode::Lines)
        .name(trace.name.as_str())
        .legend_group(trace.legend_group.as_str())
        .show_legend(trace.show_legend)
        .hover_template(trace.hover_template.as_str())
        .line(
            Line::new()
                .color(trace.color.clone())
                .width(trace.width)
                .dash(dash_type(trace.style)),
        );
    if let Some(opacity) = trace.opacity {
        scatter = scatter.opacity(opacity);
    }
    scatter
}

fn layout(doc: &ChartDocument) -> Layout {
    Layout::new()
        .title(Title::with_text(doc.title.clone()))
        .x_axis(
            Axis::new()
                .title(Title::with_text(doc.metric.x_label()))
                .tick_format(",")
                .grid_color("lightgray")
                .range_mode(RangeMode::ToZero),
        )
        .y_axis(
            Axis::new()
                .title(Title::with_text(doc.metric.y_label()))
                .tick_format(",")
                .grid_color("lightgray")
                .range_mode(RangeMode::ToZero),
        )
        .hover_mode(HoverMode::Closest)
        .legend(
            Legend::new()
                .x(1.02)
                .x_anchor(Anchor::Left)
                .y(0.99)
                .y_anchor(Anchor::Top)
                .font(Font::new().size(10)),
        )
        .margin(Margin::new().right(250))
}

/// Builds a plotly figure from a chart document.
#[must_use]
pub fn to_plot(doc: &ChartDocument) -> Plot {
    let mut plot = Plot::new();
    for trace in &doc.traces {
        plot.add_trace(scatter(trace));
    }
    plot.set_layout(layout(doc));
    plot
}

/// Renders a chart document to a standalone interactive HTML page.
#[must_use]
pub fn to_html(doc: &ChartDocument) -> String {
    to_plot(doc).to_html()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::Metric;
    use satcurve_core::types::Region;

    fn sample_doc() -> ChartDocument {
        let mut doc = ChartDocument::new(Metric::Acquisition, "Render test");
        doc.traces.push(TraceSpec {
            name: "Seg1 (R²=0.610)".to_string(),
            legend_group: "Seg1/log".to_string(),
            show_legend: true,
            color: "#1f77b4".to_string(),
            width: 2.0,
            style: LineStyle::Solid,
            opacity: None,
            hover_template: "<b>Seg1</b><extra></extra>".to_string(),
            region: Region::Observed,
            xs: vec![1.0, 2.0, 3.0],
            ys: vec![Some(1.0), None, Some(3.0)],
        });
        doc
    }

    #[test]
    fn test_to_html_is_standalone_page() {
        let html = to_html(&sample_doc());
        assert!(html.contains("<html"));
        assert!(html.contains("Render test"));
        assert!(html.contains("Seg1"));
    }

    #[test]
    fn test_undefined_samples_serialize_as_null() {
        let plot = to_plot(&sample_doc());
        let json = plot.to_json();
        assert!(json.contains("null"));
    }
}
