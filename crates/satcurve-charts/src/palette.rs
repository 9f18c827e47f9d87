//! Segment color palette.

/// Fixed 15-color palette; color encodes segment identity, so observed and
/// extrapolated traces of the same segment always share a color, and model
/// kinds are distinguished by line style instead.
pub const PALETTE: [&str; 15] = [
    "#1f77b4", "#ff7f0e", "#2ca02c", "#d62728", "#9467bd", "#8c564b", "#e377c2", "#7f7f7f",
    "#bcbd22", "#17becf", "#aec7e8", "#ffbb78", "#98df8a", "#ff9896", "#c5b0d5",
];

/// Deterministic color for a segment by input row order.
#[must_use]
pub fn color_for(index: usize) -> &'static str {
    PALETTE[index % PALETTE.len()]
}
