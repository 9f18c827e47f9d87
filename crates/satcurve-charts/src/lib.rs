//! # Satcurve Charts
//!
//! Chart assembly and rendering for the Satcurve chart generator.
//!
//! This crate provides:
//!
//! - **Assembly**: deterministic palette and legend-group styling of
//!   evaluated series into renderer-independent [`ChartDocument`]s
//! - **Pipeline**: the single-pass [`generate_charts`] run producing both
//!   metric documents plus the generation report
//! - **Rendering**: plotly-backed conversion of documents into
//!   self-contained interactive HTML
//!
//! ## Quick Start
//!
//! ```rust
//! use satcurve_charts::pipeline::generate_charts;
//! use satcurve_core::settings::GraphSettings;
//! use satcurve_core::table::{parse_table, SAMPLE_TSV};
//!
//! let table = parse_table(SAMPLE_TSV).unwrap();
//! let charts = generate_charts(&table.records, &GraphSettings::default()).unwrap();
//! assert_eq!(charts.acquisition.legend_entries(), 3);
//! let html = satcurve_charts::render::to_html(&charts.acquisition);
//! assert!(html.contains("<html"));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod assemble;
pub mod document;
pub mod error;
pub mod format;
pub mod palette;
pub mod pipeline;
pub mod render;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::assemble::{series_traces, SegmentContext};
    pub use crate::document::{ChartDocument, LineStyle, Metric, TraceSpec};
    pub use crate::error::{ChartError, ChartResult};
    pub use crate::format::thousands;
    pub use crate::palette::{color_for, PALETTE};
    pub use crate::pipeline::{generate_charts, GeneratedCharts};
    pub use crate::render::{to_html, to_plot};
}

pub use document::{ChartDocument, Metric};
pub use error::{ChartError, ChartResult};
pub use pipeline::{generate_charts, GeneratedCharts};
