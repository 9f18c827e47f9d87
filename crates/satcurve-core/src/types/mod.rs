//! Core data types shared across the Satcurve crates.

mod curve;
mod model;
mod segment;
mod series;

pub use curve::FittedCurve;
pub use model::ModelKind;
pub use segment::SegmentRecord;
pub use series::{EvaluatedSeries, Region};
