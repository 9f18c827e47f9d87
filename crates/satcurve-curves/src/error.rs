//! Error types for curve evaluation.

use thiserror::Error;

use satcurve_core::CoreError;

/// A specialized Result type for curve operations.
pub type CurveResult<T> = Result<T, CurveError>;

/// The error type for curve evaluation.
///
/// Equation parse misses are deliberately NOT errors; they are absent
/// values. Only domain problems that the caller must report show up here.
#[derive(Error, Debug, Clone)]
pub enum CurveError {
    /// A logarithmic curve was asked to cover a range starting at or
    /// below zero.
    #[error("Segment '{segment}': logarithmic model requires x_min > 0 (got {x_min})")]
    NonPositiveDomain {
        /// Segment the range belongs to.
        segment: String,
        /// Offending range start.
        x_min: f64,
    },

    /// A structural invariant failed while building a series.
    #[error(transparent)]
    Core(#[from] CoreError),
}
