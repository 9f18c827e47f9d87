//! Error types for chart assembly.

use thiserror::Error;

use satcurve_core::CoreError;
use satcurve_curves::CurveError;

/// A specialized Result type for chart operations.
pub type ChartResult<T> = Result<T, ChartError>;

/// The error type for chart assembly and generation.
#[derive(Error, Debug, Clone)]
pub enum ChartError {
    /// Invalid settings or input-shape failure.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Curve evaluation failed in a way the pipeline could not downgrade
    /// to a report entry.
    #[error(transparent)]
    Curve(#[from] CurveError),
}
