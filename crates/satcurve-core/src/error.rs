//! Error types for the Satcurve core crate.
//!
//! Only conditions that abort a whole generation attempt are errors here.
//! Per-row and per-model misses are represented as absent values plus an
//! entry in the [`GenerationReport`](crate::report::GenerationReport).

use thiserror::Error;

/// A specialized Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// The main error type for core operations.
#[derive(Error, Debug, Clone)]
pub enum CoreError {
    /// One or more required input columns are absent from the header row.
    #[error("Missing required columns: {}", columns.join(", "))]
    MissingColumns {
        /// Names of the missing columns, in canonical order.
        columns: Vec<String>,
    },

    /// The input contained no table at all.
    #[error("Input is empty; paste a tab-separated table with a header row")]
    EmptyInput,

    /// The extrapolation ratio is outside its valid range.
    #[error("Invalid extrapolation ratio {value}: must be between {min} and {max}")]
    InvalidRatio {
        /// The rejected ratio value.
        value: f64,
        /// Lower bound (inclusive).
        min: f64,
        /// Upper bound (inclusive).
        max: f64,
    },

    /// An evaluated series violated its structural invariants.
    #[error("Invalid series: {reason}")]
    InvalidSeries {
        /// Description of the violated invariant.
        reason: String,
    },

    /// The table reader failed below the row level.
    #[error("Table error: {reason}")]
    Table {
        /// Description of the failure.
        reason: String,
    },
}

impl CoreError {
    /// Creates a missing-columns error.
    #[must_use]
    pub fn missing_columns<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::MissingColumns {
            columns: columns.into_iter().map(Into::into).collect(),
        }
    }

    /// Creates an invalid-series error.
    #[must_use]
    pub fn invalid_series(reason: impl Into<String>) -> Self {
        Self::InvalidSeries {
            reason: reason.into(),
        }
    }

    /// Creates a table error.
    #[must_use]
    pub fn table(reason: impl Into<String>) -> Self {
        Self::Table {
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_columns_display_lists_names() {
        let err = CoreError::missing_columns(["x_min", "x_max"]);
        let msg = err.to_string();
        assert!(msg.contains("x_min"));
        assert!(msg.contains("x_max"));
    }

    #[test]
    fn test_ratio_error_display() {
        let err = CoreError::InvalidRatio {
            value: 5.0,
            min: 1.0,
            max: 3.0,
        };
        assert!(err.to_string().contains('5'));
    }
}
