//! Evaluated curve series.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

/// Which part of a segment's domain a series covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Region {
    /// Inside the observed data range `[x_min, x_max]`.
    Observed,
    /// Below the observed range, down to the global minimum.
    ExtrapolatedLow,
    /// Above the observed range, up to the extended global maximum.
    ExtrapolatedHigh,
}

impl Region {
    /// Returns true for either extrapolated region.
    #[must_use]
    pub fn is_extrapolated(&self) -> bool {
        !matches!(self, Region::Observed)
    }
}

/// A sampled curve over one contiguous x-range.
///
/// `xs` and `ys` are parallel arrays; `xs` is strictly increasing. A `None`
/// y marks a sample where the underlying function is not meaningfully
/// defined (a non-positive cost denominator, or a logarithm past zero) and
/// must be rendered as a gap, never as zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluatedSeries {
    /// Domain region this series covers.
    pub region: Region,
    /// Sampled x values, strictly increasing.
    pub xs: Vec<f64>,
    /// Sampled y values, `None` where undefined.
    pub ys: Vec<Option<f64>>,
}

impl EvaluatedSeries {
    /// Creates a series, validating the structural invariants.
    ///
    /// # Errors
    ///
    /// Returns an error if the arrays are empty, have different lengths,
    /// or if `xs` is not strictly increasing.
    pub fn new(region: Region, xs: Vec<f64>, ys: Vec<Option<f64>>) -> CoreResult<Self> {
        if xs.is_empty() {
            return Err(CoreError::invalid_series("series has no samples"));
        }
        if xs.len() != ys.len() {
            return Err(CoreError::invalid_series(format!(
                "xs and ys must have same length: {} vs {}",
                xs.len(),
                ys.len()
            )));
        }
        for i in 1..xs.len() {
            if xs[i] <= xs[i - 1] {
                return Err(CoreError::invalid_series(
                    "x values must be strictly increasing",
                ));
            }
        }

        Ok(Self { region, xs, ys })
    }

    /// Number of samples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.xs.len()
    }

    /// Returns true when the series holds no samples.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }

    /// Number of samples with a defined y value.
    #[must_use]
    pub fn defined_len(&self) -> usize {
        self.ys.iter().filter(|y| y.is_some()).count()
    }
}
