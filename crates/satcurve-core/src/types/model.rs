//! Regression model kinds.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The regression model family a fitted curve belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelKind {
    /// Saturating fit `y = a * ln(x) + b`.
    Logarithmic,
    /// Non-saturating fit `y = a * x + b`.
    Linear,
}

impl ModelKind {
    /// Returns true for the logarithmic model.
    #[must_use]
    pub fn is_logarithmic(&self) -> bool {
        matches!(self, ModelKind::Logarithmic)
    }

    /// Short label used to disambiguate trace names when both models
    /// are displayed together.
    #[must_use]
    pub fn suffix(&self) -> &'static str {
        match self {
            ModelKind::Logarithmic => "log",
            ModelKind::Linear => "linear",
        }
    }
}

impl fmt::Display for ModelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ModelKind::Logarithmic => "Logarithmic",
            ModelKind::Linear => "Linear",
        };
        write!(f, "{name}")
    }
}
