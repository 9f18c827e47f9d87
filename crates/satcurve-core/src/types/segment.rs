//! Input segment records.

use serde::{Deserialize, Serialize};

use super::ModelKind;

/// One row of the input table: a named segment with its fitted equations
/// and the spend range the fits were observed over.
///
/// Records are created by the tabular input adapter and never mutated.
/// Equation strings are carried verbatim; turning them into coefficients
/// is the equation parser's job, and a string that fails to parse simply
/// means the segment has no curve of that kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SegmentRecord {
    /// Segment identifier used for legends and hover labels.
    pub name: String,
    /// Raw logarithmic equation text, if the column was present and non-empty.
    pub log_equation: Option<String>,
    /// Raw linear equation text, if the column was present and non-empty.
    pub linear_equation: Option<String>,
    /// R² of the logarithmic fit, if supplied and numeric.
    pub log_r2: Option<f64>,
    /// R² of the linear fit, if supplied and numeric.
    pub linear_r2: Option<f64>,
    /// Lower end of the observed spend range.
    pub x_min: f64,
    /// Upper end of the observed spend range.
    pub x_max: f64,
}

impl SegmentRecord {
    /// Returns true when the observed range is usable: finite bounds,
    /// non-negative start, and a strictly positive width.
    #[must_use]
    pub fn is_valid_domain(&self) -> bool {
        self.x_min.is_finite() && self.x_max.is_finite() && self.x_min >= 0.0 && self.x_max > self.x_min
    }

    /// Raw equation text for the given model kind.
    #[must_use]
    pub fn equation(&self, kind: ModelKind) -> Option<&str> {
        match kind {
            ModelKind::Logarithmic => self.log_equation.as_deref(),
            ModelKind::Linear => self.linear_equation.as_deref(),
        }
    }

    /// Supplied R² for the given model kind.
    #[must_use]
    pub fn r2(&self, kind: ModelKind) -> Option<f64> {
        match kind {
            ModelKind::Logarithmic => self.log_r2,
            ModelKind::Linear => self.linear_r2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(x_min: f64, x_max: f64) -> SegmentRecord {
        SegmentRecord {
            name: "Seg1".to_string(),
            log_equation: Some("y = 77.1095 * ln(x) + -656.0219".to_string()),
            linear_equation: None,
            log_r2: Some(0.61),
            linear_r2: None,
            x_min,
            x_max,
        }
    }

    #[test]
    fn test_valid_domain() {
        assert!(record(150.0, 195_023.0).is_valid_domain());
    }

    #[test]
    fn test_invalid_domains() {
        assert!(!record(150.0, 150.0).is_valid_domain());
        assert!(!record(200.0, 100.0).is_valid_domain());
        assert!(!record(-1.0, 100.0).is_valid_domain());
        assert!(!record(f64::NAN, 100.0).is_valid_domain());
    }

    #[test]
    fn test_equation_access_by_kind() {
        let rec = record(150.0, 195_023.0);
        assert!(rec.equation(ModelKind::Logarithmic).is_some());
        assert!(rec.equation(ModelKind::Linear).is_none());
        assert_eq!(rec.r2(ModelKind::Logarithmic), Some(0.61));
    }
}
