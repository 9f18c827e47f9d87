//! Fitted regression curves.

use serde::{Deserialize, Serialize};

use super::ModelKind;

/// Coefficients of a fitted regression curve.
///
/// A `FittedCurve` only comes into existence when an equation string
/// matches the expected textual pattern; a mismatch is an absent curve,
/// not an error. Evaluation is a pure closed-form computation:
///
/// ```text
/// Logarithmic: y = a * ln(x) + b     (requires x > 0)
/// Linear:      y = a * x + b
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FittedCurve {
    /// Model family.
    pub kind: ModelKind,
    /// Slope coefficient.
    pub a: f64,
    /// Intercept coefficient.
    pub b: f64,
}

impl FittedCurve {
    /// Creates a fitted curve from raw coefficients.
    #[must_use]
    pub fn new(kind: ModelKind, a: f64, b: f64) -> Self {
        Self { kind, a, b }
    }

    /// Evaluates the curve at `x`.
    ///
    /// For the logarithmic model the caller is responsible for keeping
    /// `x` positive; evaluation at `x <= 0` is not meaningful.
    #[must_use]
    pub fn eval(&self, x: f64) -> f64 {
        match self.kind {
            ModelKind::Logarithmic => self.a * x.ln() + self.b,
            ModelKind::Linear => self.a * x + self.b,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_logarithmic_eval() {
        // Round-trip scenario values from the acquisition data set.
        let curve = FittedCurve::new(ModelKind::Logarithmic, 77.1095, -656.0219);
        let y = curve.eval(150.0);
        assert_relative_eq!(y, 77.1095 * 150.0_f64.ln() - 656.0219, epsilon = 1e-12);
        // This fit is still below zero at the low end of its range; it
        // crosses into positive volume near x = exp(-b/a) ≈ 4955.
        assert!((y + 269.654).abs() < 1e-2);
        assert!(curve.eval(4960.0) > 0.0);
        assert!(curve.eval(4950.0) < 0.0);
    }

    #[test]
    fn test_linear_eval() {
        let curve = FittedCurve::new(ModelKind::Linear, 0.0013, 54.4297);
        assert_relative_eq!(curve.eval(100_000.0), 184.4297, epsilon = 1e-9);
    }
}
