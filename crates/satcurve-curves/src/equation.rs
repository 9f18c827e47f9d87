//! Regression equation parsing.
//!
//! Extracts coefficients from the two fixed textual equation shapes the
//! upstream spreadsheet emits:
//!
//! ```text
//! Logarithmic: y = <a> * ln(x) + <b>
//! Linear:      y = <a> * x + <b>
//! ```
//!
//! Numeric tokens are restricted to sign, digits, and decimal point, so
//! words like `Infinity` never match. A string that does not match the
//! expected shape yields `None` — a per-segment skip signal, never an
//! error.

use once_cell::sync::Lazy;
use regex::Regex;

use satcurve_core::types::{FittedCurve, ModelKind};

static LOG_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"y\s*=\s*([-\d.]+)\s*\*\s*ln\(x\)\s*\+\s*([-\d.]+)").expect("valid log pattern")
});

static LINEAR_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"y\s*=\s*([-\d.]+)\s*\*\s*x\s*\+\s*([-\d.]+)").expect("valid linear pattern")
});

/// Parses an equation string into a fitted curve of the given kind.
///
/// Returns `None` when the string does not match the expected pattern, or
/// when a token that matched the numeric shape still fails to parse as a
/// finite number (e.g. `1.2.3` or a bare `-`).
#[must_use]
pub fn parse_equation(raw: &str, kind: ModelKind) -> Option<FittedCurve> {
    let pattern = match kind {
        ModelKind::Logarithmic => &LOG_PATTERN,
        ModelKind::Linear => &LINEAR_PATTERN,
    };

    let caps = pattern.captures(raw)?;
    let a = caps[1].parse::<f64>().ok().filter(|v| v.is_finite())?;
    let b = caps[2].parse::<f64>().ok().filter(|v| v.is_finite())?;

    Some(FittedCurve::new(kind, a, b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_parse_log_equation() {
        let curve =
            parse_equation("y = 77.1095 * ln(x) + -656.0219", ModelKind::Logarithmic).unwrap();
        assert_eq!(curve.kind, ModelKind::Logarithmic);
        assert_relative_eq!(curve.a, 77.1095);
        assert_relative_eq!(curve.b, -656.0219);
    }

    #[test]
    fn test_parse_linear_equation() {
        let curve = parse_equation("y = 0.0013 * x + 54.4297", ModelKind::Linear).unwrap();
        assert_eq!(curve.kind, ModelKind::Linear);
        assert_relative_eq!(curve.a, 0.0013);
        assert_relative_eq!(curve.b, 54.4297);
    }

    #[test]
    fn test_whitespace_is_ignored() {
        let curve = parse_equation("y=365.3877*ln(x)+-3853.9650", ModelKind::Logarithmic).unwrap();
        assert_relative_eq!(curve.a, 365.3877);

        let curve =
            parse_equation("y  =  365.3877  *  ln(x)  +  -3853.9650", ModelKind::Logarithmic)
                .unwrap();
        assert_relative_eq!(curve.b, -3853.965);
    }

    #[test]
    fn test_kinds_do_not_cross_match() {
        // A log equation is not a linear one and vice versa.
        assert!(parse_equation("y = 77.1 * ln(x) + -656.0", ModelKind::Linear).is_none());
        assert!(parse_equation("y = 0.0013 * x + 54.4297", ModelKind::Logarithmic).is_none());
    }

    #[test]
    fn test_malformed_strings_yield_none() {
        // Wrong operator
        assert!(parse_equation("y = 77.1 / ln(x) + 2", ModelKind::Logarithmic).is_none());
        // Missing ln(x)
        assert!(parse_equation("y = 77.1 * log(x) + 2", ModelKind::Logarithmic).is_none());
        // Not an equation at all
        assert!(parse_equation("no fit available", ModelKind::Logarithmic).is_none());
        assert!(parse_equation("", ModelKind::Linear).is_none());
    }

    #[test]
    fn test_non_numeric_tokens_yield_none() {
        // `Infinity` is outside the sign/digits/point token shape.
        assert!(parse_equation("y = Infinity * ln(x) + 2", ModelKind::Logarithmic).is_none());
        assert!(parse_equation("y = NaN * x + 2", ModelKind::Linear).is_none());
        // Matches the token shape but is not a number.
        assert!(parse_equation("y = 1.2.3 * ln(x) + 2", ModelKind::Logarithmic).is_none());
        assert!(parse_equation("y = - * x + 2", ModelKind::Linear).is_none());
    }

    #[test]
    fn test_negative_slope() {
        let curve = parse_equation("y = -12.5 * ln(x) + 300", ModelKind::Logarithmic).unwrap();
        assert_relative_eq!(curve.a, -12.5);
        assert_relative_eq!(curve.b, 300.0);
    }

    #[test]
    fn test_recovery_to_float_precision() {
        for (a, b) in [(1.5, 2.5), (-0.0001, 12345.6789), (77.1095, -656.0219)] {
            let raw = format!("y = {a} * ln(x) + {b}");
            let curve = parse_equation(&raw, ModelKind::Logarithmic).unwrap();
            assert_relative_eq!(curve.a, a);
            assert_relative_eq!(curve.b, b);
        }
    }
}
