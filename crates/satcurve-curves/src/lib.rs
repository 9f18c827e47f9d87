//! # Satcurve Curves
//!
//! Equation parsing and curve evaluation for the Satcurve chart generator.
//!
//! This crate provides:
//!
//! - **Equation Parser**: coefficient extraction from the two fixed
//!   textual equation shapes (`y = a * ln(x) + b`, `y = a * x + b`)
//! - **Curve Evaluator**: observed and extrapolated sampling of fitted
//!   curves over a shared global domain
//! - **Cost Derivation**: the spend/volume ratio with its closed-form
//!   minimum and monotonicity-restricted display range
//!
//! ## Quick Start
//!
//! ```rust
//! use satcurve_core::types::ModelKind;
//! use satcurve_curves::equation::parse_equation;
//!
//! let curve = parse_equation("y = 77.1095 * ln(x) + -656.0219", ModelKind::Logarithmic)
//!     .expect("well-formed equation");
//! assert!((curve.eval(150.0) - (77.1095 * 150.0_f64.ln() - 656.0219)).abs() < 1e-9);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod cost;
pub mod equation;
pub mod error;
pub mod evaluate;
pub mod sample;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::cost::{cost_minimum, cost_series, cost_start};
    pub use crate::equation::parse_equation;
    pub use crate::error::{CurveError, CurveResult};
    pub use crate::evaluate::{acquisition_series, global_domain, GlobalDomain};
    pub use crate::sample::{linspace, EXTRAPOLATION_SAMPLES, OBSERVED_SAMPLES};
}

pub use error::{CurveError, CurveResult};
pub use evaluate::GlobalDomain;
