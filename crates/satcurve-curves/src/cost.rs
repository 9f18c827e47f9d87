//! Cost-per-acquisition derivation.
//!
//! The cost metric divides spend by the acquisition volume predicted at
//! that spend:
//!
//! ## Formula
//!
//! ```text
//! cpa(x) = x / (a * ln(x) + b)
//! ```
//!
//! For a saturating (logarithmic) fit with `a > 0` the ratio has a single
//! interior minimum where the derivative vanishes:
//!
//! ```text
//! x* = exp(1 - b/a)
//! ```
//!
//! The chart only shows the monotonically increasing branch past `x*`, so
//! the observed cost series starts at `max(x*, x_min)`. For the linear fit
//! the ratio `x / (a*x + b)` approaches `1/a` monotonically and is shown
//! over the full observed range as a reference view.

use satcurve_core::types::{EvaluatedSeries, FittedCurve, Region, SegmentRecord};

use crate::error::{CurveError, CurveResult};
use crate::sample::{linspace, EXTRAPOLATION_SAMPLES, OBSERVED_SAMPLES};

/// The spend at which the cost ratio of a saturating fit is minimal.
///
/// Defined only for logarithmic curves with a positive slope whose
/// acquisition volume is still positive at the minimum; in every other
/// case there is no usable minimum and the caller falls back to the
/// observed range start.
#[must_use]
pub fn cost_minimum(curve: &FittedCurve) -> Option<f64> {
    if !curve.kind.is_logarithmic() || curve.a <= 0.0 {
        return None;
    }
    let x_star = (1.0 - curve.b / curve.a).exp();
    (curve.eval(x_star) > 0.0).then_some(x_star)
}

/// Display start of the observed cost series: `max(x*, x_min)`, or plain
/// `x_min` when the minimum is undefined.
#[must_use]
pub fn cost_start(curve: &FittedCurve, x_min: f64) -> f64 {
    match cost_minimum(curve) {
        Some(x_star) => x_star.max(x_min),
        None => x_min,
    }
}

/// Cost value at `x`, or `None` where the denominator is not positive.
fn cost_at(curve: &FittedCurve, x: f64) -> Option<f64> {
    if curve.kind.is_logarithmic() && x <= 0.0 {
        return None;
    }
    let volume = curve.eval(x);
    (volume > 0.0).then(|| x / volume)
}

fn sample_series(
    curve: &FittedCurve,
    region: Region,
    start: f64,
    end: f64,
    count: usize,
) -> CurveResult<EvaluatedSeries> {
    let xs = linspace(start, end, count);
    let ys = xs.iter().map(|&x| cost_at(curve, x)).collect();
    Ok(EvaluatedSeries::new(region, xs, ys)?)
}

/// Evaluates the cost-per-acquisition series for one segment/model pair.
///
/// Returns `Ok(None)` when the display range collapses (start at or past
/// `x_max`) — the segment simply contributes nothing to the cost chart.
/// Extrapolation is one-sided: only the high sub-range is meaningful on
/// the increasing branch.
///
/// # Errors
///
/// Returns [`CurveError::NonPositiveDomain`] for a logarithmic curve over
/// a range starting at or below zero.
pub fn cost_series(
    curve: &FittedCurve,
    record: &SegmentRecord,
    global_max: f64,
    extrapolate: bool,
) -> CurveResult<Option<Vec<EvaluatedSeries>>> {
    if curve.kind.is_logarithmic() && record.x_min <= 0.0 {
        return Err(CurveError::NonPositiveDomain {
            segment: record.name.clone(),
            x_min: record.x_min,
        });
    }

    let start = cost_start(curve, record.x_min);
    if start >= record.x_max {
        return Ok(None);
    }

    let mut series = vec![sample_series(
        curve,
        Region::Observed,
        start,
        record.x_max,
        OBSERVED_SAMPLES,
    )?];

    if extrapolate && global_max > record.x_max {
        series.push(sample_series(
            curve,
            Region::ExtrapolatedHigh,
            record.x_max,
            global_max,
            EXTRAPOLATION_SAMPLES,
        )?);
    }

    Ok(Some(series))
}
