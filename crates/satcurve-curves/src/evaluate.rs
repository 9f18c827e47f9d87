//! Curve evaluation over observed and extrapolated domains.
//!
//! Each contributing segment/model pair yields an observed series over its
//! own `[x_min, x_max]` plus, when extrapolation is enabled, up to two
//! dashed companion series reaching out to the global domain shared by all
//! segments on the chart.

use satcurve_core::types::{EvaluatedSeries, FittedCurve, Region, SegmentRecord};

use crate::error::{CurveError, CurveResult};
use crate::sample::{linspace, EXTRAPOLATION_SAMPLES, OBSERVED_SAMPLES};

/// The x-range shared by every segment on one chart.
///
/// `min` is the smallest observed `x_min`; `max` is the largest observed
/// `x_max` scaled by the extrapolation ratio.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlobalDomain {
    /// Smallest observed range start across segments.
    pub min: f64,
    /// Largest observed range end across segments, ratio-extended.
    pub max: f64,
}

/// Computes the global domain over all records with a usable range.
///
/// Returns `None` when no record has a usable range.
#[must_use]
pub fn global_domain(records: &[SegmentRecord], extrapolation_ratio: f64) -> Option<GlobalDomain> {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;

    for record in records.iter().filter(|r| r.is_valid_domain()) {
        min = min.min(record.x_min);
        max = max.max(record.x_max);
    }

    (min.is_finite() && max.is_finite()).then(|| GlobalDomain {
        min,
        max: max * extrapolation_ratio,
    })
}

/// Acquisition value at `x`, or `None` where the model is undefined.
fn acquisition_at(curve: &FittedCurve, x: f64) -> Option<f64> {
    if curve.kind.is_logarithmic() && x <= 0.0 {
        return None;
    }
    Some(curve.eval(x))
}

fn sample_series(
    curve: &FittedCurve,
    region: Region,
    start: f64,
    end: f64,
    count: usize,
) -> CurveResult<EvaluatedSeries> {
    let xs = linspace(start, end, count);
    let ys = xs.iter().map(|&x| acquisition_at(curve, x)).collect();
    Ok(EvaluatedSeries::new(region, xs, ys)?)
}

/// Evaluates the acquisition-volume series for one segment/model pair.
///
/// Produces the observed series first, then (when `extrapolate` is set)
/// the low and high extrapolated series that exist for this segment's
/// position inside the global domain.
///
/// # Errors
///
/// Returns [`CurveError::NonPositiveDomain`] when a logarithmic curve is
/// paired with a range starting at or below zero. The caller records this
/// and moves on to the next segment.
pub fn acquisition_series(
    curve: &FittedCurve,
    record: &SegmentRecord,
    global: GlobalDomain,
    extrapolate: bool,
) -> CurveResult<Vec<EvaluatedSeries>> {
    if curve.kind.is_logarithmic() && record.x_min <= 0.0 {
        return Err(CurveError::NonPositiveDomain {
            segment: record.name.clone(),
            x_min: record.x_min,
        });
    }

    let mut series = vec![sample_series(
        curve,
        Region::Observed,
        record.x_min,
        record.x_max,
        OBSERVED_SAMPLES,
    )?];

    if extrapolate {
        if global.min < record.x_min {
            series.push(sample_series(
                curve,
                Region::ExtrapolatedLow,
                global.min,
                record.x_min,
                EXTRAPOLATION_SAMPLES,
            )?);
        }
        if global.max > record.x_max {
            series.push(sample_series(
                curve,
                Region::ExtrapolatedHigh,
                record.x_max,
                global.max,
                EXTRAPOLATION_SAMPLES,
            )?);
        }
    }

    Ok(series)
}
