//! Domain sampling.

/// Samples per observed range.
pub const OBSERVED_SAMPLES: usize = 300;

/// Samples per extrapolated sub-range.
pub const EXTRAPOLATION_SAMPLES: usize = 100;

/// Evenly spaced samples over `[start, end]`, endpoints included.
///
/// The final sample is pinned to `end` so accumulated rounding never pushes
/// it past the domain bound.
#[must_use]
pub fn linspace(start: f64, end: f64, count: usize) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (count - 1) as f64;
            let mut xs: Vec<f64> = (0..count).map(|i| start + step * i as f64).collect();
            xs[count - 1] = end;
            xs
        }
    }
}
