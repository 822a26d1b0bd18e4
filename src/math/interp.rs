//! Piecewise-linear interpolation over a table.
//!
//! Consecutive sample pairs are scanned in table order. A pair brackets `x` when
//! `x` lies between the two x-coordinates inclusive, in either direction, so
//! descending and non-monotonic tables work too.
//!
//! The first bracketing pair in scan order wins. With overlapping segments or
//! duplicate x-coordinates a later pair may also bracket `x`; it is never
//! considered. There is no extrapolation: a query outside every pair fails.

use crate::domain::{Field, Sample, Table};
use crate::error::EvalError;

/// Interpolate `field` at `x`.
///
/// Returns `EvalError::Range(x)` if no pair brackets `x`, which is always the
/// case for tables with fewer than two samples.
pub fn interpolate(table: &Table, x: f64, field: Field) -> Result<f64, EvalError> {
    let (a, b) = bracket(&table.samples, x).ok_or(EvalError::Range(x))?;
    Ok(lerp((a.x, a.value(field)), (b.x, b.value(field)), x))
}

/// First consecutive pair whose x-coordinates enclose `x`.
pub fn bracket(samples: &[Sample], x: f64) -> Option<(&Sample, &Sample)> {
    samples.windows(2).find_map(|w| {
        let (a, b) = (&w[0], &w[1]);
        let inside = (a.x <= x && x <= b.x) || (b.x <= x && x <= a.x);
        inside.then_some((a, b))
    })
}

// A zero-width pair (a.x == b.x == x) yields 0/0; the result is NaN.
fn lerp(a: (f64, f64), b: (f64, f64), x: f64) -> f64 {
    let (x0, y0) = a;
    let (x1, y1) = b;
    y0 + (y1 - y0) * (x - x0) / (x1 - x0)
}
