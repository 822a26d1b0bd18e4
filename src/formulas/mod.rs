//! Algebraic formula sets built on `T(x)` / `U(x)`.
//!
//! - `primary`: strict set (`glr`, `gold`, `grs`); fails on near-singular inputs
//! - `secondary`: permissive set (`glr1`, `gold1`, `grs1`); only table lookups can fail
//!
//! Both share the `srz` combination below.

use crate::data::TableStore;
use crate::error::EvalError;
use crate::lookup::FoldedLookup;

pub mod primary;
pub mod secondary;

pub use primary::*;
pub use secondary::*;

/// `Srz(x, y, z)`:
///
/// - `T(x) + U(z) - T(y)` when `x > y`
/// - `T(y) + U(y) - U(z)` otherwise
pub fn srz<S: TableStore>(lookup: &FoldedLookup<S>, x: f64, y: f64, z: f64) -> Result<f64, EvalError> {
    if x > y {
        Ok(lookup.t(x)? + lookup.u(z)? - lookup.t(y)?)
    } else {
        Ok(lookup.t(y)? + lookup.u(y)? - lookup.u(z)?)
    }
}
