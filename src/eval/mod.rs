//! `fun(x, y, z)` with a three-tier fallback.
//!
//! Tiers are tried in order; a tier either produces a value or an `EvalError`.
//! Any error moves evaluation to the next tier, and the error itself is only logged.
//!
//! 1. primary: `x*Grs(y,z) + y*Grs(x,z) + 0.33*x*y*Grs(x,z)`
//! 2. secondary: `x*Grs1(x,y) + y*Grs1(y,z) + z*Grs1(z,x)`
//! 3. closed form: `1.3498x + 2.2362y - 2.348xyz` (cannot fail)
//!
//! Reaching tier 3 is reported through `Evaluation::tier` and a `warn!` log line.

use crate::data::TableStore;
use crate::domain::{Evaluation, Tier};
use crate::error::EvalError;
use crate::formulas::{grs, grs1};
use crate::lookup::FoldedLookup;

/// Closed-form terminal fallback.
pub fn closed_form(x: f64, y: f64, z: f64) -> f64 {
    1.3498 * x + 2.2362 * y - 2.348 * x * y * z
}

#[derive(Debug, Clone)]
pub struct Evaluator<S> {
    lookup: FoldedLookup<S>,
}

impl<S: TableStore> Evaluator<S> {
    pub fn new(store: S) -> Self {
        Self {
            lookup: FoldedLookup::new(store),
        }
    }

    pub fn lookup(&self) -> &FoldedLookup<S> {
        &self.lookup
    }

    /// `fun(x, y, z)`; never fails.
    pub fn fun(&self, x: f64, y: f64, z: f64) -> f64 {
        self.evaluate(x, y, z).value
    }

    /// `fun(x, y, z)` together with the tier that produced it.
    pub fn evaluate(&self, x: f64, y: f64, z: f64) -> Evaluation {
        let (value, tier) = match self.primary(x, y, z) {
            Ok(v) => (v, Tier::Primary),
            Err(err) => {
                log::debug!("primary tier failed for ({x}, {y}, {z}): {err}");
                match self.secondary(x, y, z) {
                    Ok(v) => (v, Tier::Secondary),
                    Err(err) => {
                        log::debug!("secondary tier failed for ({x}, {y}, {z}): {err}");
                        log::warn!("falling back to closed-form tier for ({x}, {y}, {z})");
                        (closed_form(x, y, z), Tier::ClosedForm)
                    }
                }
            }
        };

        Evaluation { x, y, z, value, tier }
    }

    pub fn primary(&self, x: f64, y: f64, z: f64) -> Result<f64, EvalError> {
        let l = &self.lookup;
        let g_yz = grs(l, y, z)?;
        let g_xz = grs(l, x, z)?;
        Ok(x * g_yz + y * g_xz + 0.33 * x * y * g_xz)
    }

    pub fn secondary(&self, x: f64, y: f64, z: f64) -> Result<f64, EvalError> {
        let l = &self.lookup;
        Ok(x * grs1(l, x, y)? + y * grs1(l, y, z)? + z * grs1(l, z, x)?)
    }
}
