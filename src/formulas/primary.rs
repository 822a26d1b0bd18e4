//! Primary (tier 1) formula set.
//!
//! `glr` and `gold` refuse inputs where their quotient is undefined or unsafe;
//! `grs` combines three `srz` terms and fails as soon as any nested call fails.

use crate::data::TableStore;
use crate::error::EvalError;
use crate::formulas::srz;
use crate::lookup::FoldedLookup;

/// Smallest accepted `glr` denominator `x^2 + y^2 - 4`.
///
/// Guards against near-zero and negative denominators, not only exact zero.
pub const GLR_MIN_DENOMINATOR: f64 = 0.1;

const GRS_WEIGHTS: [f64; 3] = [0.1389, 1.8389, 0.83];

/// `Glr(x, y)`.
pub fn glr(x: f64, y: f64) -> Result<f64, EvalError> {
    if x.abs() >= 1.0 && y.abs() < 1.0 {
        return Ok(y);
    }
    let denom = x * x + y * y - 4.0;
    if denom < GLR_MIN_DENOMINATOR {
        return Err(EvalError::domain("glr", "near-singular denominator"));
    }
    Ok(y / denom)
}

/// `Gold(x, y)`: ratio of the larger argument to the smaller one.
pub fn gold(x: f64, y: f64) -> Result<f64, EvalError> {
    if x < y && x != 0.0 {
        Ok(y / x)
    } else if x > y && y != 0.0 {
        Ok(x / y)
    } else {
        Err(EvalError::domain("gold", "equal arguments or zero divisor"))
    }
}

/// `Grs(x, y)`.
pub fn grs<S: TableStore>(lookup: &FoldedLookup<S>, x: f64, y: f64) -> Result<f64, EvalError> {
    let [w1, w2, w3] = GRS_WEIGHTS;

    let s1 = srz(lookup, x + y, gold(x, y)?, glr(x, x * y)?)?;
    let s2 = srz(lookup, x - y, gold(y, x / 5.0)?, glr(5.0 * x, x * y)?)?;
    let s3 = srz(lookup, x - 0.9, glr(y, x / 5.0)?, gold(5.0 * y, y)?)?;

    Ok(w1 * s1 + w2 * s2 + w3 * s3)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TableName;
    use crate::formulas::fixtures::full_store;

    #[test]
    fn glr_short_circuits_when_x_large_and_y_small() {
        assert_eq!(glr(1.0, 0.5).unwrap(), 0.5);
        assert_eq!(glr(-3.0, -0.99).unwrap(), -0.99);
    }

    #[test]
    fn glr_divides_by_shifted_norm() {
        // 3^2 + 2^2 - 4 = 9
        let v = glr(3.0, 2.0).unwrap();
        assert!((v - 2.0 / 9.0).abs() < 1e-15);
    }

    #[test]
    fn glr_rejects_near_singular_denominators() {
        // |x| < 1 skips the short-circuit: 0 + 4 - 4 = 0.
        assert!(matches!(glr(0.0, 2.0), Err(EvalError::Domain { op: "glr", .. })));
        // Denominator ~0.05: positive but under the guard.
        assert!(glr(0.0, (4.05f64).sqrt()).is_err());
        // Negative denominator.
        assert!(glr(0.5, 0.5).is_err());
        // 2.1^2 - 4 = 0.41 clears the guard.
        let v = glr(0.0, 2.1).unwrap();
        assert!((v - 2.1 / (2.1 * 2.1 - 4.0)).abs() < 1e-12);
    }

    #[test]
    fn gold_equal_arguments_always_fail() {
        for &x in &[-1e9, -3.5, -1.0, -1e-12, 1e-12, 0.5, 1.0, 42.0, 1e300] {
            assert!(matches!(gold(x, x), Err(EvalError::Domain { op: "gold", .. })), "x = {x}");
        }
        assert!(gold(0.0, 0.0).is_err());
    }

    #[test]
    fn gold_ratio_and_zero_divisors() {
        assert_eq!(gold(2.0, 6.0).unwrap(), 3.0);
        assert_eq!(gold(6.0, 2.0).unwrap(), 3.0);
        assert_eq!(gold(-4.0, 2.0).unwrap(), -0.5);
        assert!(gold(0.0, 1.0).is_err());
        assert!(gold(1.0, 0.0).is_err());
    }

    #[test]
    fn grs_succeeds_on_well_conditioned_inputs() {
        let lookup = FoldedLookup::new(full_store());
        let v = grs(&lookup, 3.0, 2.0).unwrap();
        assert!(v.is_finite());
    }

    #[test]
    fn grs_fails_when_any_term_fails() {
        let lookup = FoldedLookup::new(full_store());
        // gold(1, 1) fails in the first term.
        assert!(matches!(grs(&lookup, 1.0, 1.0), Err(EvalError::Domain { .. })));
        // y = 0 makes gold(x, y) divide by zero.
        assert!(grs(&lookup, 3.0, 0.0).is_err());
    }

    #[test]
    fn grs_propagates_table_errors() {
        let lookup = FoldedLookup::new(full_store().without_table(TableName::Upper));
        // First srz term looks up T(5) in the upper table.
        assert!(matches!(
            grs(&lookup, 3.0, 2.0),
            Err(EvalError::DataSource { name: TableName::Upper, .. })
        ));
    }
}
