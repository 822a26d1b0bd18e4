//! Secondary (tier 2) formula set.
//!
//! `glr1` and `gold1` are total. `grs1` can still fail, but only through the
//! table lookups inside `srz`.

use crate::data::TableStore;
use crate::error::EvalError;
use crate::formulas::srz;
use crate::lookup::FoldedLookup;

const GRS1_WEIGHTS: [f64; 3] = [0.14, 1.83, 0.83];

/// `Gold1(x, y)`.
pub fn gold1(x: f64, y: f64) -> f64 {
    if x <= y && x.abs() > 0.1 {
        y / x
    } else if x < y && x > 0.1 {
        // Unreachable: covered by the first branch.
        0.15
    } else if y == 0.0 {
        x
    } else if x < 1.0 {
        x
    } else {
        y
    }
}

/// `Glr1(x, y)`.
pub fn glr1(x: f64, y: f64) -> f64 {
    if x.abs() < 1.0 { x } else { y }
}

/// `Grs1(x, y)`.
pub fn grs1<S: TableStore>(lookup: &FoldedLookup<S>, x: f64, y: f64) -> Result<f64, EvalError> {
    let [w1, w2, w3] = GRS1_WEIGHTS;

    let s1 = srz(lookup, x + y, gold1(x, y), glr1(x, x * y))?;
    let s2 = srz(lookup, x - y, gold1(y, x / 5.0), glr1(4.0 * x, x * y))?;
    let s3 = srz(lookup, x, glr1(y, x / 4.0), gold1(4.0 * y, y))?;

    Ok(w1 * s1 + w2 * s2 + w3 * s3)
}

#[cfg(test)]
mod tests {
    use rand::prelude::*;
    use rand::rngs::StdRng;

    use super::*;
    use crate::domain::TableName;
    use crate::formulas::fixtures::full_store;

    #[test]
    fn gold1_branches() {
        assert_eq!(gold1(2.0, 6.0), 3.0);
        assert_eq!(gold1(-0.5, -0.5), 1.0);
        // |x| <= 0.1, y == 0
        assert_eq!(gold1(0.05, 0.0), 0.05);
        // x > y, y != 0, x < 1
        assert_eq!(gold1(0.5, 0.2), 0.5);
        // x > y, y != 0, x >= 1
        assert_eq!(gold1(3.0, 2.0), 2.0);
        // x == 0 never divides.
        assert_eq!(gold1(0.0, 5.0), 0.0);
        assert_eq!(gold1(0.0, 0.0), 0.0);
    }

    #[test]
    fn gold1_is_total_on_random_pairs() {
        let mut rng = StdRng::seed_from_u64(7);
        for i in 0..10_000 {
            let x = if i % 17 == 0 { 0.0 } else { rng.gen_range(-1e6..=1e6) };
            let y = if i % 13 == 0 { 0.0 } else { rng.gen_range(-1e6..=1e6) };
            let v = gold1(x, y);
            assert!(v.is_finite(), "gold1({x}, {y}) = {v}");
        }
        for &(x, y) in &[(0.1, 0.1), (-0.1, 0.0), (0.1, 0.2), (1.0, 0.0), (-1e-300, 1e-300)] {
            assert!(gold1(x, y).is_finite(), "gold1({x}, {y})");
        }
    }

    #[test]
    fn glr1_selects_by_magnitude() {
        assert_eq!(glr1(0.5, 9.0), 0.5);
        assert_eq!(glr1(-0.999, 9.0), -0.999);
        assert_eq!(glr1(1.0, 9.0), 9.0);
        assert_eq!(glr1(-4.0, 9.0), 9.0);
    }

    #[test]
    fn grs1_succeeds_where_grs_cannot() {
        let lookup = FoldedLookup::new(full_store());
        assert!(crate::formulas::grs(&lookup, 1.0, 1.0).is_err());
        let v = grs1(&lookup, 1.0, 1.0).unwrap();
        assert!(v.is_finite());
    }

    #[test]
    fn grs1_matches_hand_computed_value() {
        let lookup = FoldedLookup::new(full_store());
        // x = y = 0.5:
        //   s1 = srz(1.0, gold1(.5,.5)=1, glr1(.5,.25)=.5)    -> T(1)+U(1)-U(.5)   = 1 + 2 - 1    = 2
        //   s2 = srz(0.0, gold1(.5,.1)=.5, glr1(2,.25)=.25)  -> T(.5)+U(.5)-U(.25) = .5 + 1 - .5 = 1
        //   s3 = srz(0.5, glr1(.5,.125)=.5, gold1(2,.5)=.5)  -> T(.5)+U(.5)-U(.5)  = .5
        let expected = 0.14 * 2.0 + 1.83 * 1.0 + 0.83 * 0.5;
        let v = grs1(&lookup, 0.5, 0.5).unwrap();
        assert!((v - expected).abs() < 1e-12, "got {v}, expected {expected}");
    }

    #[test]
    fn grs1_fails_on_missing_table() {
        let lookup = FoldedLookup::new(full_store().without_table(TableName::Central));
        assert!(matches!(
            grs1(&lookup, 0.5, 0.5),
            Err(EvalError::DataSource { name: TableName::Central, .. })
        ));
    }
}
