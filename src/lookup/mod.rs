//! Folded table lookup: the public `T(x)` and `U(x)` functions.
//!
//! Coordinates outside `[-1, 1]` are folded onto their reciprocal and looked up in
//! a dedicated table:
//!
//! | input       | table     | query at |
//! | ----------- | --------- | -------- |
//! | `x == 1`    | `central` | `x`      |
//! | `x > 1`     | `upper`   | `1/x`    |
//! | `x < -1`    | `lower`   | `1/x`    |
//! | otherwise   | `central` | `x`      |
//!
//! Each call loads the selected table from the store and interpolates it.
//! Store and interpolation errors are returned unchanged.

use crate::data::TableStore;
use crate::domain::{Field, TableName};
use crate::error::EvalError;
use crate::math::interpolate;

/// Table and coordinate a lookup at `x` resolves to.
pub fn fold(x: f64) -> (TableName, f64) {
    if x == 1.0 {
        (TableName::Central, x)
    } else if x > 1.0 {
        (TableName::Upper, 1.0 / x)
    } else if x < -1.0 {
        (TableName::Lower, 1.0 / x)
    } else {
        (TableName::Central, x)
    }
}

#[derive(Debug, Clone)]
pub struct FoldedLookup<S> {
    store: S,
}

impl<S: TableStore> FoldedLookup<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// `T(x)`.
    pub fn t(&self, x: f64) -> Result<f64, EvalError> {
        self.value(x, Field::T)
    }

    /// `U(x)`.
    pub fn u(&self, x: f64) -> Result<f64, EvalError> {
        self.value(x, Field::U)
    }

    pub fn value(&self, x: f64, field: Field) -> Result<f64, EvalError> {
        let (name, q) = fold(x);
        let table = self.store.load(name)?;
        interpolate(&table, q, field)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::MemoryStore;

    fn store() -> MemoryStore {
        MemoryStore::new()
            .with_table(TableName::Central, &[(-1.0, 2.0, 3.0), (0.0, 4.0, 5.0), (1.0, 6.0, 7.0)])
            .with_table(TableName::Upper, &[(0.0, 10.0, 20.0), (1.0, 11.0, 21.0)])
            .with_table(TableName::Lower, &[(-1.0, 30.0, 40.0), (0.0, 31.0, 41.0)])
    }

    #[test]
    fn fold_rule_boundaries() {
        assert_eq!(fold(1.0), (TableName::Central, 1.0));
        assert_eq!(fold(-1.0), (TableName::Central, -1.0));
        assert_eq!(fold(0.0), (TableName::Central, 0.0));
        assert_eq!(fold(4.0), (TableName::Upper, 0.25));
        assert_eq!(fold(-4.0), (TableName::Lower, -0.25));
    }

    #[test]
    fn central_table_end_to_end() {
        let lookup = FoldedLookup::new(store());
        assert_eq!(lookup.t(0.5).unwrap(), 5.0);
        assert_eq!(lookup.u(-0.5).unwrap(), 4.0);
        assert_eq!(lookup.t(1.0).unwrap(), 6.0);
        assert_eq!(lookup.u(-1.0).unwrap(), 3.0);
    }

    #[test]
    fn upper_fold_matches_direct_interpolation() {
        let s = store();
        let lookup = FoldedLookup::new(&s);
        let upper = s.load(TableName::Upper).unwrap();
        for &x in &[1.0000001, 1.5, 2.0, 8.0, 1e6] {
            let direct = interpolate(&upper, 1.0 / x, Field::T).unwrap();
            assert_eq!(lookup.t(x).unwrap(), direct, "x = {x}");
        }
    }

    #[test]
    fn lower_fold_uses_reciprocal() {
        let lookup = FoldedLookup::new(store());
        // -2 -> -0.5, halfway between rows -1 and 0 of the lower table.
        assert_eq!(lookup.t(-2.0).unwrap(), 30.5);
        assert_eq!(lookup.u(-2.0).unwrap(), 40.5);
    }

    #[test]
    fn out_of_range_is_range_error() {
        let narrow = MemoryStore::new().with_table(TableName::Central, &[(-0.5, 0.0, 0.0), (0.5, 1.0, 1.0)]);
        let lookup = FoldedLookup::new(narrow);
        assert_eq!(lookup.t(0.75), Err(EvalError::Range(0.75)));
        assert_eq!(lookup.u(-0.9), Err(EvalError::Range(-0.9)));
    }

    #[test]
    fn missing_table_propagates_data_source_error() {
        let lookup = FoldedLookup::new(store().without_table(TableName::Upper));
        assert!(matches!(
            lookup.t(3.0),
            Err(EvalError::DataSource { name: TableName::Upper, .. })
        ));
        // Other tables still work.
        assert!(lookup.t(0.0).is_ok());
    }
}
