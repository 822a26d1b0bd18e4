//! Shared domain types.
//!
//! These types are intentionally kept lightweight and serializable so they can be:
//!
//! - passed between the table, lookup, and formula layers
//! - exported to JSON/CSV
//! - printed by the report layer without extra conversion

use std::path::PathBuf;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// One tabulated row: coordinate `x` with the two tabulated values `T` and `U`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    pub x: f64,
    pub t: f64,
    pub u: f64,
}

impl Sample {
    pub fn new(x: f64, t: f64, u: f64) -> Self {
        Self { x, t, u }
    }

    pub fn value(&self, field: Field) -> f64 {
        match field {
            Field::T => self.t,
            Field::U => self.u,
        }
    }
}

/// Which tabulated value a lookup returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    T,
    U,
}

impl Field {
    pub fn display_name(self) -> &'static str {
        match self {
            Field::T => "T",
            Field::U => "U",
        }
    }
}

/// Logical name of one of the three tables.
///
/// - `Central`: `-1 <= x <= 1`, queried directly
/// - `Upper`: `x > 1`, queried at `1/x`
/// - `Lower`: `x < -1`, queried at `1/x`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TableName {
    Central,
    Upper,
    Lower,
}

impl TableName {
    pub const ALL: [TableName; 3] = [TableName::Central, TableName::Upper, TableName::Lower];

    pub fn as_str(self) -> &'static str {
        match self {
            TableName::Central => "central",
            TableName::Upper => "upper",
            TableName::Lower => "lower",
        }
    }

    fn index(self) -> usize {
        match self {
            TableName::Central => 0,
            TableName::Upper => 1,
            TableName::Lower => 2,
        }
    }

    /// Slot of this name in a per-table array (`[T; 3]` indexed like `ALL`).
    pub fn slot<T>(self, slots: &[T; 3]) -> &T {
        &slots[self.index()]
    }
}

impl std::fmt::Display for TableName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An ordered, read-only sequence of samples loaded from one source.
///
/// Monotonicity is not checked; the interpolator copes with any order.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    pub name: TableName,
    pub samples: Vec<Sample>,
}

impl Table {
    pub fn new(name: TableName, samples: Vec<Sample>) -> Self {
        Self { name, samples }
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Smallest and largest x-coordinate, if the table has any rows.
    pub fn x_range(&self) -> Option<(f64, f64)> {
        let mut min_x = f64::INFINITY;
        let mut max_x = f64::NEG_INFINITY;
        for s in &self.samples {
            min_x = min_x.min(s.x);
            max_x = max_x.max(s.x);
        }
        if min_x.is_finite() && max_x.is_finite() {
            Some((min_x, max_x))
        } else {
            None
        }
    }
}

/// Physical file name for each logical table, relative to the data directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableLayout {
    pub central: String,
    pub upper: String,
    pub lower: String,
}

impl Default for TableLayout {
    fn default() -> Self {
        Self {
            central: "dat_X_1_1.dat".to_string(),
            upper: "dat_X1_00.dat".to_string(),
            lower: "dat_X00_1.dat".to_string(),
        }
    }
}

impl TableLayout {
    pub fn file_name(&self, name: TableName) -> &str {
        match name {
            TableName::Central => &self.central,
            TableName::Upper => &self.upper,
            TableName::Lower => &self.lower,
        }
    }
}

/// Evaluation strategy used to produce a `fun` result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Tier {
    Primary,
    Secondary,
    ClosedForm,
}

impl Tier {
    pub const ALL: [Tier; 3] = [Tier::Primary, Tier::Secondary, Tier::ClosedForm];

    pub fn display_name(self) -> &'static str {
        match self {
            Tier::Primary => "primary",
            Tier::Secondary => "secondary",
            Tier::ClosedForm => "closed-form",
        }
    }

    /// Single-character marker used in plots.
    pub fn marker(self) -> char {
        match self {
            Tier::Primary => 'P',
            Tier::Secondary => 'S',
            Tier::ClosedForm => 'C',
        }
    }
}

/// Result of one `fun(x, y, z)` call.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub value: f64,
    pub tier: Tier,
}

impl Evaluation {
    pub fn used_closed_form(&self) -> bool {
        self.tier == Tier::ClosedForm
    }
}

/// Where tables come from and how they are held.
#[derive(Debug, Clone)]
pub struct EvalConfig {
    pub data_dir: PathBuf,
    pub layout: TableLayout,
    /// Keep each table after its first successful load.
    pub cache_tables: bool,
}

/// Which argument of `fun` a sweep varies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SweepAxis {
    X,
    Y,
    Z,
}

impl SweepAxis {
    pub fn display_name(self) -> &'static str {
        match self {
            SweepAxis::X => "x",
            SweepAxis::Y => "y",
            SweepAxis::Z => "z",
        }
    }

    /// Coordinate of `eval` along this axis.
    pub fn pick(self, eval: &Evaluation) -> f64 {
        match self {
            SweepAxis::X => eval.x,
            SweepAxis::Y => eval.y,
            SweepAxis::Z => eval.z,
        }
    }
}

/// Parameters of a one-axis sweep.
#[derive(Debug, Clone)]
pub struct SweepConfig {
    pub axis: SweepAxis,
    pub from: f64,
    pub to: f64,
    pub steps: usize,
    /// Values of `(x, y, z)`; the swept coordinate is overwritten per step.
    pub fixed: (f64, f64, f64),
}

/// Parameters of a random probe.
#[derive(Debug, Clone)]
pub struct ProbeConfig {
    pub count: usize,
    pub seed: u64,
    pub scale: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_x_range_ignores_order() {
        let table = Table::new(
            TableName::Central,
            vec![Sample::new(0.5, 0.0, 0.0), Sample::new(-1.0, 0.0, 0.0), Sample::new(0.25, 0.0, 0.0)],
        );
        assert_eq!(table.x_range(), Some((-1.0, 0.5)));
        assert_eq!(Table::new(TableName::Upper, vec![]).x_range(), None);
    }

    #[test]
    fn layout_defaults_map_each_table() {
        let layout = TableLayout::default();
        assert_eq!(layout.file_name(TableName::Central), "dat_X_1_1.dat");
        assert_eq!(layout.file_name(TableName::Upper), "dat_X1_00.dat");
        assert_eq!(layout.file_name(TableName::Lower), "dat_X00_1.dat");
    }

    #[test]
    fn tier_serializes_kebab_case() {
        let json = serde_json::to_string(&Tier::ClosedForm).unwrap();
        assert_eq!(json, "\"closed-form\"");
    }
}
