//! Table providers.
//!
//! Every lookup asks a `TableStore` for a named table. Implementations:
//!
//! - `DirStore`: one whitespace-delimited text file per table in a data directory
//! - `MemoryStore`: tables held in memory (tests, embedding)
//! - `CachedStore`: wraps another store and keeps each table after its first load
//!
//! Stores do not validate row count or monotonicity; the interpolator reports a
//! range error for tables that cannot bracket a query.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::OnceLock;

use crate::domain::{EvalConfig, Sample, Table, TableLayout, TableName};
use crate::error::EvalError;

/// Source of named tables.
pub trait TableStore {
    fn load(&self, name: TableName) -> Result<Table, EvalError>;
}

impl<S: TableStore + ?Sized> TableStore for &S {
    fn load(&self, name: TableName) -> Result<Table, EvalError> {
        (**self).load(name)
    }
}

impl<S: TableStore + ?Sized> TableStore for Box<S> {
    fn load(&self, name: TableName) -> Result<Table, EvalError> {
        (**self).load(name)
    }
}

/// Parse whitespace-delimited `(x, T, U)` triples.
///
/// Values are read like stream extraction: each read takes the longest decimal
/// number at the current position, so `3abc` yields `3` and then stops at `abc`.
/// Reading stops at the first position that does not start a finite decimal
/// number (`nan`, `inf`, overflowing exponents included); an incomplete trailing
/// triple is dropped. Encounter order is preserved.
pub fn parse_table(name: TableName, text: &str) -> Table {
    let mut numbers = Vec::new();
    let mut rest = text.trim_start();
    while !rest.is_empty() {
        let len = decimal_prefix_len(rest);
        match rest[..len].parse::<f64>() {
            Ok(v) if v.is_finite() => {
                numbers.push(v);
                rest = rest[len..].trim_start();
            }
            _ => {
                let token = rest.split_whitespace().next().unwrap_or(rest);
                log::warn!("table '{name}': stopped reading at non-numeric token {token:?}");
                break;
            }
        }
    }

    if numbers.len() % 3 != 0 {
        log::warn!(
            "table '{name}': dropping incomplete trailing row ({} values)",
            numbers.len() % 3
        );
    }

    let samples = numbers
        .chunks_exact(3)
        .map(|c| Sample::new(c[0], c[1], c[2]))
        .collect();
    Table::new(name, samples)
}

/// Byte length of the decimal number (`[+-]digits[.digits][(e|E)[+-]digits]`)
/// at the start of `s`; 0 if there is none.
fn decimal_prefix_len(s: &str) -> usize {
    let b = s.as_bytes();
    let digits_from = |mut i: usize| {
        while i < b.len() && b[i].is_ascii_digit() {
            i += 1;
        }
        i
    };

    let mut i = usize::from(matches!(b.first(), Some(b'+' | b'-')));
    let int_end = digits_from(i);
    let mut mantissa_digits = int_end - i;
    i = int_end;

    if b.get(i) == Some(&b'.') {
        let frac_end = digits_from(i + 1);
        mantissa_digits += frac_end - (i + 1);
        if mantissa_digits > 0 {
            i = frac_end;
        }
    }
    if mantissa_digits == 0 {
        return 0;
    }

    if matches!(b.get(i), Some(b'e' | b'E')) {
        let sign = usize::from(matches!(b.get(i + 1), Some(b'+' | b'-')));
        let exp_start = i + 1 + sign;
        let exp_end = digits_from(exp_start);
        if exp_end > exp_start {
            i = exp_end;
        }
    }
    i
}

/// Tables stored as text files under one directory.
#[derive(Debug, Clone)]
pub struct DirStore {
    dir: PathBuf,
    layout: TableLayout,
}

impl DirStore {
    pub fn new(dir: impl Into<PathBuf>, layout: TableLayout) -> Self {
        Self {
            dir: dir.into(),
            layout,
        }
    }

    pub fn from_config(config: &EvalConfig) -> Self {
        Self::new(config.data_dir.clone(), config.layout.clone())
    }

    pub fn path_for(&self, name: TableName) -> PathBuf {
        self.dir.join(self.layout.file_name(name))
    }
}

impl TableStore for DirStore {
    fn load(&self, name: TableName) -> Result<Table, EvalError> {
        let path = self.path_for(name);
        let bytes =
            std::fs::read(&path).map_err(|e| EvalError::data_source(name, &path, e.to_string()))?;
        // Invalid UTF-8 becomes U+FFFD, which ends parsing like any other non-numeric token.
        let table = parse_table(name, &String::from_utf8_lossy(&bytes));
        log::debug!("loaded table '{name}' from {} ({} rows)", path.display(), table.len());
        Ok(table)
    }
}

/// Tables held in memory. Names without a table behave like a missing file.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    tables: HashMap<TableName, Vec<Sample>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add (or replace) a table given as `(x, T, U)` rows.
    pub fn with_table(mut self, name: TableName, rows: &[(f64, f64, f64)]) -> Self {
        let samples = rows.iter().map(|&(x, t, u)| Sample::new(x, t, u)).collect();
        self.tables.insert(name, samples);
        self
    }

    pub fn without_table(mut self, name: TableName) -> Self {
        self.tables.remove(&name);
        self
    }
}

impl TableStore for MemoryStore {
    fn load(&self, name: TableName) -> Result<Table, EvalError> {
        self.tables
            .get(&name)
            .map(|samples| Table::new(name, samples.clone()))
            .ok_or_else(|| EvalError::data_source(name, format!("memory:{name}"), "no such table"))
    }
}

/// Keeps the first successful load of each table.
///
/// Failed loads are not cached, so a table that appears later is picked up.
/// A populated slot is never replaced.
#[derive(Debug)]
pub struct CachedStore<S> {
    inner: S,
    slots: [OnceLock<Table>; 3],
}

impl<S: TableStore> CachedStore<S> {
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            slots: [OnceLock::new(), OnceLock::new(), OnceLock::new()],
        }
    }

    pub fn is_cached(&self, name: TableName) -> bool {
        name.slot(&self.slots).get().is_some()
    }
}

impl<S: TableStore> TableStore for CachedStore<S> {
    fn load(&self, name: TableName) -> Result<Table, EvalError> {
        let slot = name.slot(&self.slots);
        if let Some(table) = slot.get() {
            return Ok(table.clone());
        }
        let table = self.inner.load(name)?;
        Ok(slot.get_or_init(|| table).clone())
    }
}
