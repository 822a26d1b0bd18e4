//! Formatted terminal output.
//!
//! We keep formatting code in one place so:
//! - the evaluation code stays free of presentation concerns
//! - output changes are localized (and easy to pin in tests)

use std::path::PathBuf;

use crate::domain::{Evaluation, Field, ProbeConfig, SweepConfig, Table, TableName, Tier};
use crate::error::EvalError;
use crate::lookup::fold;
use crate::report::{TierCounts, count_tiers};

/// One row of the `tables` listing.
#[derive(Debug, Clone)]
pub struct TableStatus {
    pub name: TableName,
    pub path: PathBuf,
    pub table: Result<Table, EvalError>,
}

/// Format a single `fun` result.
pub fn format_evaluation(e: &Evaluation) -> String {
    let mut out = String::new();
    out.push_str(&format!("Result fun(x,y,z) = {}\n", e.value));
    out.push_str(&format!("Input: x={} y={} z={}\n", e.x, e.y, e.z));
    if e.used_closed_form() {
        out.push_str("Tier: closed-form (both formula tiers failed)\n");
    } else {
        out.push_str(&format!("Tier: {}\n", e.tier.display_name()));
    }
    out
}

/// Format `T(x)` / `U(x)` lookups including the folded coordinate.
pub fn format_lookup(x: f64, results: &[(Field, Result<f64, EvalError>)]) -> String {
    let (name, q) = fold(x);
    let mut out = String::new();
    out.push_str(&format!("x={x} -> table '{name}' at {q}\n"));
    for (field, result) in results {
        match result {
            Ok(v) => out.push_str(&format!("{}({x}) = {v}\n", field.display_name())),
            Err(err) => out.push_str(&format!("{}({x}) failed: {}: {err}\n", field.display_name(), err.kind_label())),
        }
    }
    out
}

/// Format the status of each table source.
pub fn format_tables(rows: &[TableStatus]) -> String {
    let mut out = String::new();
    out.push_str(&format!("{:<8} {:>6} {:>24}  {}\n", "table", "rows", "x-range", "source"));
    out.push_str(&format!("{:-<8} {:->6} {:->24}  {:-<6}\n", "", "", "", ""));

    for row in rows {
        let path = row.path.display();
        match &row.table {
            Ok(table) => {
                let range = table
                    .x_range()
                    .map(|(lo, hi)| format!("[{lo:.4}, {hi:.4}]"))
                    .unwrap_or_else(|| "-".to_string());
                out.push_str(&format!("{:<8} {:>6} {:>24}  {path}", row.name.as_str(), table.len(), range));
                if table.len() < 2 {
                    out.push_str("  (cannot bracket any query)");
                }
                out.push('\n');
            }
            Err(err) => {
                out.push_str(&format!("{:<8} {:>6} {:>24}  {path}  ({err})\n", row.name.as_str(), "-", "-"));
            }
        }
    }

    out
}

/// Format per-tier counts with shares of the total.
pub fn format_tier_counts(counts: &TierCounts) -> String {
    let total = counts.total();
    let mut out = String::new();
    for tier in Tier::ALL {
        let n = counts.get(tier);
        let share = if total == 0 { 0.0 } else { 100.0 * n as f64 / total as f64 };
        out.push_str(&format!("  {:<12} {:>7} ({share:5.1}%)\n", tier.display_name(), n));
    }
    out
}

/// Format the summary of a one-axis sweep.
pub fn format_sweep_summary(config: &SweepConfig, evals: &[Evaluation]) -> String {
    let (x, y, z) = config.fixed;
    let fixed: Vec<String> = [("x", x), ("y", y), ("z", z)]
        .iter()
        .filter(|(label, _)| *label != config.axis.display_name())
        .map(|(label, v)| format!("{label}={v}"))
        .collect();

    let mut out = String::new();
    out.push_str("=== funcascade sweep ===\n");
    out.push_str(&format!(
        "Axis: {} in [{}, {}] ({} steps) | fixed: {}\n",
        config.axis.display_name(),
        config.from,
        config.to,
        config.steps,
        fixed.join(" ")
    ));
    if let Some((lo, hi)) = value_range(evals) {
        out.push_str(&format!("Values: [{lo:.6}, {hi:.6}]\n"));
    }
    out.push_str("Tiers:\n");
    out.push_str(&format_tier_counts(&count_tiers(evals)));
    out
}

/// Format the summary of a random probe.
pub fn format_probe_summary(config: &ProbeConfig, evals: &[Evaluation]) -> String {
    let non_finite = evals.iter().filter(|e| !e.value.is_finite()).count();

    let mut out = String::new();
    out.push_str("=== funcascade probe ===\n");
    out.push_str(&format!(
        "Inputs: n={} | x,y,z ~ Normal(0, {}) | seed={}\n",
        config.count, config.scale, config.seed
    ));
    out.push_str(&format!("Evaluated: {} of {}\n", evals.len(), config.count));
    if non_finite > 0 {
        out.push_str(&format!("Non-finite results: {non_finite}\n"));
    }
    out.push_str("Tiers:\n");
    out.push_str(&format_tier_counts(&count_tiers(evals)));
    out
}

fn value_range(evals: &[Evaluation]) -> Option<(f64, f64)> {
    let mut lo = f64::INFINITY;
    let mut hi = f64::NEG_INFINITY;
    for e in evals.iter().filter(|e| e.value.is_finite()) {
        lo = lo.min(e.value);
        hi = hi.max(e.value);
    }
    (lo.is_finite() && hi.is_finite()).then_some((lo, hi))
}
