//! Shared evaluation workflows used by the CLI commands.
//!
//! Keeping these here keeps `app.rs` focused on presentation:
//! config -> store -> evaluator -> (sweep | probe) -> evaluations

use std::path::PathBuf;

use rand::prelude::*;
use rand::rngs::StdRng;
use rand_distr::Normal;

use crate::cli::{DataDirArgs, StoreArgs};
use crate::data::{CachedStore, DirStore, TableStore};
use crate::domain::{EvalConfig, Evaluation, ProbeConfig, SweepAxis, SweepConfig, TableLayout};
use crate::error::{AppError, INTERNAL_EXIT_CODE};
use crate::eval::Evaluator;

pub const DATA_DIR_ENV: &str = "FUN_DATA_DIR";
pub const DEFAULT_DATA_DIR: &str = "data";

const TABLE_CENTRAL_ENV: &str = "FUN_TABLE_CENTRAL";
const TABLE_UPPER_ENV: &str = "FUN_TABLE_UPPER";
const TABLE_LOWER_ENV: &str = "FUN_TABLE_LOWER";

/// Resolve store settings from CLI flags, the process environment, and `.env`.
pub fn eval_config_from_args(args: &StoreArgs) -> EvalConfig {
    eval_config(&args.dir, args.cache)
}

/// Resolve an uncached store location (for commands without `--cache`).
pub fn eval_config_from_dir(dir: &DataDirArgs) -> EvalConfig {
    eval_config(dir, false)
}

fn eval_config(dir: &DataDirArgs, cache_tables: bool) -> EvalConfig {
    dotenvy::dotenv().ok();
    resolve_eval_config(dir, cache_tables, |key| std::env::var(key).ok())
}

/// Resolve store settings with an explicit environment lookup.
///
/// Precedence for the data directory: `--data-dir`, then `FUN_DATA_DIR`, then `data`.
pub fn resolve_eval_config(
    dir: &DataDirArgs,
    cache_tables: bool,
    env: impl Fn(&str) -> Option<String>,
) -> EvalConfig {
    let data_dir = dir
        .data_dir
        .clone()
        .or_else(|| env(DATA_DIR_ENV).map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR));

    let mut layout = TableLayout::default();
    if let Some(v) = env(TABLE_CENTRAL_ENV) {
        layout.central = v;
    }
    if let Some(v) = env(TABLE_UPPER_ENV) {
        layout.upper = v;
    }
    if let Some(v) = env(TABLE_LOWER_ENV) {
        layout.lower = v;
    }

    EvalConfig {
        data_dir,
        layout,
        cache_tables,
    }
}

/// File-backed store for `config`, cached if requested.
pub fn build_store(config: &EvalConfig) -> Box<dyn TableStore> {
    let dir = DirStore::from_config(config);
    if config.cache_tables {
        Box::new(CachedStore::new(dir))
    } else {
        Box::new(dir)
    }
}

/// Evaluate `fun` at `steps` evenly spaced points along `config.axis`.
pub fn run_sweep<S: TableStore>(evaluator: &Evaluator<S>, config: &SweepConfig) -> Result<Vec<Evaluation>, AppError> {
    if !(config.from.is_finite() && config.to.is_finite()) {
        return Err(AppError::new(
            2,
            format!("Invalid sweep range: from={}, to={} (must be finite).", config.from, config.to),
        ));
    }
    if config.steps < 2 {
        return Err(AppError::new(2, "Sweep steps must be >= 2."));
    }

    let n = config.steps;
    let mut out = Vec::with_capacity(n);
    for i in 0..n {
        let u = i as f64 / (n as f64 - 1.0);
        let v = config.from + u * (config.to - config.from);
        let (mut x, mut y, mut z) = config.fixed;
        match config.axis {
            SweepAxis::X => x = v,
            SweepAxis::Y => y = v,
            SweepAxis::Z => z = v,
        }
        out.push(evaluator.evaluate(x, y, z));
    }
    Ok(out)
}

/// Evaluate `fun` on `config.count` triples drawn from `Normal(0, scale)`.
pub fn run_probe<S: TableStore>(evaluator: &Evaluator<S>, config: &ProbeConfig) -> Result<Vec<Evaluation>, AppError> {
    if config.count == 0 {
        return Err(AppError::new(2, "Probe count must be > 0."));
    }
    if !(config.scale.is_finite() && config.scale > 0.0) {
        return Err(AppError::new(2, format!("Invalid probe scale: {} (must be finite and > 0).", config.scale)));
    }

    let mut rng = StdRng::seed_from_u64(config.seed);
    let normal = Normal::new(0.0, config.scale)
        .map_err(|e| AppError::new(INTERNAL_EXIT_CODE, format!("Input distribution error: {e}")))?;

    let mut out = Vec::with_capacity(config.count);
    for _ in 0..config.count {
        let x = normal.sample(&mut rng);
        let y = normal.sample(&mut rng);
        let z = normal.sample(&mut rng);
        out.push(evaluator.evaluate(x, y, z));
    }
    Ok(out)
}
