//! Command-line parsing for the `fun(x, y, z)` evaluator.
//!
//! The goal of this module is to keep **argument parsing** and **command dispatch**
//! separate from the table/formula code.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::domain::{Field, SweepAxis};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "funcascade", version, about = "Table-driven fun(x, y, z) with tiered fallback")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Evaluate fun(x, y, z). Prompts for the values when they are omitted.
    Eval(EvalArgs),
    /// Look up T(x) and/or U(x) through the folded tables.
    Lookup(LookupArgs),
    /// Show row counts and x-ranges of the three tables.
    Tables(TablesArgs),
    /// Evaluate fun along one axis; print tier statistics and optionally plot/export.
    Sweep(SweepArgs),
    /// Evaluate fun on random inputs and report which tiers produced the results.
    Probe(ProbeArgs),
}

/// Where tables are read from.
#[derive(Debug, Args, Clone)]
pub struct DataDirArgs {
    /// Directory holding the table files (default: $FUN_DATA_DIR, else `data`).
    #[arg(long, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,
}

/// Table source for commands that evaluate.
#[derive(Debug, Args, Clone)]
pub struct StoreArgs {
    #[command(flatten)]
    pub dir: DataDirArgs,

    /// Keep each table in memory after its first load.
    #[arg(long)]
    pub cache: bool,
}

#[derive(Debug, Args, Clone)]
pub struct EvalArgs {
    #[command(flatten)]
    pub store: StoreArgs,

    #[arg(allow_negative_numbers = true)]
    pub x: Option<f64>,

    #[arg(allow_negative_numbers = true)]
    pub y: Option<f64>,

    #[arg(allow_negative_numbers = true)]
    pub z: Option<f64>,

    /// Print the evaluation as JSON.
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Args, Clone)]
pub struct LookupArgs {
    #[command(flatten)]
    pub store: StoreArgs,

    #[arg(allow_negative_numbers = true)]
    pub x: f64,

    /// Only look up this value (default: both T and U).
    #[arg(long, value_enum)]
    pub field: Option<Field>,
}

#[derive(Debug, Args, Clone)]
pub struct TablesArgs {
    #[command(flatten)]
    pub dir: DataDirArgs,
}

#[derive(Debug, Args, Clone)]
pub struct SweepArgs {
    #[command(flatten)]
    pub store: StoreArgs,

    /// Which argument to vary.
    #[arg(long, value_enum, default_value_t = SweepAxis::X)]
    pub axis: SweepAxis,

    /// Start of the swept range.
    #[arg(long, allow_negative_numbers = true, default_value_t = -3.0)]
    pub from: f64,

    /// End of the swept range (inclusive).
    #[arg(long, allow_negative_numbers = true, default_value_t = 3.0)]
    pub to: f64,

    /// Number of evaluation points.
    #[arg(long, default_value_t = 61)]
    pub steps: usize,

    /// Value of x when not swept.
    #[arg(long = "x", allow_negative_numbers = true, default_value_t = 0.5)]
    pub x: f64,

    /// Value of y when not swept.
    #[arg(long = "y", allow_negative_numbers = true, default_value_t = 0.5)]
    pub y: f64,

    /// Value of z when not swept.
    #[arg(long = "z", allow_negative_numbers = true, default_value_t = 0.5)]
    pub z: f64,

    /// Render an ASCII plot of the sweep.
    #[arg(long)]
    pub plot: bool,

    /// Plot width (columns).
    #[arg(long, default_value_t = 100)]
    pub width: usize,

    /// Plot height (rows).
    #[arg(long, default_value_t = 25)]
    pub height: usize,

    /// Export the evaluated points to CSV.
    #[arg(long, value_name = "CSV")]
    pub export: Option<PathBuf>,

    /// Export the evaluated points to JSON.
    #[arg(long = "export-json", value_name = "JSON")]
    pub export_json: Option<PathBuf>,
}

#[derive(Debug, Args, Clone)]
pub struct ProbeArgs {
    #[command(flatten)]
    pub store: StoreArgs,

    /// Number of random (x, y, z) triples.
    #[arg(short = 'n', long, default_value_t = 1000)]
    pub count: usize,

    /// Random seed.
    #[arg(long, default_value_t = 42)]
    pub seed: u64,

    /// Standard deviation of the normal distribution inputs are drawn from.
    #[arg(long, default_value_t = 3.0)]
    pub scale: f64,
}
