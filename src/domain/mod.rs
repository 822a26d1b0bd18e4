//! Domain types used throughout the evaluator.
//!
//! This module defines:
//!
//! - table data (`Sample`, `Table`, `TableName`, `TableLayout`)
//! - lookup selectors (`Field`)
//! - evaluation outputs (`Tier`, `Evaluation`)
//! - run configuration (`EvalConfig`, `SweepConfig`, `ProbeConfig`)

pub mod types;

pub use types::*;
