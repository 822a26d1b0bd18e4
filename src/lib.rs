//! `fun-cascade` library crate.
//!
//! The binary (`funcascade`) is a thin wrapper around this library so that:
//!
//! - the evaluation core is testable without spawning processes
//! - table data can come from any provider (files, memory, a cache)
//! - the CLI stays a presentation layer over `eval::Evaluator`

pub mod app;
pub mod cli;
pub mod data;
pub mod domain;
pub mod error;
pub mod eval;
pub mod formulas;
pub mod io;
pub mod lookup;
pub mod math;
pub mod plot;
pub mod report;
