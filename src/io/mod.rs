//! Input/output helpers.
//!
//! - interactive input of `(x, y, z)` (`input`)
//! - sweep exports (CSV/JSON) (`export`)

pub mod export;
pub mod input;

pub use export::*;
pub use input::*;
