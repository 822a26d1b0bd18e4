//! Numerical utilities: table interpolation.

pub mod interp;

pub use interp::*;
