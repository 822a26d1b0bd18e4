//! Table data providers.

pub mod store;

pub use store::*;
