//! Input/output helpers.
//!
//! - normalized point exports (CSV) (`export`)

pub mod export;

pub use export::*;
