//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - normalized data points (`DataPoint`, `GdpPoint`, `RacePoint`)
//! - the race clock value parsed from `MM:SS` strings (`RaceTime`)
//! - chart layout constants and per-run configuration (`Layout`, `ChartConfig`)

pub mod types;

pub use types::*;
