//! `svgcharts` library crate.
//!
//! The binary (`svgcharts`) is a thin wrapper around this library so that:
//!
//! - the pipeline is testable without spawning processes or touching the network
//! - the stages (fetch, transform, scale, color, render) stay independently reusable

pub mod app;
pub mod cli;
pub mod color;
pub mod data;
pub mod domain;
pub mod error;
pub mod io;
pub mod plot;
pub mod render;
pub mod report;
pub mod scale;
