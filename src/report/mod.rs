//! Reporting utilities: formatted terminal summaries for each chart run.

pub mod format;

pub use format::{format_cyclist_summary, format_gdp_summary};
