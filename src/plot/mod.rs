//! Terminal previews of the charts.

pub mod ascii;

pub use ascii::{render_cyclist_ascii, render_gdp_ascii};
