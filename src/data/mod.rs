//! Dataset access and normalization.
//!
//! - `fetch`: HTTP/file retrieval of the raw JSON documents
//! - `gdp`: the quarterly GDP document and its transformer
//! - `cyclist`: the Alpe d'Huez race-time records and their transformer

pub mod cyclist;
pub mod fetch;
pub mod gdp;

pub use cyclist::{CyclistRecord, transform_cyclists};
pub use fetch::{DatasetClient, DatasetSource};
pub use gdp::{GdpDocument, GdpRecord, transform_gdp};
