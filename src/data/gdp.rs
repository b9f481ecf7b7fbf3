//! Quarterly US GDP dataset.
//!
//! The source document looks like:
//!
//! ```json
//! { "name": "...", "description": "...", "data": [["1947-01-01", 243.1], ...] }
//! ```

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::domain::{DataPoint, GdpPoint};
use crate::error::AppError;

#[derive(Debug, Clone, Deserialize)]
pub struct GdpDocument {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub source_name: Option<String>,
    #[serde(default)]
    pub from_date: Option<String>,
    #[serde(default)]
    pub to_date: Option<String>,
    pub data: Vec<GdpRecord>,
}

/// Raw `[date, value]` pair. The value may be a JSON number or a numeric string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GdpRecord(pub String, pub Value);

impl GdpRecord {
    pub fn date_str(&self) -> &str {
        &self.0
    }
}

/// Normalize raw GDP pairs, preserving order. Fails on the first malformed record.
pub fn transform_gdp(records: &[GdpRecord]) -> Result<Vec<GdpPoint>, AppError> {
    let points = records
        .iter()
        .enumerate()
        .map(|(idx, record)| {
            let x = parse_date(&record.0).map_err(|e| AppError::new(4, format!("GDP record {idx}: {e}")))?;
            let value = parse_value(&record.1).map_err(|e| AppError::new(4, format!("GDP record {idx}: {e}")))?;
            Ok(DataPoint {
                x,
                value,
                original: record.clone(),
            })
        })
        .collect::<Result<Vec<_>, AppError>>()?;

    debug!(points = points.len(), "GDP records normalized");
    Ok(points)
}

fn parse_date(s: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").map_err(|e| format!("Invalid date '{s}' ({e}). Expected YYYY-MM-DD."))
}

fn parse_value(value: &Value) -> Result<f64, String> {
    let v = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    match v {
        Some(v) if v.is_finite() => Ok(v),
        _ => Err(format!("Invalid GDP value {value}. Expected a finite number.")),
    }
}
