//! Alpe d'Huez fastest-ascent records.
//!
//! Each record is an object with `Year`, `Time` (`MM:SS`) and `Nationality`, plus
//! passthrough fields (`Name`, `Place`, `Seconds`, `Doping`, `URL`) kept verbatim.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::debug;

use crate::domain::{DataPoint, RacePoint, RaceTime};
use crate::error::AppError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CyclistRecord {
    #[serde(rename = "Year")]
    pub year: i32,
    #[serde(rename = "Time")]
    pub time: String,
    #[serde(rename = "Nationality")]
    pub nationality: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl CyclistRecord {
    pub fn name(&self) -> Option<&str> {
        self.extra.get("Name").and_then(Value::as_str)
    }

    /// Doping allegation text; `None` when absent or empty.
    pub fn doping(&self) -> Option<&str> {
        self.extra
            .get("Doping")
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }
}

/// Normalize cyclist records, preserving order. Fails on the first malformed record.
pub fn transform_cyclists(records: &[CyclistRecord]) -> Result<Vec<RacePoint>, AppError> {
    let points = records
        .iter()
        .enumerate()
        .map(|(idx, record)| {
            let value = RaceTime::parse(&record.time)
                .map_err(|e| AppError::new(4, format!("Cyclist record {idx}: {e}")))?;
            Ok(DataPoint {
                x: record.year,
                value,
                original: record.clone(),
            })
        })
        .collect::<Result<Vec<_>, AppError>>()?;

    debug!(points = points.len(), "cyclist records normalized");
    Ok(points)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"[
        {"Time":"36:50","Place":1,"Seconds":2210,"Name":"Marco Pantani","Year":1995,
         "Nationality":"ITA","Doping":"Alleged drug use during 1995 due to high hematocrit levels",
         "URL":"https://en.wikipedia.org/wiki/Marco_Pantani#Alleged_drug_use"},
        {"Time":"39:59","Place":35,"Seconds":2399,"Name":"Nairo Quintana","Year":2015,
         "Nationality":"COL","Doping":"","URL":""}
    ]"#;

    #[test]
    fn records_keep_passthrough_fields() {
        let records: Vec<CyclistRecord> = serde_json::from_str(SAMPLE).unwrap();
        assert_eq!(records[0].name(), Some("Marco Pantani"));
        assert_eq!(records[0].extra.get("Seconds"), Some(&Value::from(2210)));
        assert!(records[0].doping().is_some());
        assert_eq!(records[1].doping(), None);
    }

    #[test]
    fn transform_parses_year_and_time_in_order() {
        let records: Vec<CyclistRecord> = serde_json::from_str(SAMPLE).unwrap();
        let points = transform_cyclists(&records).unwrap();

        assert_eq!(points.len(), 2);
        assert_eq!(points[0].x, 1995);
        assert_eq!(points[0].value.seconds(), 2210);
        assert_eq!(points[1].x, 2015);
        assert_eq!(points[1].value.to_string(), "39:59");
        assert_eq!(points[1].original, records[1]);
    }

    #[test]
    fn bad_time_fails_with_index() {
        let mut records: Vec<CyclistRecord> = serde_json::from_str(SAMPLE).unwrap();
        records[1].time = "39m59s".to_string();
        let err = transform_cyclists(&records).unwrap_err();
        assert_eq!(err.exit_code(), 4);
        assert!(err.message().starts_with("Cyclist record 1:"), "{}", err.message());
    }
}
