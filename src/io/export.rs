//! Export normalized points to CSV.
//!
//! The export is meant to be easy to consume in spreadsheets or downstream scripts.
//! Rows follow the order of the input points.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::info;

use crate::color::Colorizer;
use crate::domain::{GdpPoint, RacePoint};
use crate::error::AppError;

/// Write `date,gdp` rows.
pub fn write_gdp_csv(path: &Path, points: &[GdpPoint]) -> Result<(), AppError> {
    let mut file = create(path)?;

    writeln!(file, "date,gdp").map_err(header_err)?;
    for p in points {
        writeln!(file, "{},{}", p.x, p.value).map_err(row_err)?;
    }
    file.flush().map_err(row_err)?;

    info!(path = %path.display(), rows = points.len(), "exported GDP points");
    Ok(())
}

/// Write `year,time,seconds,nationality,color,name` rows.
pub fn write_cyclist_csv(path: &Path, points: &[RacePoint], colorizer: &Colorizer) -> Result<(), AppError> {
    let mut file = create(path)?;

    writeln!(file, "year,time,seconds,nationality,color,name").map_err(header_err)?;
    for p in points {
        let nationality = &p.original.nationality;
        writeln!(
            file,
            "{},{},{},{},{},{}",
            p.x,
            p.value,
            p.value.seconds(),
            csv_field(nationality),
            colorizer.color(nationality),
            csv_field(p.original.name().unwrap_or("")),
        )
        .map_err(row_err)?;
    }
    file.flush().map_err(row_err)?;

    info!(path = %path.display(), rows = points.len(), "exported cyclist points");
    Ok(())
}

fn create(path: &Path) -> Result<BufWriter<File>, AppError> {
    File::create(path)
        .map(BufWriter::new)
        .map_err(|e| AppError::new(2, format!("Failed to create export CSV '{}': {e}", path.display())))
}

fn header_err(e: std::io::Error) -> AppError {
    AppError::new(2, format!("Failed to write export CSV header: {e}"))
}

fn row_err(e: std::io::Error) -> AppError {
    AppError::new(2, format!("Failed to write export CSV row: {e}"))
}

/// Quote a field when it contains a delimiter, quote or line break.
fn csv_field(s: &str) -> String {
    if s.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}
