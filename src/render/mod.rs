//! Renderer: points + scales → SVG text, optionally wrapped in an HTML page.
//!
//! - `svg`: minimal indenting writer with attribute/text escaping
//! - `axis`: bottom/left axes with tick marks and labels
//! - `bar`: the GDP bar chart
//! - `scatter`: the cyclist scatter plot and its legend
//! - `page`: HTML wrapper with the hover tooltip script
//!
//! Marks are emitted in the order of the input points.

pub mod axis;
pub mod bar;
pub mod page;
pub mod scatter;
pub mod svg;

use std::fs;
use std::path::Path;

use tracing::info;

use crate::domain::OutputFormat;
use crate::error::AppError;

pub use bar::render_gdp_chart;
pub use page::wrap_html;
pub use scatter::render_cyclist_chart;

/// Final document text for the requested format.
pub fn finish_document(title: &str, svg: String, format: OutputFormat) -> String {
    match format {
        OutputFormat::Svg => svg,
        OutputFormat::Html => wrap_html(title, &svg),
    }
}

/// Write a rendered document, creating parent directories as needed.
pub fn write_output(path: &Path, contents: &str) -> Result<(), AppError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .map_err(|e| AppError::new(2, format!("Failed to create directory '{}': {e}", parent.display())))?;
    }
    fs::write(path, contents)
        .map_err(|e| AppError::new(2, format!("Failed to write output '{}': {e}", path.display())))?;
    info!(path = %path.display(), bytes = contents.len(), "wrote chart");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn svg_format_passes_document_through() {
        let doc = finish_document("t", "<svg></svg>".to_string(), OutputFormat::Svg);
        assert_eq!(doc, "<svg></svg>");
    }

    #[test]
    fn html_format_wraps_document() {
        let doc = finish_document("t", "<svg></svg>".to_string(), OutputFormat::Html);
        assert!(doc.starts_with("<!DOCTYPE html>"));
        assert!(doc.contains("<svg></svg>"));
    }

    #[test]
    fn write_output_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("charts").join("gdp.svg");

        write_output(&path, "<svg></svg>").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "<svg></svg>");
    }

    #[test]
    fn write_output_reports_io_errors() {
        let dir = tempfile::tempdir().unwrap();
        // the directory itself is not writable as a file
        let err = write_output(dir.path(), "x").unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }
}
