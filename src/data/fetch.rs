//! Dataset retrieval.
//!
//! Both charts read a single JSON document, either from a fixed HTTP endpoint or
//! from a local file. There is no retry and no request timeout, so a
//! failed fetch ends the run.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use reqwest::blocking::Client;
use serde::de::DeserializeOwned;
use tracing::{debug, info};

use crate::domain::ChartKind;
use crate::error::AppError;

/// Where a dataset is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatasetSource {
    Url(String),
    File(PathBuf),
}

impl DatasetSource {
    /// Pick the source for `kind`.
    ///
    /// Precedence: explicit input file, explicit URL, `SVGCHARTS_*_URL` from the
    /// environment (or `.env`), then the built-in endpoint.
    pub fn resolve(kind: ChartKind, input: Option<PathBuf>, url: Option<String>) -> Self {
        if let Some(path) = input {
            return Self::File(path);
        }
        if let Some(url) = url {
            return Self::Url(url);
        }

        dotenvy::dotenv().ok();
        match std::env::var(kind.url_env_var()) {
            Ok(url) if !url.trim().is_empty() => {
                debug!(var = kind.url_env_var(), "dataset URL taken from environment");
                Self::Url(url.trim().to_string())
            }
            _ => Self::Url(kind.default_url().to_string()),
        }
    }
}

impl fmt::Display for DatasetSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DatasetSource::Url(url) => write!(f, "{url}"),
            DatasetSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

pub struct DatasetClient {
    client: Client,
}

impl DatasetClient {
    pub fn new() -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(None::<Duration>)
            .build()
            .map_err(|e| AppError::new(3, format!("Failed to build HTTP client: {e}")))?;
        Ok(Self { client })
    }

    /// Fetch and decode one JSON document.
    pub fn fetch_json<T: DeserializeOwned>(&self, source: &DatasetSource) -> Result<T, AppError> {
        match source {
            DatasetSource::Url(url) => self.fetch_url(url),
            DatasetSource::File(path) => read_json_file(path),
        }
    }

    fn fetch_url<T: DeserializeOwned>(&self, url: &str) -> Result<T, AppError> {
        info!(url, "fetching dataset");

        let resp = self
            .client
            .get(url)
            .send()
            .map_err(|e| AppError::new(3, format!("Request to {url} failed: {e}")))?;

        if !resp.status().is_success() {
            return Err(AppError::new(
                3,
                format!("Request to {url} failed with status {}.", resp.status()),
            ));
        }

        let body = resp
            .text()
            .map_err(|e| AppError::new(3, format!("Failed to read response body from {url}: {e}")))?;
        debug!(bytes = body.len(), "dataset downloaded");

        decode_json(&body, url)
    }
}

/// Read and decode a JSON document from disk.
pub fn read_json_file<T: DeserializeOwned>(path: &Path) -> Result<T, AppError> {
    info!(path = %path.display(), "reading dataset file");
    let text = fs::read_to_string(path)
        .map_err(|e| AppError::new(2, format!("Failed to read dataset '{}': {e}", path.display())))?;
    decode_json(&text, &path.display().to_string())
}

fn decode_json<T: DeserializeOwned>(text: &str, origin: &str) -> Result<T, AppError> {
    serde_json::from_str(text).map_err(|e| AppError::new(4, format!("Invalid JSON from {origin}: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::gdp::GdpDocument;
    use std::io::Write;

    #[test]
    fn explicit_input_wins_over_url() {
        let source = DatasetSource::resolve(
            ChartKind::Gdp,
            Some(PathBuf::from("gdp.json")),
            Some("http://localhost/gdp.json".to_string()),
        );
        assert_eq!(source, DatasetSource::File(PathBuf::from("gdp.json")));
    }

    #[test]
    fn explicit_url_wins_over_default() {
        let source = DatasetSource::resolve(ChartKind::Cyclist, None, Some("http://localhost/c.json".to_string()));
        assert_eq!(source, DatasetSource::Url("http://localhost/c.json".to_string()));
    }

    #[test]
    fn file_source_decodes_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"name":"GDP","data":[["1947-01-01",243.1],["1947-04-01",246.3]]}}"#).unwrap();

        let client = DatasetClient::new().unwrap();
        let doc: GdpDocument = client
            .fetch_json(&DatasetSource::File(file.path().to_path_buf()))
            .unwrap();
        assert_eq!(doc.data.len(), 2);
        assert_eq!(doc.name.as_deref(), Some("GDP"));
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_json_file::<GdpDocument>(&dir.path().join("nope.json")).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn malformed_json_is_data_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{\"data\": [").unwrap();
        let err = read_json_file::<GdpDocument>(file.path()).unwrap_err();
        assert_eq!(err.exit_code(), 4);
        assert!(err.message().starts_with("Invalid JSON from"));
    }
}
