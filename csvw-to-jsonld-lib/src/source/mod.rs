use std::path::{Path, PathBuf};

use url::Url;

use crate::error::ProcessorError;

/// Where the CSV data lives: an HTTP location or a file on disk. Anything
/// that does not parse as an http(s) URL is treated as a path, resolved
/// relative to the metadata document's directory.
#[derive(Debug, Clone)]
pub enum DataSource {
    Remote(Url),
    Local(PathBuf),
}

impl DataSource {
    pub fn parse(raw: &str, base_path: &Path) -> Self {
        match Url::parse(raw) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => DataSource::Remote(url),
            _ => DataSource::Local(base_path.join(raw)),
        }
    }

    /// Read the full CSV payload. Fetch and read failures are the only
    /// fatal errors in a conversion run.
    pub async fn read(&self) -> Result<Vec<u8>, ProcessorError> {
        match self {
            DataSource::Remote(url) => {
                tracing::info!("Fetching CSV from {}", url);
                let response = reqwest::get(url.clone()).await?.error_for_status()?;
                Ok(response.bytes().await?.to_vec())
            }
            DataSource::Local(path) => {
                tracing::info!("Reading CSV from {:?}", path);
                Ok(tokio::fs::read(path).await?)
            }
        }
    }
}
