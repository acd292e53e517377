use thiserror::Error;

/// Errors raised by the I/O shell around the conversion.
///
/// The conversion itself never fails: unknown titles, unresolvable
/// templates, and unparseable cell values are handled by omission or
/// sentinel values. Only reading the metadata document and fetching the
/// CSV source can abort a run.
#[derive(Debug, Error)]
pub enum ProcessorError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Invalid metadata: {0}")]
    InvalidMetadata(String),
    #[error("Processing error: {0}")]
    Processing(String),
}
