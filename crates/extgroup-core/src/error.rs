//! Errors raised while rendering a report.
//!
//! Collection itself never fails; only writing the output can.

use thiserror::Error;

/// Errors that can occur while writing a report.
#[derive(Debug, Error)]
pub enum ReportError {
    /// Writing to the output stream failed (e.g. closed pipe).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialisation failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV serialisation failed.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}
