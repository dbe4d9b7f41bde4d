//! Error types for catalog ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort ingestion of a survey CSV file.
///
/// Malformed rows are never errors; they are skipped by the row parser.
#[derive(Debug, Error)]
pub enum IngestError {
    /// Input file could not be opened.
    #[error("failed to open {path}: {source}")]
    FileOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Reading a row failed (I/O error or invalid UTF-8).
    #[error("failed to read {path} at row {row}: {source}")]
    FileRead {
        path: PathBuf,
        row: usize,
        #[source]
        source: csv::Error,
    },
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
