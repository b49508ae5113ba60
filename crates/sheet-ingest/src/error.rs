//! Error types for sample sheet ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading a sample sheet or pattern file.
#[derive(Debug, Error)]
pub enum IngestError {
    /// File not found.
    #[error("file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// No line starting with the column header prefix was found.
    #[error("no column header line (starting with 'Sample_') found in {path}")]
    NoColumnHeader { path: PathBuf },

    /// Failed to parse the CSV body.
    #[error("failed to parse CSV {path}: {source}")]
    CsvParse {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

impl IngestError {
    pub(crate) fn from_io(path: &std::path::Path, source: std::io::Error) -> Self {
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            Self::FileRead {
                path: path.to_path_buf(),
                source,
            }
        }
    }
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
