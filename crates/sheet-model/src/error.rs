use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("row {row} has {found} cells but the table has {expected} columns")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("unknown error category: {0}")]
    UnknownCategory(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
