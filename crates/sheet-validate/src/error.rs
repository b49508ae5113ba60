use thiserror::Error;

/// Problems with the validator's inputs, as opposed to problems in the sheet.
#[derive(Debug, Error)]
pub enum ValidateError {
    #[error("invalid sample ID pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
    #[error("sample table has no {column} column")]
    MissingColumn { column: String },
}

pub type Result<T> = std::result::Result<T, ValidateError>;
