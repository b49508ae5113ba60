use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// Category a validation message is filed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ErrorCategory {
    #[serde(rename = "header")]
    Header,
    #[serde(rename = "Sample_ID")]
    SampleId,
    #[serde(rename = "Sample_Name")]
    SampleName,
    #[serde(rename = "index")]
    Index,
    #[serde(rename = "index2")]
    Index2,
}

impl ErrorCategory {
    pub const fn all() -> &'static [Self] {
        &[
            Self::Header,
            Self::SampleId,
            Self::SampleName,
            Self::Index,
            Self::Index2,
        ]
    }

    pub const fn key(self) -> &'static str {
        match self {
            Self::Header => "header",
            Self::SampleId => "Sample_ID",
            Self::SampleName => "Sample_Name",
            Self::Index => "index",
            Self::Index2 => "index2",
        }
    }

    pub fn from_key(key: &str) -> Result<Self, ModelError> {
        Self::all()
            .iter()
            .copied()
            .find(|category| category.key() == key)
            .ok_or_else(|| ModelError::UnknownCategory(key.to_string()))
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Categorized validation messages for one run.
///
/// Every category is present from construction; an empty list means the
/// category was checked and nothing was found.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ErrorReport {
    errors: BTreeMap<ErrorCategory, Vec<String>>,
}

impl Default for ErrorReport {
    fn default() -> Self {
        Self::new()
    }
}

impl ErrorReport {
    pub fn new() -> Self {
        Self {
            errors: ErrorCategory::all()
                .iter()
                .map(|category| (*category, Vec::new()))
                .collect(),
        }
    }

    /// Append a message, keeping insertion order within the category.
    pub fn push(&mut self, category: ErrorCategory, message: impl Into<String>) {
        self.errors.entry(category).or_default().push(message.into());
    }

    pub fn messages(&self, category: ErrorCategory) -> &[String] {
        self.errors
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Categories in fixed order with their messages.
    pub fn iter(&self) -> impl Iterator<Item = (ErrorCategory, &[String])> + '_ {
        self.errors
            .iter()
            .map(|(category, messages)| (*category, messages.as_slice()))
    }

    pub fn error_count(&self) -> usize {
        self.errors.values().map(Vec::len).sum()
    }

    pub fn is_clean(&self) -> bool {
        self.errors.values().all(Vec::is_empty)
    }
}
