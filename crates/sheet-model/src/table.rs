#![deny(unsafe_code)]

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::columns::normalize_column_name;
use crate::error::{ModelError, Result};

/// Rendering of a missing cell in messages.
pub const MISSING_DISPLAY: &str = "nan";

static MISSING: CellValue = CellValue::Missing;

/// A single cell of the sample table.
///
/// An absent value is kept distinct from an empty string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value")]
pub enum CellValue {
    Text(String),
    Missing,
}

impl CellValue {
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(value) => Some(value),
            Self::Missing => None,
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Self::Missing)
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(value) => f.write_str(value),
            Self::Missing => f.write_str(MISSING_DISPLAY),
        }
    }
}

impl From<Option<&str>> for CellValue {
    fn from(value: Option<&str>) -> Self {
        value.map_or(Self::Missing, Self::text)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Row {
    pub cells: Vec<CellValue>,
}

impl Row {
    pub fn new(cells: Vec<CellValue>) -> Self {
        Self { cells }
    }

    pub fn get(&self, column: usize) -> &CellValue {
        self.cells.get(column).unwrap_or(&MISSING)
    }
}

/// Body of a sample sheet: column names in file order and one row per sample.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SampleTable {
    pub columns: Vec<String>,
    pub rows: Vec<Row>,
}

impl SampleTable {
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    /// Append a row, rejecting rows wider or narrower than the column list.
    pub fn push_row(&mut self, row: Row) -> Result<()> {
        if row.cells.len() != self.columns.len() {
            return Err(ModelError::RaggedRow {
                row: self.rows.len(),
                expected: self.columns.len(),
                found: row.cells.len(),
            });
        }
        self.rows.push(row);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Position of a column by exact name, ignoring a stray line-break suffix.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns
            .iter()
            .position(|column| normalize_column_name(column) == name)
    }

    pub fn column_values(&self, column: usize) -> impl Iterator<Item = &CellValue> + '_ {
        self.rows.iter().map(move |row| row.get(column))
    }
}
