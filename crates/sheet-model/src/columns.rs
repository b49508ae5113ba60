//! Well-known sample sheet columns.
//!
//! Column names come verbatim from the final header line, so the validators
//! resolve the handful of columns they care about once, by logical role,
//! and work with positions from then on.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Strip a trailing line-break artifact left on the last column name.
pub fn normalize_column_name(name: &str) -> &str {
    name.trim_end_matches(['\r', '\n'])
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ColumnRole {
    SampleId,
    SampleName,
    Lane,
    Index,
    Index2,
}

impl ColumnRole {
    pub const fn all() -> &'static [Self] {
        &[
            Self::SampleId,
            Self::SampleName,
            Self::Lane,
            Self::Index,
            Self::Index2,
        ]
    }

    /// Accepted spellings, matched case-sensitively.
    pub const fn names(self) -> &'static [&'static str] {
        match self {
            Self::SampleId => &["Sample_ID"],
            Self::SampleName => &["Sample_Name"],
            Self::Lane => &["lane", "Lane"],
            Self::Index => &["index", "Index"],
            Self::Index2 => &["index2", "Index2"],
        }
    }

    pub fn matches(self, column: &str) -> bool {
        let column = normalize_column_name(column);
        self.names().contains(&column)
    }
}

impl fmt::Display for ColumnRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.names()[0])
    }
}

/// Positions of the well-known columns within a table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnMap {
    sample_id: Option<usize>,
    sample_name: Option<usize>,
    lane: Option<usize>,
    index: Option<usize>,
    index2: Option<usize>,
}

impl ColumnMap {
    /// Resolve every role against the column names; the first match wins.
    pub fn resolve<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut map = Self::default();
        for (position, column) in columns.into_iter().enumerate() {
            let column = column.as_ref();
            for role in ColumnRole::all() {
                if role.matches(column) {
                    map.slot(*role).get_or_insert(position);
                }
            }
        }
        map
    }

    pub fn get(&self, role: ColumnRole) -> Option<usize> {
        match role {
            ColumnRole::SampleId => self.sample_id,
            ColumnRole::SampleName => self.sample_name,
            ColumnRole::Lane => self.lane,
            ColumnRole::Index => self.index,
            ColumnRole::Index2 => self.index2,
        }
    }

    pub fn contains(&self, role: ColumnRole) -> bool {
        self.get(role).is_some()
    }

    fn slot(&mut self, role: ColumnRole) -> &mut Option<usize> {
        match role {
            ColumnRole::SampleId => &mut self.sample_id,
            ColumnRole::SampleName => &mut self.sample_name,
            ColumnRole::Lane => &mut self.lane,
            ColumnRole::Index => &mut self.index,
            ColumnRole::Index2 => &mut self.index2,
        }
    }
}
