use serde::{Deserialize, Serialize};

use crate::table::SampleTable;

/// Lines preceding the sample table, including the column-name row.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HeaderLines(Vec<String>);

impl HeaderLines {
    pub fn new(lines: Vec<String>) -> Self {
        Self(lines)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.0.get(index).map(String::as_str)
    }

    /// The column-name row.
    pub fn last(&self) -> Option<&str> {
        self.0.last().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.0.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for HeaderLines {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

/// A parsed sample sheet as handed to the validator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SampleSheet {
    pub header: HeaderLines,
    pub table: SampleTable,
    /// Number of header lines, column-name row included.
    pub header_count: usize,
}

impl SampleSheet {
    pub fn new(header: HeaderLines, table: SampleTable) -> Self {
        let header_count = header.len();
        Self {
            header,
            table,
            header_count,
        }
    }

    /// 1-based file line of a zero-based body row.
    pub fn line_number(&self, row_offset: usize) -> usize {
        self.header_count + 1 + row_offset
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_body_row_follows_column_names() {
        let header: HeaderLines = ["[Header]", "[Data]", "Sample_ID,index"]
            .into_iter()
            .collect();
        let sheet = SampleSheet::new(header, SampleTable::default());

        assert_eq!(sheet.header_count, 3);
        assert_eq!(sheet.line_number(0), 4);
        assert_eq!(sheet.line_number(8), 12);
    }
}
