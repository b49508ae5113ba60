//! Sample_ID / Sample_Name cell checks.
//!
//! Cells must be present, use only ASCII letters, digits, `_` and `-`, and
//! stay within [`MAX_IDENTIFIER_LENGTH`] characters. Duplicate handling
//! differs per column: names are flagged on any repeat, IDs only when the
//! repeat is not told apart by lane or index (see [`super::duplicates`]).

use sheet_model::{CellValue, ColumnMap, ColumnRole, ErrorCategory, ErrorReport, SampleSheet};
use tracing::debug;

use crate::checks::duplicates;
use crate::error::{Result, ValidateError};
use crate::util::duplicated_values;

pub const MAX_IDENTIFIER_LENGTH: usize = 100;

/// The two identifying columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentifierColumn {
    SampleId,
    SampleName,
}

impl IdentifierColumn {
    pub fn role(self) -> ColumnRole {
        match self {
            Self::SampleId => ColumnRole::SampleId,
            Self::SampleName => ColumnRole::SampleName,
        }
    }

    pub fn category(self) -> ErrorCategory {
        match self {
            Self::SampleId => ErrorCategory::SampleId,
            Self::SampleName => ErrorCategory::SampleName,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::SampleId => "Sample_ID",
            Self::SampleName => "Sample_Name",
        }
    }
}

pub fn is_valid_identifier_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '-'
}

/// Check one identifier column.
///
/// A missing Sample_ID column is an input error; Sample_Name is optional and
/// skipped when absent or entirely empty.
pub fn check(
    sheet: &SampleSheet,
    columns: &ColumnMap,
    column: IdentifierColumn,
    report: &mut ErrorReport,
) -> Result<()> {
    let label = column.label();
    let category = column.category();
    let table = &sheet.table;

    let Some(position) = columns.get(column.role()) else {
        if column == IdentifierColumn::SampleName {
            debug!("no Sample_Name column, skipping name checks");
            return Ok(());
        }
        return Err(ValidateError::MissingColumn {
            column: label.to_string(),
        });
    };

    if column == IdentifierColumn::SampleName
        && table.column_values(position).all(CellValue::is_missing)
    {
        debug!("Sample_Name column is empty, skipping name checks");
        return Ok(());
    }

    for (offset, cell) in table.column_values(position).enumerate() {
        let line = sheet.line_number(offset);
        let Some(value) = cell.as_text() else {
            report.push(
                category,
                format!("{label} in row {line} is missing / invalid: ({cell})"),
            );
            continue;
        };

        if !value.chars().all(is_valid_identifier_char) {
            report.push(
                category,
                format!("Invalid characters in sample: {value} in row {line}"),
            );
        }

        if value.chars().count() > MAX_IDENTIFIER_LENGTH {
            report.push(
                category,
                format!(
                    "{label} invalid (> {MAX_IDENTIFIER_LENGTH} characters) in row {line}: {value}"
                ),
            );
        }
    }

    match column {
        IdentifierColumn::SampleName => {
            let names = table.column_values(position).filter_map(CellValue::as_text);
            for name in duplicated_values(names) {
                report.push(category, format!("Duplicate Sample Name present: {name}"));
            }
        }
        IdentifierColumn::SampleId => {
            for id in duplicates::unresolved_duplicate_ids(table, position) {
                report.push(
                    category,
                    format!(
                        "Duplicate sample ID found in same lane and / or with same indices: {id}"
                    ),
                );
            }
        }
    }

    Ok(())
}
