//! Validation check modules.
//!
//! Each module performs a specific type of validation check and appends its
//! messages to the shared report.

pub mod conformance;
pub mod duplicates;
pub mod header;
pub mod identifier;
pub mod index;

use sheet_model::{ColumnMap, ColumnRole, ErrorReport, SampleSheet};

use crate::context::ValidationOptions;
use crate::error::{Result, ValidateError};

use self::conformance::NamePatterns;
use self::identifier::IdentifierColumn;

/// Run all validation checks on a sheet.
pub fn run_all(
    sheet: &SampleSheet,
    columns: &ColumnMap,
    patterns: &NamePatterns,
    options: &ValidationOptions,
    report: &mut ErrorReport,
) -> Result<()> {
    let id_position = columns
        .get(ColumnRole::SampleId)
        .ok_or_else(|| ValidateError::MissingColumn {
            column: ColumnRole::SampleId.to_string(),
        })?;

    // 1. Header structure and metadata fields
    header::check(&sheet.header, options, report);

    // 2. Identifier cells and duplicates
    identifier::check(sheet, columns, IdentifierColumn::SampleId, report)?;
    identifier::check(sheet, columns, IdentifierColumn::SampleName, report)?;

    // 3. Sample ID naming patterns
    conformance::check(&sheet.table, id_position, patterns, report);

    // 4. Barcode indices
    index::check(sheet, columns, report);

    Ok(())
}
