//! Sample sheet validation.
//!
//! [`validate_sheet`] runs the header, identifier, conformance and index
//! checks over a parsed sheet and returns every problem found, grouped by
//! category. Problems in the sheet never abort a run; only unusable inputs
//! (an invalid pattern, no Sample_ID column) produce a [`ValidateError`].

pub mod checks;
mod context;
mod error;
mod util;

pub use checks::conformance::NamePatterns;
pub use checks::identifier::{IdentifierColumn, MAX_IDENTIFIER_LENGTH};
pub use context::{ValidationContext, ValidationOptions};
pub use error::{Result, ValidateError};
pub use util::duplicated_values;

use sheet_model::{ColumnMap, ErrorReport, SampleSheet};
use tracing::{debug, info, info_span};

/// Validate a parsed sample sheet.
pub fn validate_sheet(sheet: &SampleSheet, ctx: &ValidationContext) -> Result<ErrorReport> {
    let span = info_span!(
        "validate",
        header_lines = sheet.header.len(),
        rows = sheet.table.len()
    );
    let _guard = span.enter();

    let patterns = NamePatterns::compile(ctx.patterns.as_slice())?;
    let columns = ColumnMap::resolve(&sheet.table.columns);
    debug!(?columns, patterns = patterns.len(), "resolved columns");

    let mut report = ErrorReport::new();
    checks::run_all(sheet, &columns, &patterns, &ctx.options, &mut report)?;

    info!(
        errors = report.error_count(),
        clean = report.is_clean(),
        "validation complete"
    );
    Ok(report)
}
