use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::{debug, info_span};

use sheet_ingest::{read_name_patterns, read_sample_sheet};
use sheet_model::ErrorReport;
use sheet_validate::{ValidationContext, ValidationOptions, validate_sheet};

/// Inputs for one validation run.
#[derive(Debug, Clone, Default)]
pub struct ValidateRequest {
    pub samplesheet: PathBuf,
    pub name_patterns: Vec<String>,
    pub name_patterns_file: Option<PathBuf>,
    pub strict_columns: bool,
}

/// Naming patterns for a run: file patterns first, then command-line ones.
pub fn collect_patterns(request: &ValidateRequest) -> Result<Vec<String>> {
    let mut patterns = Vec::new();
    if let Some(path) = &request.name_patterns_file {
        let from_file = read_name_patterns(path)
            .with_context(|| format!("read name patterns from {}", path.display()))?;
        debug!(count = from_file.len(), "loaded name patterns file");
        patterns.extend(from_file);
    }
    patterns.extend(request.name_patterns.iter().cloned());
    Ok(patterns)
}

pub fn run_validate(request: &ValidateRequest) -> Result<ErrorReport> {
    let span = info_span!("samplesheet", path = %request.samplesheet.display());
    let _guard = span.enter();

    let patterns = collect_patterns(request)?;
    let sheet = read_sample_sheet(&request.samplesheet).context("load sample sheet")?;
    let ctx = ValidationContext::new()
        .with_patterns(patterns)
        .with_options(ValidationOptions {
            strict_column_names: request.strict_columns,
        });
    validate_sheet(&sheet, &ctx).context("validate sample sheet")
}
