//! Sample_ID conformance against caller-supplied patterns.

use regex::Regex;
use sheet_model::{CellValue, ErrorCategory, ErrorReport, SampleTable};
use tracing::debug;

use crate::error::{Result, ValidateError};

/// Compiled Sample_ID patterns; a value conforms when any pattern matches.
#[derive(Debug, Clone, Default)]
pub struct NamePatterns {
    patterns: Vec<Regex>,
}

impl NamePatterns {
    /// Compile every pattern up front, failing on the first invalid one.
    pub fn compile<S: AsRef<str>>(patterns: &[S]) -> Result<Self> {
        let patterns = patterns
            .iter()
            .map(|pattern| {
                let pattern = pattern.as_ref();
                Regex::new(pattern).map_err(|source| ValidateError::InvalidPattern {
                    pattern: pattern.to_string(),
                    source,
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { patterns })
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Unanchored search, patterns tried in order.
    pub fn is_match(&self, value: &str) -> bool {
        self.patterns.iter().any(|pattern| pattern.is_match(value))
    }
}

/// Report every present Sample_ID matching none of the patterns.
pub fn check(
    table: &SampleTable,
    id_position: usize,
    patterns: &NamePatterns,
    report: &mut ErrorReport,
) {
    if patterns.is_empty() {
        return;
    }
    debug!(patterns = patterns.len(), "checking sample ID conformance");

    for value in table.column_values(id_position).filter_map(CellValue::as_text) {
        if !patterns.is_match(value) {
            report.push(
                ErrorCategory::SampleId,
                format!(
                    "Sample ID {value} is invalid, please ensure it conforms to the \
                     expected format for the given sample assay"
                ),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sheet_model::Row;

    fn ids(values: &[Option<&str>]) -> SampleTable {
        let mut table = SampleTable::new(vec!["Sample_ID".to_string()]);
        for value in values {
            table.push_row(Row::new(vec![CellValue::from(*value)])).unwrap();
        }
        table
    }

    #[test]
    fn any_pattern_match_is_enough() {
        let patterns = NamePatterns::compile(&["^WES[0-9]+$", "-EGG2$"]).unwrap();
        let table = ids(&[Some("WES12"), Some("2107909-MYE-F-EGG2"), Some("X1"), None]);
        let mut report = ErrorReport::new();
        check(&table, 0, &patterns, &mut report);
        assert_eq!(
            report.messages(ErrorCategory::SampleId),
            ["Sample ID X1 is invalid, please ensure it conforms to the expected format for the given sample assay"]
        );
    }

    #[test]
    fn patterns_search_rather_than_full_match() {
        let patterns = NamePatterns::compile(&["MYE"]).unwrap();
        assert!(patterns.is_match("2107909-MYE-F"));
        assert!(!patterns.is_match("2107909-LYM-F"));
    }

    #[test]
    fn no_patterns_disables_the_check() {
        let patterns = NamePatterns::compile::<&str>(&[]).unwrap();
        let table = ids(&[Some("anything at all")]);
        let mut report = ErrorReport::new();
        check(&table, 0, &patterns, &mut report);
        assert!(report.is_clean());
    }

    #[test]
    fn invalid_pattern_is_an_input_error() {
        let err = NamePatterns::compile(&["[0-9"]).unwrap_err();
        assert!(matches!(err, ValidateError::InvalidPattern { ref pattern, .. } if pattern == "[0-9"));
    }
}
