//! Header section rules.
//!
//! Every rule is evaluated against every line; no rule stops the scan.

use std::sync::LazyLock;

use regex::Regex;
use sheet_model::{ErrorCategory, ErrorReport, HeaderLines};

use crate::context::ValidationOptions;

pub const HEADER_MARKER: &str = "[Header]";
pub const DATA_MARKER: &str = "[Data]";
pub const READS_MARKER: &str = "[Reads]";
pub const STRICT_COLUMN_PREFIX: &str = "Sample_ID,Sample_Name";

/// `Adapter`, `AdapterRead1`, `adapterread2`, ...
static ADAPTER_LINE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^adapter(read)?[12]?").expect("Invalid adapter line regex"));

const ADAPTER_BASES: &str = "ACGTacgt-";

/// Check the header lines, column-name row included.
pub fn check(header: &HeaderLines, options: &ValidationOptions, report: &mut ErrorReport) {
    let total = header.len();

    for (idx, line) in header.iter().enumerate() {
        let line_no = idx + 1;

        if idx == 0 && !line.starts_with(HEADER_MARKER) {
            report.push(
                ErrorCategory::Header,
                format!("Error in line {line_no} of header: value should be {HEADER_MARKER}"),
            );
        }

        if line.starts_with("Investigator") && field(line, 1).is_empty() {
            report.push(
                ErrorCategory::Header,
                format!("Error in line {line_no}: no investigator name given"),
            );
        }

        if line.starts_with("Experiment") && field(line, 1).is_empty() {
            report.push(
                ErrorCategory::Header,
                format!("Error in line {line_no}: no experiment name given"),
            );
        }

        if line.starts_with(READS_MARKER) {
            let value = header.get(idx + 1).unwrap_or("").trim_end_matches(',');
            if !is_numeric(value) {
                report.push(
                    ErrorCategory::Header,
                    format!("Error in value for {READS_MARKER} given on line {line_no}: {value}"),
                );
            }
        }

        if ADAPTER_LINE_REGEX.is_match(line) {
            let sequence = field(line, 1);
            if !sequence.chars().all(|c| ADAPTER_BASES.contains(c)) {
                report.push(
                    ErrorCategory::Header,
                    format!("Error in line {line_no}: invalid adapter sequence {sequence}"),
                );
            }
        }

        if total >= 2 && idx == total - 2 && !line.starts_with(DATA_MARKER) {
            report.push(
                ErrorCategory::Header,
                format!("Error in line {line_no}: the first cell should contain {DATA_MARKER}"),
            );
        }

        if options.strict_column_names && idx == total - 1 && !line.starts_with(STRICT_COLUMN_PREFIX)
        {
            report.push(
                ErrorCategory::Header,
                format!(
                    "Error in line {line_no}: invalid column names given. \
                     Sample_ID and Sample_Name must be the first 2 columns"
                ),
            );
        }
    }
}

/// Comma-separated field, empty when the line is too short.
fn field(line: &str, index: usize) -> &str {
    line.split(',').nth(index).unwrap_or("")
}

fn is_numeric(value: &str) -> bool {
    !value.is_empty() && value.chars().all(char::is_numeric)
}
