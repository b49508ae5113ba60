//! Barcode index column checks.

use sheet_model::{
    CellValue, ColumnMap, ColumnRole, ErrorCategory, ErrorReport, SampleSheet,
    normalize_column_name,
};

use crate::util::duplicated_values;

pub const NO_INDEX_COLUMN: &str = "Sample sheet appears to have no index column (index / Index)";

pub fn is_valid_base(c: char) -> bool {
    matches!(c, 'A' | 'C' | 'G' | 'T')
}

/// Check the primary and, when present, secondary index columns.
pub fn check(sheet: &SampleSheet, columns: &ColumnMap, report: &mut ErrorReport) {
    match columns.get(ColumnRole::Index) {
        Some(position) => check_column(sheet, position, report),
        None => report.push(ErrorCategory::Index, NO_INDEX_COLUMN),
    }

    if let Some(position) = columns.get(ColumnRole::Index2) {
        check_column(sheet, position, report);
    }
}

fn check_column(sheet: &SampleSheet, position: usize, report: &mut ErrorReport) {
    let table = &sheet.table;
    let name = normalize_column_name(&table.columns[position]);
    let category = if name.contains('2') {
        ErrorCategory::Index2
    } else {
        ErrorCategory::Index
    };

    for (offset, cell) in table.column_values(position).enumerate() {
        let Some(value) = cell.as_text() else {
            continue;
        };
        if !value.chars().all(is_valid_base) {
            report.push(
                category,
                format!(
                    "Invalid characters found in index: {value} at row {}",
                    sheet.line_number(offset)
                ),
            );
        }
    }

    let values = table.column_values(position).filter_map(CellValue::as_text);
    for value in duplicated_values(values) {
        report.push(
            category,
            format!("Duplicate indices found in {category}: {value}"),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sheet_model::{HeaderLines, Row, SampleTable};

    fn sheet(columns: &[&str], rows: &[&[Option<&str>]]) -> SampleSheet {
        let mut table = SampleTable::new(columns.iter().map(|c| c.to_string()).collect());
        for row in rows {
            table
                .push_row(Row::new(row.iter().copied().map(CellValue::from).collect()))
                .unwrap();
        }
        let header: HeaderLines = ["[Header]", "[Data]", "Sample_ID,index"].into_iter().collect();
        SampleSheet::new(header, table)
    }

    fn run(sheet: &SampleSheet) -> ErrorReport {
        let columns = ColumnMap::resolve(&sheet.table.columns);
        let mut report = ErrorReport::new();
        check(sheet, &columns, &mut report);
        report
    }

    #[test]
    fn missing_index_column_is_reported_once() {
        let sheet = sheet(&["Sample_ID", "index2"], &[&[Some("S1"), Some("ACGTxx")]]);
        let report = run(&sheet);
        assert_eq!(report.messages(ErrorCategory::Index), [NO_INDEX_COLUMN]);
        assert_eq!(
            report.messages(ErrorCategory::Index2),
            ["Invalid characters found in index: ACGTxx at row 4"]
        );
    }

    #[test]
    fn invalid_bases_and_duplicates_per_column() {
        let sheet = sheet(
            &["Sample_ID", "Index", "Index2"],
            &[
                &[Some("S1"), Some("ACTAGTGCTTxx"), Some("CGCTAAGGCT")],
                &[Some("S2"), Some("CACGAGTATG"), Some("CGCTAAGGCT")],
                &[Some("S3"), Some("CACGAGTATG"), Some("acgt")],
            ],
        );
        let report = run(&sheet);
        assert_eq!(
            report.messages(ErrorCategory::Index),
            [
                "Invalid characters found in index: ACTAGTGCTTxx at row 4",
                "Duplicate indices found in index: CACGAGTATG",
            ]
        );
        assert_eq!(
            report.messages(ErrorCategory::Index2),
            [
                "Invalid characters found in index: acgt at row 6",
                "Duplicate indices found in index2: CGCTAAGGCT",
            ]
        );
    }

    #[test]
    fn invalid_value_is_also_counted_as_duplicate() {
        let sheet = sheet(
            &["Sample_ID", "index"],
            &[&[Some("S1"), Some("NNNN")], &[Some("S2"), Some("NNNN")]],
        );
        let report = run(&sheet);
        assert_eq!(report.messages(ErrorCategory::Index).len(), 3);
    }

    #[test]
    fn missing_cells_are_skipped() {
        let sheet = sheet(
            &["Sample_ID", "index"],
            &[&[Some("S1"), None], &[Some("S2"), None]],
        );
        assert!(run(&sheet).is_clean());
    }

    #[test]
    fn trailing_line_break_on_column_name_is_tolerated() {
        let sheet = sheet(&["Sample_ID", "index", "index2\r"], &[&[
            Some("S1"),
            Some("ACGT"),
            Some("GGXX"),
        ]]);
        let report = run(&sheet);
        assert!(report.messages(ErrorCategory::Index).is_empty());
        assert_eq!(report.messages(ErrorCategory::Index2).len(), 1);
    }
}
