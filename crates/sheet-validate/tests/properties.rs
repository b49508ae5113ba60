//! Property tests for identifier and duplicate handling.

use proptest::prelude::*;

use sheet_model::{CellValue, ErrorCategory, HeaderLines, Row, SampleSheet, SampleTable};
use sheet_validate::{ValidationContext, validate_sheet};

fn build_sheet(rows: &[(String, String, String)]) -> SampleSheet {
    let mut table = SampleTable::new(vec![
        "Sample_ID".to_string(),
        "Lane".to_string(),
        "index".to_string(),
    ]);
    for (id, lane, index) in rows {
        table
            .push_row(Row::new(vec![
                CellValue::text(id.as_str()),
                CellValue::text(lane.as_str()),
                CellValue::text(index.as_str()),
            ]))
            .expect("row width");
    }
    let header: HeaderLines = ["[Header]", "[Data]", "Sample_ID,Lane,index"]
        .into_iter()
        .collect();
    SampleSheet::new(header, table)
}

fn row_strategy() -> impl Strategy<Value = (String, String, String)> {
    ("S[1-3]", "[12]", "(AC|GT)")
}

proptest! {
    #[test]
    fn repeated_runs_are_identical(rows in prop::collection::vec(row_strategy(), 0..20)) {
        let sheet = build_sheet(&rows);
        let ctx = ValidationContext::new().with_patterns(vec!["S[12]".to_string()]);
        let first = validate_sheet(&sheet, &ctx).expect("validate");
        let second = validate_sheet(&sheet, &ctx).expect("validate");
        prop_assert_eq!(first, second);
    }

    #[test]
    fn duplicate_id_fires_once_per_clashing_value(rows in prop::collection::vec(row_strategy(), 0..20)) {
        let sheet = build_sheet(&rows);
        let report = validate_sheet(&sheet, &ValidationContext::new()).expect("validate");
        let duplicate_messages: Vec<&String> = report
            .messages(ErrorCategory::SampleId)
            .iter()
            .filter(|m| m.starts_with("Duplicate sample ID"))
            .collect();

        for id in ["S1", "S2", "S3"] {
            let mut keys: Vec<(&str, &str)> = rows
                .iter()
                .filter(|(row_id, _, _)| row_id == id)
                .map(|(_, lane, index)| (lane.as_str(), index.as_str()))
                .collect();
            let before = keys.len();
            keys.sort_unstable();
            keys.dedup();
            let expected = usize::from(keys.len() < before);
            let found = duplicate_messages
                .iter()
                .filter(|m| m.ends_with(&format!(": {id}")))
                .count();
            prop_assert_eq!(found, expected);
        }
    }

    #[test]
    fn one_invalid_character_message_per_offending_value(
        ids in prop::collection::btree_set("[A-Za-z0-9_ .~-]{1,12}", 1..15)
    ) {
        let rows: Vec<(String, String, String)> = ids
            .iter()
            .map(|id| (id.clone(), "1".to_string(), "ACGT".to_string()))
            .collect();
        let sheet = build_sheet(&rows);
        let report = validate_sheet(&sheet, &ValidationContext::new()).expect("validate");

        for (offset, id) in ids.iter().enumerate() {
            let offending = !id
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
            let expected = format!(
                "Invalid characters in sample: {id} in row {}",
                sheet.line_number(offset)
            );
            let count = report
                .messages(ErrorCategory::SampleId)
                .iter()
                .filter(|m| **m == expected)
                .count();
            prop_assert_eq!(count, usize::from(offending));
        }
    }
}
