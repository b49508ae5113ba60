//! Lane/index-aware duplicate Sample_ID detection.
//!
//! A Sample_ID may legitimately repeat when the repeats sit in different
//! lanes or carry different indices. Rows sharing an ID are reduced to the
//! ID, lane and index columns; the ID is a problem only when two of those
//! reduced rows are identical.

use std::collections::{HashMap, HashSet};

use sheet_model::{CellValue, ColumnRole, SampleTable};

use crate::util::duplicated_values;

/// IDs repeated without a differentiating lane or index, in first-seen order.
pub fn unresolved_duplicate_ids(table: &SampleTable, id_position: usize) -> Vec<&str> {
    let ids = table.column_values(id_position).filter_map(CellValue::as_text);
    let repeated = duplicated_values(ids);
    if repeated.is_empty() {
        return Vec::new();
    }
    let repeated_set: HashSet<&str> = repeated.iter().copied().collect();

    let key_columns: Vec<usize> = table
        .columns
        .iter()
        .enumerate()
        .filter(|(_, name)| ColumnRole::Lane.matches(name) || ColumnRole::Index.matches(name))
        .map(|(position, _)| position)
        .collect();

    let mut seen: HashMap<&str, HashSet<Vec<&CellValue>>> = HashMap::new();
    let mut clashing: HashSet<&str> = HashSet::new();
    for row in &table.rows {
        let Some(id) = row.get(id_position).as_text() else {
            continue;
        };
        if !repeated_set.contains(id) {
            continue;
        }
        let key: Vec<&CellValue> = key_columns.iter().map(|&col| row.get(col)).collect();
        if !seen.entry(id).or_default().insert(key) {
            clashing.insert(id);
        }
    }

    repeated
        .into_iter()
        .filter(|id| clashing.contains(id))
        .collect()
}
