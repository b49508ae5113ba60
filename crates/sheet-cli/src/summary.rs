use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use sheet_model::ErrorReport;

pub const SUCCESS_MESSAGE: &str = "SUCCESS: Samplesheet has passed validation.";

/// Messages grouped by category, or the success line for a clean report.
pub fn render_text(report: &ErrorReport) -> String {
    if report.is_clean() {
        return SUCCESS_MESSAGE.to_string();
    }
    let mut lines = Vec::new();
    for (category, messages) in report.iter() {
        if messages.is_empty() {
            continue;
        }
        lines.push(format!("Errors found in {category}:"));
        lines.extend(messages.iter().map(|message| format!("\t{message}")));
    }
    lines.join("\n")
}

/// Per-category message counts with a total row.
pub fn count_table(report: &ErrorReport) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Category"), header_cell("Errors")]);
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(60);
    if let Some(column) = table.column_mut(1) {
        column.set_cell_alignment(CellAlignment::Right);
    }
    for (category, messages) in report.iter() {
        table.add_row(vec![Cell::new(category), count_cell(messages.len())]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        count_cell(report.error_count()).add_attribute(Attribute::Bold),
    ]);
    table
}

pub fn render_json(report: &ErrorReport) -> serde_json::Result<String> {
    serde_json::to_string_pretty(report)
}

pub fn print_text_report(report: &ErrorReport) {
    println!("{}", render_text(report));
    if !report.is_clean() {
        println!("{}", count_table(report));
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label).add_attribute(Attribute::Bold)
}

fn count_cell(count: usize) -> Cell {
    if count == 0 {
        Cell::new(count).fg(Color::DarkGrey)
    } else {
        Cell::new(count).fg(Color::Red)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sheet_model::ErrorCategory;

    #[test]
    fn clean_report_renders_success() {
        assert_eq!(render_text(&ErrorReport::new()), SUCCESS_MESSAGE);
    }

    #[test]
    fn empty_categories_are_omitted() {
        let mut report = ErrorReport::new();
        report.push(ErrorCategory::Index2, "Invalid characters in sample: S1 in row 5");
        assert_eq!(
            render_text(&report),
            "Errors found in index2:\n\tInvalid characters in sample: S1 in row 5"
        );
    }

    #[test]
    fn count_table_lists_every_category() {
        let mut report = ErrorReport::new();
        report.push(ErrorCategory::Header, "a");
        report.push(ErrorCategory::Header, "b");
        let rendered = count_table(&report).to_string();
        for category in ErrorCategory::all() {
            assert!(rendered.contains(category.key()), "{rendered}");
        }
        assert!(rendered.contains("TOTAL"));
    }
}
