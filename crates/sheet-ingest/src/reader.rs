//! Sample sheet reading.
//!
//! A sheet is a block of free-form metadata lines followed by a CSV table.
//! The header runs up to and including the first line starting with
//! [`COLUMN_HEADER_PREFIX`]; that line names the table columns.

use std::path::Path;

use csv::ReaderBuilder;
use tracing::{debug, warn};

use sheet_model::{CellValue, HeaderLines, Row, SampleSheet, SampleTable};

use crate::error::{IngestError, Result};

/// Column-name rows always start with this prefix.
pub const COLUMN_HEADER_PREFIX: &str = "Sample_";

const IN_MEMORY_SOURCE: &str = "<memory>";

/// Read and split a sample sheet file.
pub fn read_sample_sheet(path: &Path) -> Result<SampleSheet> {
    let text = std::fs::read_to_string(path).map_err(|e| IngestError::from_io(path, e))?;
    parse_with_source(&text, path)
}

/// Split an in-memory sample sheet.
pub fn parse_sample_sheet(text: &str) -> Result<SampleSheet> {
    parse_with_source(text, Path::new(IN_MEMORY_SOURCE))
}

fn parse_with_source(text: &str, path: &Path) -> Result<SampleSheet> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);

    let mut lines = Vec::new();
    let mut body_start = None;
    let mut consumed = 0usize;
    for line in text.split_inclusive('\n') {
        consumed += line.len();
        let line = line.trim_end();
        lines.push(line.to_string());
        if line.starts_with(COLUMN_HEADER_PREFIX) {
            body_start = Some(consumed);
            break;
        }
    }
    let Some(body_start) = body_start else {
        return Err(IngestError::NoColumnHeader {
            path: path.to_path_buf(),
        });
    };

    let columns = match lines.last() {
        Some(line) => parse_columns(line, path)?,
        None => Vec::new(),
    };
    let table = read_body(&text[body_start..], columns, path)?;
    let sheet = SampleSheet::new(HeaderLines::new(lines), table);

    debug!(
        source = %path.display(),
        header_count = sheet.header_count,
        columns = sheet.table.columns.len(),
        rows = sheet.table.len(),
        "read sample sheet"
    );
    Ok(sheet)
}

fn parse_columns(line: &str, path: &Path) -> Result<Vec<String>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .from_reader(line.as_bytes());
    match reader.records().next() {
        Some(record) => {
            let record = record.map_err(|source| IngestError::CsvParse {
                path: path.to_path_buf(),
                source,
            })?;
            Ok(record.iter().map(str::to_string).collect())
        }
        None => Ok(Vec::new()),
    }
}

fn read_body(body: &str, columns: Vec<String>, path: &Path) -> Result<SampleTable> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(body.as_bytes());

    let width = columns.len();
    let mut table = SampleTable::new(columns);
    let mut overlong = 0usize;
    for record in reader.records() {
        let record = record.map_err(|source| IngestError::CsvParse {
            path: path.to_path_buf(),
            source,
        })?;
        if record.len() > width {
            overlong += 1;
        }
        let cells = (0..width).map(|idx| to_cell(record.get(idx))).collect();
        table.rows.push(Row::new(cells));
    }

    if overlong > 0 {
        warn!(
            source = %path.display(),
            rows = overlong,
            columns = width,
            "rows with more fields than named columns were truncated"
        );
    }
    Ok(table)
}

fn to_cell(raw: Option<&str>) -> CellValue {
    match raw {
        Some(value) if !value.is_empty() => CellValue::text(value),
        _ => CellValue::Missing,
    }
}
