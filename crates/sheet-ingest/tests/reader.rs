use std::io::Write;

use tempfile::NamedTempFile;

use sheet_ingest::{IngestError, read_name_patterns, read_sample_sheet};
use sheet_model::CellValue;

fn create_temp_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{}", content).unwrap();
    file
}

const SHEET: &str = "\
[Header],,,,,,
IEMFileVersion,4,,,,,
Investigator Name,Jane Doe,,,,,
Experiment Name,RUN42,,,,,
Date,01/10/2021,,,,,
[Reads],,,,,,
151,,,,,,
151,,,,,,
[Settings],,,,,,
Adapter,AGATCGGAAGAGCACACGTCTGAACTCCAGTCA,,,,,
AdapterRead2,AGATCGGAAGAGCGTCGTGTAGGGAAAGAGTGT,,,,,
[Data],,,,,,
Sample_ID,Sample_Name,Sample_Plate,Sample_Well,Index_Plate_Well,index,index2
S-001,Name-001,,A01,A01,ACTAGTGCTT,ACTCTGTTCT
,,,B01,B01,CACGAGTATG,CGCTAAGGCT
";

#[test]
fn reads_sheet_from_disk() {
    let file = create_temp_file(SHEET);
    let sheet = read_sample_sheet(file.path()).expect("read sheet");

    assert_eq!(sheet.header_count, 13);
    assert_eq!(sheet.header.len(), 13);
    assert_eq!(sheet.header.get(11), Some("[Data],,,,,,"));
    assert_eq!(sheet.table.columns.len(), 7);
    assert_eq!(sheet.table.len(), 2);
    assert_eq!(sheet.line_number(1), 15);

    let second = &sheet.table.rows[1];
    assert!(second.get(0).is_missing());
    assert!(second.get(1).is_missing());
    assert_eq!(second.get(5), &CellValue::text("CACGAGTATG"));
}

#[test]
fn missing_file_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let err = read_sample_sheet(&dir.path().join("absent.csv")).unwrap_err();
    assert!(matches!(err, IngestError::FileNotFound { .. }));
}

#[test]
fn reads_pattern_file() {
    let file = create_temp_file("[0-9]{7}-[A-Z0-9]*-MYE-[MF]-EGG2\nWES[0-9]+\n");
    let patterns = read_name_patterns(file.path()).expect("read patterns");
    assert_eq!(patterns, vec!["[0-9]{7}-[A-Z0-9]*-MYE-[MF]-EGG2", "WES[0-9]+"]);
}
