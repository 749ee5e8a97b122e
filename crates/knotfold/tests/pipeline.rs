use std::io::Write;

use tempfile::NamedTempFile;

use kf_nussinov::Predictor;
use knotfold::records::read_records;
use knotfold::report::ReportRow;
use knotfold::report::write_table;

const INPUT: &str = "\
>hairpin with a knot
GGGAAAUCCGGGAAAUCC
..[[..]]..........
>two stems
GGGAAACCCAAAGGGAAACCC
.........((.....))...
>broken annotation
GGGAAACCC
((...))))
";

#[test]
fn test_read_records_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(INPUT.as_bytes()).unwrap();

    let records = read_records(file.path()).unwrap();
    assert_eq!(records.len(), 3);
    assert_eq!(records[1].sequence, "GGGAAACCCAAAGGGAAACCC");
    assert_eq!(records[2].structure, "((...))))");
}

#[test]
fn test_read_records_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = read_records(&dir.path().join("missing.txt")).unwrap_err();
    assert!(err.to_string().contains("missing.txt"));
}

#[test]
fn test_predict_and_report() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(INPUT.as_bytes()).unwrap();
    let records = read_records(file.path()).unwrap();

    let predictor = Predictor::default();
    let rows: Vec<ReportRow> = records
        .iter()
        .filter_map(|r| predictor.predict(&r.sequence, &r.structure).ok().map(|p| ReportRow::new(r, &p)))
        .collect();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[1].knot_aware, "(((...)))((.....))...");

    let mut out = Vec::new();
    write_table(&mut out, &rows, false).unwrap();
    let text = String::from_utf8(out).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[1], "0\t18\t8");
    assert_eq!(lines[2], "1\t21\t11");
}
