//! Integration tests for report export: the CSV output must re-import as
//! a table with the same shape and values.

use lexiscan_ingest::read_metadata;
use lexiscan_model::{MatchReport, MatchRow};
use lexiscan_report::write_report;
use tempfile::tempdir;

fn sample_report() -> MatchReport {
    MatchReport {
        id_column: "System No [001]".to_string(),
        export_columns: vec!["Shelfmark [852]".to_string()],
        rows: vec![
            MatchRow {
                identifier: "12957554".to_string(),
                term: "test_word_one".to_string(),
                category: "Test_Cat_One".to_string(),
                context: "Effects based warfare / test_word_one".to_string(),
                field: "Title [245]".to_string(),
                occurrences: 1,
                export_values: vec!["X.123".to_string()],
            },
            MatchRow {
                identifier: "12957555".to_string(),
                term: "test_word_two".to_string(),
                category: "Test_Cat_Two".to_string(),
                context: "luzes test_word_two para".to_string(),
                field: "Title [245]".to_string(),
                occurrences: 3,
                export_values: vec!["Y.456".to_string()],
            },
        ],
    }
}

#[test]
fn csv_round_trips_through_the_metadata_reader() {
    let dir = tempdir().expect("create temp dir");
    let csv_path = dir.path().join("results.csv");
    let report = sample_report();
    write_report(&report, &csv_path).expect("write report");

    let table = read_metadata(&csv_path).expect("re-import csv");
    assert_eq!(table.headers, report.header());
    assert_eq!(table.row_count(), report.len());
    assert_eq!(table.cell(0, 0), "12957554");
    assert_eq!(table.cell(0, 3), "Effects based warfare / test_word_one");
    assert_eq!(table.cell(1, 5), "3");
    assert_eq!(table.cell(1, 6), "Y.456");
}

#[test]
fn xlsx_sibling_is_written_next_to_the_csv() {
    let dir = tempdir().expect("create temp dir");
    let csv_path = dir.path().join("results.csv");
    let xlsx_path = write_report(&sample_report(), &csv_path).expect("write report");

    assert_eq!(xlsx_path, dir.path().join("results.xlsx"));
    assert!(xlsx_path.is_file());
    assert!(std::fs::metadata(&xlsx_path).expect("stat xlsx").len() > 0);
}
