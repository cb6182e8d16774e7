//! Integration tests for the full matching pass, from selection to the
//! assembled report.

use std::io::Write;

use lexiscan_engine::{AuditSession, NullProgress, ProgressSink, Selection};
use lexiscan_model::{AuditError, Lexicon, LexiconEntry, MetadataTable};
use tempfile::NamedTempFile;

fn entry(term: &str, category: &str, plural: bool) -> LexiconEntry {
    LexiconEntry {
        term: term.to_string(),
        category: category.to_string(),
        plural,
    }
}

fn table(headers: &[&str], rows: &[&[&str]]) -> MetadataTable {
    MetadataTable::new(
        headers.iter().map(|name| name.to_string()).collect(),
        rows.iter()
            .map(|row| row.iter().map(|cell| cell.to_string()).collect())
            .collect(),
    )
}

fn selection(categories: &[&str], columns: &[&str], id_column: &str) -> Selection {
    Selection {
        categories: categories.iter().map(|name| name.to_string()).collect(),
        columns: columns.iter().map(|name| name.to_string()).collect(),
        id_column: id_column.to_string(),
        export_columns: Vec::new(),
    }
}

fn session(lexicon: Lexicon, metadata: MetadataTable, selection: Selection) -> AuditSession {
    let mut session = AuditSession::new();
    session.set_lexicon(lexicon);
    session.set_metadata(metadata);
    session.set_selection(selection);
    session
}

#[derive(Default)]
struct RecordingProgress {
    events: Vec<String>,
}

impl ProgressSink for RecordingProgress {
    fn term_started(&mut self, category: &str, term: &str, position: usize, total: usize) {
        self.events
            .push(format!("{category}:{term}:{position}/{total}"));
    }
}

#[test]
fn finds_whole_word_matches_with_context() {
    let lexicon = Lexicon::new(vec![
        entry("test_word_one", "Test_Cat_One", true),
        entry("test_word_two", "Test_Cat_Two", false),
    ]);
    let metadata = table(
        &["System No [001]", "Title [245]"],
        &[
            &["12957554", "Effects based warfare / test_word_one "],
            &["12957555", "warfare / test_word_ones and more"],
        ],
    );
    let mut session = session(
        lexicon,
        metadata,
        selection(&["Test_Cat_One"], &["Title [245]"], "System No [001]"),
    );
    let report = session.run_matching(&mut NullProgress).expect("matches");

    assert_eq!(report.rows.len(), 2);
    let first = &report.rows[0];
    assert_eq!(first.identifier, "12957554");
    assert_eq!(first.term, "test_word_one");
    assert_eq!(first.category, "Test_Cat_One");
    assert_eq!(first.context, "Effects based warfare / test_word_one ");
    assert_eq!(first.field, "Title [245]");
    assert_eq!(first.occurrences, 1);

    let second = &report.rows[1];
    assert_eq!(second.identifier, "12957555");
    assert_eq!(second.context, "warfare / test_word_ones and more");
    assert_eq!(second.occurrences, 1);
}

#[test]
fn rows_are_sorted_by_category_then_term() {
    let lexicon = Lexicon::new(vec![
        entry("zebra", "Zoo", false),
        entry("walnut", "Arboretum", false),
        entry("acorn", "Arboretum", false),
    ]);
    let metadata = table(
        &["Id", "Notes"],
        &[&["1", "a zebra under a walnut tree dropped an acorn"]],
    );
    let mut session = session(lexicon, metadata, selection(&[], &["Notes"], "Id"));
    let report = session.run_matching(&mut NullProgress).expect("matches");

    let order: Vec<(&str, &str)> = report
        .rows
        .iter()
        .map(|row| (row.category.as_str(), row.term.as_str()))
        .collect();
    assert_eq!(
        order,
        [
            ("Arboretum", "acorn"),
            ("Arboretum", "walnut"),
            ("Zoo", "zebra"),
        ]
    );
}

#[test]
fn occurrences_count_every_hit_in_the_cell() {
    let lexicon = Lexicon::new(vec![entry("cat", "Animals", true)]);
    let metadata = table(&["Id", "Notes"], &[&["1", "cat cats CAT concatenate"]]);
    let mut session = session(lexicon, metadata, selection(&[], &["Notes"], "Id"));
    let report = session.run_matching(&mut NullProgress).expect("matches");

    assert_eq!(report.rows.len(), 1);
    assert_eq!(report.rows[0].occurrences, 3);
}

#[test]
fn one_row_per_matching_column() {
    let lexicon = Lexicon::new(vec![entry("native", "Terms", false)]);
    let metadata = table(
        &["Id", "Title", "Subject"],
        &[&["1", "native plants", "native species of the region"]],
    );
    let mut session = session(
        lexicon,
        metadata,
        selection(&[], &["Title", "Subject"], "Id"),
    );
    let report = session.run_matching(&mut NullProgress).expect("matches");

    assert_eq!(report.rows.len(), 2);
    assert_eq!(report.rows[0].field, "Title");
    assert_eq!(report.rows[1].field, "Subject");
}

#[test]
fn export_columns_are_carried_through() {
    let lexicon = Lexicon::new(vec![entry("native", "Terms", false)]);
    let metadata = table(
        &["Id", "Title", "Shelfmark", "Date"],
        &[&["1", "native plants", "X.123", "1952"]],
    );
    let mut sel = selection(&[], &["Title"], "Id");
    sel.export_columns = vec!["Date".to_string(), "Shelfmark".to_string()];
    let mut session = session(lexicon, metadata, sel);
    let report = session.run_matching(&mut NullProgress).expect("matches");

    assert_eq!(report.export_columns, ["Date", "Shelfmark"]);
    assert_eq!(report.rows[0].export_values, ["1952", "X.123"]);
}

#[test]
fn unknown_categories_are_rejected_sorted_and_deduplicated() {
    let lexicon = Lexicon::new(vec![entry("native", "Terms", false)]);
    let metadata = table(&["Id", "Title"], &[&["1", "native plants"]]);
    let mut session = session(
        lexicon,
        metadata,
        selection(&["Zzz", "Aaa", "Zzz"], &["Title"], "Id"),
    );
    let error = session
        .run_matching(&mut NullProgress)
        .expect_err("unknown categories");
    match error {
        AuditError::UnknownCategories(names) => assert_eq!(names, ["Aaa", "Zzz"]),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn unknown_columns_include_export_columns() {
    let lexicon = Lexicon::new(vec![entry("native", "Terms", false)]);
    let metadata = table(&["Id", "Title"], &[&["1", "native plants"]]);
    let mut sel = selection(&[], &["Nope"], "Id");
    sel.export_columns = vec!["Also".to_string()];
    let mut session = session(lexicon, metadata, sel);
    let error = session
        .run_matching(&mut NullProgress)
        .expect_err("unknown columns");
    match error {
        AuditError::UnknownColumns(names) => assert_eq!(names, ["Also", "Nope"]),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn unknown_identifier_column_is_rejected() {
    let lexicon = Lexicon::new(vec![entry("native", "Terms", false)]);
    let metadata = table(&["Id", "Title"], &[&["1", "native plants"]]);
    let mut session = session(lexicon, metadata, selection(&[], &["Title"], "Missing"));
    let error = session
        .run_matching(&mut NullProgress)
        .expect_err("unknown identifier column");
    assert!(matches!(error, AuditError::UnknownIdentifierColumn(name) if name == "Missing"));
}

#[test]
fn matching_before_loading_fails() {
    let mut session = AuditSession::new();
    session.set_lexicon(Lexicon::new(vec![entry("native", "Terms", false)]));
    let error = session
        .run_matching(&mut NullProgress)
        .expect_err("metadata missing");
    assert!(matches!(error, AuditError::NotLoaded));
}

#[test]
fn zero_matches_is_an_error() {
    let lexicon = Lexicon::new(vec![entry("unfindable", "Terms", false)]);
    let metadata = table(&["Id", "Title"], &[&["1", "nothing relevant here"]]);
    let mut session = session(lexicon, metadata, selection(&[], &["Title"], "Id"));
    let error = session
        .run_matching(&mut NullProgress)
        .expect_err("no matches");
    assert!(matches!(error, AuditError::EmptyResult));
}

#[test]
fn empty_category_selection_scans_every_category() {
    let lexicon = Lexicon::new(vec![
        entry("alpha", "CatOne", false),
        entry("beta", "CatTwo", false),
    ]);
    let metadata = table(&["Id", "Notes"], &[&["1", "alpha and beta"]]);
    let mut session = session(lexicon, metadata, selection(&[], &["Notes"], "Id"));
    let report = session.run_matching(&mut NullProgress).expect("matches");
    assert_eq!(report.rows.len(), 2);
}

#[test]
fn progress_reports_each_term_with_category_positions() {
    let lexicon = Lexicon::new(vec![
        entry("alpha", "CatOne", false),
        entry("beta", "CatOne", false),
        entry("gamma", "CatTwo", false),
    ]);
    let metadata = table(&["Id", "Notes"], &[&["1", "alpha beta gamma"]]);
    let mut session = session(lexicon, metadata, selection(&[], &["Notes"], "Id"));
    let mut progress = RecordingProgress::default();
    session.run_matching(&mut progress).expect("matches");

    assert_eq!(
        progress.events,
        [
            "CatOne:alpha:1/2",
            "CatOne:beta:2/2",
            "CatTwo:gamma:1/1",
        ]
    );
}

#[test]
fn rerunning_replaces_the_previous_result() {
    let lexicon = Lexicon::new(vec![entry("native", "Terms", false)]);
    let metadata = table(&["Id", "Title"], &[&["1", "native plants"]]);
    let mut session = session(lexicon, metadata, selection(&[], &["Title"], "Id"));
    session.run_matching(&mut NullProgress).expect("matches");
    assert!(session.matches().is_some());

    session.set_metadata(table(&["Id", "Title"], &[&["2", "nothing"]]));
    assert!(session.matches().is_none());
}

#[test]
fn loads_inputs_from_files() {
    let mut lexicon_file = NamedTempFile::new().expect("create lexicon file");
    lexicon_file
        .write_all(b"term,category,plural\ntest_word_one,Test_Cat_One,True\n")
        .expect("write lexicon");
    let mut metadata_file = NamedTempFile::new().expect("create metadata file");
    metadata_file
        .write_all(
            b"System No [001],Title [245]\n\
              12957554,Effects based warfare / test_word_one\n",
        )
        .expect("write metadata");

    let mut session = AuditSession::new();
    session.load_lexicon(lexicon_file.path()).expect("lexicon");
    session
        .load_metadata(metadata_file.path())
        .expect("metadata");
    assert_eq!(session.available_categories(), ["Test_Cat_One"]);
    assert_eq!(
        session.available_columns(),
        ["System No [001]", "Title [245]"]
    );

    session.select_columns(vec!["Title [245]".to_string()]);
    session.select_identifier_column("System No [001]");
    let report = session.run_matching(&mut NullProgress).expect("matches");
    assert_eq!(report.rows.len(), 1);
    assert_eq!(report.rows[0].context, "Effects based warfare / test_word_one");
}
