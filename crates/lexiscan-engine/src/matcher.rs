//! The matching run: validate a selection, scan every selected column for
//! every term in the selected categories, and assemble the sorted report.

use lexiscan_model::{AuditError, Lexicon, MatchReport, MetadataTable, Result};
use tracing::info;

use crate::pattern::TermPattern;
use crate::progress::ProgressSink;
use crate::scanner::scan_column;
use crate::session::Selection;

/// Check a selection against the loaded inputs. Every offending name is
/// reported, sorted and deduplicated, so one failure names all problems
/// of its kind.
pub fn validate_selection(
    lexicon: &Lexicon,
    table: &MetadataTable,
    selection: &Selection,
) -> Result<()> {
    let mut unknown_categories: Vec<String> = selection
        .categories
        .iter()
        .filter(|name| !lexicon.contains_category(name))
        .cloned()
        .collect();
    if !unknown_categories.is_empty() {
        unknown_categories.sort();
        unknown_categories.dedup();
        return Err(AuditError::UnknownCategories(unknown_categories));
    }

    let mut unknown_columns: Vec<String> = selection
        .columns
        .iter()
        .chain(&selection.export_columns)
        .filter(|name| !table.has_column(name))
        .cloned()
        .collect();
    if !unknown_columns.is_empty() {
        unknown_columns.sort();
        unknown_columns.dedup();
        return Err(AuditError::UnknownColumns(unknown_columns));
    }

    if !table.has_column(&selection.id_column) {
        return Err(AuditError::UnknownIdentifierColumn(
            selection.id_column.clone(),
        ));
    }
    Ok(())
}

/// Run the full matching pass and assemble the report.
///
/// Categories are visited in lexicon order, restricted to the selection;
/// terms keep their file order within each category; each term scans the
/// selected columns in selection order. The final rows are sorted by
/// category then term, ties keeping scan order.
pub fn find_matches(
    lexicon: &Lexicon,
    table: &MetadataTable,
    selection: &Selection,
    progress: &mut dyn ProgressSink,
) -> Result<MatchReport> {
    validate_selection(lexicon, table, selection)?;

    // Lookups cannot fail after validation.
    let id_index = table
        .column_index(&selection.id_column)
        .ok_or_else(|| AuditError::UnknownIdentifierColumn(selection.id_column.clone()))?;
    let mut column_indexes = Vec::with_capacity(selection.columns.len());
    for name in &selection.columns {
        let index = table
            .column_index(name)
            .ok_or_else(|| AuditError::UnknownColumns(vec![name.clone()]))?;
        column_indexes.push((name.as_str(), index));
    }
    let mut export_indexes = Vec::with_capacity(selection.export_columns.len());
    for name in &selection.export_columns {
        let index = table
            .column_index(name)
            .ok_or_else(|| AuditError::UnknownColumns(vec![name.clone()]))?;
        export_indexes.push(index);
    }

    let mut rows = Vec::new();
    for category in lexicon.categories() {
        if !selection.categories.iter().any(|name| name == category) {
            continue;
        }
        let total = lexicon.category_term_count(category);
        let mut position = 0;
        for entry in lexicon
            .entries()
            .iter()
            .filter(|entry| &entry.category == category)
        {
            position += 1;
            progress.term_started(category, &entry.term, position, total);
            let pattern = TermPattern::compile(&entry.term, entry.plural)?;
            for &(field, column_index) in &column_indexes {
                rows.extend(scan_column(
                    &pattern,
                    &entry.term,
                    category,
                    table,
                    field,
                    column_index,
                    id_index,
                    &export_indexes,
                ));
            }
        }
    }

    if rows.is_empty() {
        return Err(AuditError::EmptyResult);
    }
    rows.sort_by(|a, b| a.category.cmp(&b.category).then_with(|| a.term.cmp(&b.term)));
    info!(
        matches = rows.len(),
        categories = selection.categories.len(),
        columns = selection.columns.len(),
        "matching complete"
    );
    Ok(MatchReport {
        id_column: selection.id_column.clone(),
        export_columns: selection.export_columns.clone(),
        rows,
    })
}
