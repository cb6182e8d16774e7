//! Per-column scanning: pre-filter, first-match split, context window, and
//! occurrence counting over every row of the metadata table.

use lexiscan_model::{MatchRow, MetadataTable};

use crate::pattern::TermPattern;

/// Context window, in characters, on each side of the first match.
pub const CONTEXT_WINDOW: usize = 30;

const ELLIPSIS: &str = "...";

/// Scan one metadata column for a compiled term pattern. Produces one
/// [`MatchRow`] per row with at least one whole-word occurrence.
#[allow(clippy::too_many_arguments)]
pub fn scan_column(
    pattern: &TermPattern,
    term: &str,
    category: &str,
    table: &MetadataTable,
    field: &str,
    column_index: usize,
    id_index: usize,
    export_indexes: &[usize],
) -> Vec<MatchRow> {
    let mut rows = Vec::new();
    for row_index in 0..table.row_count() {
        let cell = table.cell(row_index, column_index);
        if cell.is_empty() || !pattern.prefilter(cell) {
            continue;
        }
        // The pre-filter accepts substrings of longer words; only a precise
        // whole-word match produces output.
        let Some(found) = pattern.first_match(cell) else {
            continue;
        };
        let prefix = &cell[..found.start()];
        let suffix = &cell[found.end()..];
        rows.push(MatchRow {
            identifier: table.cell(row_index, id_index).to_string(),
            term: term.to_string(),
            category: category.to_string(),
            context: context_snippet(prefix, found.as_str(), suffix),
            field: field.to_string(),
            occurrences: pattern.count(cell),
            export_values: export_indexes
                .iter()
                .map(|&index| table.cell(row_index, index).to_string())
                .collect(),
        });
    }
    rows
}

/// Build the context string around the first occurrence: at most
/// [`CONTEXT_WINDOW`] characters of prefix and suffix, each side marked
/// with an ellipsis when it was actually truncated.
pub fn context_snippet(prefix: &str, matched: &str, suffix: &str) -> String {
    let (lead, lead_truncated) = tail_chars(prefix, CONTEXT_WINDOW);
    let (trail, trail_truncated) = head_chars(suffix, CONTEXT_WINDOW);
    let mut context = String::new();
    if lead_truncated {
        context.push_str(ELLIPSIS);
    }
    context.push_str(lead);
    context.push_str(matched);
    context.push_str(trail);
    if trail_truncated {
        context.push_str(ELLIPSIS);
    }
    context
}

/// Last `limit` characters of `text`, with a truncation flag.
fn tail_chars(text: &str, limit: usize) -> (&str, bool) {
    let count = text.chars().count();
    if count <= limit {
        return (text, false);
    }
    let start = text
        .char_indices()
        .nth(count - limit)
        .map_or(0, |(index, _)| index);
    (&text[start..], true)
}

/// First `limit` characters of `text`, with a truncation flag.
fn head_chars(text: &str, limit: usize) -> (&str, bool) {
    match text.char_indices().nth(limit) {
        Some((index, _)) => (&text[..index], true),
        None => (text, false),
    }
}
