use std::path::Path;

use csv::ReaderBuilder;
use tracing::info;

use lexiscan_model::{AuditError, Lexicon, LexiconEntry, Result};

use crate::csv_table::{normalize_cell, normalize_header};
use crate::decode::decode_text;

/// Load a lexicon CSV. Requires `term`, `category`, and `plural` columns;
/// entries keep their file order.
pub fn read_lexicon(path: &Path) -> Result<Lexicon> {
    let bytes = std::fs::read(path)
        .map_err(|error| AuditError::LexiconLoad(format!("{}: {error}", path.display())))?;
    let text = decode_text(bytes);
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(text.as_bytes());

    let headers: Vec<String> = reader
        .headers()
        .map_err(|error| AuditError::LexiconLoad(format!("{}: {error}", path.display())))?
        .iter()
        .map(normalize_header)
        .collect();
    let term_index = required_column(&headers, "term", path)?;
    let category_index = required_column(&headers, "category", path)?;
    let plural_index = required_column(&headers, "plural", path)?;

    let mut entries = Vec::new();
    for (index, record) in reader.records().enumerate() {
        let record = record
            .map_err(|error| AuditError::LexiconLoad(format!("{}: {error}", path.display())))?;
        if record.iter().all(|value| value.trim().is_empty()) {
            continue;
        }
        // 1-based data row, for messages pointing at the file.
        let row = index + 1;
        let term = normalize_cell(record.get(term_index).unwrap_or(""));
        if term.is_empty() {
            return Err(AuditError::LexiconLoad(format!(
                "{}: row {row}: empty term",
                path.display()
            )));
        }
        let category = normalize_cell(record.get(category_index).unwrap_or(""));
        if category.is_empty() {
            return Err(AuditError::LexiconLoad(format!(
                "{}: row {row}: empty category",
                path.display()
            )));
        }
        let raw_plural = normalize_cell(record.get(plural_index).unwrap_or(""));
        let plural = parse_bool_like(&raw_plural).ok_or_else(|| {
            AuditError::LexiconLoad(format!(
                "{}: row {row}: invalid plural value {raw_plural:?}",
                path.display()
            ))
        })?;
        entries.push(LexiconEntry {
            term,
            category,
            plural,
        });
    }

    let lexicon = Lexicon::new(entries);
    info!(
        path = %path.display(),
        terms = lexicon.len(),
        categories = lexicon.categories().len(),
        "lexicon loaded"
    );
    Ok(lexicon)
}

fn required_column(headers: &[String], name: &str, path: &Path) -> Result<usize> {
    headers
        .iter()
        .position(|header| header.eq_ignore_ascii_case(name))
        .ok_or_else(|| {
            AuditError::LexiconLoad(format!(
                "{}: missing required column: {name}",
                path.display()
            ))
        })
}

pub(crate) fn parse_bool_like(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "t" | "yes" | "y" | "1" => Some(true),
        "false" | "f" | "no" | "n" | "0" => Some(false),
        _ => None,
    }
}
