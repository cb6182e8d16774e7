use std::path::Path;

use csv::ReaderBuilder;
use tracing::info;

use lexiscan_model::{AuditError, MetadataTable, Result};

use crate::decode::decode_text;

pub(crate) fn normalize_header(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    let mut parts = trimmed.split_whitespace();
    let mut normalized = String::new();
    if let Some(first) = parts.next() {
        normalized.push_str(first);
        for part in parts {
            normalized.push(' ');
            normalized.push_str(part);
        }
    }
    normalized
}

pub(crate) fn normalize_cell(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

/// Load a metadata CSV. The first row is the header; every cell is kept as
/// text. Short rows are padded with empty cells, blank lines skipped.
pub fn read_metadata(path: &Path) -> Result<MetadataTable> {
    let bytes = std::fs::read(path)
        .map_err(|error| AuditError::MetadataLoad(format!("{}: {error}", path.display())))?;
    let text = decode_text(bytes);
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(text.as_bytes());

    let mut headers: Option<Vec<String>> = None;
    let mut rows: Vec<Vec<String>> = Vec::new();
    for record in reader.records() {
        let record = record
            .map_err(|error| AuditError::MetadataLoad(format!("{}: {error}", path.display())))?;
        if record.iter().all(|value| value.trim().is_empty()) {
            continue;
        }
        match &headers {
            None => {
                headers = Some(record.iter().map(normalize_header).collect());
            }
            Some(header_row) => {
                let mut row = Vec::with_capacity(header_row.len());
                for index in 0..header_row.len() {
                    row.push(normalize_cell(record.get(index).unwrap_or("")));
                }
                rows.push(row);
            }
        }
    }

    let headers = headers.ok_or_else(|| {
        AuditError::MetadataLoad(format!("{}: missing header row", path.display()))
    })?;
    info!(
        path = %path.display(),
        columns = headers.len(),
        rows = rows.len(),
        "metadata loaded"
    );
    Ok(MetadataTable::new(headers, rows))
}
