//! In-memory metadata table. All cells are text; the column set is fixed
//! at load time and kept in file order.

#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct MetadataTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl MetadataTable {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { headers, rows }
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|header| header == name)
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.column_index(name).is_some()
    }

    /// Cell text, or "" when the row is short.
    pub fn cell(&self, row: usize, column: usize) -> &str {
        self.rows
            .get(row)
            .and_then(|cells| cells.get(column))
            .map_or("", String::as_str)
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell_is_empty_for_short_rows() {
        let table = MetadataTable::new(
            vec!["Id".to_string(), "Title".to_string()],
            vec![vec!["1".to_string()]],
        );
        assert_eq!(table.cell(0, 0), "1");
        assert_eq!(table.cell(0, 1), "");
        assert_eq!(table.cell(9, 0), "");
        assert_eq!(table.column_index("Title"), Some(1));
        assert!(!table.has_column("Author"));
    }
}
