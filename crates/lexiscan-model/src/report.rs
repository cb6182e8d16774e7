//! Match report: the assembled result table.
//!
//! Column order is a compatibility contract with downstream consumers:
//! the identifier column, then the five standard columns, then any export
//! columns in caller order.

pub const TERM_COLUMN: &str = "Term";
pub const CATEGORY_COLUMN: &str = "Category";
pub const CONTEXT_COLUMN: &str = "Context (First Occurrence)";
pub const FIELD_COLUMN: &str = "Field";
pub const OCCURRENCES_COLUMN: &str = "Occurrences";

/// One match: a lexicon term found in one column of one metadata record.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct MatchRow {
    /// Value of the identifier column for the matched record.
    pub identifier: String,
    pub term: String,
    pub category: String,
    /// Context snippet around the first occurrence.
    pub context: String,
    /// Name of the scanned column.
    pub field: String,
    /// Total occurrences in the full cell, always >= 1.
    pub occurrences: usize,
    /// Pass-through export column values, aligned with
    /// [`MatchReport::export_columns`].
    pub export_values: Vec<String>,
}

#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct MatchReport {
    pub id_column: String,
    pub export_columns: Vec<String>,
    pub rows: Vec<MatchRow>,
}

impl MatchReport {
    /// Header row: `[id, Term, Category, Context (First Occurrence),
    /// Field, Occurrences]` followed by the export columns.
    pub fn header(&self) -> Vec<String> {
        let mut header = vec![
            self.id_column.clone(),
            TERM_COLUMN.to_string(),
            CATEGORY_COLUMN.to_string(),
            CONTEXT_COLUMN.to_string(),
            FIELD_COLUMN.to_string(),
            OCCURRENCES_COLUMN.to_string(),
        ];
        header.extend(self.export_columns.iter().cloned());
        header
    }

    /// One output record, in header order.
    pub fn record(&self, row: &MatchRow) -> Vec<String> {
        let mut record = vec![
            row.identifier.clone(),
            row.term.clone(),
            row.category.clone(),
            row.context.clone(),
            row.field.clone(),
            row.occurrences.to_string(),
        ];
        record.extend(row.export_values.iter().cloned());
        record
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_orders_standard_then_export_columns() {
        let report = MatchReport {
            id_column: "System No [001]".to_string(),
            export_columns: vec!["Shelfmark [852]".to_string()],
            rows: Vec::new(),
        };
        assert_eq!(
            report.header(),
            [
                "System No [001]",
                "Term",
                "Category",
                "Context (First Occurrence)",
                "Field",
                "Occurrences",
                "Shelfmark [852]",
            ]
        );
    }

    #[test]
    fn record_aligns_with_header() {
        let report = MatchReport {
            id_column: "Id".to_string(),
            export_columns: vec!["Date".to_string()],
            rows: Vec::new(),
        };
        let row = MatchRow {
            identifier: "r1".to_string(),
            term: "term".to_string(),
            category: "Cat".to_string(),
            context: "a term b".to_string(),
            field: "Title".to_string(),
            occurrences: 2,
            export_values: vec!["1952".to_string()],
        };
        let record = report.record(&row);
        assert_eq!(record.len(), report.header().len());
        assert_eq!(record[5], "2");
        assert_eq!(record[6], "1952");
    }
}
