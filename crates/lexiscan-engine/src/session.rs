//! Audit session: loaded inputs, the caller's selection, and the last
//! matching result, behind one explicit object.

use std::path::Path;

use lexiscan_ingest::{read_lexicon, read_metadata};
use lexiscan_model::{AuditError, Lexicon, MatchReport, MetadataTable, Result};

use crate::matcher::find_matches;
use crate::progress::ProgressSink;

/// What to scan: which categories, which text columns, which column
/// identifies a record, and which extra columns to carry into the output.
#[derive(Debug, Clone, Default)]
pub struct Selection {
    /// Category names to scan. Empty means every lexicon category.
    pub categories: Vec<String>,
    /// Metadata columns to scan for term occurrences.
    pub columns: Vec<String>,
    /// Column whose value identifies a record in the output.
    pub id_column: String,
    /// Columns copied verbatim into the output, in this order.
    pub export_columns: Vec<String>,
}

/// One audit from load to report. Inputs load independently and in any
/// order; matching requires both. The selection may change between runs;
/// every run rebuilds the result from scratch.
#[derive(Debug, Default)]
pub struct AuditSession {
    lexicon: Option<Lexicon>,
    metadata: Option<MetadataTable>,
    selection: Selection,
    matches: Option<MatchReport>,
}

impl AuditSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load_lexicon(&mut self, path: &Path) -> Result<()> {
        self.lexicon = Some(read_lexicon(path)?);
        self.matches = None;
        Ok(())
    }

    pub fn load_metadata(&mut self, path: &Path) -> Result<()> {
        self.metadata = Some(read_metadata(path)?);
        self.matches = None;
        Ok(())
    }

    /// Use an already-built lexicon instead of loading one from disk.
    pub fn set_lexicon(&mut self, lexicon: Lexicon) {
        self.lexicon = Some(lexicon);
        self.matches = None;
    }

    /// Use an already-built table instead of loading one from disk.
    pub fn set_metadata(&mut self, metadata: MetadataTable) {
        self.metadata = Some(metadata);
        self.matches = None;
    }

    pub fn lexicon(&self) -> Option<&Lexicon> {
        self.lexicon.as_ref()
    }

    pub fn metadata(&self) -> Option<&MetadataTable> {
        self.metadata.as_ref()
    }

    /// Category names offered by the loaded lexicon, in file order.
    pub fn available_categories(&self) -> &[String] {
        self.lexicon
            .as_ref()
            .map_or(&[], |lexicon| lexicon.categories())
    }

    /// Column names offered by the loaded metadata, in file order.
    pub fn available_columns(&self) -> &[String] {
        self.metadata
            .as_ref()
            .map_or(&[], |metadata| metadata.headers.as_slice())
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn set_selection(&mut self, selection: Selection) {
        self.selection = selection;
    }

    pub fn select_categories(&mut self, categories: Vec<String>) {
        self.selection.categories = categories;
    }

    pub fn select_columns(&mut self, columns: Vec<String>) {
        self.selection.columns = columns;
    }

    pub fn select_identifier_column(&mut self, name: impl Into<String>) {
        self.selection.id_column = name.into();
    }

    pub fn select_export_columns(&mut self, columns: Vec<String>) {
        self.selection.export_columns = columns;
    }

    /// Run matching with the current selection. An empty category
    /// selection scans every lexicon category.
    pub fn run_matching(&mut self, progress: &mut dyn ProgressSink) -> Result<&MatchReport> {
        let (Some(lexicon), Some(metadata)) = (&self.lexicon, &self.metadata) else {
            return Err(AuditError::NotLoaded);
        };
        let mut selection = self.selection.clone();
        if selection.categories.is_empty() {
            selection.categories = lexicon.categories().to_vec();
        }
        let report = find_matches(lexicon, metadata, &selection, progress)?;
        Ok(self.matches.insert(report))
    }

    /// The last matching result, if any.
    pub fn matches(&self) -> Option<&MatchReport> {
        self.matches.as_ref()
    }
}
