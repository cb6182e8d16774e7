use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuditError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to load lexicon: {0}")]
    LexiconLoad(String),
    #[error("failed to load metadata: {0}")]
    MetadataLoad(String),
    #[error("load lexicon and metadata before matching")]
    NotLoaded,
    #[error("categories not in lexicon: {}", .0.join(", "))]
    UnknownCategories(Vec<String>),
    #[error("columns not in metadata: {}", .0.join(", "))]
    UnknownColumns(Vec<String>),
    #[error("identifier column not in metadata: {0}")]
    UnknownIdentifierColumn(String),
    #[error("no matches found for the selected categories and columns")]
    EmptyResult,
    #[error("failed to write results: {0}")]
    Export(String),
}

pub type Result<T> = std::result::Result<T, AuditError>;
