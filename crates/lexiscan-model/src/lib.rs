pub mod error;
pub mod lexicon;
pub mod report;
pub mod table;

pub use error::{AuditError, Result};
pub use lexicon::{Lexicon, LexiconEntry};
pub use report::{
    CATEGORY_COLUMN, CONTEXT_COLUMN, FIELD_COLUMN, MatchReport, MatchRow, OCCURRENCES_COLUMN,
    TERM_COLUMN,
};
pub use table::MetadataTable;
