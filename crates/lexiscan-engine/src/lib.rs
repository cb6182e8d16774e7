//! Matching engine: term patterns, column scanning, selection validation,
//! and the audit session that ties inputs to a report.

pub mod matcher;
pub mod pattern;
pub mod progress;
pub mod scanner;
pub mod session;

pub use matcher::{find_matches, validate_selection};
pub use pattern::TermPattern;
pub use progress::{NullProgress, ProgressSink, TracingProgress};
pub use scanner::CONTEXT_WINDOW;
pub use session::{AuditSession, Selection};
