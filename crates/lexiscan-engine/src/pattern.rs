//! Whole-word term patterns.
//!
//! A term matches case-insensitively at word boundaries; a plural-capable
//! term also matches with exactly one trailing "s". Term text is taken
//! literally: metacharacters are escaped before the pattern is assembled.

use regex::{Match, Regex, RegexBuilder};

use lexiscan_model::{AuditError, Result};

#[derive(Debug, Clone)]
pub struct TermPattern {
    regex: Regex,
    needle: String,
}

impl TermPattern {
    pub fn compile(term: &str, plural: bool) -> Result<Self> {
        let mut pattern = String::from(r"\b(");
        pattern.push_str(&regex::escape(term));
        if plural {
            pattern.push_str("s?");
        }
        pattern.push_str(r")\b");
        let regex = RegexBuilder::new(&pattern)
            .case_insensitive(true)
            .build()
            .map_err(|error| {
                AuditError::LexiconLoad(format!("term {term:?}: invalid pattern: {error}"))
            })?;
        Ok(Self {
            regex,
            needle: term.to_lowercase(),
        })
    }

    /// Fast reject: case-insensitive substring test on the raw term. A
    /// superset of the precise match, so callers must still run
    /// [`first_match`](Self::first_match).
    pub fn prefilter(&self, text: &str) -> bool {
        !self.needle.is_empty() && text.to_lowercase().contains(&self.needle)
    }

    /// First whole-word occurrence, with original casing.
    pub fn first_match<'t>(&self, text: &'t str) -> Option<Match<'t>> {
        self.regex.find(text)
    }

    /// Count of all non-overlapping occurrences in `text`.
    pub fn count(&self, text: &str) -> usize {
        self.regex.find_iter(text).count()
    }
}
