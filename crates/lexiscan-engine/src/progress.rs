//! Progress reporting during a matching run.
//!
//! The matcher announces each term before scanning it; callers decide how
//! to surface that. Long lexicons over large tables can take a while, so
//! an interactive front end will want per-term feedback.

/// Receives one callback per (category, term) pair, in scan order.
pub trait ProgressSink {
    /// Called before the term is scanned. `position` is 1-based within
    /// the category; `total` is the category's term count.
    fn term_started(&mut self, category: &str, term: &str, position: usize, total: usize);
}

/// Discards all progress events.
#[derive(Debug, Default)]
pub struct NullProgress;

impl ProgressSink for NullProgress {
    fn term_started(&mut self, _category: &str, _term: &str, _position: usize, _total: usize) {}
}

/// Forwards progress events to the `tracing` subscriber at debug level.
#[derive(Debug, Default)]
pub struct TracingProgress;

impl ProgressSink for TracingProgress {
    fn term_started(&mut self, category: &str, term: &str, position: usize, total: usize) {
        tracing::debug!(category, term, position, total, "scanning term");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_sink_accepts_events() {
        let mut sink = NullProgress;
        sink.term_started("Cat", "term", 1, 3);
    }
}
