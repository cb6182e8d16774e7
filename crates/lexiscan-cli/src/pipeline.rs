//! The audit pipeline: load inputs, run matching, export results.

use std::collections::{BTreeMap, BTreeSet};
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{info, info_span};

use lexiscan_engine::{AuditSession, ProgressSink, Selection};
use lexiscan_model::MatchReport;
use lexiscan_report::write_report;

/// Inputs for one audit run, resolved from CLI arguments.
#[derive(Debug, Clone)]
pub struct AuditOptions {
    pub lexicon: PathBuf,
    pub metadata: PathBuf,
    /// Categories to scan; empty means every category in the lexicon.
    pub categories: Vec<String>,
    pub columns: Vec<String>,
    pub id_column: String,
    pub export_columns: Vec<String>,
    /// Results CSV path; the XLSX copy lands next to it.
    pub output: PathBuf,
    pub dry_run: bool,
}

#[derive(Debug)]
pub struct AuditOutcome {
    pub matches: usize,
    pub categories: Vec<CategorySummary>,
    pub csv_path: Option<PathBuf>,
    pub xlsx_path: Option<PathBuf>,
}

#[derive(Debug)]
pub struct CategorySummary {
    pub name: String,
    /// Distinct terms with at least one match.
    pub terms_matched: usize,
    /// Result rows for the category.
    pub matches: usize,
    /// Total occurrences across all rows.
    pub occurrences: usize,
}

/// Prints one line per scanned term, mirroring the long-standing
/// interactive output of the tool.
#[derive(Debug, Default)]
pub struct StdoutProgress;

impl ProgressSink for StdoutProgress {
    fn term_started(&mut self, category: &str, _term: &str, position: usize, total: usize) {
        println!("Processing {category} term {position} of {total}");
    }
}

pub fn run_audit(options: &AuditOptions, progress: &mut dyn ProgressSink) -> Result<AuditOutcome> {
    let span = info_span!("audit", metadata = %options.metadata.display());
    let _guard = span.enter();
    let start = Instant::now();

    let mut session = AuditSession::new();
    session
        .load_lexicon(&options.lexicon)
        .with_context(|| format!("load lexicon {}", options.lexicon.display()))?;
    session
        .load_metadata(&options.metadata)
        .with_context(|| format!("load metadata {}", options.metadata.display()))?;
    session.set_selection(Selection {
        categories: options.categories.clone(),
        columns: options.columns.clone(),
        id_column: options.id_column.clone(),
        export_columns: options.export_columns.clone(),
    });

    let report = session.run_matching(progress).context("run matching")?;
    let categories = summarize_categories(report);
    let matches = report.len();

    let (csv_path, xlsx_path) = if options.dry_run {
        (None, None)
    } else {
        let xlsx = write_report(report, &options.output)
            .with_context(|| format!("write results to {}", options.output.display()))?;
        (Some(options.output.clone()), Some(xlsx))
    };

    info!(
        matches,
        dry_run = options.dry_run,
        duration_ms = start.elapsed().as_millis(),
        "audit complete"
    );
    Ok(AuditOutcome {
        matches,
        categories,
        csv_path,
        xlsx_path,
    })
}

/// Aggregate report rows per category, in category name order.
pub fn summarize_categories(report: &MatchReport) -> Vec<CategorySummary> {
    let mut terms: BTreeMap<&str, BTreeSet<&str>> = BTreeMap::new();
    let mut counts: BTreeMap<&str, (usize, usize)> = BTreeMap::new();
    for row in &report.rows {
        terms
            .entry(row.category.as_str())
            .or_default()
            .insert(row.term.as_str());
        let entry = counts.entry(row.category.as_str()).or_insert((0, 0));
        entry.0 += 1;
        entry.1 += row.occurrences;
    }
    counts
        .into_iter()
        .map(|(name, (matches, occurrences))| CategorySummary {
            name: name.to_string(),
            terms_matched: terms.get(name).map_or(0, BTreeSet::len),
            matches,
            occurrences,
        })
        .collect()
}
