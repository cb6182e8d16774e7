//! CLI argument definitions for the lexicon audit tool.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "lexiscan",
    version,
    about = "Lexiscan - Audit metadata for lexicon terms",
    long_about = "Scan tabular metadata for terms from a categorized lexicon.\n\n\
                  Matches whole words case-insensitively, reports the context of\n\
                  the first occurrence per cell, and exports results as CSV and XLSX."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Scan metadata columns for lexicon terms and export the matches.
    Audit(AuditArgs),

    /// List the categories of a lexicon with their term counts.
    Categories(CategoriesArgs),
}

#[derive(Parser)]
pub struct AuditArgs {
    /// Lexicon CSV with term, category and plural columns.
    #[arg(long = "lexicon", value_name = "PATH")]
    pub lexicon: PathBuf,

    /// Metadata CSV to audit.
    #[arg(long = "metadata", value_name = "PATH")]
    pub metadata: PathBuf,

    /// Metadata column to scan (repeat for several).
    #[arg(long = "column", value_name = "COLUMN", required = true)]
    pub columns: Vec<String>,

    /// Column whose value identifies a record in the results.
    #[arg(long = "id-column", value_name = "COLUMN")]
    pub id_column: String,

    /// Lexicon category to scan (repeat for several; default: all).
    #[arg(long = "category", value_name = "CATEGORY")]
    pub categories: Vec<String>,

    /// Metadata column copied unchanged into the results (repeat for several).
    #[arg(long = "export-column", value_name = "COLUMN")]
    pub export_columns: Vec<String>,

    /// Results CSV path; an XLSX copy is written next to it.
    #[arg(
        long = "output",
        value_name = "PATH",
        default_value = "results.csv"
    )]
    pub output: PathBuf,

    /// Match and summarize without writing result files.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

#[derive(Parser)]
pub struct CategoriesArgs {
    /// Lexicon CSV with term, category and plural columns.
    #[arg(long = "lexicon", value_name = "PATH")]
    pub lexicon: PathBuf,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
