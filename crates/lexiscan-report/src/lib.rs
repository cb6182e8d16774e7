//! Result export: a CSV file plus an XLSX sibling next to it.

use std::path::{Path, PathBuf};

pub mod csv_export;
pub mod xlsx_export;

pub use csv_export::write_csv;
pub use xlsx_export::write_xlsx;

use lexiscan_model::{MatchReport, Result};

/// Path of the XLSX file written alongside a CSV output path.
pub fn xlsx_sibling(csv_path: &Path) -> PathBuf {
    csv_path.with_extension("xlsx")
}

/// Write the report as CSV at `csv_path` and as XLSX next to it. Returns
/// the XLSX path.
pub fn write_report(report: &MatchReport, csv_path: &Path) -> Result<PathBuf> {
    write_csv(report, csv_path)?;
    let xlsx_path = xlsx_sibling(csv_path);
    write_xlsx(report, &xlsx_path)?;
    Ok(xlsx_path)
}
