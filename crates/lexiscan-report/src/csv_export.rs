//! CSV result writer. One header row, one record per match, no index
//! column.

use std::path::Path;

use lexiscan_model::{AuditError, MatchReport, Result};
use tracing::info;

pub fn write_csv(report: &MatchReport, path: &Path) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .map_err(|error| AuditError::Export(format!("{}: {error}", path.display())))?;
    writer
        .write_record(report.header())
        .map_err(|error| AuditError::Export(format!("{}: {error}", path.display())))?;
    for row in &report.rows {
        writer
            .write_record(report.record(row))
            .map_err(|error| AuditError::Export(format!("{}: {error}", path.display())))?;
    }
    writer
        .flush()
        .map_err(|error| AuditError::Export(format!("{}: {error}", path.display())))?;
    info!(path = %path.display(), rows = report.len(), "csv written");
    Ok(())
}
