//! XLSX result writer. Single "Matches" worksheet mirroring the CSV
//! layout, with a bold header row and occurrence counts as numbers.

use std::path::Path;

use rust_xlsxwriter::{Format, Workbook, XlsxError};
use tracing::info;

use lexiscan_model::{AuditError, MatchReport, OCCURRENCES_COLUMN, Result};

pub fn write_xlsx(report: &MatchReport, path: &Path) -> Result<()> {
    build_workbook(report)
        .and_then(|mut workbook| workbook.save(path))
        .map_err(|error| AuditError::Export(format!("{}: {error}", path.display())))?;
    info!(path = %path.display(), rows = report.len(), "xlsx written");
    Ok(())
}

fn build_workbook(report: &MatchReport) -> std::result::Result<Workbook, XlsxError> {
    let mut workbook = Workbook::new();
    let header_format = Format::new().set_bold();
    let header = report.header();
    let occurrences_column = header
        .iter()
        .position(|name| name == OCCURRENCES_COLUMN)
        .unwrap_or(usize::MAX);

    let worksheet = workbook.add_worksheet();
    worksheet.set_name("Matches")?;
    for (column, name) in header.iter().enumerate() {
        worksheet.write_string_with_format(0, column as u16, name, &header_format)?;
    }
    for (index, row) in report.rows.iter().enumerate() {
        let sheet_row = index as u32 + 1;
        for (column, value) in report.record(row).iter().enumerate() {
            if column == occurrences_column {
                worksheet.write_number(sheet_row, column as u16, row.occurrences as f64)?;
            } else {
                worksheet.write_string(sheet_row, column as u16, value)?;
            }
        }
    }
    worksheet.autofit();
    Ok(workbook)
}
