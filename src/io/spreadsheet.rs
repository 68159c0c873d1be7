use std::path::Path;

use anyhow::{Context, Result};
use rust_xlsxwriter::Workbook;

use crate::models::AttendeeRecord;

/// Write the attendee list to an xlsx workbook with live summary formulas
///
/// Layout matches the established report format: `Name` / `Type` columns,
/// one row per record in final order, and summary cells in columns C/D.
/// The totals are spreadsheet formulas rather than precomputed values so
/// manual tweaks to the rows keep the counts correct.
pub fn write_workbook(records: &[AttendeeRecord], path: &Path) -> Result<()> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    worksheet.write_string(0, 0, "Name")?;
    worksheet.write_string(0, 1, "Type")?;
    for (index, record) in records.iter().enumerate() {
        let row = (index + 1) as u32;
        worksheet.write_string(row, 0, &record.name)?;
        worksheet.write_string(row, 1, record.affiliation.as_str())?;
    }

    worksheet.write_string(0, 2, "Total:")?;
    worksheet.write_string(1, 2, "Cisco:")?;
    worksheet.write_string(2, 2, "Guest:")?;
    worksheet.write_formula(0, 3, "=COUNTA(B2:B1000)")?;
    worksheet.write_formula(1, 3, "=COUNTIF(B:B, \"Cisco\")")?;
    worksheet.write_formula(2, 3, "=COUNTIF(B:B, \"Guest\")")?;

    workbook
        .save(path)
        .with_context(|| format!("Failed to write workbook: {:?}", path))?;
    Ok(())
}
