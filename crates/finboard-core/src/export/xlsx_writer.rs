//! XLSX export backend: a single sheet named "Financials".

use std::path::Path;

use rust_xlsxwriter::{Format, Workbook};

use super::{ExportCell, ExportError, ExportRow, EXPORT_COLUMNS};

pub(super) fn write(path: &Path, rows: &[ExportRow]) -> Result<(), ExportError> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet().set_name("Financials")?;

    let header_format = Format::new().set_bold();
    for (col, name) in EXPORT_COLUMNS.iter().enumerate() {
        sheet.write_string_with_format(0, col as u16, *name, &header_format)?;
    }

    for (index, row) in rows.iter().enumerate() {
        let sheet_row = (index + 1) as u32;
        for (col, cell) in row.cells().iter().enumerate() {
            match cell {
                ExportCell::Text(text) => {
                    sheet.write_string(sheet_row, col as u16, *text)?;
                }
                ExportCell::Number(value) => {
                    sheet.write_number(sheet_row, col as u16, *value)?;
                }
            }
        }
    }

    workbook.save(path)?;
    Ok(())
}
