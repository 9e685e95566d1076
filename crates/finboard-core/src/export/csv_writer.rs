//! CSV export backend.
//!
//! Fields are quoted per RFC 4180 by the `csv` crate, so company names
//! containing commas survive a round trip.

use std::path::Path;

use super::{ExportError, ExportRow, EXPORT_COLUMNS};

pub(super) fn write(path: &Path, rows: &[ExportRow]) -> Result<(), ExportError> {
    let mut writer = csv::Writer::from_path(path)?;

    writer.write_record(EXPORT_COLUMNS)?;
    for row in rows {
        let values: Vec<String> = row.cells().iter().map(|cell| cell.render()).collect();
        writer.write_record(&values)?;
    }

    writer.flush()?;
    Ok(())
}
