//! Export projection and file generation.
//!
//! The 13-column schema below is the de facto contract of every generated
//! file; downstream consumers key on the exact column names and order.

mod csv_writer;
mod pdf_writer;
mod xlsx_writer;

use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{CompanyRecord, ValidationError};

/// Fixed export column order. Must not be reordered or renamed.
pub const EXPORT_COLUMNS: [&str; 13] = [
    "Symbol",
    "Name",
    "Total Shares",
    "Promoter Holding",
    "Revenue-Current",
    "Revenue-Previous Quarter",
    "Revenue-Previous Year",
    "Fixed Assets",
    "Total Liabilities",
    "Employee Count",
    "PAT",
    "EBITDA",
    "Last Updated",
];

/// Supported export file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExportFormat {
    Csv,
    Xlsx,
    Pdf,
}

impl ExportFormat {
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        match input.trim().to_ascii_lowercase().as_str() {
            "csv" => Ok(Self::Csv),
            "xlsx" => Ok(Self::Xlsx),
            "pdf" => Ok(Self::Pdf),
            other => Err(ValidationError::InvalidExportFormat {
                value: other.to_owned(),
            }),
        }
    }

    pub const fn extension(self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Xlsx => "xlsx",
            Self::Pdf => "pdf",
        }
    }
}

impl Display for ExportFormat {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.extension())
    }
}

impl std::str::FromStr for ExportFormat {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::parse(value)
    }
}

/// Target file name for an export: `<base>_financials.<ext>`.
pub fn file_name(base: &str, format: ExportFormat) -> String {
    format!("{base}_financials.{}", format.extension())
}

/// One typed cell of an export row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ExportCell<'a> {
    Text(&'a str),
    Number(f64),
}

impl ExportCell<'_> {
    pub fn render(&self) -> String {
        match self {
            Self::Text(text) => (*text).to_owned(),
            Self::Number(value) => value.to_string(),
        }
    }
}

/// A company record projected onto the fixed export schema.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExportRow {
    pub symbol: String,
    pub name: String,
    pub total_shares: f64,
    pub promoter_holding: f64,
    pub revenue_current: f64,
    pub revenue_previous_quarter: f64,
    pub revenue_previous_year: f64,
    pub fixed_assets: f64,
    pub total_liabilities: f64,
    pub employee_count: u64,
    pub pat: f64,
    pub ebitda: f64,
    pub last_updated: String,
}

impl ExportRow {
    pub fn from_record(record: &CompanyRecord) -> Self {
        Self {
            symbol: record.symbol.to_string(),
            name: record.name.clone(),
            total_shares: record.total_shares,
            promoter_holding: record.promoter_holding,
            revenue_current: record.revenue.current,
            revenue_previous_quarter: record.revenue.previous_quarter,
            revenue_previous_year: record.revenue.previous_year,
            fixed_assets: record.fixed_assets,
            total_liabilities: record.total_liabilities,
            employee_count: record.employee_count,
            pat: record.pat,
            ebitda: record.ebitda,
            last_updated: record.last_updated.as_str().to_owned(),
        }
    }

    /// Cells in `EXPORT_COLUMNS` order.
    pub fn cells(&self) -> [ExportCell<'_>; 13] {
        [
            ExportCell::Text(&self.symbol),
            ExportCell::Text(&self.name),
            ExportCell::Number(self.total_shares),
            ExportCell::Number(self.promoter_holding),
            ExportCell::Number(self.revenue_current),
            ExportCell::Number(self.revenue_previous_quarter),
            ExportCell::Number(self.revenue_previous_year),
            ExportCell::Number(self.fixed_assets),
            ExportCell::Number(self.total_liabilities),
            ExportCell::Number(self.employee_count as f64),
            ExportCell::Number(self.pat),
            ExportCell::Number(self.ebitda),
            ExportCell::Text(&self.last_updated),
        ]
    }
}

/// Errors raised while generating an export file.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("nothing to export: the row set is empty")]
    NoRows,

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("spreadsheet error: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),

    #[error("pdf error: {0}")]
    Pdf(String),
}

/// File-generation collaborator.
///
/// The wizard hands a finished row set to an implementation of this trait;
/// tests substitute a recording double.
pub trait FileExporter {
    /// Write `rows` as `<base_name>_financials.<ext>` and return the path
    /// of the generated file.
    fn export(
        &self,
        rows: &[ExportRow],
        base_name: &str,
        format: ExportFormat,
    ) -> Result<PathBuf, ExportError>;
}

/// Writes export files into a target directory.
#[derive(Debug, Clone)]
pub struct DiskExporter {
    out_dir: PathBuf,
}

impl DiskExporter {
    pub fn new(out_dir: impl Into<PathBuf>) -> Self {
        Self {
            out_dir: out_dir.into(),
        }
    }

    pub fn out_dir(&self) -> &Path {
        &self.out_dir
    }
}

impl FileExporter for DiskExporter {
    fn export(
        &self,
        rows: &[ExportRow],
        base_name: &str,
        format: ExportFormat,
    ) -> Result<PathBuf, ExportError> {
        // One guard for all formats; each branch below may assume rows
        // are non-empty.
        if rows.is_empty() {
            return Err(ExportError::NoRows);
        }

        let path = self.out_dir.join(file_name(base_name, format));
        match format {
            ExportFormat::Csv => csv_writer::write(&path, rows)?,
            ExportFormat::Xlsx => xlsx_writer::write(&path, rows)?,
            ExportFormat::Pdf => pdf_writer::write(&path, base_name, rows)?,
        }

        tracing::info!(path = %path.display(), rows = rows.len(), %format, "export written");
        Ok(path)
    }
}
