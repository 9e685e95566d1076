//! CLI argument definitions for finboard.
//!
//! # Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `companies` | List every company the feed knows about |
//! | `compare` | Side-by-side metric comparison of selected companies |
//! | `export` | Run the 3-step export wizard (CSV, XLSX or PDF) |
//!
//! # Examples
//!
//! ```bash
//! # List companies
//! finboard companies
//!
//! # Compare two companies as a table
//! finboard compare TCS INFY
//!
//! # Revenue bar chart instead of the table
//! finboard compare TCS INFY --chart
//!
//! # Scripted export
//! finboard export --name Q1Report --start 2023-03-10 --end 2024-03-10 \
//!     --reason "quarterly audit" --export-format csv
//! ```

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

/// Compare financial metrics of listed companies and export the data.
#[derive(Debug, Parser)]
#[command(
    name = "finboard",
    author,
    version,
    about = "Company financial comparison dashboard"
)]
pub struct Cli {
    /// Base URL of the company data endpoint.
    ///
    /// The company list is fetched from `{endpoint}/companies`.
    #[arg(
        long,
        global = true,
        env = "FINBOARD_ENDPOINT",
        default_value = "http://127.0.0.1:3000/api"
    )]
    pub endpoint: String,

    /// Output format for results.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// Pretty-print JSON output with indentation.
    #[arg(long, global = true, default_value_t = false)]
    pub pretty: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Aligned text output for terminal display.
    Table,
    /// JSON object output.
    Json,
}

/// Available CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// List every company delivered by the feed.
    Companies,

    /// Compare selected companies side by side.
    ///
    /// Renders one column per company in selection order; every metric row
    /// shows each company's shortfall against the row leader. Duplicate
    /// symbols are ignored.
    ///
    /// # Examples
    ///
    ///   finboard compare TCS INFY
    ///   finboard compare TCS INFY WIPRO --chart
    Compare(CompareArgs),

    /// Export a date-filtered snapshot of the company data.
    ///
    /// With the full set of flags the wizard runs non-interactively;
    /// otherwise it prompts step by step (type `back` to go back a step,
    /// a blank export name cancels).
    Export(ExportArgs),
}

/// Arguments for the `compare` command.
#[derive(Debug, Args)]
pub struct CompareArgs {
    /// Tickers of the companies to compare, in column order.
    #[arg(required = true, num_args = 1..)]
    pub symbols: Vec<String>,

    /// Render a revenue bar chart instead of the metric table.
    #[arg(long, default_value_t = false)]
    pub chart: bool,
}

/// Arguments for the `export` command.
#[derive(Debug, Args)]
pub struct ExportArgs {
    /// Export name; the file is written as `<name>_financials.<ext>`.
    #[arg(long)]
    pub name: Option<String>,

    /// Range start (YYYY-MM-DD, inclusive).
    #[arg(long)]
    pub start: Option<String>,

    /// Range end (YYYY-MM-DD, inclusive).
    #[arg(long)]
    pub end: Option<String>,

    /// Reason recorded for this export.
    #[arg(long)]
    pub reason: Option<String>,

    /// Export file format: csv, xlsx or pdf.
    #[arg(long, default_value = "csv")]
    pub export_format: String,

    /// Directory the export file is written into.
    #[arg(long, default_value = ".")]
    pub out: PathBuf,
}

impl ExportArgs {
    /// All wizard inputs supplied up front, no prompting needed.
    pub fn is_scripted(&self) -> bool {
        self.name.is_some() && self.start.is_some() && self.end.is_some() && self.reason.is_some()
    }
}
