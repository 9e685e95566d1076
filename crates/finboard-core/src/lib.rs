//! Core contracts for finboard.
//!
//! This crate contains:
//! - Canonical domain models and validation
//! - The metrics engine (growth, maxima, deviations)
//! - The selection board partitioning available/selected companies
//! - The export wizard state machine and file-export backends
//! - The company feed trait and its HTTP adapter

pub mod comparison;
pub mod domain;
pub mod error;
pub mod export;
pub mod feed;
pub mod metrics;
pub mod selection;
pub mod wizard;

pub use comparison::{revenue_chart, ComparisonReport, MetricCell, MetricRow, RevenueSeries};
pub use domain::{CompanyId, CompanyRecord, RevenueSnapshot, Symbol, UpdateStamp};
pub use error::{CoreError, ValidationError};
pub use export::{
    file_name, DiskExporter, ExportCell, ExportError, ExportFormat, ExportRow, FileExporter,
    EXPORT_COLUMNS,
};
pub use feed::{CompanyFeed, FeedError, FeedFuture, HttpCompanyFeed, InMemoryFeed};
pub use metrics::{
    max_metric, percent_below_max, revenue_growth, Deviation, Growth, Metric, RevenueGrowth,
};
pub use selection::{SelectionBoard, SelectionError};
pub use wizard::{ExportJob, ExportWizard, WizardError, WizardStep};
