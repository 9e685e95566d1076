//! The 3-step export wizard state machine.
//!
//! Pure reducer over an explicit state value: callers mutate fields through
//! setters and drive transitions with [`ExportWizard::advance`],
//! [`ExportWizard::back`] and [`ExportWizard::submit`]. No rendering is
//! involved, which keeps every transition unit-testable.

use serde::Serialize;
use thiserror::Error;
use time::macros::date;
use time::Date;

use crate::{file_name, CompanyRecord, ExportFormat, ExportRow};

/// Wizard stages, traversed strictly in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardStep {
    Name,
    DateRange,
    ReasonFormat,
}

/// Rejected wizard transitions.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum WizardError {
    #[error("an export name is required to continue")]
    NameRequired,

    #[error("an export reason is required to export")]
    ReasonRequired,

    #[error("no company was updated between {start} and {end}")]
    NoDataInRange { start: Date, end: Date },

    #[error("the final step completes by triggering the export, not by advancing")]
    SubmitRequired,

    #[error("the export can only be triggered from the final step")]
    NotAtFinalStep,
}

/// A finished export request, ready for the file-export collaborator.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportJob {
    pub rows: Vec<ExportRow>,
    pub base_name: String,
    pub format: ExportFormat,
}

impl ExportJob {
    pub fn file_name(&self) -> String {
        file_name(&self.base_name, self.format)
    }
}

/// Transient export draft, created when the dialog opens and reset on a
/// successful submit.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportWizard {
    step: WizardStep,
    name: String,
    start: Date,
    end: Date,
    reason: String,
    format: ExportFormat,
    range_error: bool,
}

impl ExportWizard {
    /// A fresh draft at the name step with the default date window.
    pub fn open() -> Self {
        Self {
            step: WizardStep::Name,
            name: String::new(),
            start: date!(2023 - 03 - 10),
            end: date!(2024 - 03 - 10),
            reason: String::new(),
            format: ExportFormat::Csv,
            range_error: false,
        }
    }

    pub const fn step(&self) -> WizardStep {
        self.step
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub const fn start(&self) -> Date {
        self.start
    }

    pub const fn end(&self) -> Date {
        self.end
    }

    pub fn reason(&self) -> &str {
        &self.reason
    }

    pub const fn format(&self) -> ExportFormat {
        self.format
    }

    /// Whether the last submit was refused for an empty date window.
    pub const fn range_error(&self) -> bool {
        self.range_error
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
        self.range_error = false;
    }

    /// `start <= end` is expected but not enforced; an inverted window
    /// simply matches nothing and gets refused on submit.
    pub fn set_range(&mut self, start: Date, end: Date) {
        self.start = start;
        self.end = end;
        self.range_error = false;
    }

    pub fn set_reason(&mut self, reason: impl Into<String>) {
        self.reason = reason.into();
        self.range_error = false;
    }

    pub fn set_format(&mut self, format: ExportFormat) {
        self.format = format;
        self.range_error = false;
    }

    /// Whether the current step's forward action is unblocked. Mirrors the
    /// enabled state of the Next/Export affordance.
    pub fn can_advance(&self) -> bool {
        match self.step {
            WizardStep::Name => !self.name.trim().is_empty(),
            WizardStep::DateRange => true,
            WizardStep::ReasonFormat => !self.reason.trim().is_empty(),
        }
    }

    /// Move forward one step. The final step has no forward transition;
    /// [`Self::submit`] completes it.
    pub fn advance(&mut self) -> Result<(), WizardError> {
        match self.step {
            WizardStep::Name => {
                if self.name.trim().is_empty() {
                    return Err(WizardError::NameRequired);
                }
                self.step = WizardStep::DateRange;
                Ok(())
            }
            WizardStep::DateRange => {
                self.step = WizardStep::ReasonFormat;
                Ok(())
            }
            WizardStep::ReasonFormat => Err(WizardError::SubmitRequired),
        }
    }

    /// Move back one step. Returns `false` from the name step, which is the
    /// caller's cue to close the dialog.
    pub fn back(&mut self) -> bool {
        match self.step {
            WizardStep::Name => false,
            WizardStep::DateRange => {
                self.step = WizardStep::Name;
                true
            }
            WizardStep::ReasonFormat => {
                self.step = WizardStep::DateRange;
                true
            }
        }
    }

    /// Trigger the export from the final step.
    ///
    /// Filters the full company list to records last updated within the
    /// inclusive date window. An empty result refuses the export and forces
    /// the wizard back to the date step with [`Self::range_error`] set; this
    /// is the one automatic backward transition in the machine. A non-empty
    /// result resets the draft and hands back an [`ExportJob`].
    pub fn submit(&mut self, companies: &[CompanyRecord]) -> Result<ExportJob, WizardError> {
        if self.step != WizardStep::ReasonFormat {
            return Err(WizardError::NotAtFinalStep);
        }
        if self.reason.trim().is_empty() {
            return Err(WizardError::ReasonRequired);
        }

        let rows: Vec<ExportRow> = companies
            .iter()
            .filter(|record| record.last_updated.within(self.start, self.end))
            .map(ExportRow::from_record)
            .collect();

        if rows.is_empty() {
            let (start, end) = (self.start, self.end);
            self.step = WizardStep::DateRange;
            self.range_error = true;
            return Err(WizardError::NoDataInRange { start, end });
        }

        let job = ExportJob {
            rows,
            base_name: self.name.trim().to_owned(),
            format: self.format,
        };
        *self = Self::open();
        Ok(job)
    }
}

impl Default for ExportWizard {
    fn default() -> Self {
        Self::open()
    }
}
