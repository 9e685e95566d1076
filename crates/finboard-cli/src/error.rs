use thiserror::Error;

/// CLI-level error categories mapped to exit codes.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Validation(#[from] finboard_core::ValidationError),

    #[error(transparent)]
    Selection(#[from] finboard_core::SelectionError),

    #[error(transparent)]
    Wizard(#[from] finboard_core::WizardError),

    #[error(transparent)]
    Feed(#[from] finboard_core::FeedError),

    #[error(transparent)]
    Export(#[from] finboard_core::ExportError),

    #[error("command error: {0}")]
    Command(String),

    #[error(transparent)]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CliError {
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Validation(_) | Self::Selection(_) | Self::Wizard(_) => 2,
            Self::Feed(_) => 4,
            Self::Export(_) | Self::Command(_) | Self::Serialization(_) | Self::Io(_) => 10,
        }
    }
}
