use thiserror::Error;

/// Validation and contract errors exposed by `finboard-core`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("symbol cannot be empty")]
    EmptySymbol,
    #[error("symbol length {len} exceeds max {max}")]
    SymbolTooLong { len: usize, max: usize },
    #[error("symbol contains invalid character '{ch}' at index {index}")]
    SymbolInvalidChar { ch: char, index: usize },

    #[error("company id cannot be empty")]
    EmptyCompanyId,
    #[error("duplicate company id '{id}' in feed payload")]
    DuplicateCompanyId { id: String },

    #[error("company name cannot be empty")]
    EmptyCompanyName,

    #[error("timestamp must be RFC3339 or YYYY-MM-DD: '{value}'")]
    UnparsableStamp { value: String },

    #[error("field '{field}' must be finite")]
    NonFiniteValue { field: &'static str },
    #[error("field '{field}' must be non-negative")]
    NegativeValue { field: &'static str },

    #[error("invalid export format '{value}', expected one of csv, xlsx, pdf")]
    InvalidExportFormat { value: String },
}

/// Top-level error type for core operations.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
