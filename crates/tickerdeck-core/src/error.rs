use thiserror::Error;

/// Validation and contract errors exposed by `tickerdeck-core`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("symbol cannot be empty")]
    EmptySymbol,
    #[error("symbol length {len} exceeds max {max}")]
    SymbolTooLong { len: usize, max: usize },
    #[error("symbol contains invalid character '{ch}' at index {index}")]
    SymbolInvalidChar { ch: char, index: usize },

    #[error("invalid timeframe '{value}', expected one of 1D, 7D, 15D, 30D, 6M, 1Y, 5Y")]
    InvalidTimeframe { value: String },

    #[error("date must be a YYYY-MM-DD calendar date: '{value}'")]
    InvalidDate { value: String },

    #[error("search query must not be empty")]
    EmptyQuery,
}

/// Top-level error type for core operations.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
