use thiserror::Error;

/// Errors produced when parsing foundation types from text.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("invalid hex string: {0}")]
    InvalidHex(String),

    #[error("invalid byte length: expected {expected}, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    #[error("invalid currency code: {0:?}")]
    InvalidCurrency(String),
}
