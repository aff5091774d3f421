use thiserror::Error;

/// Main error type for KLV operations
#[derive(Error, Debug)]
pub enum KlvError {
    #[error("Truncated input: {0}")]
    TruncatedInput(String),

    #[error("Encoding overflow: {0}")]
    EncodingOverflow(String),

    #[error("Duplicate key: {0}")]
    DuplicateKey(String),

    #[error("Invalid data: {0}")]
    InvalidData(String),
}

/// Result type alias for KLV operations
pub type KlvResult<T> = Result<T, KlvError>;
