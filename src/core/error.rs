use thiserror::Error;

/// Errors produced while building, normalizing or parsing a [`SizeValue`](crate::SizeValue).
#[derive(Error, Debug)]
pub enum SizeError {
    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Unsupported unit: {value} bytes does not fit below 1024 TB")]
    UnsupportedUnit { value: f64 },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Failed to read file length: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, SizeError>;
