use thiserror::Error;

use crate::parse::ParseError;

/// Errors raised by duration parsing, shifting and time-zone resolution
#[derive(Error, Debug)]
pub enum DurationError {
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("Out of range: {0}")]
    OutOfRange(String),

    #[error("Unknown timezone: {0}")]
    UnknownTimezone(String),
}

pub type DurationResult<T> = std::result::Result<T, DurationError>;
