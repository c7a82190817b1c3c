//! Duration parsing error types.

use std::fmt;

/// Result type for duration parsing operations.
pub type ParseResult<T> = Result<T, ParseError>;

/// Error type for duration parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    /// Kind of error.
    pub kind: ParseErrorKind,
    /// Byte position where the error occurred (1-based). One past the end of
    /// the input when the input ended early.
    pub column: usize,
    /// Additional context about the error.
    pub context: Option<String>,
}

impl ParseError {
    /// Creates a new parse error.
    #[must_use]
    pub fn new(kind: ParseErrorKind, column: usize) -> Self {
        Self {
            kind,
            column,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at column {}", self.kind, self.column)?;
        if let Some(ref ctx) = self.context {
            write!(f, ": {ctx}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ParseError {}

/// Kinds of parse errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// Input is empty.
    Empty,
    /// Input does not start with `P`.
    MissingPrefix,
    /// Expected a (possibly negative) integer.
    ExpectedNumber,
    /// Integer is not followed by a designator.
    MissingDesignator,
    /// Character is not a designator valid in this part.
    UnknownDesignator,
    /// Designator repeats or comes after one that must follow it.
    OutOfOrder,
    /// `T` is not followed by any time component.
    EmptyTimePart,
    /// No component at all, e.g. a bare `P`.
    NoComponents,
    /// Integer does not fit in 64 bits.
    Overflow,
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "empty duration"),
            Self::MissingPrefix => write!(f, "duration must start with 'P'"),
            Self::ExpectedNumber => write!(f, "expected integer"),
            Self::MissingDesignator => write!(f, "missing designator"),
            Self::UnknownDesignator => write!(f, "unknown designator"),
            Self::OutOfOrder => write!(f, "designator out of order"),
            Self::EmptyTimePart => write!(f, "empty time part"),
            Self::NoComponents => write!(f, "duration has no components"),
            Self::Overflow => write!(f, "integer overflow"),
        }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
