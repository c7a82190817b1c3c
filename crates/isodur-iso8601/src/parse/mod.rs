//! ISO 8601 duration parsing.

mod error;
mod parser;

pub use error::{ParseError, ParseErrorKind, ParseResult};
pub use parser::parse_iso8601;
