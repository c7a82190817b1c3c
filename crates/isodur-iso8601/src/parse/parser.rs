//! Single-pass parser for ISO 8601 durations.
//!
//! Grammar:
//!
//! ```text
//! duration  := "P" date-part? time-part?
//! date-part := [n "Y"] [n "M"] [n "W"] [n "D"]
//! time-part := "T" [n "H"] [n "M"] [n "S"]
//! n         := "-"? digit+
//! ```

use std::str::FromStr;

use super::error::{ParseError, ParseErrorKind, ParseResult};
use crate::duration::Duration;

/// Date-part components in the only order they may appear.
const DATE_FIELDS: [Field; 4] = [Field::Years, Field::Months, Field::Weeks, Field::Days];

/// Time-part components in the only order they may appear.
const TIME_FIELDS: [Field; 3] = [Field::Hours, Field::Minutes, Field::Seconds];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Years,
    Months,
    Weeks,
    Days,
    Hours,
    Minutes,
    Seconds,
}

impl Field {
    const fn designator(self) -> char {
        match self {
            Self::Years => 'Y',
            Self::Months | Self::Minutes => 'M',
            Self::Weeks => 'W',
            Self::Days => 'D',
            Self::Hours => 'H',
            Self::Seconds => 'S',
        }
    }

    fn set(self, dur: &mut Duration, value: i64) {
        match self {
            Self::Years => dur.years = value,
            Self::Months => dur.months = value,
            Self::Weeks => dur.weeks = value,
            Self::Days => dur.days = value,
            Self::Hours => dur.hours = value,
            Self::Minutes => dur.minutes = value,
            Self::Seconds => dur.seconds = value,
        }
    }
}

/// ## Summary
/// Parses an ISO 8601 duration such as `P1Y2M3W4DT5H6M7S`.
///
/// Each component carries its own optional minus sign (`P-10Y5M`). Nothing is
/// returned on failure; a string either parses completely or not at all.
///
/// ## Errors
/// Returns an error if the string is empty, does not start with `P`, has an
/// unknown or out-of-order designator, has trailing content, or contains no
/// component at all.
#[tracing::instrument(level = "debug", skip(input), fields(input_len = input.len()))]
pub fn parse_iso8601(input: &str) -> ParseResult<Duration> {
    let result = Parser::new(input).parse();
    if let Err(ref err) = result {
        tracing::debug!(kind = ?err.kind, column = err.column, "Rejected duration");
    }
    result
}

impl FromStr for Duration {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_iso8601(s)
    }
}

struct Parser<'a> {
    input: &'a str,
    /// Byte offset of the next unread character.
    pos: usize,
}

impl<'a> Parser<'a> {
    const fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    fn parse(mut self) -> ParseResult<Duration> {
        if self.input.is_empty() {
            return Err(ParseError::new(ParseErrorKind::Empty, 1));
        }
        if !self.eat('P') {
            return Err(self.unexpected(ParseErrorKind::MissingPrefix));
        }

        let mut dur = Duration::zero();
        let mut count = self.section(&DATE_FIELDS, Some('T'), &mut dur)?;

        let t_column = self.pos + 1;
        if self.eat('T') {
            let time_count = self.section(&TIME_FIELDS, None, &mut dur)?;
            if time_count == 0 {
                return Err(ParseError::new(ParseErrorKind::EmptyTimePart, t_column));
            }
            count += time_count;
        }

        if count == 0 {
            return Err(ParseError::new(ParseErrorKind::NoComponents, t_column));
        }

        Ok(dur)
    }

    /// Parses components until `stop` or end of input, returning how many
    /// were found. `fields` fixes both the allowed designators and their order.
    fn section(
        &mut self,
        fields: &[Field],
        stop: Option<char>,
        dur: &mut Duration,
    ) -> ParseResult<usize> {
        let mut next = 0;
        let mut count = 0;

        while let Some(c) = self.peek() {
            if Some(c) == stop {
                break;
            }

            let (value, designator, column) = self.component()?;
            let Some(offset) = fields.iter().position(|f| f.designator() == designator) else {
                return Err(ParseError::new(ParseErrorKind::UnknownDesignator, column)
                    .with_context(format!("found {designator:?}")));
            };
            if offset < next {
                let previous = fields[next - 1].designator();
                return Err(ParseError::new(ParseErrorKind::OutOfOrder, column)
                    .with_context(format!("{designator:?} after {previous:?}")));
            }

            fields[offset].set(dur, value);
            next = offset + 1;
            count += 1;
        }

        Ok(count)
    }

    /// Reads `-? digit+` followed by one designator character.
    fn component(&mut self) -> ParseResult<(i64, char, usize)> {
        let start = self.pos;
        self.eat('-');

        let digits_start = self.pos;
        while self.peek().is_some_and(|c| c.is_ascii_digit()) {
            self.pos += 1;
        }
        if self.pos == digits_start {
            return Err(self.unexpected(ParseErrorKind::ExpectedNumber));
        }

        let literal = &self.input[start..self.pos];
        let value = literal.parse::<i64>().map_err(|_e| {
            ParseError::new(ParseErrorKind::Overflow, start + 1).with_context(literal.to_string())
        })?;

        let column = self.pos + 1;
        let designator = self.bump().ok_or_else(|| {
            ParseError::new(ParseErrorKind::MissingDesignator, column)
                .with_context(format!("after {literal}"))
        })?;

        Ok((value, designator, column))
    }

    fn peek(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    fn eat(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.pos += expected.len_utf8();
            true
        } else {
            false
        }
    }

    fn unexpected(&self, kind: ParseErrorKind) -> ParseError {
        let found = match self.peek() {
            Some(c) => format!("found {c:?}"),
            None => "found end of input".to_string(),
        };
        ParseError::new(kind, self.pos + 1).with_context(found)
    }
}
