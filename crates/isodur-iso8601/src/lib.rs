//! ISO 8601 calendar durations.
//!
//! - `duration`: the [`Duration`] value and its canonical text form
//! - `parse`: the `P…T…` grammar
//! - `shift`: applying a duration to a zoned date-time
//! - `codec`: serde support, so a duration serializes as its canonical string
//!
//! ## Example
//!
//! ```rust
//! use chrono::{TimeZone, Utc};
//! use isodur_iso8601::parse_iso8601;
//!
//! let dur = parse_iso8601("P1Y2M3W4DT5H6M7S").unwrap();
//! assert_eq!(dur.to_string(), "P1Y2M3W4DT5H6M7S");
//!
//! let from = Utc.with_ymd_and_hms(2018, 1, 1, 0, 0, 0).unwrap();
//! let to = dur.shift(&from).unwrap();
//! assert_eq!(to, Utc.with_ymd_and_hms(2019, 3, 26, 5, 6, 7).unwrap());
//! ```

pub mod codec;
pub mod duration;
pub mod error;
pub mod parse;
pub mod shift;

pub use duration::{Duration, DurationBuilder};
pub use error::{DurationError, DurationResult};
pub use parse::{ParseError, ParseErrorKind, ParseResult, parse_iso8601};
pub use shift::TimeZoneResolver;
