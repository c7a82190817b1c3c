//! Shifting zoned date-times by a duration.

mod shifter;
mod timezone;

pub use shifter::resolve_local;
pub use timezone::TimeZoneResolver;
