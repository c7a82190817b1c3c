//! Command implementations. Each returns the text to print on stdout.

use std::fmt::{Display, Write};

use anyhow::{Context, Result};
use chrono::{DateTime, NaiveDateTime, SecondsFormat, TimeZone};
use isodur_core::config::Settings;
use isodur_core::error::CoreError;
use isodur_iso8601::{Duration, TimeZoneResolver, parse_iso8601};

use crate::cli::{Command, ShiftArgs};

/// Accepted layouts for date-times without an offset.
const WALL_CLOCK_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"];

/// ## Summary
/// Runs a parsed command.
///
/// ## Errors
/// Returns an error if the duration, date-time or timezone is invalid, or
/// the shift leaves the representable range.
pub fn run(command: &Command, settings: &Settings) -> Result<String> {
    match command {
        Command::Parse { duration } => parse(duration),
        Command::Shift(args) => shift(args, settings),
        Command::Json { duration } => json(duration),
    }
}

fn read_duration(text: &str) -> Result<Duration> {
    parse_iso8601(text).with_context(|| format!("cannot parse duration {text:?}"))
}

/// ## Summary
/// Prints the canonical form followed by one line per component.
///
/// ## Errors
/// Returns an error if `text` is not a valid duration.
pub fn parse(text: &str) -> Result<String> {
    let dur = read_duration(text)?;

    let mut out = format!("{dur}\n");
    for (name, value) in [
        ("years", dur.years),
        ("months", dur.months),
        ("weeks", dur.weeks),
        ("days", dur.days),
        ("hours", dur.hours),
        ("minutes", dur.minutes),
        ("seconds", dur.seconds),
    ] {
        writeln!(out, "  {name}: {value}")?;
    }
    Ok(out)
}

/// ## Summary
/// Shifts an RFC 3339 instant or a wall-clock time and prints the result in
/// RFC 3339.
///
/// ## Errors
/// Returns an error if any input is invalid or the shift is out of range.
pub fn shift(args: &ShiftArgs, settings: &Settings) -> Result<String> {
    let dur = read_duration(&args.duration)?;
    let mut resolver = TimeZoneResolver::new();

    if let Ok(instant) = DateTime::parse_from_rfc3339(&args.datetime) {
        return match &args.tz {
            Some(tzid) => {
                let tz = resolver.resolve(tzid)?;
                Ok(rfc3339(&dur.shift(&instant.with_timezone(&tz))?))
            }
            None => Ok(rfc3339(&dur.shift(&instant)?)),
        };
    }

    let local = parse_wall_clock(&args.datetime)?;
    let tzid = args.tz.as_deref().unwrap_or(&settings.shift.timezone);
    let tz = resolver.resolve(tzid)?;
    tracing::debug!(%local, tzid, "Shifting wall-clock time");

    Ok(rfc3339(&dur.shift_local(&local, &tz)?))
}

/// ## Summary
/// Prints the JSON encoding of a duration.
///
/// ## Errors
/// Returns an error if `text` is not a valid duration.
pub fn json(text: &str) -> Result<String> {
    let dur = read_duration(text)?;
    Ok(serde_json::to_string(&dur)?)
}

fn parse_wall_clock(text: &str) -> Result<NaiveDateTime, CoreError> {
    WALL_CLOCK_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(text, format).ok())
        .ok_or_else(|| {
            CoreError::InvalidInput(format!(
                "{text:?} is neither RFC 3339 nor YYYY-MM-DDTHH:MM:SS"
            ))
        })
}

fn rfc3339<Tz>(dt: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    dt.to_rfc3339_opts(SecondsFormat::AutoSi, false)
}
