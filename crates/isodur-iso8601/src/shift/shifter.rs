//! Applying a duration to a zoned date-time.
//!
//! Two phases, never interleaved:
//!
//! 1. Calendar: years, then months, then weeks and days are added to the
//!    wall-clock date in the instant's own zone, keeping the time of day.
//! 2. Clock: hours, then minutes, then seconds are added as elapsed time,
//!    so they may change the wall-clock hour across a DST transition.

use chrono::{DateTime, Days, LocalResult, Months, NaiveDateTime, Offset, TimeDelta, TimeZone};

use crate::duration::Duration;
use crate::error::{DurationError, DurationResult};

impl Duration {
    /// ## Summary
    /// Shifts `from` by this duration.
    ///
    /// `P1D` always lands on the same wall-clock time the next day, while
    /// `PT24H` lands exactly 86 400 seconds later. Shifting by the zero
    /// duration returns `from` unchanged.
    ///
    /// Month and year additions clamp the day of month to the end of a
    /// shorter target month (Jan 31 + `P1M` is the last day of February).
    ///
    /// ## Errors
    /// Returns `DurationError::OutOfRange` if a component is too large for the
    /// calendar arithmetic or the result is outside the representable range.
    pub fn shift<Tz: TimeZone>(&self, from: &DateTime<Tz>) -> DurationResult<DateTime<Tz>> {
        let calendar = self.shift_calendar(from)?;
        let target = self.shift_clock(calendar)?;

        tracing::trace!(duration = %self, from = ?from, to = ?target, "Shifted instant");
        Ok(target)
    }

    /// ## Summary
    /// Shifts a wall-clock time interpreted in `tz`.
    ///
    /// A wall-clock time that falls in a DST gap, or twice in a DST fold, is
    /// first resolved with [`resolve_local`].
    ///
    /// ## Errors
    /// Returns `DurationError::OutOfRange` if `local` cannot be placed in `tz`
    /// or the shift leaves the representable range.
    pub fn shift_local<Tz: TimeZone>(
        &self,
        local: &NaiveDateTime,
        tz: &Tz,
    ) -> DurationResult<DateTime<Tz>> {
        let from = resolve_local(tz, local)
            .ok_or_else(|| DurationError::OutOfRange(format!("{local} cannot be placed in zone")))?;
        self.shift(&from)
    }

    fn shift_calendar<Tz: TimeZone>(&self, from: &DateTime<Tz>) -> DurationResult<DateTime<Tz>> {
        if !self.has_date_part() {
            return Ok(from.clone());
        }

        let out_of_range = || DurationError::OutOfRange(format!("{self} applied to {from:?}"));

        let total_days = self.total_days().ok_or_else(out_of_range)?;
        let local = from.naive_local();
        let local = add_months(local, self.years.checked_mul(12).ok_or_else(out_of_range)?)
            .and_then(|local| add_months(local, self.months))
            .and_then(|local| add_days(local, total_days))
            .ok_or_else(out_of_range)?;

        resolve_local(&from.timezone(), &local).ok_or_else(out_of_range)
    }

    fn shift_clock<Tz: TimeZone>(&self, from: DateTime<Tz>) -> DurationResult<DateTime<Tz>> {
        let mut current = from;
        for (value, unit) in [(self.hours, 3600), (self.minutes, 60), (self.seconds, 1)] {
            if value == 0 {
                continue;
            }
            current = value
                .checked_mul(unit)
                .and_then(TimeDelta::try_seconds)
                .and_then(|delta| current.clone().checked_add_signed(delta))
                .ok_or_else(|| {
                    DurationError::OutOfRange(format!("{self} applied to {current:?}"))
                })?;
        }
        Ok(current)
    }
}

/// ## Summary
/// Places a wall-clock time in `tz`.
///
/// In a DST fold the earlier instant wins. In a DST gap the wall-clock time is
/// read with the offset in force before the transition, which lands the same
/// distance past the gap (02:30 on a spring-forward night becomes 03:30).
/// Returns `None` only at the edges of the representable range.
#[must_use]
pub fn resolve_local<Tz: TimeZone>(tz: &Tz, local: &NaiveDateTime) -> Option<DateTime<Tz>> {
    match tz.from_local_datetime(local) {
        LocalResult::Single(dt) => Some(dt),
        LocalResult::Ambiguous(earliest, _latest) => Some(earliest),
        LocalResult::None => {
            let before = tz
                .from_local_datetime(&local.checked_sub_signed(TimeDelta::days(1))?)
                .earliest()?;
            let offset = TimeDelta::seconds(i64::from(before.offset().fix().local_minus_utc()));
            Some(tz.from_utc_datetime(&local.checked_sub_signed(offset)?))
        }
    }
}

fn add_months(local: NaiveDateTime, months: i64) -> Option<NaiveDateTime> {
    let magnitude = Months::new(u32::try_from(months.unsigned_abs()).ok()?);
    if months < 0 {
        local.checked_sub_months(magnitude)
    } else {
        local.checked_add_months(magnitude)
    }
}

fn add_days(local: NaiveDateTime, days: i64) -> Option<NaiveDateTime> {
    let magnitude = Days::new(days.unsigned_abs());
    if days < 0 {
        local.checked_sub_days(magnitude)
    } else {
        local.checked_add_days(magnitude)
    }
}
