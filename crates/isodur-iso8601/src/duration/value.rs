//! ISO 8601 duration value (`PnYnMnWnDTnHnMnS`).

use std::fmt;

/// Calendar-relative span of time.
///
/// Every component is an independent signed magnitude, so `P-1Y2M` is
/// representable and distinct from `P-10M`. Equality is field-by-field:
/// `P2W` and `P14D` are different values even though they shift an instant
/// by the same amount.
///
/// Calendar components (`years`, `months`, `weeks`, `days`) move the wall
/// clock date; clock components (`hours`, `minutes`, `seconds`) are elapsed
/// time. See [`Duration::shift`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Duration {
    /// Number of years (`Y` designator).
    pub years: i64,
    /// Number of months (`M` designator before `T`).
    pub months: i64,
    /// Number of weeks (`W` designator).
    pub weeks: i64,
    /// Number of days (`D` designator).
    pub days: i64,
    /// Number of hours (`H` designator).
    pub hours: i64,
    /// Number of minutes (`M` designator after `T`).
    pub minutes: i64,
    /// Number of seconds (`S` designator).
    pub seconds: i64,
}

impl Duration {
    /// Creates a duration from all seven components.
    #[must_use]
    pub const fn new(
        years: i64,
        months: i64,
        weeks: i64,
        days: i64,
        hours: i64,
        minutes: i64,
        seconds: i64,
    ) -> Self {
        Self {
            years,
            months,
            weeks,
            days,
            hours,
            minutes,
            seconds,
        }
    }

    /// Creates a new zero duration.
    #[must_use]
    pub const fn zero() -> Self {
        Self::new(0, 0, 0, 0, 0, 0, 0)
    }

    /// Creates a duration from years.
    #[must_use]
    pub const fn years(years: i64) -> Self {
        Self::builder().years(years).build()
    }

    /// Creates a duration from months.
    #[must_use]
    pub const fn months(months: i64) -> Self {
        Self::builder().months(months).build()
    }

    /// Creates a duration from weeks.
    #[must_use]
    pub const fn weeks(weeks: i64) -> Self {
        Self::builder().weeks(weeks).build()
    }

    /// Creates a duration from days.
    #[must_use]
    pub const fn days(days: i64) -> Self {
        Self::builder().days(days).build()
    }

    /// Creates a duration from hours.
    #[must_use]
    pub const fn hours(hours: i64) -> Self {
        Self::builder().hours(hours).build()
    }

    /// Creates a duration from minutes.
    #[must_use]
    pub const fn minutes(minutes: i64) -> Self {
        Self::builder().minutes(minutes).build()
    }

    /// Creates a duration from seconds.
    #[must_use]
    pub const fn seconds(seconds: i64) -> Self {
        Self::builder().seconds(seconds).build()
    }

    /// Creates a new duration builder.
    #[must_use]
    pub const fn builder() -> DurationBuilder {
        DurationBuilder::new()
    }

    /// Returns whether every component is zero.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        !self.has_date_part() && !self.has_time_part()
    }

    /// Returns whether any of years, months, weeks or days is non-zero.
    #[must_use]
    pub const fn has_date_part(&self) -> bool {
        self.years != 0 || self.months != 0 || self.weeks != 0 || self.days != 0
    }

    /// Returns whether any of hours, minutes or seconds is non-zero.
    #[must_use]
    pub const fn has_time_part(&self) -> bool {
        self.hours != 0 || self.minutes != 0 || self.seconds != 0
    }

    /// Weeks and days folded into a day count, or `None` on overflow.
    #[must_use]
    pub const fn total_days(&self) -> Option<i64> {
        match self.weeks.checked_mul(7) {
            Some(week_days) => week_days.checked_add(self.days),
            None => None,
        }
    }

    /// Hours, minutes and seconds folded into elapsed seconds, or `None` on overflow.
    #[must_use]
    pub fn clock_seconds(&self) -> Option<i64> {
        self.hours
            .checked_mul(3600)?
            .checked_add(self.minutes.checked_mul(60)?)?
            .checked_add(self.seconds)
    }
}

/// Canonical form: designators in fixed order, zero components omitted,
/// and `P0D` for the zero duration.
impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return f.write_str("P0D");
        }

        f.write_str("P")?;
        for (value, designator) in [
            (self.years, 'Y'),
            (self.months, 'M'),
            (self.weeks, 'W'),
            (self.days, 'D'),
        ] {
            if value != 0 {
                write!(f, "{value}{designator}")?;
            }
        }

        if self.has_time_part() {
            f.write_str("T")?;
            for (value, designator) in [
                (self.hours, 'H'),
                (self.minutes, 'M'),
                (self.seconds, 'S'),
            ] {
                if value != 0 {
                    write!(f, "{value}{designator}")?;
                }
            }
        }
        Ok(())
    }
}

/// Builder for constructing `Duration` values.
#[derive(Debug, Clone, Copy, Default)]
pub struct DurationBuilder {
    inner: Duration,
}

impl DurationBuilder {
    /// Creates a new duration builder.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            inner: Duration::zero(),
        }
    }

    /// Sets the years component.
    #[must_use]
    pub const fn years(mut self, years: i64) -> Self {
        self.inner.years = years;
        self
    }

    /// Sets the months component.
    #[must_use]
    pub const fn months(mut self, months: i64) -> Self {
        self.inner.months = months;
        self
    }

    /// Sets the weeks component.
    #[must_use]
    pub const fn weeks(mut self, weeks: i64) -> Self {
        self.inner.weeks = weeks;
        self
    }

    /// Sets the days component.
    #[must_use]
    pub const fn days(mut self, days: i64) -> Self {
        self.inner.days = days;
        self
    }

    /// Sets the hours component.
    #[must_use]
    pub const fn hours(mut self, hours: i64) -> Self {
        self.inner.hours = hours;
        self
    }

    /// Sets the minutes component.
    #[must_use]
    pub const fn minutes(mut self, minutes: i64) -> Self {
        self.inner.minutes = minutes;
        self
    }

    /// Sets the seconds component.
    #[must_use]
    pub const fn seconds(mut self, seconds: i64) -> Self {
        self.inner.seconds = seconds;
        self
    }

    /// Builds the duration.
    #[must_use]
    pub const fn build(self) -> Duration {
        self.inner
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duration_display_zero() {
        assert_eq!(Duration::zero().to_string(), "P0D");
        assert_eq!(Duration::default().to_string(), "P0D");
    }

    #[test]
    fn duration_display_single_components() {
        assert_eq!(Duration::years(1).to_string(), "P1Y");
        assert_eq!(Duration::months(2).to_string(), "P2M");
        assert_eq!(Duration::weeks(3).to_string(), "P3W");
        assert_eq!(Duration::days(4).to_string(), "P4D");
        assert_eq!(Duration::hours(5).to_string(), "PT5H");
        assert_eq!(Duration::minutes(6).to_string(), "PT6M");
        assert_eq!(Duration::seconds(7).to_string(), "PT7S");
    }

    #[test]
    fn duration_display_all_components() {
        let d = Duration::new(1, 2, 3, 4, 5, 6, 7);
        assert_eq!(d.to_string(), "P1Y2M3W4DT5H6M7S");
    }

    #[test]
    fn duration_display_skips_zero_components() {
        let d = Duration::builder().years(10).days(8).minutes(10).build();
        assert_eq!(d.to_string(), "P10Y8DT10M");
    }

    #[test]
    fn duration_display_negative_components() {
        let d = Duration::builder().years(-10).months(5).hours(-24).build();
        assert_eq!(d.to_string(), "P-10Y5MT-24H");
    }

    #[test]
    fn duration_equality_is_structural() {
        assert_ne!(Duration::weeks(2), Duration::days(14));
        assert_eq!(Duration::builder().days(14).build(), Duration::days(14));
    }

    #[test]
    fn duration_parts() {
        assert!(Duration::zero().is_zero());
        assert!(Duration::days(1).has_date_part());
        assert!(!Duration::days(1).has_time_part());
        assert!(Duration::seconds(-1).has_time_part());
        assert!(!Duration::seconds(-1).has_date_part());
    }

    #[test]
    fn duration_totals() {
        let d = Duration::builder().weeks(2).days(-3).build();
        assert_eq!(d.total_days(), Some(11));

        let d = Duration::builder().hours(1).minutes(2).seconds(3).build();
        assert_eq!(d.clock_seconds(), Some(3723));

        assert_eq!(Duration::weeks(i64::MAX).total_days(), None);
        assert_eq!(Duration::hours(i64::MAX).clock_seconds(), None);
    }
}
