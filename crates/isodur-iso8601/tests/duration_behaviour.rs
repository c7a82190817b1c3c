//! End-to-end behaviour of the public duration API.

use chrono::{DateTime, NaiveDate, TimeZone, Timelike, Utc};
use isodur_iso8601::{Duration, DurationError, ParseErrorKind, TimeZoneResolver, parse_iso8601};

fn jan_first_2018() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2018, 1, 1, 0, 0, 0).unwrap()
}

#[test]
fn canonical_strings_round_trip() {
    let cases = [
        "P1Y",
        "P2M",
        "P3W",
        "P4D",
        "PT5H",
        "PT6M",
        "PT7S",
        "P1Y2M3W4DT5H6M7S",
    ];

    for want in cases {
        let dur = parse_iso8601(want).unwrap();
        assert_eq!(dur.to_string(), want);
    }
}

#[test]
fn negative_values_round_trip_through_parser() {
    for text in ["P-1Y", "P-10Y-5M8DT5H10M6S", "PT-24H", "P1WT-1S"] {
        let dur = parse_iso8601(text).unwrap();
        assert_eq!(parse_iso8601(&dur.to_string()).unwrap(), dur);
    }
}

#[test]
fn zero_formats_as_zero_days() {
    assert_eq!(Duration::default().to_string(), "P0D");
    assert_eq!(parse_iso8601("PT0H0M0S").unwrap().to_string(), "P0D");
}

#[test]
fn signs_are_independent_per_component() {
    let dur = parse_iso8601("P-10Y-5M8DT5H10M6S").unwrap();
    assert_eq!(dur.years, -10);
    assert_eq!(dur.months, -5);
    assert_eq!(dur.weeks, 0);
    assert_eq!(dur.days, 8);
    assert_eq!(dur.hours, 5);
    assert_eq!(dur.minutes, 10);
    assert_eq!(dur.seconds, 6);
}

#[test]
fn malformed_input_is_rejected() {
    for text in ["", "PP1D", "P1D2F", "P2F", "P", "P1DT", "1Y", "P1D1Y"] {
        assert!(parse_iso8601(text).is_err(), "{text:?} should be rejected");
    }

    let err = DurationError::from(parse_iso8601("P2F").unwrap_err());
    assert!(matches!(err, DurationError::Parse(ref e) if e.kind == ParseErrorKind::UnknownDesignator));
}

#[test]
fn shift_from_new_year() {
    let from = jan_first_2018();
    let cases = [
        ("P0D", Utc.with_ymd_and_hms(2018, 1, 1, 0, 0, 0)),
        ("P1Y", Utc.with_ymd_and_hms(2019, 1, 1, 0, 0, 0)),
        ("P1M", Utc.with_ymd_and_hms(2018, 2, 1, 0, 0, 0)),
        ("P2M", Utc.with_ymd_and_hms(2018, 3, 1, 0, 0, 0)),
        ("P1W", Utc.with_ymd_and_hms(2018, 1, 8, 0, 0, 0)),
        ("P1D", Utc.with_ymd_and_hms(2018, 1, 2, 0, 0, 0)),
        ("PT1H", Utc.with_ymd_and_hms(2018, 1, 1, 1, 0, 0)),
        ("PT1M", Utc.with_ymd_and_hms(2018, 1, 1, 0, 1, 0)),
        ("PT1S", Utc.with_ymd_and_hms(2018, 1, 1, 0, 0, 1)),
        ("P10Y5M8DT5H10M6S", Utc.with_ymd_and_hms(2028, 6, 9, 5, 10, 6)),
    ];

    for (text, want) in cases {
        let dur: Duration = text.parse().unwrap();
        assert_eq!(dur.shift(&from).unwrap(), want.unwrap(), "shifting by {text}");
    }
}

#[test_log::test]
fn daily_shift_keeps_midnight_in_new_york() {
    let tz = TimeZoneResolver::new().resolve("America/New_York").unwrap();
    let start = NaiveDate::from_ymd_opt(2018, 1, 1)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap();

    let mut current = Duration::zero().shift_local(&start, &tz).unwrap();
    assert_eq!(current.naive_local(), start);

    let day = Duration::days(1);

    for d in 0..365 {
        assert_eq!(current.hour(), 0, "day {d}");
        current = day.shift(&current).unwrap();
    }
}

#[test]
fn json_round_trip() {
    let dur = parse_iso8601("P1Y2M3W4DT5H6M7S").unwrap();

    let json = serde_json::to_string(&dur).unwrap();
    assert_eq!(json, r#""P1Y2M3W4DT5H6M7S""#);

    let back: Duration = serde_json::from_str(&json).unwrap();
    assert_eq!(back, dur);
}

#[test]
fn json_errors() {
    assert!(serde_json::from_str::<Duration>(r#""PZY""#).is_err());
    assert!(serde_json::from_str::<Duration>(r#"{"foo":"bar"}"#).is_err());
}
