use chrono::{Datelike, Local, NaiveDate, TimeZone};
use daily_tools::constants::UNSUPPORTED_FORMAT_MESSAGE;
use daily_tools::tools::{current_datetime, current_timestamp, DateTimeConverter, FormatSet};
use daily_tools::ToolError;

fn local_midnight(year: i32, month: u32, day: u32) -> i64 {
    let naive = NaiveDate::from_ymd_opt(year, month, day).unwrap().and_hms_opt(0, 0, 0).unwrap();
    Local.from_local_datetime(&naive).earliest().unwrap().timestamp()
}

#[test]
fn test_seconds_timestamp() {
    let converter = DateTimeConverter::default();
    let formatted = converter.timestamp_to_datetime("1640995200").unwrap();

    // 2022-01-01T00:00:00Z, shifted into the local zone
    let expected = Local.timestamp_opt(1_640_995_200, 0).single().unwrap();
    assert_eq!(formatted, expected.format("%Y-%m-%d %H:%M:%S").to_string());
    assert!(formatted.starts_with("2022-01-01") || formatted.starts_with("2021-12-31"));
}

#[test]
fn test_milliseconds_timestamp_matches_seconds() {
    let converter = DateTimeConverter::default();
    assert_eq!(
        converter.timestamp_to_datetime("1640995200000").unwrap(),
        converter.timestamp_to_datetime("1640995200").unwrap()
    );
}

#[test]
fn test_boundary_stays_ambiguous() {
    let converter = DateTimeConverter::default();

    // Ten digits read as seconds: late 2286
    let seconds = converter.timestamp_to_datetime("9999999999").unwrap();
    assert!(seconds.starts_with("2286-11-"));

    // Eleven digits read as milliseconds: spring 1970
    let millis = converter.timestamp_to_datetime("10000000000").unwrap();
    assert!(millis.starts_with("1970-04-2"));
}

#[test]
fn test_timestamp_input_trimmed() {
    let converter = DateTimeConverter::default();
    assert_eq!(
        converter.timestamp_to_datetime(" 1640995200\n").unwrap(),
        converter.timestamp_to_datetime("1640995200").unwrap()
    );
}

#[test]
fn test_non_numeric_timestamp() {
    let converter = DateTimeConverter::default();
    let err = converter.timestamp_to_datetime("yesterday").unwrap_err();
    assert!(matches!(err, ToolError::InvalidTimestamp { .. }));
    assert!(err.to_string().contains("yesterday"));
}

#[test]
fn test_datetime_round_trip() {
    let converter = DateTimeConverter::default();
    let timestamp = converter.datetime_to_timestamp("2024-07-24 15:30:00").unwrap();
    assert_eq!(
        converter.timestamp_to_datetime(&timestamp.to_string()).unwrap(),
        "2024-07-24 15:30:00"
    );
}

#[test]
fn test_date_only_is_local_midnight() {
    let converter = DateTimeConverter::default();
    assert_eq!(converter.datetime_to_timestamp("2024-01-02").unwrap(), local_midnight(2024, 1, 2));
    assert_eq!(converter.datetime_to_timestamp("2024/01/02").unwrap(), local_midnight(2024, 1, 2));
}

#[test]
fn test_slash_datetime() {
    let converter = DateTimeConverter::default();
    assert_eq!(
        converter.datetime_to_timestamp("2024/07/24 15:30:00").unwrap(),
        converter.datetime_to_timestamp("2024-07-24 15:30:00").unwrap()
    );
}

#[test]
fn test_us_dates_only_in_extended_set() {
    let standard = DateTimeConverter::new(FormatSet::Standard);
    let extended = DateTimeConverter::new(FormatSet::Extended);

    assert!(matches!(
        standard.datetime_to_timestamp("01/02/2024"),
        Err(ToolError::UnsupportedFormat)
    ));
    assert_eq!(extended.datetime_to_timestamp("01/02/2024").unwrap(), local_midnight(2024, 1, 2));
    assert_eq!(
        extended.datetime_to_timestamp("07/24/2024 15:30:00").unwrap(),
        extended.datetime_to_timestamp("2024-07-24 15:30:00").unwrap()
    );
}

#[test]
fn test_unsupported_format_message() {
    let converter = DateTimeConverter::default();
    let err = converter.datetime_to_timestamp("not-a-date").unwrap_err();
    assert!(matches!(err, ToolError::UnsupportedFormat));
    assert_eq!(err.to_string(), UNSUPPORTED_FORMAT_MESSAGE);
}

#[test]
fn test_invalid_calendar_date() {
    let converter = DateTimeConverter::new(FormatSet::Extended);
    assert!(converter.datetime_to_timestamp("2024-02-30").is_err());
    assert!(converter.datetime_to_timestamp("2024-07-24 25:00:00").is_err());
}

#[test]
fn test_current_time() {
    let before = Local::now().timestamp();
    let now = current_timestamp();
    let after = Local::now().timestamp();
    assert!(before <= now && now <= after);

    let formatted = current_datetime();
    assert_eq!(formatted.len(), "2024-01-01 00:00:00".len());
    let year: i32 = formatted[..4].parse().unwrap();
    assert!((Local::now().year() - year).abs() <= 1);
}
