//! Timestamp and datetime conversion
//!
//! Epoch input is ambiguous between seconds and milliseconds. The converter
//! guesses by digit count: an integer part rendered with more than
//! [`SECONDS_MAX_DIGITS`] characters is read as milliseconds. Values near the
//! boundary (late 2286 in seconds, early 1973 in milliseconds) cannot be told
//! apart and the guess is kept as is.
//!
//! Datetime input is matched against an ordered list of formats and the
//! first one that parses wins. Input is taken as typed: surrounding
//! whitespace, signed years and years without exactly four digits are
//! rejected.

use chrono::{DateTime, Duration, Local, LocalResult, NaiveDate, NaiveDateTime, TimeZone, Utc};

use crate::constants::{DATETIME_FORMAT, SECONDS_MAX_DIGITS};
use crate::error::{ToolError, ToolResult};

/// One accepted shape of datetime input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    /// Date and time of day
    DateTime(&'static str),
    /// Date only, resolved to local midnight
    Date(&'static str),
}

impl InputFormat {
    fn parse(&self, input: &str) -> Option<NaiveDateTime> {
        if !self.has_plain_year(input) {
            return None;
        }

        match self {
            InputFormat::DateTime(fmt) => NaiveDateTime::parse_from_str(input, fmt).ok(),
            InputFormat::Date(fmt) => NaiveDate::parse_from_str(input, fmt)
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0)),
        }
    }

    pub fn pattern(&self) -> &'static str {
        match self {
            InputFormat::DateTime(fmt) | InputFormat::Date(fmt) => fmt,
        }
    }

    /// `%Y` alone takes any digit count and a sign, so the year field is checked first
    fn has_plain_year(&self, input: &str) -> bool {
        if !input.starts_with(|c: char| c.is_ascii_digit()) {
            return false;
        }

        let year = if self.pattern().starts_with("%Y") {
            Some(input)
        } else {
            input.splitn(3, '/').nth(2)
        };

        year.is_some_and(|field| {
            let bytes = field.as_bytes();
            bytes.len() >= 4
                && bytes[..4].iter().all(u8::is_ascii_digit)
                && !bytes.get(4).is_some_and(u8::is_ascii_digit)
        })
    }
}

// Order matters: full patterns are tried before their date-only forms.
const STANDARD_FORMATS: &[InputFormat] = &[
    InputFormat::DateTime("%Y-%m-%d %H:%M:%S"),
    InputFormat::Date("%Y-%m-%d"),
    InputFormat::DateTime("%Y/%m/%d %H:%M:%S"),
    InputFormat::Date("%Y/%m/%d"),
];

const EXTENDED_FORMATS: &[InputFormat] = &[
    InputFormat::DateTime("%Y-%m-%d %H:%M:%S"),
    InputFormat::Date("%Y-%m-%d"),
    InputFormat::DateTime("%Y/%m/%d %H:%M:%S"),
    InputFormat::Date("%Y/%m/%d"),
    InputFormat::DateTime("%m/%d/%Y %H:%M:%S"),
    InputFormat::Date("%m/%d/%Y"),
];

/// Which datetime formats a converter accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormatSet {
    /// ISO-like and slash-separated year-first forms
    #[default]
    Standard,
    /// Standard plus US month-first forms
    Extended,
}

impl FormatSet {
    pub fn formats(self) -> &'static [InputFormat] {
        match self {
            FormatSet::Standard => STANDARD_FORMATS,
            FormatSet::Extended => EXTENDED_FORMATS,
        }
    }
}

/// Bidirectional epoch <-> local calendar time conversion
#[derive(Debug, Clone, Copy, Default)]
pub struct DateTimeConverter {
    format_set: FormatSet,
}

impl DateTimeConverter {
    pub fn new(format_set: FormatSet) -> Self {
        Self { format_set }
    }

    pub fn format_set(&self) -> FormatSet {
        self.format_set
    }

    /// Convert a second or millisecond epoch timestamp to local `YYYY-MM-DD HH:MM:SS`
    ///
    /// # Arguments
    /// * `input` - Numeric text, fractional values allowed
    ///
    /// # Returns
    /// * `ToolResult<String>` - Formatted local time, or why the input was rejected
    pub fn timestamp_to_datetime(&self, input: &str) -> ToolResult<String> {
        let trimmed = input.trim();
        let value: f64 = trimmed
            .parse()
            .ok()
            .filter(|v: &f64| v.is_finite())
            .ok_or_else(|| ToolError::InvalidTimestamp {
                input: trimmed.to_string(),
            })?;

        let seconds = if is_milliseconds(value) { value / 1000.0 } else { value };
        log::debug!("Timestamp {} resolved to {} epoch seconds", trimmed, seconds);

        let local = epoch_to_local(seconds).ok_or_else(|| ToolError::TimestampOutOfRange {
            input: trimmed.to_string(),
        })?;
        Ok(local.format(DATETIME_FORMAT).to_string())
    }

    /// Convert a datetime string to epoch seconds using the first matching format
    pub fn datetime_to_timestamp(&self, input: &str) -> ToolResult<i64> {
        for format in self.format_set.formats() {
            if let Some(naive) = format.parse(input) {
                log::debug!("Parsed '{}' with format '{}'", input, format.pattern());
                return Ok(local_epoch_seconds(&naive));
            }
        }

        log::debug!("No format matched '{}'", input);
        Err(ToolError::UnsupportedFormat)
    }
}

/// Current epoch seconds
pub fn current_timestamp() -> i64 {
    Utc::now().timestamp()
}

/// Current local time formatted as `YYYY-MM-DD HH:MM:SS`
pub fn current_datetime() -> String {
    Local::now().format(DATETIME_FORMAT).to_string()
}

/// Digit count of the integer part, sign included
fn is_milliseconds(value: f64) -> bool {
    (value.trunc() as i64).to_string().len() > SECONDS_MAX_DIGITS
}

fn epoch_to_local(seconds: f64) -> Option<DateTime<Local>> {
    let whole = seconds.floor();
    let nanos = (((seconds - whole) * 1e9) as u32).min(999_999_999);

    DateTime::<Utc>::from_timestamp(whole as i64, nanos).map(|utc| utc.with_timezone(&Local))
}

/// Earlier of the two instants when the clocks went back, `None` inside a gap
fn earliest_local(naive: &NaiveDateTime) -> Option<DateTime<Local>> {
    match Local.from_local_datetime(naive) {
        LocalResult::Single(dt) => Some(dt),
        LocalResult::Ambiguous(a, b) => Some(a.min(b)),
        LocalResult::None => None,
    }
}

fn local_epoch_seconds(naive: &NaiveDateTime) -> i64 {
    if let Some(dt) = earliest_local(naive) {
        return dt.timestamp();
    }

    // Skipped wall time: apply the offset in force before the clocks moved forward.
    let offset = naive
        .checked_sub_signed(Duration::days(1))
        .and_then(|before| earliest_local(&before))
        .map(|dt| dt.offset().local_minus_utc())
        .unwrap_or(0);

    naive.and_utc().timestamp() - i64::from(offset)
}
