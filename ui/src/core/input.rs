//! Turning user or example input into an instant.

use time::format_description::well_known::Rfc3339;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::{Date, OffsetDateTime, PrimitiveDateTime, UtcOffset};

use crate::error::TimeError;

/// Something that names a point in time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimeInput {
    Instant(OffsetDateTime),
    /// Unix epoch milliseconds.
    Millis(i64),
    /// ISO-8601 style text typed by the user or embedded in an example.
    Text(String),
}

const DATE_TIME_FORMATS: &[&[BorrowedFormatItem<'static>]] = &[
    format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]"),
    format_description!("[year]-[month]-[day] [hour]:[minute]:[second]"),
    format_description!("[year]-[month]-[day]T[hour]:[minute]"),
    format_description!("[year]-[month]-[day] [hour]:[minute]"),
];

const DATE_FORMAT: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

impl TimeInput {
    /// Resolve into an instant. Text without an explicit offset is read as
    /// wall-clock time in `offset`; millisecond timestamps are viewed in it.
    pub fn resolve(&self, offset: UtcOffset) -> Result<OffsetDateTime, TimeError> {
        match self {
            TimeInput::Instant(instant) => Ok(*instant),
            TimeInput::Millis(ms) => {
                let nanos = i128::from(*ms) * 1_000_000;
                let instant = OffsetDateTime::from_unix_timestamp_nanos(nanos)
                    .map_err(|err| TimeError::invalid(ms.to_string(), err.to_string()))?;
                in_offset(instant, offset, &ms.to_string())
            }
            TimeInput::Text(text) => parse_text(text, offset),
        }
    }

    /// Millisecond timestamp of `instant`, floored. Instants whose
    /// millisecond count does not fit an `i64` are kept as they are.
    pub fn epoch_millis(instant: OffsetDateTime) -> Self {
        let millis = instant.unix_timestamp_nanos().div_euclid(1_000_000);
        i64::try_from(millis).map_or(TimeInput::Instant(instant), TimeInput::Millis)
    }
}

/// View `instant` in `offset`, rejecting instants whose local date would
/// leave the supported year range.
fn in_offset(
    instant: OffsetDateTime,
    offset: UtcOffset,
    raw: &str,
) -> Result<OffsetDateTime, TimeError> {
    instant
        .checked_to_offset(offset)
        .ok_or_else(|| TimeError::invalid(raw, "out of range in the local offset"))
}

impl From<OffsetDateTime> for TimeInput {
    fn from(instant: OffsetDateTime) -> Self {
        TimeInput::Instant(instant)
    }
}

impl From<&str> for TimeInput {
    fn from(text: &str) -> Self {
        TimeInput::Text(text.to_string())
    }
}

impl From<String> for TimeInput {
    fn from(text: String) -> Self {
        TimeInput::Text(text)
    }
}

fn parse_text(raw: &str, offset: UtcOffset) -> Result<OffsetDateTime, TimeError> {
    let text = raw.trim();
    if text.is_empty() {
        return Err(TimeError::invalid(raw, "empty input"));
    }
    // Bare numbers are rejected here: timestamps come in as `TimeInput::Millis`.
    let digits = text.strip_prefix('-').unwrap_or(text);
    if digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(TimeError::invalid(raw, "timestamps are not accepted as text"));
    }

    if let Ok(instant) = OffsetDateTime::parse(text, &Rfc3339) {
        return in_offset(instant, offset, raw);
    }

    for format in DATE_TIME_FORMATS {
        if let Ok(local) = PrimitiveDateTime::parse(text, format) {
            return Ok(local.assume_offset(offset));
        }
    }

    if let Ok(date) = Date::parse(text, DATE_FORMAT) {
        return Ok(date.midnight().assume_offset(offset));
    }

    // `YYYY-MM` means the first day of that month.
    if text.len() == 7 {
        if let Ok(date) = Date::parse(&format!("{text}-01"), DATE_FORMAT) {
            return Ok(date.midnight().assume_offset(offset));
        }
    }

    Err(TimeError::invalid(raw, "unrecognised date format"))
}
