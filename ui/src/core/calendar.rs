//! Locale-aware calendar formatting for the dates screen.
//!
//! Patterns are written with moment-style tokens (`LT`, `LL`, `llll`,
//! `MMMM`, `dddd`, ...). Each token maps onto an ICU field set; names, date
//! and time patterns and week conventions all come from ICU's CLDR data for
//! the language's calendar locale (`en-GB` or `zh-CN`).

use icu_calendar::types::Weekday as IcuWeekday;
use icu_calendar::week::WeekInformation;
use icu_calendar::Gregorian;
use icu_datetime::fieldsets::{E, M, T, YMD, YMDE};
use icu_datetime::input::{Date as IcuDate, DateTime as IcuDateTime, Time as IcuTime};
use icu_datetime::FixedCalendarDateTimeFormatter;
use icu_locale_core::Locale;
use time::{Date, Duration, OffsetDateTime, UtcOffset, Weekday};
use tracing::warn;

use super::language::Language;
use crate::error::TimeError;

/// One moment-style pattern token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalendarToken {
    /// `LT`
    Time,
    /// `LTS`
    TimeWithSeconds,
    /// `L`, `l`
    NumericDate,
    /// `ll`
    MediumDate,
    /// `LL`
    LongDate,
    /// `lll`
    MediumDateTime,
    /// `LLL`
    LongDateTime,
    /// `llll`
    MediumWeekdayDateTime,
    /// `LLLL`
    LongWeekdayDateTime,
    /// `MMMM`
    MonthName,
    /// `MMM`
    MonthShort,
    /// `dddd`
    WeekdayName,
    /// `ddd`
    WeekdayShort,
}

impl CalendarToken {
    pub fn parse(token: &str) -> Option<Self> {
        let token = match token {
            "LT" => Self::Time,
            "LTS" => Self::TimeWithSeconds,
            "L" | "l" => Self::NumericDate,
            "ll" => Self::MediumDate,
            "LL" => Self::LongDate,
            "lll" => Self::MediumDateTime,
            "LLL" => Self::LongDateTime,
            "llll" => Self::MediumWeekdayDateTime,
            "LLLL" => Self::LongWeekdayDateTime,
            "MMMM" => Self::MonthName,
            "MMM" => Self::MonthShort,
            "dddd" => Self::WeekdayName,
            "ddd" => Self::WeekdayShort,
            _ => return None,
        };
        Some(token)
    }

    fn render(
        self,
        input: &IcuDateTime<Gregorian>,
        locale: &Locale,
    ) -> Result<String, TimeError> {
        macro_rules! with_field_set {
            ($fset:expr) => {
                FixedCalendarDateTimeFormatter::<Gregorian, _>::try_new(
                    locale.clone().into(),
                    $fset,
                )
                .map(|formatter| formatter.format(input).to_string())
                .map_err(|err| TimeError::Format(err.to_string()))
            };
        }

        match self {
            Self::Time => with_field_set!(T::hm()),
            Self::TimeWithSeconds => with_field_set!(T::hms()),
            Self::NumericDate => with_field_set!(YMD::short()),
            Self::MediumDate => with_field_set!(YMD::medium()),
            Self::LongDate => with_field_set!(YMD::long()),
            Self::MediumDateTime => with_field_set!(YMD::medium().with_time_hm()),
            Self::LongDateTime => with_field_set!(YMD::long().with_time_hm()),
            Self::MediumWeekdayDateTime => with_field_set!(YMDE::medium().with_time_hm()),
            Self::LongWeekdayDateTime => with_field_set!(YMDE::long().with_time_hm()),
            Self::MonthName => with_field_set!(M::long()),
            Self::MonthShort => with_field_set!(M::medium()),
            Self::WeekdayName => with_field_set!(E::long()),
            Self::WeekdayShort => with_field_set!(E::medium()),
        }
    }
}

/// Render `pattern` for `instant` in the calendar locale of `language`.
///
/// The pattern is a whitespace-separated list of tokens; words that are not
/// tokens are copied as they are. Parts are joined with single spaces.
pub fn format(
    instant: OffsetDateTime,
    pattern: &str,
    language: Language,
) -> Result<String, TimeError> {
    let input = to_icu(instant)?;
    let locale = language.calendar_locale();

    let parts = pattern
        .split_whitespace()
        .map(|word| match CalendarToken::parse(word) {
            Some(token) => token.render(&input, &locale),
            None => Ok(word.to_string()),
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(parts.join(" "))
}

/// Wall-clock fields of `instant` (in its own offset) as an ICU Gregorian
/// date-time.
fn to_icu(instant: OffsetDateTime) -> Result<IcuDateTime<Gregorian>, TimeError> {
    let month = u8::from(instant.month());
    let date = IcuDate::try_new_gregorian(instant.year(), month, instant.day())
        .map_err(|err| TimeError::Format(err.to_string()))?;
    let time = IcuTime::try_new(
        instant.hour(),
        instant.minute(),
        instant.second(),
        instant.nanosecond(),
    )
    .map_err(|err| TimeError::Format(err.to_string()))?;
    Ok(IcuDateTime { date, time })
}

/// First day of the week in the calendar locale of `language`.
pub fn first_weekday(language: Language) -> Weekday {
    match WeekInformation::try_new(language.calendar_locale().into()) {
        Ok(info) => from_icu_weekday(info.first_weekday),
        Err(err) => {
            warn!(%err, %language, "week data unavailable; assuming Monday");
            Weekday::Monday
        }
    }
}

/// The date that starts the week containing `date`.
pub fn start_of_week(date: Date, language: Language) -> Date {
    let first = first_weekday(language).number_days_from_monday();
    let back = (7 + date.weekday().number_days_from_monday() - first) % 7;
    date.checked_sub(Duration::days(i64::from(back))).unwrap_or(date)
}

fn from_icu_weekday(weekday: IcuWeekday) -> Weekday {
    match weekday {
        IcuWeekday::Monday => Weekday::Monday,
        IcuWeekday::Tuesday => Weekday::Tuesday,
        IcuWeekday::Wednesday => Weekday::Wednesday,
        IcuWeekday::Thursday => Weekday::Thursday,
        IcuWeekday::Friday => Weekday::Friday,
        IcuWeekday::Saturday => Weekday::Saturday,
        IcuWeekday::Sunday => Weekday::Sunday,
    }
}

/// `UTC+8`, `UTC-3:30`, `UTC+0`.
pub fn utc_offset_label(offset: UtcOffset) -> String {
    let (h, m, _) = offset.as_hms();
    let sign = if offset.is_negative() { '-' } else { '+' };
    match m.unsigned_abs() {
        0 => format!("UTC{sign}{}", h.unsigned_abs()),
        minutes => format!("UTC{sign}{}:{minutes:02}", h.unsigned_abs()),
    }
}
