//! Date and month ranges such as `2018-12-08 ~ 2019-12-07`.

use time::format_description::BorrowedFormatItem;
use time::macros::format_description;

use super::clock;
use super::input::TimeInput;
use crate::error::TimeError;

pub const DEFAULT_SEPARATOR: &str = "~";

const DATE: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");
const MONTH: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]");

pub fn format_date_period(start: &TimeInput, end: &TimeInput) -> Result<String, TimeError> {
    format_date_period_with(start, end, DEFAULT_SEPARATOR)
}

pub fn format_date_period_with(
    start: &TimeInput,
    end: &TimeInput,
    separator: &str,
) -> Result<String, TimeError> {
    join(start, end, separator, DATE)
}

pub fn format_month_period(start: &TimeInput, end: &TimeInput) -> Result<String, TimeError> {
    format_month_period_with(start, end, DEFAULT_SEPARATOR)
}

pub fn format_month_period_with(
    start: &TimeInput,
    end: &TimeInput,
    separator: &str,
) -> Result<String, TimeError> {
    join(start, end, separator, MONTH)
}

fn join(
    start: &TimeInput,
    end: &TimeInput,
    separator: &str,
    format: &[BorrowedFormatItem<'_>],
) -> Result<String, TimeError> {
    let offset = clock::local_offset();
    let start = start.resolve(offset)?.format(format)?;
    let end = end.resolve(offset)?.format(format)?;
    Ok(format!("{start} {separator} {end}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use time::macros::datetime;
    use time::OffsetDateTime;

    #[test]
    fn date_period() {
        let got = format_date_period(&"2015-12-23".into(), &"2019-05-26".into()).unwrap();
        assert_eq!(got, "2015-12-23 ~ 2019-05-26");
    }

    #[test]
    fn month_period() {
        let got = format_month_period(&"2015-12-23".into(), &"2019-05-26".into()).unwrap();
        assert_eq!(got, "2015-12 ~ 2019-05");
    }

    #[test]
    fn custom_separator() {
        let got =
            format_date_period_with(&"2018-12-08".into(), &"2019-12-07".into(), "～").unwrap();
        assert_eq!(got, "2018-12-08 ～ 2019-12-07");
    }

    #[test]
    fn instants_keep_their_own_offset() {
        let start = TimeInput::Instant(datetime!(2018-12-31 23:30 +8));
        let end = TimeInput::Instant(datetime!(2020-12-01 0:00 -5));
        assert_eq!(
            format_month_period(&start, &end).unwrap(),
            "2018-12 ~ 2020-12"
        );
    }

    #[test]
    fn millis_are_read_in_the_local_offset() {
        fn local(instant: OffsetDateTime, format: &[BorrowedFormatItem<'_>]) -> String {
            instant
                .to_offset(clock::local_offset())
                .format(format)
                .unwrap()
        }

        let start = datetime!(2015-12-23 23:30 UTC);
        let end = datetime!(2019-05-26 0:30 UTC);
        let (from, to) = (TimeInput::epoch_millis(start), TimeInput::epoch_millis(end));

        assert_eq!(
            format_date_period(&from, &to).unwrap(),
            format!("{} ~ {}", local(start, DATE), local(end, DATE))
        );
        assert_eq!(
            format_month_period(&from, &to).unwrap(),
            format!("{} ~ {}", local(start, MONTH), local(end, MONTH))
        );
    }

    #[test]
    fn out_of_range_millis_are_an_error() {
        let err =
            format_month_period(&TimeInput::Millis(i64::MAX), &TimeInput::Millis(0)).unwrap_err();
        assert!(matches!(err, TimeError::InvalidInput { .. }));
    }

    #[test]
    fn invalid_bound_is_an_error() {
        let err = format_date_period(&"2015-12-23".into(), &"someday".into()).unwrap_err();
        assert!(matches!(err, TimeError::InvalidInput { .. }));
    }
}
