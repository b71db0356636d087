//! Relative-time classification ("just now", "5 minutes ago", "yesterday", ...).
//!
//! `classify` walks an ordered rule table; the first rule whose guard holds
//! produces the token. Boundaries are inclusive on the upper side, so a gap
//! of exactly 60 s is still "just now".
//!
//! The "same day" checks compare day-of-month only, never month or year.

use fluent::FluentValue;
use time::{Duration, OffsetDateTime};
use tracing::debug;

use super::input::TimeInput;
use super::language::Language;
use crate::error::TimeError;
use crate::i18n;

pub const JUST_NOW_LIMIT: Duration = Duration::minutes(1);
pub const MINUTES_LIMIT: Duration = Duration::hours(1);
pub const HOURS_LIMIT: Duration = Duration::hours(24);
pub const YESTERDAY_LIMIT: Duration = Duration::hours(48);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayToken {
    JustNow,
    MinutesAgo(i64),
    HoursAgo(i64),
    Yesterday,
    DayBeforeYesterday,
    /// `YYYY-MM-DD` or `MM-DD`.
    AbsoluteDate(String),
    /// `YYYY-MM-DD HH:mm` or `MM-DD HH:mm`.
    AbsoluteDateTime(String),
}

/// Catalog keys used when rendering relative tokens.
pub const MESSAGE_KEYS: &[&str] = &[
    "relative-just-now",
    "relative-minutes-ago",
    "relative-hours-ago",
    "relative-yesterday",
    "relative-day-before-yesterday",
];

impl DisplayToken {
    pub fn localize(&self, language: Language) -> String {
        match self {
            DisplayToken::JustNow => i18n::lookup(language, "relative-just-now"),
            DisplayToken::MinutesAgo(n) => i18n::lookup_args(
                language,
                "relative-minutes-ago",
                &[("count", FluentValue::from(*n))],
            ),
            DisplayToken::HoursAgo(n) => i18n::lookup_args(
                language,
                "relative-hours-ago",
                &[("count", FluentValue::from(*n))],
            ),
            DisplayToken::Yesterday => i18n::lookup(language, "relative-yesterday"),
            DisplayToken::DayBeforeYesterday => {
                i18n::lookup(language, "relative-day-before-yesterday")
            }
            DisplayToken::AbsoluteDate(text) | DisplayToken::AbsoluteDateTime(text) => text.clone(),
        }
    }
}

struct Gap {
    now: OffsetDateTime,
    /// Target viewed in `now`'s offset.
    target: OffsetDateTime,
    delta: Duration,
    show_clock_time: bool,
}

struct Rule {
    applies: fn(&Gap) -> bool,
    token: fn(&Gap) -> DisplayToken,
}

const RULES: &[Rule] = &[
    Rule {
        applies: is_future,
        token: absolute_with_year,
    },
    Rule {
        applies: within_a_minute,
        token: just_now,
    },
    Rule {
        applies: within_an_hour,
        token: minutes_ago,
    },
    Rule {
        applies: within_a_day,
        token: hours_ago_or_yesterday,
    },
    Rule {
        applies: within_two_days,
        token: yesterday_or_day_before,
    },
    Rule {
        applies: earlier_this_year,
        token: absolute_without_year,
    },
];

/// Classify `target` relative to `now`. Pure: the same inputs always give
/// the same token.
pub fn classify(now: OffsetDateTime, target: OffsetDateTime, show_clock_time: bool) -> DisplayToken {
    let gap = Gap {
        now,
        target: target.checked_to_offset(now.offset()).unwrap_or(target),
        delta: now - target,
        show_clock_time,
    };

    RULES
        .iter()
        .find(|rule| (rule.applies)(&gap))
        .map(|rule| (rule.token)(&gap))
        .unwrap_or_else(|| absolute_with_year(&gap))
}

/// Resolve `input`, classify it against `now` and render it in `language`.
pub fn describe(
    now: OffsetDateTime,
    input: &TimeInput,
    show_clock_time: bool,
    language: Language,
) -> Result<String, TimeError> {
    let target = input.resolve(now.offset()).inspect_err(|err| {
        debug!(%err, "relative time input rejected");
    })?;
    Ok(classify(now, target, show_clock_time).localize(language))
}

fn is_future(gap: &Gap) -> bool {
    gap.delta.is_negative()
}

fn within_a_minute(gap: &Gap) -> bool {
    gap.delta <= JUST_NOW_LIMIT
}

fn within_an_hour(gap: &Gap) -> bool {
    gap.delta <= MINUTES_LIMIT
}

fn within_a_day(gap: &Gap) -> bool {
    gap.delta <= HOURS_LIMIT
}

fn within_two_days(gap: &Gap) -> bool {
    gap.delta <= YESTERDAY_LIMIT
}

fn earlier_this_year(gap: &Gap) -> bool {
    gap.target.year() == gap.now.year()
}

fn just_now(_: &Gap) -> DisplayToken {
    DisplayToken::JustNow
}

fn minutes_ago(gap: &Gap) -> DisplayToken {
    DisplayToken::MinutesAgo(gap.delta.whole_minutes())
}

fn hours_ago_or_yesterday(gap: &Gap) -> DisplayToken {
    if gap.target.day() == gap.now.day() {
        DisplayToken::HoursAgo(gap.delta.whole_hours())
    } else {
        DisplayToken::Yesterday
    }
}

fn yesterday_or_day_before(gap: &Gap) -> DisplayToken {
    let next_day = gap.target.date().next_day().map(|date| date.day());
    if next_day == Some(gap.now.day()) {
        DisplayToken::Yesterday
    } else {
        DisplayToken::DayBeforeYesterday
    }
}

fn absolute_with_year(gap: &Gap) -> DisplayToken {
    absolute(gap, true)
}

fn absolute_without_year(gap: &Gap) -> DisplayToken {
    absolute(gap, false)
}

fn absolute(gap: &Gap, with_year: bool) -> DisplayToken {
    let t = gap.target;
    let date = if with_year {
        format!("{:04}-{:02}-{:02}", t.year(), u8::from(t.month()), t.day())
    } else {
        format!("{:02}-{:02}", u8::from(t.month()), t.day())
    };

    if gap.show_clock_time {
        DisplayToken::AbsoluteDateTime(format!("{date} {:02}:{:02}", t.hour(), t.minute()))
    } else {
        DisplayToken::AbsoluteDate(date)
    }
}
