use dioxus::prelude::*;
use time::macros::date;
use time::{Duration, OffsetDateTime};
use tracing::{debug, warn};

use crate::components::LanguageSwitch;
use crate::core::calendar::{self, utc_offset_label};
use crate::core::clock;
use crate::core::language::{Language, TIME_DEMO_DEFAULT};
use crate::core::period::{format_date_period, format_month_period};
use crate::core::{describe, TimeInput};
use crate::i18n::lookup;
use crate::t;

enum ExampleTarget {
    /// Millisecond timestamp this long before now.
    Ago(Duration),
    Text(&'static str),
}

impl ExampleTarget {
    fn input(&self, now: OffsetDateTime) -> TimeInput {
        match self {
            ExampleTarget::Ago(gap) => TimeInput::epoch_millis(now - *gap),
            ExampleTarget::Text(text) => TimeInput::from(*text),
        }
    }
}

struct RelativeExample {
    range: &'static str,
    style: &'static str,
    code: &'static str,
    target: ExampleTarget,
    show_clock_time: bool,
}

const RELATIVE_EXAMPLES: &[RelativeExample] = &[
    RelativeExample {
        range: "time-row-minute",
        style: "time-row-minute-style",
        code: "describe(now, now - 59s, false)",
        target: ExampleTarget::Ago(Duration::seconds(59)),
        show_clock_time: false,
    },
    RelativeExample {
        range: "time-row-hour",
        style: "time-row-hour-style",
        code: "describe(now, now - 59min, false)",
        target: ExampleTarget::Ago(Duration::minutes(59)),
        show_clock_time: false,
    },
    RelativeExample {
        range: "time-row-day",
        style: "time-row-day-style",
        code: "describe(now, now - 10h, false)",
        target: ExampleTarget::Ago(Duration::hours(10)),
        show_clock_time: false,
    },
    RelativeExample {
        range: "time-row-two-days",
        style: "time-row-two-days-style",
        code: "describe(now, now - 44h, false)",
        target: ExampleTarget::Ago(Duration::hours(44)),
        show_clock_time: false,
    },
    RelativeExample {
        range: "time-row-this-year",
        style: "time-row-this-year-style",
        code: "describe(now, now - 3000h, true)",
        target: ExampleTarget::Ago(Duration::hours(3000)),
        show_clock_time: true,
    },
    RelativeExample {
        range: "time-row-other-year",
        style: "time-row-other-year-style",
        code: "describe(now, \"2015-10-12\", true)",
        target: ExampleTarget::Text("2015-10-12"),
        show_clock_time: true,
    },
];

/// Relative and absolute date formatting, rendered in the calendar locale
/// of this screen's own language.
#[component]
pub fn TimeDemo() -> Element {
    let language = use_signal(|| TIME_DEMO_DEFAULT);
    let mut relative_test = use_signal(String::new);

    let current = language();
    let now = clock::now();
    let invalid = t!(current, "time-test-invalid");

    debug!(language = %current, "TimeDemo render");

    let test_text = relative_test();
    let test_result = if test_text.trim().is_empty() {
        String::new()
    } else {
        describe(now, &TimeInput::from(test_text.as_str()), false, current)
            .unwrap_or_else(|_| invalid.clone())
    };

    let date_period = format_date_period(&"2015-12-23".into(), &"2019-05-26".into())
        .unwrap_or_else(|_| invalid.clone());
    let month_period = format_month_period(&"2015-12-23".into(), &"2019-05-26".into())
        .unwrap_or_else(|_| invalid.clone());

    let render = |instant: OffsetDateTime, pattern: &str| {
        calendar::format(instant, pattern, current).unwrap_or_else(|err| {
            warn!(%err, pattern, "calendar pattern failed");
            invalid.clone()
        })
    };

    let week_start = now.replace_date(calendar::start_of_week(now.date(), current));
    let week_start_day = render(week_start, "dddd");
    let new_year = date!(2020-01-01).midnight().assume_offset(now.offset());
    let date_weekday_pattern = t!(current, "calendar-date-weekday");
    let zone = format!("{} {}", render(now, "LT"), utc_offset_label(now.offset()));
    let placeholder = t!(current, "time-test-placeholder");

    rsx! {
        section { class: "page page-time", lang: current.code(),
            div { class: "page__toolbar",
                LanguageSwitch { language }
            }
            h1 { {t!(current, "time-title")} }

            h2 { {t!(current, "time-relative-heading")} }
            table { class: "time-table",
                tbody {
                    tr {
                        th { {t!(current, "time-col-time")} }
                        th { {t!(current, "time-col-display")} }
                        th { {t!(current, "time-col-code")} }
                        th { {t!(current, "time-col-result")} }
                    }
                    { RELATIVE_EXAMPLES.iter().map(|row| {
                        let range = row.range;
                        let snippet = row.code;
                        let result = relative_cell(now, row, current, &invalid);
                        rsx! {
                            tr { key: "{range}",
                                td { {lookup(current, row.range)} }
                                td { {lookup(current, row.style)} }
                                td { code { "{snippet}" } }
                                td { class: "time-table__result", "{result}" }
                            }
                        }
                    })}
                }
            }

            div { class: "time-test",
                label { r#for: "time-test-input", {t!(current, "time-test-label")} }
                input {
                    id: "time-test-input",
                    class: "time-test__input",
                    value: "{test_text}",
                    placeholder: "{placeholder}",
                    oninput: move |evt| relative_test.set(evt.value()),
                }
                span { class: "time-test__result",
                    {t!(current, "time-test-result")}
                    " {test_result}"
                }
            }

            hr {}
            h2 { {t!(current, "time-absolute-heading")} }

            h3 { {t!(current, "time-date-heading")} }
            table { class: "time-table",
                tbody {
                    tr {
                        th { {t!(current, "time-col-time")} }
                        th { {t!(current, "time-col-usage")} }
                        th { {t!(current, "time-col-example")} }
                        th { {t!(current, "time-col-code")} }
                        th { {t!(current, "time-col-result")} }
                    }
                    tr {
                        td { {t!(current, "time-date-ymd")} }
                        td {
                            p { {t!(current, "time-date-ymd-usage-cn")} }
                            p { {t!(current, "time-date-ymd-usage-intl")} }
                        }
                        td { "2020-05-04" }
                        td { code { "format(now, \"L\", lang)" } }
                        td { class: "time-table__result", {render(now, "L")} }
                    }
                    tr {
                        td { {t!(current, "time-date-proper")} }
                        td { {t!(current, "time-date-proper-usage")} }
                        td { {t!(current, "time-date-proper-example")} }
                        td {}
                        td {}
                    }
                    tr {
                        td { {t!(current, "time-date-range")} }
                        td { {t!(current, "time-date-range-usage")} }
                        td {
                            p { "2018-12-08 ～ 2019-12-07" }
                            p { "2018-12 ~ 2020-12" }
                        }
                        td {
                            code {
                                "format_date_period(\"2015-12-23\", \"2019-05-26\")"
                                br {}
                                "format_month_period(\"2015-12-23\", \"2019-05-26\")"
                            }
                        }
                        td { class: "time-table__result",
                            "{date_period}"
                            br {}
                            "{month_period}"
                        }
                    }
                }
            }

            h3 { {t!(current, "time-clock-heading")} }
            table { class: "time-table",
                tbody {
                    tr {
                        th { {t!(current, "time-col-time")} }
                        th { {t!(current, "time-col-usage")} }
                        th { {t!(current, "time-col-example")} }
                        th { {t!(current, "time-col-code")} }
                        th { {t!(current, "time-col-result")} }
                    }
                    tr {
                        td { {t!(current, "time-clock-hms")} }
                        td { {t!(current, "time-clock-hms-usage")} }
                        td { "15:23:08" }
                        td { code { "format(now, \"LTS\", lang)" } }
                        td { class: "time-table__result", {render(now, "LTS")} }
                    }
                    tr {
                        td { {t!(current, "time-clock-hm")} }
                        td { {t!(current, "time-clock-hm-usage")} }
                        td { "15:23" }
                        td { code { "format(now, \"LT\", lang)" } }
                        td { class: "time-table__result", {render(now, "LT")} }
                    }
                }
            }

            h3 { {t!(current, "time-calendar-heading")} }
            table { class: "time-table",
                tbody {
                    tr {
                        th { {t!(current, "time-col-time")} }
                        th { {t!(current, "time-col-usage")} }
                        th { {t!(current, "time-col-example")} }
                        th { {t!(current, "time-col-code")} }
                        th { {t!(current, "time-col-result")} }
                    }
                    tr {
                        td { {t!(current, "time-calendar-full")} }
                        td { {t!(current, "time-calendar-full-usage")} }
                        td { {t!(current, "time-calendar-full-example")} }
                        td { code { "format(now, \"llll\", lang)" } }
                        td { class: "time-table__result", {render(now, "llll")} }
                    }
                    tr {
                        td { {t!(current, "time-calendar-date")} }
                        td { {t!(current, "time-calendar-date-usage")} }
                        td { {t!(current, "time-calendar-date-example")} }
                        td { code { "format(now, t!(lang, \"calendar-date-weekday\"), lang)" } }
                        td { class: "time-table__result",
                            {render(now, date_weekday_pattern.as_str())}
                        }
                    }
                    tr {
                        td { {t!(current, "time-calendar-week-start")} }
                        td {
                            {t!(current, "time-calendar-week-start-usage",
                                weekday = week_start_day.as_str())}
                        }
                        td {}
                        td { code { "start_of_week(now.date(), lang)" } }
                        td { class: "time-table__result", {render(week_start, "ll dddd")} }
                    }
                }
            }

            h3 { {t!(current, "time-zone-heading")} }
            table { class: "time-table",
                tbody {
                    tr {
                        th { {t!(current, "time-col-time")} }
                        th { {t!(current, "time-col-example")} }
                        th { {t!(current, "time-col-code")} }
                        th { {t!(current, "time-col-result")} }
                    }
                    tr {
                        td { {t!(current, "time-zone-hm")} }
                        td { {t!(current, "time-zone-example")} }
                        td { code { "format(now, \"LT\", lang) + utc_offset_label(now.offset())" } }
                        td { class: "time-table__result", "{zone}" }
                    }
                }
            }

            hr {}
            h2 { {t!(current, "time-abbr-heading")} }
            table { class: "time-table",
                tbody {
                    tr {
                        th { {t!(current, "time-col-full")} }
                        th { {t!(current, "time-col-short")} }
                        th { {t!(current, "time-col-code")} }
                        th { {t!(current, "time-col-result")} }
                    }
                    tr {
                        td { {t!(current, "time-abbr-month")} }
                        td { {t!(current, "time-abbr-month")} }
                        td { code { "format(2020-01-01, \"MMMM\", lang)" } }
                        td { class: "time-table__result", {render(new_year, "MMMM")} }
                    }
                    tr {
                        td { {t!(current, "time-abbr-month")} }
                        td { {t!(current, "time-abbr-month-short")} }
                        td { code { "format(2020-01-01, \"MMM\", lang)" } }
                        td { class: "time-table__result", {render(new_year, "MMM")} }
                    }
                    tr {
                        td { {t!(current, "time-abbr-weekday")} }
                        td { {t!(current, "time-abbr-weekday")} }
                        td { code { "format(now, \"dddd\", lang)" } }
                        td { class: "time-table__result", {render(now, "dddd")} }
                    }
                    tr {
                        td { {t!(current, "time-abbr-weekday")} }
                        td { {t!(current, "time-abbr-weekday-short")} }
                        td { code { "format(now, \"ddd\", lang)" } }
                        td { class: "time-table__result", {render(now, "ddd")} }
                    }
                }
            }
        }
    }
}

fn relative_cell(
    now: OffsetDateTime,
    row: &RelativeExample,
    language: Language,
    invalid: &str,
) -> String {
    describe(now, &row.target.input(now), row.show_clock_time, language)
        .unwrap_or_else(|_| invalid.to_string())
}
