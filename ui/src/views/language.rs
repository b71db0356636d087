use dioxus::prelude::*;
use tracing::debug;

use crate::components::LanguageSwitch;
use crate::core::counter::Counter;
use crate::core::language::LANGUAGE_DEMO_DEFAULT;
use crate::i18n::plural_category;
use crate::t;

const SOURCE_PATH: &str = "ui/src/views/language.rs";
const SUBJECT: &str = "test";

/// Interface language toggle plus a counter feeding the plural examples.
#[component]
pub fn LanguageDemo() -> Element {
    let language = use_signal(|| LANGUAGE_DEMO_DEFAULT);
    let mut counter = use_signal(Counter::default);

    let current = language();
    let count = counter().value();
    let category = plural_category(count, current);

    debug!(language = %current, count, "LanguageDemo render");

    rsx! {
        section { class: "page page-language", lang: current.code(),
            div { class: "page__toolbar",
                LanguageSwitch { language }
            }

            h1 { {t!(current, "lang-title")} }
            p { {t!(current, "lang-edit-hint", path = SOURCE_PATH)} }
            a {
                class: "page-language__link",
                href: "https://dioxuslabs.com",
                target: "_blank",
                rel: "noopener noreferrer",
                {t!(current, "lang-learn-link")}
            }
            p { {t!(current, "lang-footer")} }
            p { {t!(current, "lang-this-is", subject = SUBJECT)} }

            div { class: "page-language__inbox",
                p { class: "page-language__inbox-text",
                    {t!(current, "inbox-messages", count = count)}
                }
                p { class: "page-language__inbox-category",
                    {t!(current, "plural-category", category = category)}
                }
            }

            div { class: "page-language__counter",
                button {
                    r#type: "button",
                    class: "button button--primary",
                    onclick: move |_| counter.with_mut(Counter::increment),
                    {t!(current, "counter-add")}
                }
                button {
                    r#type: "button",
                    class: "button button--ghost",
                    onclick: move |_| counter.with_mut(Counter::decrement),
                    {t!(current, "counter-minus")}
                }
            }
        }
    }
}
