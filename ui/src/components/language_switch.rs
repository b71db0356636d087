use dioxus::prelude::*;
use tracing::debug;

use crate::core::Language;
use crate::t;

/// Button flipping the owning screen's language. Its label is written in the
/// language it switches to.
#[component]
pub fn LanguageSwitch(language: Signal<Language>) -> Element {
    let mut language = language;
    let current = language();

    rsx! {
        button {
            r#type: "button",
            class: "button button--accent lang-switch",
            onclick: move |_| {
                let next = language().toggle();
                debug!(from = %current, to = %next, "language toggled");
                language.set(next);
            },
            {t!(current, "switch-language")}
        }
    }
}
