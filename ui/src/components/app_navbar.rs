use crate::core::Language;
use crate::t;
use dioxus::prelude::*;
use once_cell::sync::OnceCell;

/// Platforms register a `NavBuilder` providing fully constructed `Link`
/// elements, so `ui` does not need to know each platform's `Route` enum.
///
/// Each function receives the localized label and returns a `Link` that
/// already *contains* that label as its child.
///
/// Example (in platform crate):
/// ```ignore
/// use ui::components::app_navbar::{NavBuilder, register_nav};
/// fn nav_time(label: &str) -> Element {
///     rsx!(Link { class: "navbar__link", to: Route::TimeDemo {}, "{label}" })
/// }
/// ```
///
/// The navbar has no language state of its own; labels come from the
/// primary catalog. Each screen switches its own language.
pub struct NavBuilder {
    pub language_demo: fn(label: &str) -> Element,
    pub time_demo: fn(label: &str) -> Element,
}

static NAV_BUILDER: OnceCell<NavBuilder> = OnceCell::new();

pub fn register_nav(builder: NavBuilder) {
    let _ = NAV_BUILDER.set(builder);
}

/// Primary language, used for chrome outside the two screens.
const NAV_LANGUAGE: Language = Language::English;

#[component]
pub fn AppNavbar(children: Element) -> Element {
    let internal_nav: Option<Element> = NAV_BUILDER.get().map(|b| {
        let language = (b.language_demo)(&t!(NAV_LANGUAGE, "nav-language-demo"));
        let time = (b.time_demo)(&t!(NAV_LANGUAGE, "nav-time-demo"));

        rsx! {
            nav { class: "navbar__links",
                {language}
                {time}
            }
        }
    });

    let brand = t!(NAV_LANGUAGE, "nav-brand");
    let tagline = t!(NAV_LANGUAGE, "nav-tagline");

    rsx! {
        header {
            id: "navbar",
            class: "navbar",
            div { class: "navbar__inner",
                div { class: "navbar__brand",
                    span { class: "navbar__brand-link",
                        span { class: "navbar__brand-spark", aria_hidden: "true" }
                        span { class: "navbar__brand-mark", "{brand}" }
                    }
                    span { class: "navbar__brand-subtitle", "{tagline}" }
                }

                // Navigation (registered builder or raw children)
                if let Some(nav) = internal_nav {
                    {nav}
                } else {
                    nav { class: "navbar__links", {children} }
                }
            }
        }
    }
}
