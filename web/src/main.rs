use dioxus::prelude::*;

use ui::components::app_navbar::{register_nav, NavBuilder};
use ui::components::AppNavbar;
use ui::views::{LanguageDemo, TimeDemo};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(WebNavbar)]
    #[route("/")]
    LanguageDemo {},
    #[route("/time")]
    TimeDemo {},
}

fn nav_language(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::LanguageDemo {},
        "{label}"
    })
}
fn nav_time(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::TimeDemo {},
        "{label}"
    })
}

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    {
        ui::i18n::init();
        register_nav(NavBuilder {
            language_demo: nav_language,
            time_demo: nav_time,
        });
    }

    rsx! {
        document::Link { rel: "stylesheet", href: ui::theme::THEME }

        Router::<Route> {}
    }
}

/// Web layout: shared navbar above the routed screen.
#[component]
fn WebNavbar() -> Element {
    rsx! {
        AppNavbar { }
        Outlet::<Route> {}
    }
}
