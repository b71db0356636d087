#![cfg_attr(all(windows, not(debug_assertions)), windows_subsystem = "windows")]

#[cfg(feature = "desktop")]
use dioxus::desktop::{tao::window::WindowBuilder, Config};
use dioxus::prelude::*;

use ui::components::app_navbar::{register_nav, NavBuilder};
use ui::components::AppNavbar;
use ui::theme::THEME_INLINE;
use ui::views::{LanguageDemo, TimeDemo};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(DesktopNavbar)]
    #[route("/")]
    LanguageDemo {},
    #[route("/time")]
    TimeDemo {},
}

#[cfg(feature = "desktop")]
fn main() {
    LaunchBuilder::desktop()
        .with_cfg(
            Config::new().with_window(
                WindowBuilder::new()
                    .with_title(format!("Lingodate – v{}", env!("CARGO_PKG_VERSION")))
                    .with_maximized(true),
            ),
        )
        .launch(App);
}

#[cfg(not(feature = "desktop"))]
fn main() {
    dioxus::launch(App);
}

fn nav_language(label: &str) -> Element {
    rsx!(Link { class: "navbar__link", to: Route::LanguageDemo {}, "{label}" })
}
fn nav_time(label: &str) -> Element {
    rsx!(Link { class: "navbar__link", to: Route::TimeDemo {}, "{label}" })
}

#[component]
fn App() -> Element {
    ui::i18n::init();

    register_nav(NavBuilder {
        language_demo: nav_language,
        time_demo: nav_time,
    });

    rsx! {
        // Inlined so packaged builds need no asset directory.
        document::Style { "{THEME_INLINE}" }

        Router::<Route> { }
    }
}

/// Desktop layout: shared navbar above the routed screen.
#[component]
fn DesktopNavbar() -> Element {
    rsx! {
        AppNavbar { }

        Outlet::<Route> {}
    }
}
