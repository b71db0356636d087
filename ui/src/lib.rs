//! Shared UI crate for Lingodate. The pure logic, catalogs and both demo
//! screens live here; the platform crates only add routing and a launcher.

pub mod core;
pub mod error;
pub mod i18n;
pub mod theme;
pub mod views;

pub mod components {
    // Localized application navbar (components/app_navbar.rs)
    pub mod app_navbar;
    pub use app_navbar::register_nav;
    pub use app_navbar::AppNavbar;
    pub use app_navbar::NavBuilder;

    mod language_switch;
    pub use language_switch::LanguageSwitch;
}

#[cfg(test)]
mod tests;
