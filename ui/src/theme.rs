//! Shared stylesheet for every platform shell.

use dioxus::prelude::*;

/// Served as a bundled asset (web).
pub const THEME: Asset = asset!("/assets/theme/main.css");

/// Embedded copy for shells that inline their CSS (desktop).
pub const THEME_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/theme/main.css"
));
