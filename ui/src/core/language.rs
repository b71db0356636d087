//! Interface language selection.
//!
//! Each screen owns its own `Language` value; switching is a plain `toggle()`
//! that picks both the message catalog and the calendar locale.

use icu_locale_core::{locale, Locale};
use unic_langid::LanguageIdentifier;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    /// Primary interface language (also the catalog fallback).
    English,
    /// Secondary interface language.
    Chinese,
}

/// Starting language of the language & plurals screen.
pub const LANGUAGE_DEMO_DEFAULT: Language = Language::English;
/// Starting language of the dates & times screen.
pub const TIME_DEMO_DEFAULT: Language = Language::Chinese;

impl Language {
    pub const ALL: [Language; 2] = [Language::English, Language::Chinese];

    pub fn toggle(self) -> Self {
        match self {
            Language::English => Language::Chinese,
            Language::Chinese => Language::English,
        }
    }

    /// Catalog folder / BCP 47 tag.
    pub fn code(self) -> &'static str {
        match self {
            Language::English => "en-US",
            Language::Chinese => "zh-CN",
        }
    }

    pub fn langid(self) -> LanguageIdentifier {
        // Both codes are static and well formed.
        self.code().parse().unwrap_or_default()
    }

    /// Locale whose CLDR data drives date formatting and week rules.
    /// English dates follow British conventions.
    pub fn calendar_locale(self) -> Locale {
        match self {
            Language::English => locale!("en-GB"),
            Language::Chinese => locale!("zh-CN"),
        }
    }
}

impl Default for Language {
    fn default() -> Self {
        LANGUAGE_DEMO_DEFAULT
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}
