//! Internationalization (i18n) support for `lingodate-ui`.
//!
//! This module wires together:
//! - `i18n-embed` (language selection + asset loading)
//! - `fluent` (message formatting)
//! - `rust-embed` (compile-time embedding of `.ftl` files)
//! - `i18n-embed-fl` (`fl!` macro for compile‑time checked lookups)
//! - `icu_plurals` (CLDR plural categories shown next to the counter)
//!
//! Folder layout (relative to this crate root):
//! ```text
//! i18n.toml
//! i18n/
//!   en-US/lingodate-ui.ftl   (fallback/reference)
//!   zh-CN/lingodate-ui.ftl   (secondary language)
//! ```
//!
//! There is one loader per [`Language`], built lazily and never mutated
//! afterwards. Callers always name the language they want:
//! ```ignore
//! use crate::core::Language;
//! use crate::t;
//! let add = t!(Language::English, "counter-add");
//! let inbox = t!(Language::Chinese, "inbox-messages", count = 3);
//! ```
//!
//! Missing keys fall back to the `en-US` catalog (the loader chains to it);
//! keys missing there too come back as the key itself from [`lookup`].
//!
//! NOTE: The hyphenated filename `lingodate-ui.ftl` is canonical across all locales.
use std::collections::HashMap;

use fluent::FluentValue;
use i18n_embed::fluent::FluentLanguageLoader;
use icu_locale_core::locale;
use icu_plurals::{PluralCategory, PluralRuleType, PluralRules};
use once_cell::sync::Lazy;
use rust_embed::Embed;
use tracing::{debug, warn};

use crate::core::Language;
use crate::error::I18nError;

pub use i18n_embed_fl::fl; // Re-export for convenience.

/// Ergonomic translation macro.
/// Examples:
///     t!(lang, "counter-add")
///     t!(lang, "inbox-messages", count = 3)
///
/// This expands to `fl!(i18n::loader(lang), ...)`, so keys are checked
/// against the fallback catalog at compile time.
#[macro_export]
macro_rules! t {
    ($lang:expr, $key:literal) => {
        $crate::i18n::fl!($crate::i18n::loader($lang), $key)
    };
    ($lang:expr, $key:literal, $( $arg:ident = $value:expr ),+ $(,)?) => {
        $crate::i18n::fl!($crate::i18n::loader($lang), $key, $( $arg = $value ),+ )
    };
}

/// Fluent "domain" (matches the crate / the fallback FTL filename).
///
/// Fallback file path must be: `i18n/en-US/{DOMAIN}.ftl`
const DOMAIN: &str = "lingodate-ui";

/// Embed all locale folders under `i18n/`.
#[derive(Embed)]
#[folder = "i18n"]
struct Localizations;

static ENGLISH: Lazy<FluentLanguageLoader> = Lazy::new(|| build_loader(Language::English));
static CHINESE: Lazy<FluentLanguageLoader> = Lazy::new(|| build_loader(Language::Chinese));

fn build_loader(language: Language) -> FluentLanguageLoader {
    let loader = FluentLanguageLoader::new(DOMAIN, Language::English.langid());
    if let Err(err) = i18n_embed::select(&loader, &Localizations, &[language.langid()]) {
        warn!(%err, %language, "failed selecting catalog; continuing with fallback");
    }
    // Plain text output: no FSI/PDI marks around placeables.
    loader.set_use_isolating(false);
    debug!(%language, "catalog loaded");
    loader
}

/// Catalog for `language`.
pub fn loader(language: Language) -> &'static FluentLanguageLoader {
    match language {
        Language::English => &ENGLISH,
        Language::Chinese => &CHINESE,
    }
}

/// Load every catalog up front (idempotent).
pub fn init() {
    for language in Language::ALL {
        let _ = loader(language);
    }
}

/// List available (embedded) language identifiers.
pub fn available_languages() -> Vec<String> {
    let mut langs = Localizations::iter()
        .filter_map(|path| path.split('/').next().map(|s| s.to_string()))
        .collect::<Vec<_>>();
    langs.sort();
    langs.dedup();
    langs
}

/// Runtime-keyed lookup. Fails only when neither the catalog nor the
/// fallback defines `key`.
pub fn try_lookup(language: Language, key: &str) -> Result<String, I18nError> {
    try_lookup_args(language, key, &[])
}

pub fn try_lookup_args(
    language: Language,
    key: &str,
    args: &[(&str, FluentValue<'_>)],
) -> Result<String, I18nError> {
    let loader = loader(language);
    if !loader.has(key) {
        return Err(I18nError::MissingTranslation {
            key: key.to_string(),
            locale: language.code().to_string(),
        });
    }
    if args.is_empty() {
        return Ok(loader.get(key));
    }
    let args: HashMap<&str, FluentValue<'_>> = args.iter().cloned().collect();
    Ok(loader.get_args_concrete(key, args))
}

/// Like [`try_lookup`], but degrades to the key itself.
pub fn lookup(language: Language, key: &str) -> String {
    lookup_args(language, key, &[])
}

pub fn lookup_args(language: Language, key: &str, args: &[(&str, FluentValue<'_>)]) -> String {
    try_lookup_args(language, key, args).unwrap_or_else(|err| {
        warn!(%err, "translation missing");
        key.to_string()
    })
}

/// CLDR cardinal plural category (`zero`, `one`, `two`, `few`, `many`, `other`).
pub fn plural_category(count: i64, language: Language) -> &'static str {
    let loc = match language {
        Language::English => locale!("en"),
        Language::Chinese => locale!("zh"),
    };

    let rules = match PluralRules::try_new(loc.into(), PluralRuleType::Cardinal.into()) {
        Ok(rules) => rules,
        Err(err) => {
            warn!(?err, %language, "plural rules unavailable");
            return "other";
        }
    };

    match rules.category_for(count) {
        PluralCategory::Zero => "zero",
        PluralCategory::One => "one",
        PluralCategory::Two => "two",
        PluralCategory::Few => "few",
        PluralCategory::Many => "many",
        PluralCategory::Other => "other",
    }
}
