//! Error types surfaced by the time helpers and catalog lookups.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TimeError {
    /// The input could not be turned into an instant.
    #[error("invalid time input `{input}`: {reason}")]
    InvalidInput { input: String, reason: String },

    #[error("failed to format instant: {0}")]
    Format(String),
}

impl TimeError {
    pub(crate) fn invalid(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            input: input.into(),
            reason: reason.into(),
        }
    }
}

impl From<time::error::Format> for TimeError {
    fn from(err: time::error::Format) -> Self {
        Self::Format(err.to_string())
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum I18nError {
    #[error("no translation for `{key}` in {locale} (or its fallback)")]
    MissingTranslation { key: String, locale: String },
}
