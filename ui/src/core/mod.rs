//! Pure, platform-agnostic logic shared by the views.

pub mod calendar;
pub mod clock;
pub mod counter;
pub mod input;
pub mod language;
pub mod period;
pub mod relative;

pub use input::TimeInput;
pub use language::Language;
pub use relative::{classify, describe, DisplayToken};
