mod dates;
pub use dates::TimeDemo;

mod language;
pub use language::LanguageDemo;
