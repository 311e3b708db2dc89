pub mod language;
pub mod theme;
pub mod translation;

pub use language::Language;
pub use theme::Theme;
pub use translation::TranslationTable;
