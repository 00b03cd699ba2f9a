// Theme → vocabulary resolution: static reference tables, the entry-set data
// model with its pure edit operations, and the multi-stage fallback resolver.

pub mod database;
pub mod models;
pub mod resolver;

pub use models::{Category, VocabularyEntry, VocabularyEntrySet, VocabularyStats};
pub use resolver::{ThemeSummary, VocabularyResolver};
