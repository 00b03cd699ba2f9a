//! Theme → vocabulary resolution.
//!
//! Matching runs in strict order, first match wins:
//! 1. exact canonical id, 2. keyword rule (input contains surface form),
//! 3. bidirectional substring against the ids, 4. built-in default set.
//! Blank input short-circuits straight to the default set. `resolve` never
//! fails and never returns an empty set.

use tracing::debug;

use super::database::{KeywordRule, ThemeRecord, DEFAULT_THEME, KEYWORD_RULES, THEMES};
use super::models::VocabularyEntrySet;

/// Per-category caps applied once at resolution time. User edits afterwards
/// may exceed these without re-enforcement.
pub const MAX_CORE_ACTORS: usize = 5;
pub const MAX_COMMON_OBJECTS: usize = 8;
pub const MAX_ENVIRONMENT: usize = 5;

/// Display metadata for one selectable theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeSummary {
    pub id: &'static str,
    pub display_name: &'static str,
    pub description: &'static str,
}

/// Pure resolver over immutable reference data. The tables are injected so
/// tests can run against fixtures instead of the built-in database.
#[derive(Debug, Clone, Copy)]
pub struct VocabularyResolver {
    themes: &'static [ThemeRecord],
    rules: &'static [KeywordRule],
    fallback: &'static ThemeRecord,
}

impl Default for VocabularyResolver {
    fn default() -> Self {
        Self::new(THEMES, KEYWORD_RULES, &DEFAULT_THEME)
    }
}

impl VocabularyResolver {
    pub fn new(
        themes: &'static [ThemeRecord],
        rules: &'static [KeywordRule],
        fallback: &'static ThemeRecord,
    ) -> Self {
        Self {
            themes,
            rules,
            fallback,
        }
    }

    /// Maps free-text theme input to a capped vocabulary set.
    pub fn resolve(&self, theme_text: &str) -> VocabularyEntrySet {
        let normalized = theme_text.trim().to_lowercase();
        if normalized.is_empty() {
            debug!("blank theme input, using default vocabulary");
            return capped(self.fallback.vocabulary());
        }

        let record = self
            .exact_match(&normalized)
            .or_else(|| self.keyword_match(&normalized))
            .or_else(|| self.partial_match(&normalized));

        match record {
            Some(record) => {
                debug!(theme = record.id, "resolved theme");
                capped(record.vocabulary())
            }
            None => {
                debug!(input = %normalized, "no theme match, using default vocabulary");
                capped(self.fallback.vocabulary())
            }
        }
    }

    /// All selectable themes, in table order.
    pub fn available_themes(&self) -> Vec<ThemeSummary> {
        self.themes
            .iter()
            .map(|t| ThemeSummary {
                id: t.id,
                display_name: t.display_name,
                description: t.description,
            })
            .collect()
    }

    fn exact_match(&self, normalized: &str) -> Option<&'static ThemeRecord> {
        self.themes.iter().find(|t| t.id == normalized)
    }

    fn keyword_match(&self, normalized: &str) -> Option<&'static ThemeRecord> {
        let rule = self
            .rules
            .iter()
            .find(|r| normalized.contains(&r.surface_form.to_lowercase()))?;
        self.themes.iter().find(|t| t.id == rule.theme_id)
    }

    fn partial_match(&self, normalized: &str) -> Option<&'static ThemeRecord> {
        self.themes
            .iter()
            .find(|t| normalized.contains(t.id) || t.id.contains(normalized))
    }
}

fn capped(mut set: VocabularyEntrySet) -> VocabularyEntrySet {
    set.core_actors.truncate(MAX_CORE_ACTORS);
    set.common_objects.truncate(MAX_COMMON_OBJECTS);
    set.environment.truncate(MAX_ENVIRONMENT);
    set
}
