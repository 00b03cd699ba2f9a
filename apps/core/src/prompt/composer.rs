//! Prompt composition — turns theme + title + resolved vocabulary into the
//! structured poster prompt.

use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result};
use crate::prompt::templates::{EMPTY_CATEGORY_PLACEHOLDER, POSTER_PROMPT_TEMPLATE};
use crate::vocabulary::models::{VocabularyEntry, VocabularyEntrySet};

/// A fully assembled prompt. `text` is derived from the other three fields
/// and can always be regenerated from them; it is never the source of truth.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptDocument {
    pub theme: String,
    pub title: String,
    pub vocabulary: VocabularyEntrySet,
    pub text: String,
}

/// Assembles the five-section poster prompt.
/// Fails with `Error::Validation` when theme or title is blank.
pub fn compose(theme: &str, title: &str, vocabulary: &VocabularyEntrySet) -> Result<PromptDocument> {
    if theme.trim().is_empty() {
        return Err(Error::Validation("theme must not be blank".to_string()));
    }
    if title.trim().is_empty() {
        return Err(Error::Validation("title must not be blank".to_string()));
    }

    let text = POSTER_PROMPT_TEMPLATE
        .replace("{theme}", theme)
        .replace("{title}", title)
        .replace("{core_actors}", &format_entry_list(&vocabulary.core_actors))
        .replace(
            "{common_objects}",
            &format_entry_list(&vocabulary.common_objects),
        )
        .replace("{environment}", &format_entry_list(&vocabulary.environment));

    Ok(PromptDocument {
        theme: theme.to_string(),
        title: title.to_string(),
        vocabulary: vocabulary.clone(),
        text,
    })
}

impl PromptDocument {
    /// Re-derives `text` from the document's own fields, e.g. after the
    /// caller edited the vocabulary in place.
    pub fn regenerate(&self) -> Result<Self> {
        compose(&self.theme, &self.title, &self.vocabulary)
    }
}

/// Renders one category as a comma-joined list of `term gloss` pairs in
/// stored order. Entries with both fields blank are skipped; a category with
/// nothing usable renders an explicit placeholder instead of being omitted.
fn format_entry_list(entries: &[VocabularyEntry]) -> String {
    let rendered: Vec<String> = entries
        .iter()
        .filter(|e| !e.is_blank())
        .map(|e| format!("{} {}", e.term, e.gloss).trim().to_string())
        .collect();

    if rendered.is_empty() {
        EMPTY_CATEGORY_PLACEHOLDER.to_string()
    } else {
        rendered.join(", ")
    }
}
