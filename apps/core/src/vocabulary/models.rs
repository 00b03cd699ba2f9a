use serde::{Deserialize, Serialize};

/// Soft advisory: a poster reads well with at least this many terms.
/// Surfaced through `VocabularyStats::meets_recommended`, never enforced.
pub const RECOMMENDED_MIN_TERMS: usize = 15;

/// One bilingual term: the English word to learn plus its Chinese gloss.
/// Either field may be blank mid-edit; both blank means the entry is absent
/// and gets skipped at render time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabularyEntry {
    pub term: String,
    pub gloss: String,
}

impl VocabularyEntry {
    pub fn new(term: impl Into<String>, gloss: impl Into<String>) -> Self {
        Self {
            term: term.into(),
            gloss: gloss.into(),
        }
    }

    pub fn is_blank(&self) -> bool {
        self.term.trim().is_empty() && self.gloss.trim().is_empty()
    }
}

/// The three vocabulary categories, in their fixed rendering order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    CoreActors,
    CommonObjects,
    Environment,
}

/// Three ordered sequences of bilingual terms. Insertion order is
/// semantically significant: it controls rendering order in the composed
/// prompt. Length caps are applied once at resolution time; later edits may
/// exceed or shrink them freely.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VocabularyEntrySet {
    pub core_actors: Vec<VocabularyEntry>,
    pub common_objects: Vec<VocabularyEntry>,
    pub environment: Vec<VocabularyEntry>,
}

impl VocabularyEntrySet {
    pub fn category(&self, category: Category) -> &[VocabularyEntry] {
        match category {
            Category::CoreActors => &self.core_actors,
            Category::CommonObjects => &self.common_objects,
            Category::Environment => &self.environment,
        }
    }

    fn category_mut(&mut self, category: Category) -> &mut Vec<VocabularyEntry> {
        match category {
            Category::CoreActors => &mut self.core_actors,
            Category::CommonObjects => &mut self.common_objects,
            Category::Environment => &mut self.environment,
        }
    }

    /// Returns a copy with `entry` appended to the targeted category.
    /// The other two categories are untouched.
    pub fn with_added(&self, category: Category, entry: VocabularyEntry) -> Self {
        let mut next = self.clone();
        next.category_mut(category).push(entry);
        next
    }

    /// Returns a copy with the entry at `index` removed. An out-of-range
    /// index is a no-op returning the input unchanged, not an error.
    pub fn with_removed(&self, category: Category, index: usize) -> Self {
        let mut next = self.clone();
        let entries = next.category_mut(category);
        if index < entries.len() {
            entries.remove(index);
        }
        next
    }

    /// Returns a copy with the entry at `index` replaced. An out-of-range
    /// index is a no-op returning the input unchanged.
    pub fn with_updated(&self, category: Category, index: usize, entry: VocabularyEntry) -> Self {
        let mut next = self.clone();
        let entries = next.category_mut(category);
        if index < entries.len() {
            entries[index] = entry;
        }
        next
    }

    pub fn total(&self) -> usize {
        self.core_actors.len() + self.common_objects.len() + self.environment.len()
    }

    pub fn stats(&self) -> VocabularyStats {
        let total = self.total();
        VocabularyStats {
            total,
            core_actors: self.core_actors.len(),
            common_objects: self.common_objects.len(),
            environment: self.environment.len(),
            meets_recommended: total >= RECOMMENDED_MIN_TERMS,
        }
    }
}

/// Per-category counts plus the soft minimum-count advisory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VocabularyStats {
    pub total: usize,
    pub core_actors: usize,
    pub common_objects: usize,
    pub environment: usize,
    pub meets_recommended: bool,
}
