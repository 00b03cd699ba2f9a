//! Soft validation and plain-counting statistics over composed prompt text.
//! `validate` reports every violated condition instead of stopping at the
//! first; it never raises.

use serde::{Deserialize, Serialize};

use crate::prompt::templates::{MIN_PROMPT_CHARS, REQUIRED_SECTIONS, SECTION_MARKER};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptValidation {
    pub is_valid: bool,
    pub errors: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptStats {
    /// Character count, not byte count.
    pub length: usize,
    pub line_count: usize,
    pub section_count: usize,
    pub word_count: usize,
}

/// Checks a prompt for completeness: non-empty, plausibly long, and carrying
/// all five required section headings. All violations are collected.
pub fn validate(text: &str) -> PromptValidation {
    let mut errors = Vec::new();

    if text.trim().is_empty() {
        errors.push("提示词不能为空".to_string());
    }

    if !text.is_empty() && text.chars().count() < MIN_PROMPT_CHARS {
        errors.push("提示词过短，可能不完整".to_string());
    }

    for section in REQUIRED_SECTIONS {
        if !text.contains(section) {
            errors.push(format!("缺少必需部分: {section}"));
        }
    }

    PromptValidation {
        is_valid: errors.is_empty(),
        errors,
    }
}

/// Straightforward counting. Sections are occurrences of the heading marker.
pub fn stats(text: &str) -> PromptStats {
    if text.is_empty() {
        return PromptStats {
            length: 0,
            line_count: 0,
            section_count: 0,
            word_count: 0,
        };
    }

    PromptStats {
        length: text.chars().count(),
        line_count: text.lines().count(),
        section_count: text.matches(SECTION_MARKER).count(),
        word_count: text.split_whitespace().count(),
    }
}
