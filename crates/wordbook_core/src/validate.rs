//! Draft validation applied before any submission to the API.
//!
//! Validation results travel on their own channel; they are never folded
//! into transport errors.

use crate::models::WordDraft;
use serde::Serialize;

/// Field-keyed validation messages. Empty iff the draft is submittable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationErrors {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub word: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub word_type: Option<String>,
}

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.word.is_none() && self.word_type.is_none()
    }

    /// Populated (field, message) pairs, for display.
    pub fn messages(&self) -> Vec<(&'static str, &str)> {
        let mut out = Vec::new();
        if let Some(message) = self.word.as_deref() {
            out.push(("word", message));
        }
        if let Some(message) = self.word_type.as_deref() {
            out.push(("type", message));
        }
        out
    }
}

/// Length bounds for the word field.
///
/// There is one canonical rule set; call sites that need different bounds
/// configure them here instead of duplicating the rules.
#[derive(Debug, Clone, Copy)]
pub struct Rules {
    pub min_len: usize,
    pub max_len: usize,
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            min_len: 2,
            max_len: 50,
        }
    }
}

impl Rules {
    /// Check a draft, short-circuiting per field but not across fields.
    pub fn validate(&self, draft: &WordDraft) -> ValidationErrors {
        let mut errors = ValidationErrors::default();

        let word = draft.word.trim();
        let len = word.chars().count();
        if word.is_empty() {
            errors.word = Some("Word is required".to_string());
        } else if len < self.min_len {
            errors.word = Some(format!("Word must be at least {} characters", self.min_len));
        } else if len > self.max_len {
            errors.word = Some(format!("Word must not exceed {} characters", self.max_len));
        } else if !word.chars().all(is_word_char) {
            errors.word = Some(
                "Word must contain only letters, spaces, hyphens, and apostrophes".to_string(),
            );
        }

        if draft.word_type.as_str().trim().is_empty() {
            errors.word_type = Some("Word type is required".to_string());
        }

        errors
    }
}

fn is_word_char(ch: char) -> bool {
    ch.is_ascii_alphabetic() || ch.is_whitespace() || ch == '-' || ch == '\''
}

/// Validate a draft against the canonical rules.
pub fn validate_word(draft: &WordDraft) -> ValidationErrors {
    Rules::default().validate(draft)
}
