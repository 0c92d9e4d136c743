//! Data models for words and client-side filter criteria.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Server-assigned word identifier. Opaque to the client and immutable
/// after creation.
pub type WordId = i64;

/// Grammatical word type.
///
/// The authoritative set comes from the server vocabulary endpoint; the
/// static list in [`crate::constants::FALLBACK_WORD_TYPES`] exists for
/// display only.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WordType(String);

impl WordType {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for WordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for WordType {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

/// A vocabulary entry as stored by the server. Mutated only by replacing
/// the whole record on update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Word {
    pub id: WordId,
    pub word: String,
    #[serde(rename = "type")]
    pub word_type: WordType,
}

/// Payload for creating or updating a word. The server assigns ids, so a
/// draft never carries one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordDraft {
    pub word: String,
    #[serde(rename = "type")]
    pub word_type: WordType,
}

impl WordDraft {
    pub fn new(word: impl Into<String>, word_type: impl Into<WordType>) -> Self {
        Self {
            word: word.into(),
            word_type: word_type.into(),
        }
    }
}

/// Type restriction applied by the filter engine.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TypeFilter {
    #[default]
    All,
    Only(WordType),
}

impl TypeFilter {
    /// Parse a user-facing selection, where the literal `All`
    /// (case-insensitive) means no restriction.
    pub fn from_selection(value: &str) -> Self {
        if value.eq_ignore_ascii_case("all") {
            Self::All
        } else {
            Self::Only(WordType::new(value))
        }
    }

    pub fn matches(&self, word: &Word) -> bool {
        match self {
            Self::All => true,
            Self::Only(word_type) => word.word_type == *word_type,
        }
    }
}

/// Transient search/filter state. Derived from caller input on every
/// change and never persisted.
#[derive(Debug, Clone, Default)]
pub struct FilterCriteria {
    /// Case-insensitive substring matched against the `word` field.
    pub search_term: String,
    pub selected_type: TypeFilter,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_serializes_type_field_name() {
        let word = Word {
            id: 5,
            word: "cat".to_string(),
            word_type: WordType::new("Noun"),
        };
        let json = serde_json::to_value(&word).unwrap();
        assert_eq!(json["type"], "Noun");
        assert!(json.get("word_type").is_none());
    }

    #[test]
    fn word_deserializes_server_shape() {
        let word: Word =
            serde_json::from_str(r#"{"id": 7, "word": "run", "type": "Verb"}"#).unwrap();
        assert_eq!(word.id, 7);
        assert_eq!(word.word_type, WordType::new("Verb"));
    }

    #[test]
    fn word_type_is_transparent_in_json() {
        let types: Vec<WordType> = serde_json::from_str(r#"["Noun", "Verb"]"#).unwrap();
        assert_eq!(types, vec![WordType::new("Noun"), WordType::new("Verb")]);
    }

    #[test]
    fn type_filter_parses_all_sentinel() {
        assert_eq!(TypeFilter::from_selection("All"), TypeFilter::All);
        assert_eq!(TypeFilter::from_selection("all"), TypeFilter::All);
        assert_eq!(
            TypeFilter::from_selection("Noun"),
            TypeFilter::Only(WordType::new("Noun"))
        );
    }
}
