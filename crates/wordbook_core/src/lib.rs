//! Core domain library for wordbook (models, validation, filtering, config).

/// Configuration loading and defaults.
pub mod config;
/// Shared constants and display fallbacks.
pub mod constants;
/// Pure visible-subset computation.
pub mod filter;
/// Data models for words and filter criteria.
pub mod models;
/// Draft validation rules.
pub mod validate;

pub use config::ApiConfig;
pub use models::{FilterCriteria, TypeFilter, Word, WordDraft, WordId, WordType};
pub use validate::{validate_word, Rules, ValidationErrors};
