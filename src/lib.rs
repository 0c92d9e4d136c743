//! HTTP client and in-memory collection store for the word API.
//!
//! `wordbook_core` holds the pure pieces (models, validation, filtering,
//! configuration); this crate adds the reqwest transport and the store that
//! reconciles mutations against API responses.

/// Typed client over the five word API endpoints.
pub mod api;
/// Transport error taxonomy.
pub mod error;
/// Authoritative in-memory word collection.
pub mod store;

pub use api::WordApi;
pub use error::TransportError;
pub use store::WordStore;
pub use wordbook_core::{
    config, constants, filter, models, validate, validate_word, ApiConfig, FilterCriteria, Rules,
    TypeFilter, ValidationErrors, Word, WordDraft, WordId, WordType,
};
