//! Shared defaults for the word API client.

/// Default base URL for the word API.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8089/api";

/// Default request timeout in milliseconds, enforced on the transport.
pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;

/// Static word-type list used for display purposes only (e.g. CLI tag
/// coloring). The server vocabulary is authoritative; this list is never
/// consulted for validation.
pub const FALLBACK_WORD_TYPES: &[&str] = &[
    "Noun",
    "Verb",
    "Adjective",
    "Adverb",
    "Pronoun",
    "Preposition",
    "Interjection",
    "Conjunction",
    "Determiner",
];
