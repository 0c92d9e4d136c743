//! Transport error type produced by the API client.

use thiserror::Error;

/// The single failure kind surfaced by [`crate::WordApi`]: a non-2xx
/// response or a network-level failure, carrying the status code where one
/// is available.
///
/// Validation problems travel on a separate channel
/// ([`wordbook_core::ValidationErrors`]) and are never folded into this
/// type. There are no retries; every failure is terminal for that one call.
#[derive(Error, Debug)]
pub enum TransportError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP error {status}: {message}")]
    Status { status: u16, message: String },

    #[error("invalid API base URL '{0}'")]
    InvalidBaseUrl(String),
}

impl TransportError {
    /// True when the server reported 404 for the addressed record.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Status { status: 404, .. })
    }

    /// The HTTP status code, when the failure carries one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Http(err) => err.status().map(|code| code.as_u16()),
            Self::InvalidBaseUrl(_) => None,
        }
    }
}
