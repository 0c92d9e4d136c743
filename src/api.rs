//! Typed reqwest client for the five word API endpoints.

use reqwest::{Response, StatusCode, Url};
use serde_json::Value;
use tracing::debug;
use wordbook_core::{ApiConfig, Word, WordDraft, WordId, WordType};

use crate::error::TransportError;

/// Thin client over the remote word API.
///
/// Every call hits the network: no retries, no caching, no request
/// coalescing. The configured timeout is enforced on the underlying
/// transport.
#[derive(Debug, Clone)]
pub struct WordApi {
    http: reqwest::Client,
    base_url: Url,
}

impl WordApi {
    /// Build a client from configuration.
    pub fn new(config: &ApiConfig) -> Result<Self, TransportError> {
        let base_url = Url::parse(&config.base_url)
            .map_err(|_| TransportError::InvalidBaseUrl(config.base_url.clone()))?;
        let http = reqwest::Client::builder().timeout(config.timeout()).build()?;
        Ok(Self { http, base_url })
    }

    /// Fetch the full word collection, in server order.
    pub async fn list_words(&self) -> Result<Vec<Word>, TransportError> {
        let url = self.endpoint(&["words", "getAllWords"])?;
        debug!(%url, "listing words");
        let res = self.http.get(url).send().await?;
        Ok(ensure_success(res).await?.json().await?)
    }

    /// Fetch the word-type vocabulary. The server set is authoritative.
    pub async fn list_word_types(&self) -> Result<Vec<WordType>, TransportError> {
        let url = self.endpoint(&["words", "getAllWordTypes"])?;
        debug!(%url, "listing word types");
        let res = self.http.get(url).send().await?;
        Ok(ensure_success(res).await?.json().await?)
    }

    /// Create a word; the server assigns the id.
    pub async fn create_word(&self, draft: &WordDraft) -> Result<Word, TransportError> {
        let url = self.endpoint(&["words", "addWord"])?;
        debug!(%url, word = %draft.word, "creating word");
        let res = self.http.post(url).json(draft).send().await?;
        Ok(ensure_success(res).await?.json().await?)
    }

    /// Replace the word with `id` wholesale. An unknown id surfaces as a
    /// [`TransportError::Status`] with 404 metadata.
    pub async fn update_word(&self, id: WordId, draft: &WordDraft) -> Result<Word, TransportError> {
        let url = self.endpoint(&["words", "updateWordById", &id.to_string()])?;
        debug!(%url, id, "updating word");
        let res = self.http.put(url).json(draft).send().await?;
        Ok(ensure_success(res).await?.json().await?)
    }

    /// Delete the word with `id`. A 204-style empty body and a JSON body
    /// are both success; the body is discarded either way.
    pub async fn delete_word(&self, id: WordId) -> Result<(), TransportError> {
        let url = self.endpoint(&["words", "deleteWordById", &id.to_string()])?;
        debug!(%url, id, "deleting word");
        let res = self.http.delete(url).send().await?;
        ensure_success(res).await?;
        Ok(())
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url, TransportError> {
        join_segments(&self.base_url, segments)
            .ok_or_else(|| TransportError::InvalidBaseUrl(self.base_url.to_string()))
    }
}

/// Append path segments to a base URL without clobbering its existing path.
fn join_segments(base: &Url, segments: &[&str]) -> Option<Url> {
    let mut url = base.clone();
    {
        let mut path = url.path_segments_mut().ok()?;
        path.pop_if_empty();
        for segment in segments {
            path.push(segment);
        }
    }
    Some(url)
}

/// Pass a response through on 2xx, otherwise produce a
/// [`TransportError::Status`] carrying the code and the most useful message
/// found in the body. Success is an explicit status-range check.
async fn ensure_success(res: Response) -> Result<Response, TransportError> {
    let status = res.status();
    if status.is_success() {
        return Ok(res);
    }
    let body = res.text().await.unwrap_or_default();
    Err(TransportError::Status {
        status: status.as_u16(),
        message: status_message(status, &body),
    })
}

/// Prefer a JSON `message`/`error` field, then the raw body, then the
/// status line's canonical reason.
fn status_message(status: StatusCode, body: &str) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return status
            .canonical_reason()
            .unwrap_or("request failed")
            .to_string();
    }
    match serde_json::from_str::<Value>(trimmed) {
        Ok(value) => value
            .get("message")
            .or_else(|| value.get("error"))
            .and_then(Value::as_str)
            .map(str::to_string)
            .unwrap_or_else(|| trimmed.to_string()),
        Err(_) => trimmed.to_string(),
    }
}
