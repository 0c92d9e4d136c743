//! In-memory word collection reconciled against the remote API.

use tracing::{debug, warn};
use wordbook_core::{filter, FilterCriteria, Word, WordDraft, WordId, WordType};

use crate::api::WordApi;
use crate::error::TransportError;

/// Authoritative client-side state: the word collection plus the memoized
/// word-type vocabulary.
///
/// Every mutating method takes `&mut self` and awaits its API call to
/// completion before touching the collection, so mutations are serialized
/// and there is never a speculative update to roll back. Callers validate
/// drafts (see [`wordbook_core::validate_word`]) before invoking `create`
/// or `update`, and perform the user-facing confirmation step before
/// `delete`.
#[derive(Debug)]
pub struct WordStore {
    api: WordApi,
    words: Vec<Word>,
    types: Option<Vec<WordType>>,
}

impl WordStore {
    pub fn new(api: WordApi) -> Self {
        Self {
            api,
            words: Vec::new(),
            types: None,
        }
    }

    /// Current collection, in server order.
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Visible subset under `criteria`, order preserved.
    pub fn visible(&self, criteria: &FilterCriteria) -> Vec<&Word> {
        filter::visible(&self.words, criteria)
    }

    /// Fetch the word collection and the type vocabulary, replacing each
    /// wholesale on its own success.
    ///
    /// The two fetches are independent: a failure on one side leaves that
    /// side's previous state untouched while the other may still update.
    /// The first error encountered is returned.
    pub async fn hydrate(&mut self) -> Result<(), TransportError> {
        let (words, types) = tokio::join!(self.api.list_words(), self.api.list_word_types());

        let mut first_error = None;
        match words {
            Ok(words) => {
                debug!(count = words.len(), "hydrated word collection");
                self.words = words;
            }
            Err(err) => first_error = Some(err),
        }
        match types {
            Ok(types) => self.types = Some(types),
            Err(err) => first_error = first_error.or(Some(err)),
        }

        match first_error {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    /// Memoized word-type vocabulary: fetched once, then served from the
    /// cache until [`WordStore::refresh_types`] invalidates it.
    pub async fn word_types(&mut self) -> Result<&[WordType], TransportError> {
        if self.types.is_none() {
            self.types = Some(self.api.list_word_types().await?);
        }
        Ok(self.types.as_deref().unwrap_or_default())
    }

    /// Drop the cached vocabulary and refetch it.
    pub async fn refresh_types(&mut self) -> Result<&[WordType], TransportError> {
        self.types = None;
        self.word_types().await
    }

    /// Create a word and append the server's record, with its assigned id,
    /// to the end of the collection. Resolves only after the server id is
    /// known; there is no placeholder entry while the call is in flight.
    pub async fn create(&mut self, draft: &WordDraft) -> Result<Word, TransportError> {
        let created = self.api.create_word(draft).await?;
        debug!(id = created.id, word = %created.word, "created word");
        self.words.push(created.clone());
        Ok(created)
    }

    /// Replace the word with `id` in place, preserving its position.
    ///
    /// When no element matches, the collection is left unchanged and the
    /// server's response is discarded; the case is logged so it stays
    /// observable.
    pub async fn update(&mut self, id: WordId, draft: &WordDraft) -> Result<Word, TransportError> {
        let updated = self.api.update_word(id, draft).await?;
        match self.words.iter_mut().find(|word| word.id == id) {
            Some(slot) => *slot = updated.clone(),
            None => warn!(id, "update response for an id not in the collection; ignoring"),
        }
        Ok(updated)
    }

    /// Delete the word with `id`, removing exactly that element from the
    /// collection once the server confirms.
    pub async fn delete(&mut self, id: WordId) -> Result<(), TransportError> {
        self.api.delete_word(id).await?;
        self.words.retain(|word| word.id != id);
        debug!(id, "deleted word");
        Ok(())
    }
}
