//! Append, remove-last and clear over a shared sequence.
//!
//! State transitions:
//!
//! ```text
//! append       N ──▶ N + 1
//! remove_last  N ──▶ max(N − 1, 0)
//! clear        N ──▶ 0
//! ```
//!
//! Mutations go through `Arc::make_mut`: when a snapshot still shares the
//! sequence, the queue copies it before changing anything, so no snapshot
//! is ever altered after the fact.

use std::sync::Arc;

use super::entry::{join_words, QueueEntry, QueueSnapshot};
use super::QueueError;

/// The words selected in the current session, in order.
#[derive(Debug, Clone, Default)]
pub struct PhraseQueue {
    entries: Arc<Vec<QueueEntry>>,
}

impl PhraseQueue {
    pub fn new() -> Self {
        Self::default()
    }

    // -----------------------------------------------------------------------
    // Mutation
    // -----------------------------------------------------------------------

    /// Append `word` (surrounding whitespace trimmed) and return the new
    /// length.
    ///
    /// Returns [`QueueError::InvalidAppend`] for a blank word; the queue is
    /// left unchanged.
    pub fn append(&mut self, word: &str) -> Result<usize, QueueError> {
        let word = word.trim();
        if word.is_empty() {
            return Err(QueueError::InvalidAppend);
        }

        let entries = Arc::make_mut(&mut self.entries);
        entries.push(QueueEntry::new(word.to_string()));
        log::debug!("queue: appended {word:?} (len={})", entries.len());
        Ok(entries.len())
    }

    /// Remove and return the last entry.  No-op on an empty queue.
    pub fn remove_last(&mut self) -> Option<QueueEntry> {
        if self.entries.is_empty() {
            return None;
        }
        let removed = Arc::make_mut(&mut self.entries).pop();
        log::debug!("queue: removed last (len={})", self.entries.len());
        removed
    }

    /// Reset to the empty sequence.
    pub fn clear(&mut self) {
        self.entries = Arc::default();
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    /// Entries joined by a single space; `""` when empty.
    pub fn phrase(&self) -> String {
        join_words(&self.entries)
    }

    /// Immutable view of the current entries.
    pub fn snapshot(&self) -> QueueSnapshot {
        QueueSnapshot::new(Arc::clone(&self.entries))
    }

    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(QueueEntry::word)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
