//! Queue slots and immutable snapshots.

use std::sync::Arc;

use uuid::Uuid;

/// One selected word and the render key of its slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueueEntry {
    key: Uuid,
    word: String,
}

impl QueueEntry {
    /// New slot with a freshly generated key.
    pub(crate) fn new(word: String) -> Self {
        Self {
            key: Uuid::new_v4(),
            word,
        }
    }

    /// Render key, fixed for the lifetime of the slot.
    pub fn key(&self) -> Uuid {
        self.key
    }

    pub fn word(&self) -> &str {
        &self.word
    }
}

/// Join words with a single ASCII space.
///
/// Shared by the queue and its snapshots so the spoken and displayed
/// phrase are always the same string.
pub(crate) fn join_words(entries: &[QueueEntry]) -> String {
    entries
        .iter()
        .map(QueueEntry::word)
        .collect::<Vec<_>>()
        .join(" ")
}

// ---------------------------------------------------------------------------
// QueueSnapshot
// ---------------------------------------------------------------------------

/// Immutable view of the queue at one point in time.
///
/// Cloning is an `Arc` clone.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueueSnapshot {
    entries: Arc<Vec<QueueEntry>>,
}

impl QueueSnapshot {
    pub(crate) fn new(entries: Arc<Vec<QueueEntry>>) -> Self {
        Self { entries }
    }

    /// Slots in order, each with its render key.
    pub fn entries(&self) -> &[QueueEntry] {
        &self.entries
    }

    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(QueueEntry::word)
    }

    pub fn phrase(&self) -> String {
        join_words(&self.entries)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
