//! Word table abstraction and the in-memory implementation.
//!
//! [`WordTable`] is the storage seam: a keyed table with store-assigned,
//! monotonically increasing ids and insertion-ordered retrieval.  It is
//! object-safe and `Send + Sync` so it can be held behind an
//! `Arc<dyn WordTable>`.

use std::sync::Mutex;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::VocabularyError;

// ---------------------------------------------------------------------------
// VocabularyEntry
// ---------------------------------------------------------------------------

/// A stored word or short phrase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabularyEntry {
    /// Store-assigned id.  Unique and never reused.
    pub id: u64,
    /// Display and spoken text.
    pub label: String,
    /// `true` for factory vocabulary, `false` for user-added words.
    pub built_in: bool,
}

/// An entry waiting for the table to assign its id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEntry {
    pub label: String,
    pub built_in: bool,
}

impl NewEntry {
    pub fn built_in(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            built_in: true,
        }
    }

    pub fn user(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            built_in: false,
        }
    }
}

// ---------------------------------------------------------------------------
// WordTable trait
// ---------------------------------------------------------------------------

/// Async keyed table of vocabulary entries.
///
/// # Contract
///
/// - `get_all` returns entries in insertion order.
/// - `insert` assigns ids in input order, all greater than any id the table
///   has ever handed out, and stores the batch in a single write.
#[async_trait]
pub trait WordTable: Send + Sync {
    /// Number of stored entries.
    async fn count(&self) -> Result<usize, VocabularyError>;

    /// All entries in insertion order.
    async fn get_all(&self) -> Result<Vec<VocabularyEntry>, VocabularyError>;

    /// Insert `entries` and return them with their assigned ids.
    async fn insert(&self, entries: Vec<NewEntry>)
        -> Result<Vec<VocabularyEntry>, VocabularyError>;
}

// Compile-time assertion: Box<dyn WordTable> must be constructible.
const _: fn() = || {
    fn _assert_object_safe(_: Box<dyn WordTable>) {}
};

/// Assign ids starting at `*next_id` and append to `words`.
///
/// Nothing changes when the id space runs out part way through the batch.
pub(crate) fn append_entries(
    words: &mut Vec<VocabularyEntry>,
    next_id: &mut u64,
    entries: Vec<NewEntry>,
) -> Result<Vec<VocabularyEntry>, VocabularyError> {
    let mut id = *next_id;
    let mut inserted = Vec::with_capacity(entries.len());
    for entry in entries {
        let following = id.checked_add(1).ok_or_else(ids_exhausted)?;
        inserted.push(VocabularyEntry {
            id,
            label: entry.label,
            built_in: entry.built_in,
        });
        id = following;
    }
    *next_id = id;
    words.extend(inserted.iter().cloned());
    Ok(inserted)
}

pub(crate) fn ids_exhausted() -> VocabularyError {
    VocabularyError::StorageUnavailable("word table has run out of ids".into())
}

// ---------------------------------------------------------------------------
// MemoryTable
// ---------------------------------------------------------------------------

struct MemoryState {
    next_id: u64,
    words: Vec<VocabularyEntry>,
}

/// Ephemeral word table; contents are lost when it is dropped.
pub struct MemoryTable {
    state: Mutex<MemoryState>,
}

impl MemoryTable {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(MemoryState {
                next_id: 1,
                words: Vec::new(),
            }),
        }
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, MemoryState>, VocabularyError> {
        self.state
            .lock()
            .map_err(|e| VocabularyError::unavailable("memory table poisoned", e))
    }
}

impl Default for MemoryTable {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl WordTable for MemoryTable {
    async fn count(&self) -> Result<usize, VocabularyError> {
        Ok(self.lock()?.words.len())
    }

    async fn get_all(&self) -> Result<Vec<VocabularyEntry>, VocabularyError> {
        Ok(self.lock()?.words.clone())
    }

    async fn insert(
        &self,
        entries: Vec<NewEntry>,
    ) -> Result<Vec<VocabularyEntry>, VocabularyError> {
        let mut state = self.lock()?;
        let MemoryState { next_id, words } = &mut *state;
        append_entries(words, next_id, entries)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
