//! Vocabulary storage for the soundboard.
//!
//! # Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────┐
//! │                    VocabularyStore                          │
//! │   count / seed_if_empty / get_all / add                     │
//! │                         │                                   │
//! │                         ▼                                   │
//! │              WordTable (async trait)                        │
//! │          ┌──────────────┴──────────────┐                    │
//! │   ┌─────────────┐              ┌───────────────┐            │
//! │   │ MemoryTable │              │ JsonFileTable │            │
//! │   │ (ephemeral) │              │ words.json v1 │            │
//! │   └─────────────┘              └───────────────┘            │
//! └────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Quick start
//!
//! ```rust,no_run
//! use soundboard::vocabulary::{VocabularyStore, DEFAULT_WORDS};
//!
//! #[tokio::main]
//! async fn main() {
//!     let store = VocabularyStore::open("words.json").await;
//!     store.seed_if_empty(DEFAULT_WORDS).await.unwrap();
//!     for entry in store.get_all().await.unwrap() {
//!         println!("{} {}", entry.id, entry.label);
//!     }
//! }
//! ```

pub mod defaults;
pub mod file;
pub mod store;
pub mod table;

// ---------------------------------------------------------------------------
// Public re-exports
// ---------------------------------------------------------------------------

pub use defaults::DEFAULT_WORDS;
pub use file::{JsonFileTable, SCHEMA_VERSION};
pub use store::VocabularyStore;
pub use table::{MemoryTable, NewEntry, VocabularyEntry, WordTable};

use thiserror::Error;

// ---------------------------------------------------------------------------
// VocabularyError
// ---------------------------------------------------------------------------

/// Errors surfaced by the vocabulary store and its tables.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VocabularyError {
    /// The word table could not be opened, read or written.
    #[error("vocabulary storage unavailable: {0}")]
    StorageUnavailable(String),

    /// A word was added with an empty or whitespace-only label.
    #[error("vocabulary label must not be blank")]
    InvalidLabel,
}

impl VocabularyError {
    pub(crate) fn unavailable(context: &str, err: impl std::fmt::Display) -> Self {
        VocabularyError::StorageUnavailable(format!("{context}: {err}"))
    }
}
