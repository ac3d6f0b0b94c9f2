//! Phrase queue — the ordered words selected during one session.
//!
//! [`PhraseQueue`] is copy-on-write: its entries live in an `Arc`, and a
//! [`QueueSnapshot`] taken at any point keeps observing exactly the entries
//! it was taken with, no matter how the queue changes afterwards.
//!
//! Each [`QueueEntry`] carries a render key generated when the word is
//! appended.  The key identifies the slot, not the word, so `"go go"` renders
//! as two distinct slots.
//!
//! # Usage
//!
//! ```rust
//! use soundboard::queue::PhraseQueue;
//!
//! let mut queue = PhraseQueue::new();
//! queue.append("I").unwrap();
//! queue.append("want").unwrap();
//! let before = queue.snapshot();
//!
//! queue.append("eat").unwrap();
//! assert_eq!(queue.phrase(), "I want eat");
//! assert_eq!(before.phrase(), "I want");
//! ```

pub mod engine;
pub mod entry;

pub use engine::PhraseQueue;
pub use entry::{QueueEntry, QueueSnapshot};

use thiserror::Error;

/// Errors returned by [`PhraseQueue`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueueError {
    /// `append` was called with an empty or whitespace-only word.
    #[error("cannot append a blank word to the phrase")]
    InvalidAppend,
}
