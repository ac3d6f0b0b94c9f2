//! Soundboard session — store, queue and speech wired together.
//!
//! # Flow
//!
//! ```text
//! load_vocabulary ──▶ VocabularyStore::seed_if_empty ──▶ get_all ──▶ buttons
//!
//! select(label) ──▶ PhraseQueue::append
//! delete_last   ──▶ PhraseQueue::remove_last
//! clear         ──▶ PhraseQueue::clear
//! speak         ──▶ PhraseQueue::phrase ──▶ SpeechOutput::speak
//! ```
//!
//! # Quick start
//!
//! ```rust
//! use std::sync::Arc;
//! use soundboard::board::Soundboard;
//! use soundboard::speech::LogSpeech;
//! use soundboard::vocabulary::VocabularyStore;
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut board = Soundboard::new(VocabularyStore::in_memory(), Arc::new(LogSpeech));
//!     board.load_vocabulary(&["I", "want", "eat"]).await.unwrap();
//!
//!     board.select("I").unwrap();
//!     board.select("want").unwrap();
//!     assert_eq!(board.speak().as_deref(), Some("I want"));
//! }
//! ```

pub mod command;

pub use command::BoardCommand;

use std::fmt;
use std::sync::Arc;

use thiserror::Error;

use crate::queue::{PhraseQueue, QueueError, QueueSnapshot};
use crate::speech::SpeechOutput;
use crate::vocabulary::{VocabularyEntry, VocabularyError, VocabularyStore};

// ---------------------------------------------------------------------------
// BoardError
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error(transparent)]
    Vocabulary(#[from] VocabularyError),

    #[error(transparent)]
    Queue(#[from] QueueError),

    /// A position outside the loaded vocabulary (positions start at 1).
    #[error("no word at position {0}")]
    NoSuchEntry(usize),

    /// A label that is not in the loaded vocabulary.
    #[error("\"{0}\" is not on the board (use :add to add it)")]
    UnknownWord(String),

    #[error("unknown command: {0}")]
    UnknownCommand(String),
}

// ---------------------------------------------------------------------------
// BoardReply
// ---------------------------------------------------------------------------

/// What the board has to show after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardReply {
    /// The phrase after a queue change.
    Phrase(String),
    /// The phrase that was spoken; `None` when the queue was empty.
    Spoken(Option<String>),
    Words(Vec<VocabularyEntry>),
    Added(VocabularyEntry),
    Quit,
}

impl fmt::Display for BoardReply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardReply::Phrase(phrase) => write!(f, "[{phrase}]"),
            BoardReply::Spoken(Some(phrase)) => write!(f, "speaking: {phrase}"),
            BoardReply::Spoken(None) => write!(f, "nothing to speak"),
            BoardReply::Words(words) => {
                for (i, word) in words.iter().enumerate() {
                    if i > 0 {
                        writeln!(f)?;
                    }
                    write!(f, "{:>3}  {}", i + 1, word.label)?;
                }
                Ok(())
            }
            BoardReply::Added(entry) => write!(f, "added \"{}\"", entry.label),
            BoardReply::Quit => write!(f, "bye"),
        }
    }
}

// ---------------------------------------------------------------------------
// Soundboard
// ---------------------------------------------------------------------------

/// One session of the board.
///
/// The queue belongs to the session and starts empty; the vocabulary is
/// shared through the store.
pub struct Soundboard {
    store: VocabularyStore,
    queue: PhraseQueue,
    speech: Arc<dyn SpeechOutput>,
    vocabulary: Vec<VocabularyEntry>,
}

impl Soundboard {
    pub fn new(store: VocabularyStore, speech: Arc<dyn SpeechOutput>) -> Self {
        Self {
            store,
            queue: PhraseQueue::new(),
            speech,
            vocabulary: Vec::new(),
        }
    }

    // -----------------------------------------------------------------------
    // Vocabulary
    // -----------------------------------------------------------------------

    /// Seed the store if it is empty, then load every entry.
    ///
    /// On failure the cached vocabulary is left empty and the error is
    /// returned so the caller can show a degraded board.
    pub async fn load_vocabulary<S: AsRef<str>>(
        &mut self,
        default_words: &[S],
    ) -> Result<&[VocabularyEntry], VocabularyError> {
        self.vocabulary.clear();
        self.store.seed_if_empty(default_words).await?;
        self.vocabulary = self.store.get_all().await?;
        log::info!("board: {} words loaded", self.vocabulary.len());
        Ok(&self.vocabulary)
    }

    /// Entries loaded by the last [`load_vocabulary`](Self::load_vocabulary).
    pub fn vocabulary(&self) -> &[VocabularyEntry] {
        &self.vocabulary
    }

    /// First loaded entry whose label is exactly `label` (after trimming).
    pub fn find(&self, label: &str) -> Option<&VocabularyEntry> {
        let label = label.trim();
        self.vocabulary.iter().find(|e| e.label == label)
    }

    /// Store a user word and put it on the board.
    pub async fn add_word(&mut self, label: &str) -> Result<VocabularyEntry, VocabularyError> {
        let entry = self.store.add_word(label).await?;
        log::info!("board: added user word {:?} (id {})", entry.label, entry.id);
        self.vocabulary.push(entry.clone());
        Ok(entry)
    }

    // -----------------------------------------------------------------------
    // Phrase
    // -----------------------------------------------------------------------

    /// Append a selected label to the phrase; returns the new length.
    pub fn select(&mut self, label: &str) -> Result<usize, QueueError> {
        self.queue.append(label)
    }

    /// Append the label at `position` (1-based, as listed).
    pub fn select_index(&mut self, position: usize) -> Result<usize, BoardError> {
        let label = position
            .checked_sub(1)
            .and_then(|i| self.vocabulary.get(i))
            .map(|e| e.label.clone())
            .ok_or(BoardError::NoSuchEntry(position))?;
        Ok(self.queue.append(&label)?)
    }

    /// Remove the last word; no-op when the phrase is empty.
    pub fn delete_last(&mut self) {
        self.queue.remove_last();
    }

    pub fn clear(&mut self) {
        self.queue.clear();
    }

    pub fn phrase(&self) -> String {
        self.queue.phrase()
    }

    pub fn snapshot(&self) -> QueueSnapshot {
        self.queue.snapshot()
    }

    /// Hand the current phrase to the speech output.
    ///
    /// Returns the spoken phrase, or `None` without speaking when the phrase
    /// is empty.
    pub fn speak(&self) -> Option<String> {
        let phrase = self.queue.phrase();
        if phrase.is_empty() {
            log::debug!("board: nothing to speak");
            return None;
        }
        self.speech.speak(&phrase);
        Some(phrase)
    }

    // -----------------------------------------------------------------------
    // Commands
    // -----------------------------------------------------------------------

    /// Run one parsed command.
    pub async fn execute(&mut self, command: BoardCommand) -> Result<BoardReply, BoardError> {
        match command {
            BoardCommand::Select(label) => {
                if self.find(&label).is_none() {
                    return Err(BoardError::UnknownWord(label));
                }
                self.select(&label)?;
                Ok(BoardReply::Phrase(self.phrase()))
            }
            BoardCommand::SelectIndex(position) => {
                self.select_index(position)?;
                Ok(BoardReply::Phrase(self.phrase()))
            }
            BoardCommand::Speak => Ok(BoardReply::Spoken(self.speak())),
            BoardCommand::DeleteLast => {
                self.delete_last();
                Ok(BoardReply::Phrase(self.phrase()))
            }
            BoardCommand::Clear => {
                self.clear();
                Ok(BoardReply::Phrase(self.phrase()))
            }
            BoardCommand::ListWords => Ok(BoardReply::Words(self.vocabulary.clone())),
            BoardCommand::AddWord(label) => Ok(BoardReply::Added(self.add_word(&label).await?)),
            BoardCommand::Quit => Ok(BoardReply::Quit),
            BoardCommand::Unknown(input) => Err(BoardError::UnknownCommand(input)),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
