//! Soundboard — an AAC (augmentative and alternative communication) board.
//!
//! A fixed vocabulary of words is offered for selection; each selection is
//! appended to a phrase queue that can be spoken aloud, trimmed one word at
//! a time, or cleared.  The vocabulary lives in a durable word table that is
//! seeded with [`vocabulary::DEFAULT_WORDS`] on first run.
//!
//! # Modules
//!
//! * [`vocabulary`] — word table trait, durable JSON table, seeding store.
//! * [`queue`] — copy-on-write phrase queue with per-slot render keys.
//! * [`speech`] — fire-and-forget speech output backends.
//! * [`board`] — session facade wiring the three together.
//! * [`config`] — TOML settings and platform paths.

pub mod board;
pub mod config;
pub mod queue;
pub mod speech;
pub mod vocabulary;
