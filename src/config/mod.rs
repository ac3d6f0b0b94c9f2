//! Configuration module for the soundboard.
//!
//! Provides `AppConfig` (top-level settings), sub-configs for storage, speech
//! and the seed vocabulary, `AppPaths` for cross-platform directories, and
//! TOML persistence via `AppConfig::load` / `AppConfig::save`.

pub mod paths;
pub mod settings;

pub use paths::AppPaths;
pub use settings::{AppConfig, SpeechBackend, SpeechConfig, StorageConfig, VocabularyConfig};
