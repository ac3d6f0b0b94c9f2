//! Application settings structs, defaults and TOML persistence.
//!
//! All structs implement `Serialize`, `Deserialize`, `Default` and `Clone`
//! so they can be round-tripped through TOML files.

use std::path::PathBuf;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use super::AppPaths;
use crate::vocabulary::DEFAULT_WORDS;

// ---------------------------------------------------------------------------
// StorageConfig
// ---------------------------------------------------------------------------

/// Where the durable word table lives.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Explicit path to the word table.  `None` means the platform data
    /// directory (see [`AppPaths::words_file`]).
    pub words_file: Option<PathBuf>,
}

impl StorageConfig {
    /// Resolve the word table path, falling back to the platform default.
    pub fn words_path(&self) -> PathBuf {
        self.words_file
            .clone()
            .unwrap_or_else(|| AppPaths::new().words_file)
    }
}

// ---------------------------------------------------------------------------
// SpeechBackend
// ---------------------------------------------------------------------------

/// Selects how a phrase is turned into audible speech.
///
/// | Variant | Behaviour                                         |
/// |---------|---------------------------------------------------|
/// | Log     | Phrase is written to the log only (headless)      |
/// | Command | An external TTS program is spawned per phrase     |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpeechBackend {
    Log,
    Command,
}

impl Default for SpeechBackend {
    fn default() -> Self {
        Self::Command
    }
}

// ---------------------------------------------------------------------------
// SpeechConfig
// ---------------------------------------------------------------------------

/// Settings for the speech output collaborator.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SpeechConfig {
    /// Which backend to use.
    pub backend: SpeechBackend,
    /// Program spawned by the `Command` backend (e.g. `"espeak-ng"`, `"say"`).
    pub program: String,
    /// Extra arguments placed before the phrase, e.g. `["-v", "en-us"]`.
    pub args: Vec<String>,
}

impl Default for SpeechConfig {
    fn default() -> Self {
        Self {
            backend: SpeechBackend::default(),
            program: "espeak-ng".into(),
            args: Vec::new(),
        }
    }
}

// ---------------------------------------------------------------------------
// VocabularyConfig
// ---------------------------------------------------------------------------

/// The factory vocabulary written into an empty word table on first run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct VocabularyConfig {
    /// Seed words, in button order.
    pub default_words: Vec<String>,
}

impl Default for VocabularyConfig {
    fn default() -> Self {
        Self {
            default_words: DEFAULT_WORDS.iter().map(|w| w.to_string()).collect(),
        }
    }
}

// ---------------------------------------------------------------------------
// AppConfig  (top-level)
// ---------------------------------------------------------------------------

/// Top-level application configuration, serialised as `settings.toml`.
///
/// # Persistence
///
/// ```rust,no_run
/// use soundboard::config::AppConfig;
///
/// // Load, writing the defaults on first run so they can be edited
/// let config = AppConfig::load_or_init().unwrap();
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Word table location.
    pub storage: StorageConfig,
    /// Speech output settings.
    pub speech: SpeechConfig,
    /// Seed vocabulary.
    pub vocabulary: VocabularyConfig,
}

impl AppConfig {
    /// Load from `path`; a missing file yields the defaults.
    pub fn load_from(path: &std::path::Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load the platform `settings.toml`, creating it from the defaults when
    /// it does not exist yet.
    pub fn load_or_init() -> Result<Self> {
        Self::load_or_init_at(&AppPaths::new().settings_file)
    }

    /// [`load_or_init`](Self::load_or_init) at an explicit path.
    pub fn load_or_init_at(path: &std::path::Path) -> Result<Self> {
        if path.exists() {
            return Self::load_from(path);
        }
        let config = Self::default();
        config.save_to(path)?;
        log::info!("wrote default settings to {}", path.display());
        Ok(config)
    }

    /// Save to `path`, creating parent directories as needed.
    pub fn save_to(&self, path: &std::path::Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
