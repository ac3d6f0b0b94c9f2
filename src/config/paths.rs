//! Cross-platform application paths using the `dirs` crate.
//!
//! Layout:
//!
//! Config dir (settings):
//!   Windows: %APPDATA%\soundboard\
//!   macOS:   ~/Library/Application Support/soundboard/
//!   Linux:   ~/.config/soundboard/
//!
//! Data dir (word table):
//!   Windows: %LOCALAPPDATA%\soundboard\
//!   macOS:   ~/Library/Application Support/soundboard/
//!   Linux:   ~/.local/share/soundboard/

use std::path::PathBuf;

/// Holds all resolved application directory/file paths.
#[derive(Debug, Clone)]
pub struct AppPaths {
    /// Directory for `settings.toml`.
    pub config_dir: PathBuf,
    /// Full path to `settings.toml`.
    pub settings_file: PathBuf,
    /// Directory for durable user data.
    pub data_dir: PathBuf,
    /// Full path to the word table, `words.json`.
    pub words_file: PathBuf,
}

impl AppPaths {
    const APP_NAME: &'static str = "soundboard";

    /// Resolves all paths using the `dirs` crate.
    ///
    /// Falls back to the current directory if the platform cannot provide a
    /// standard path.
    pub fn new() -> Self {
        let config_dir = dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(Self::APP_NAME);

        let data_dir = dirs::data_local_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(Self::APP_NAME);

        let settings_file = config_dir.join("settings.toml");
        let words_file = data_dir.join("words.json");

        Self {
            config_dir,
            settings_file,
            data_dir,
            words_file,
        }
    }
}

impl Default for AppPaths {
    fn default() -> Self {
        Self::new()
    }
}
