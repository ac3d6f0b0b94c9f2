//! Speech output: turns a phrase into audible speech.
//!
//! Speaking is fire-and-forget: [`SpeechOutput::speak`] returns nothing and
//! backends log their own failures.  The board never waits for speech to
//! finish and never observes whether it succeeded.
//!
//! | Backend          | When                                        |
//! |------------------|---------------------------------------------|
//! | [`LogSpeech`]     | headless runs and tests                     |
//! | [`CommandSpeech`] | an external TTS program such as `espeak-ng` |

pub mod command;

pub use command::CommandSpeech;

use std::sync::Arc;

use crate::config::{SpeechBackend, SpeechConfig};

// ---------------------------------------------------------------------------
// SpeechOutput trait
// ---------------------------------------------------------------------------

/// Object-safe, thread-safe speech sink.
pub trait SpeechOutput: Send + Sync {
    /// Start speaking `text`.  Best effort; errors are not reported.
    fn speak(&self, text: &str);
}

// Compile-time assertion: Box<dyn SpeechOutput> must be constructible.
const _: fn() = || {
    fn _assert_object_safe(_: Box<dyn SpeechOutput>) {}
};

// ---------------------------------------------------------------------------
// LogSpeech
// ---------------------------------------------------------------------------

/// Writes each phrase to the log instead of a speaker.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSpeech;

impl SpeechOutput for LogSpeech {
    fn speak(&self, text: &str) {
        log::info!("speak: {text}");
    }
}

// ---------------------------------------------------------------------------
// Factory
// ---------------------------------------------------------------------------

/// Build the speech backend selected in `config`.
pub fn create_speech(config: &SpeechConfig) -> Arc<dyn SpeechOutput> {
    match config.backend {
        SpeechBackend::Log => Arc::new(LogSpeech),
        SpeechBackend::Command => {
            log::info!("speech via `{}`", config.program);
            Arc::new(CommandSpeech::new(config.program.clone(), config.args.clone()))
        }
    }
}
