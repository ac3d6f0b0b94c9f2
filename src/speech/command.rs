//! Speech through an external TTS program.
//!
//! Each phrase spawns `<program> <args...> <phrase>` with stdio detached.
//! The call returns as soon as the process has started.  At most one
//! phrase is audible: a phrase still playing when the next one arrives is
//! killed and reaped first.
//!
//! Typical programs:
//! - `espeak-ng` (Linux; `sudo apt install espeak-ng`)
//! - `say` (macOS)

use std::process::{Child, Command, Stdio};
use std::sync::Mutex;

use super::SpeechOutput;

/// Spawns an external program per phrase.
#[derive(Debug)]
pub struct CommandSpeech {
    program: String,
    args: Vec<String>,
    current: Mutex<Option<Child>>,
}

impl CommandSpeech {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
            current: Mutex::new(None),
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    fn spawn(&self, text: &str) -> std::io::Result<Child> {
        Command::new(&self.program)
            .args(&self.args)
            .arg(text)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
    }
}

/// Stop `child` if it is still speaking and collect its exit status.
fn cancel(mut child: Child) {
    if let Ok(None) = child.try_wait() {
        log::debug!("speech: interrupting pid {}", child.id());
        if let Err(e) = child.kill() {
            log::debug!("speech: cannot kill pid {}: {e}", child.id());
        }
    }
    if let Err(e) = child.wait() {
        log::debug!("speech: cannot reap pid {}: {e}", child.id());
    }
}

impl SpeechOutput for CommandSpeech {
    fn speak(&self, text: &str) {
        if text.is_empty() {
            return;
        }

        let Ok(mut current) = self.current.lock() else {
            log::warn!("speech: process slot poisoned; skipping phrase");
            return;
        };
        if let Some(previous) = current.take() {
            cancel(previous);
        }

        match self.spawn(text) {
            Ok(child) => {
                log::debug!("speech: spawned {} (pid {})", self.program, child.id());
                *current = Some(child);
            }
            Err(e) => log::warn!("speech: cannot run `{}`: {e}", self.program),
        }
    }
}
