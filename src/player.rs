//! Video playback surface.
//!
//! Playback is delegated to an external player process. The trait exists
//! so the request lifecycle can be exercised without spawning anything.

use std::process::{Command, Stdio};

use thiserror::Error;

use crate::config::PlayerConfig;

#[derive(Debug, Error)]
pub enum PlayerError {
    #[error("failed to launch '{command}': {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },
}

pub trait VideoPlayer {
    /// Start playback of the given URL. A refusal is not fatal; callers
    /// log it and move on.
    fn play(&self, url: &str) -> Result<(), PlayerError>;
}

/// Launches the configured player command with the URL appended.
///
/// The child is detached: its output is discarded and it is never waited
/// on, so a long video does not hold the UI hostage.
pub struct SystemPlayer {
    command: String,
}

impl SystemPlayer {
    pub fn new(config: &PlayerConfig) -> Self {
        Self {
            command: config.command.clone(),
        }
    }
}

impl VideoPlayer for SystemPlayer {
    fn play(&self, url: &str) -> Result<(), PlayerError> {
        tracing::debug!(command = %self.command, url = %url, "launching video player");

        Command::new(&self.command)
            .arg(url)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map(drop)
            .map_err(|e| PlayerError::Spawn {
                command: self.command.clone(),
                source: e,
            })
    }
}

/// Inert player for headless runs and for `--no-play`.
pub struct NoPlayer;

impl VideoPlayer for NoPlayer {
    fn play(&self, _url: &str) -> Result<(), PlayerError> {
        Ok(())
    }
}
