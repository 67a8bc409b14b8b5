//! Test doubles for the playback boundary.
//!
//! These stand in for the external audio utility so the previewer's ordering,
//! pacing, and failure behavior can be asserted without audio hardware.

use std::path::{Path, PathBuf};

use crate::catalog::SoundEntry;
use crate::error::PlayerError;
use crate::player::Player;

/// Player double that records every path it is asked to play.
#[derive(Debug, Default)]
pub struct RecordingPlayer {
    /// Paths in invocation order
    pub plays: Vec<PathBuf>,
}

impl Player for RecordingPlayer {
    fn play(&mut self, path: &Path) -> Result<(), PlayerError> {
        self.plays.push(path.to_path_buf());
        Ok(())
    }
}

/// Player double that fails on the nth call (1-based), recording every
/// attempt like `RecordingPlayer`.
#[derive(Debug)]
pub struct FailingPlayer {
    /// Paths in invocation order, including the failing attempt
    pub plays: Vec<PathBuf>,
    fail_on: usize,
}

impl FailingPlayer {
    pub fn fail_on(call: usize) -> Self {
        Self {
            plays: Vec::new(),
            fail_on: call,
        }
    }
}

impl Player for FailingPlayer {
    fn play(&mut self, path: &Path) -> Result<(), PlayerError> {
        self.plays.push(path.to_path_buf());
        if self.plays.len() == self.fail_on {
            return Err(PlayerError::LaunchFailed {
                program: "test-player".to_string(),
                path: path.to_path_buf(),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "player missing"),
            });
        }
        Ok(())
    }
}

/// Build catalog entries from owned strings by leaking them.
///
/// `SoundEntry` borrows `'static` strings so the shipped catalog can live in
/// a const table; generated test catalogs get the same lifetime by leaking.
pub fn leaked_entries(pairs: &[(String, String)]) -> Vec<SoundEntry> {
    pairs
        .iter()
        .map(|(filename, description)| SoundEntry {
            filename: Box::leak(filename.clone().into_boxed_str()),
            description: Box::leak(description.clone().into_boxed_str()),
        })
        .collect()
}
