//! External playback boundary.
//!
//! Playback is delegated to a system audio utility run as a child process;
//! nothing is decoded in-process. The `Player` trait is the seam the
//! previewer drives, so tests can substitute a recording double.

use std::path::Path;
use std::process::Command;

use crate::config::PlayerConfig;
use crate::error::PlayerError;

/// Port for playing one audio file to completion.
pub trait Player {
    /// Play the file at `path`, blocking until playback finishes.
    fn play(&mut self, path: &Path) -> Result<(), PlayerError>;
}

/// Plays files by invoking a system audio utility per file.
#[derive(Debug, Clone)]
pub struct CommandPlayer {
    program: String,
    args: Vec<String>,
}

impl CommandPlayer {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    /// Build a player from config, falling back to the platform utility when
    /// no program is configured.
    pub fn from_config(config: &PlayerConfig) -> Self {
        if config.program.is_empty() {
            let (program, args) = default_utility();
            Self::new(program, args.iter().map(|a| a.to_string()).collect())
        } else {
            Self::new(config.program.clone(), config.args.clone())
        }
    }

    /// The utility this player invokes
    pub fn program(&self) -> &str {
        &self.program
    }
}

impl Player for CommandPlayer {
    fn play(&mut self, path: &Path) -> Result<(), PlayerError> {
        tracing::debug!(program = %self.program, path = %path.display(), "invoking playback utility");

        // The utility's exit status is not inspected; a nonzero exit still
        // counts as played. Only a failed launch or wait surfaces.
        Command::new(&self.program)
            .args(&self.args)
            .arg(path)
            .status()
            .map_err(|source| PlayerError::LaunchFailed {
                program: self.program.clone(),
                path: path.to_path_buf(),
                source,
            })?;

        Ok(())
    }
}

/// Platform default playback utility
fn default_utility() -> (&'static str, &'static [&'static str]) {
    #[cfg(target_os = "macos")]
    {
        ("afplay", &[])
    }

    #[cfg(not(target_os = "macos"))]
    {
        ("aplay", &["-q"])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_config_uses_configured_program() {
        let config = PlayerConfig {
            program: "paplay".to_string(),
            args: vec!["--volume=65536".to_string()],
        };
        let player = CommandPlayer::from_config(&config);
        assert_eq!(player.program(), "paplay");
        assert_eq!(player.args, vec!["--volume=65536".to_string()]);
    }

    #[test]
    fn test_from_config_falls_back_to_platform_default() {
        let config = PlayerConfig {
            program: String::new(),
            args: Vec::new(),
        };
        let player = CommandPlayer::from_config(&config);
        let (expected, _) = default_utility();
        assert_eq!(player.program(), expected);
    }

    #[test]
    fn test_launch_failure_reports_program_and_path() {
        let mut player = CommandPlayer::new("definitely-not-a-real-player", Vec::new());
        let err = player
            .play(Path::new("/snd/a.wav"))
            .expect_err("launching a missing utility should fail");
        let msg = err.to_string();
        assert!(msg.contains("definitely-not-a-real-player"));
        assert!(msg.contains("/snd/a.wav"));
    }
}
