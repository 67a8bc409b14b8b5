//! Error types for the tonedeck previewer.
//!
//! Structured errors with context, user-friendly messages, and a crate-wide
//! `Result` alias.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level error type for all tonedeck operations.
#[derive(Error, Debug)]
pub enum PreviewError {
    /// External playback utility errors
    #[error("Player error: {0}")]
    Player(#[from] PlayerError),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// I/O errors (console output)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors from the external playback boundary
#[derive(Error, Debug)]
pub enum PlayerError {
    #[error("Failed to launch '{program}' for '{path}': {source}")]
    LaunchFailed {
        program: String,
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to load config file '{path}': {source}")]
    LoadFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid config format in '{path}': {source}")]
    InvalidFormat {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Config validation failed: {reason}")]
    ValidationFailed { reason: String },

    #[error("Failed to save config to '{path}': {source}")]
    SaveFailed {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Result type alias for tonedeck operations
pub type Result<T, E = PreviewError> = std::result::Result<T, E>;

impl PlayerError {
    /// Get user-friendly message
    pub fn user_message(&self) -> String {
        match self {
            PlayerError::LaunchFailed { program, path, .. } => {
                format!(
                    "Could not run '{}' to play '{}' (is it installed?)",
                    program,
                    path.display()
                )
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PlayerError::LaunchFailed {
            program: "afplay".to_string(),
            path: PathBuf::from("/snd/a.wav"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
        };
        assert!(err.to_string().contains("afplay"));
        assert!(err.to_string().contains("/snd/a.wav"));
    }

    #[test]
    fn test_user_messages() {
        let err = PlayerError::LaunchFailed {
            program: "aplay".to_string(),
            path: PathBuf::from("chime_done.wav"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
        };
        let msg = err.user_message();
        assert!(msg.contains("aplay"));
        assert!(msg.contains("chime_done.wav"));
        assert!(!msg.contains("Error")); // User-friendly, not technical
    }

    #[test]
    fn test_config_error_wraps_into_top_level() {
        let err: PreviewError = ConfigError::ValidationFailed {
            reason: "gap must be >= 0".to_string(),
        }
        .into();
        assert!(err.to_string().contains("gap must be >= 0"));
    }
}
