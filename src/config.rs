//! Application configuration with TOML persistence.
//!
//! Supports loading from file, falling back to defaults, and validation.

use crate::error::{ConfigError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Top-level previewer configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreviewConfig {
    /// Directory every catalog filename is resolved under
    pub base_dir: PathBuf,

    /// Silence between consecutive sounds, in seconds
    pub gap_secs: f32,

    /// External playback utility
    pub player: PlayerConfig,
}

/// External playback utility configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlayerConfig {
    /// Program to invoke; empty selects the platform default
    pub program: String,

    /// Extra arguments placed before the file path
    pub args: Vec<String>,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            base_dir: PathBuf::from("tones-wav"),
            gap_secs: 2.0,
            player: PlayerConfig::default(),
        }
    }
}

impl PreviewConfig {
    /// Load configuration from a TOML file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::LoadFailed {
            path: path.to_path_buf(),
            source,
        })?;

        toml::from_str(&contents).map_err(|source| ConfigError::InvalidFormat {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load configuration with fallback to defaults
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Self {
        Self::load_from_file(path).unwrap_or_else(|e| {
            tracing::warn!("Failed to load config, using defaults: {}", e);
            Self::default()
        })
    }

    /// Save configuration to a TOML file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let path = path.as_ref();

        // Create parent directory if needed
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|source| ConfigError::SaveFailed {
                path: path.to_path_buf(),
                source,
            })?;
        }

        let contents =
            toml::to_string_pretty(self).expect("Config serialization should never fail");

        std::fs::write(path, contents).map_err(|source| ConfigError::SaveFailed {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Get default config file path
    pub fn default_path() -> PathBuf {
        let config_dir = dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("tonedeck");

        config_dir.join("config.toml")
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.base_dir.as_os_str().is_empty() {
            return Err(ConfigError::ValidationFailed {
                reason: "Base directory must not be empty".to_string(),
            });
        }

        if !self.gap_secs.is_finite() || !(0.0..=30.0).contains(&self.gap_secs) {
            return Err(ConfigError::ValidationFailed {
                reason: format!("Gap {}s out of range 0-30s", self.gap_secs),
            });
        }

        if self.player.program.is_empty() && !self.player.args.is_empty() {
            return Err(ConfigError::ValidationFailed {
                reason: "Player arguments given without a player program".to_string(),
            });
        }

        Ok(())
    }
}

// Helper for getting config dir without an extra dependency
mod dirs {
    use std::path::PathBuf;

    pub fn config_dir() -> Option<PathBuf> {
        #[cfg(target_os = "linux")]
        {
            std::env::var("XDG_CONFIG_HOME")
                .ok()
                .map(PathBuf::from)
                .or_else(|| {
                    std::env::var("HOME")
                        .ok()
                        .map(|h| PathBuf::from(h).join(".config"))
                })
        }

        #[cfg(target_os = "macos")]
        {
            std::env::var("HOME")
                .ok()
                .map(|h| PathBuf::from(h).join("Library/Application Support"))
        }

        #[cfg(target_os = "windows")]
        {
            std::env::var("APPDATA").ok().map(PathBuf::from)
        }

        #[cfg(not(any(target_os = "linux", target_os = "macos", target_os = "windows")))]
        {
            None
        }
    }
}
