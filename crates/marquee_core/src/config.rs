//! # Runtime Configuration
//!
//! Startup knobs for the game loop, loaded once from a TOML file before the
//! first frame. Nothing here is re-read at runtime.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};

/// Widest target frame rate the limiter supports.
const MAX_TARGET_FPS: u32 = 300;

/// Runtime configuration for the game loop.
///
/// # Example
///
/// ```toml
/// target_fps = 120
/// show_fps = true
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RuntimeConfig {
    /// Desired ticks per second for the frame limiter (valid: 1-300).
    pub target_fps: u32,
    /// Whether to track and display frames-per-second stats.
    pub show_fps: bool,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            target_fps: 60,
            show_fps: false,
        }
    }
}

impl RuntimeConfig {
    /// Parses a configuration from TOML text and validates it.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed or unknown fields and
    /// [`ConfigError::TargetFpsOutOfRange`] for an unusable frame rate.
    pub fn from_toml_str(text: &str) -> ConfigResult<Self> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads and parses a configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, plus every
    /// condition of [`from_toml_str`](Self::from_toml_str).
    pub fn from_path(path: impl AsRef<Path>) -> ConfigResult<Self> {
        Self::from_toml_str(&fs::read_to_string(path)?)
    }

    fn validate(&self) -> ConfigResult<()> {
        if self.target_fps < 1 || self.target_fps > MAX_TARGET_FPS {
            return Err(ConfigError::TargetFpsOutOfRange {
                target_fps: self.target_fps,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_arcade_cabinet() {
        let config = RuntimeConfig::default();
        assert_eq!(config.target_fps, 60);
        assert!(!config.show_fps);
    }

    #[test]
    fn parses_a_full_config() {
        let config = RuntimeConfig::from_toml_str(
            "target_fps = 120\nshow_fps = true\n",
        )
        .unwrap();
        assert_eq!(config.target_fps, 120);
        assert!(config.show_fps);
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config = RuntimeConfig::from_toml_str("show_fps = true\n").unwrap();
        assert_eq!(config.target_fps, 60);
        assert!(config.show_fps);
    }

    #[test]
    fn out_of_range_fps_is_rejected() {
        let err = RuntimeConfig::from_toml_str("target_fps = 0\n").unwrap_err();
        assert!(matches!(
            err,
            ConfigError::TargetFpsOutOfRange { target_fps: 0 }
        ));

        let err = RuntimeConfig::from_toml_str("target_fps = 900\n").unwrap_err();
        assert!(matches!(
            err,
            ConfigError::TargetFpsOutOfRange { target_fps: 900 }
        ));
    }

    #[test]
    fn unknown_fields_are_a_parse_error() {
        let err = RuntimeConfig::from_toml_str("target_fsp = 60\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
