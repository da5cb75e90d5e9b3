//! Engine configuration
//!
//! Serializable configuration for the engine-level subsystems: window
//! extent, tick rate, asset search directory, and logging. Game-specific
//! tuning lives in the game crate's own config module.

use crate::foundation::math::Extent;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Errors raised while reading a configuration file
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the file
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    /// File was present but not valid RON
    #[error("failed to parse config: {0}")]
    Parse(#[from] ron::error::SpannedError),
}

/// Window configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WindowConfig {
    /// Viewport width in pixels
    pub width: u32,

    /// Viewport height in pixels
    pub height: u32,

    /// Window title
    pub title: String,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 640,
            height: 480,
            title: "sprite_engine".to_string(),
        }
    }
}

impl WindowConfig {
    /// Viewport extent for the configured window
    pub fn extent(&self) -> Extent {
        Extent::new(self.width, self.height)
    }
}

/// Top-level engine configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Window settings
    pub window: WindowConfig,

    /// Fixed simulation rate in ticks per second
    pub tick_rate: u32,

    /// Base directory for named assets
    pub assets_dir: String,

    /// Log level filter for the engine and game
    pub log_level: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            window: WindowConfig::default(),
            tick_rate: 30,
            assets_dir: "resources".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl EngineConfig {
    /// Load configuration from a RON file, falling back to defaults when the
    /// file does not exist. A present-but-invalid file is an error.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            log::debug!("no engine config at {:?}, using defaults", path);
            return Ok(Self::default());
        }
        let text = std::fs::read_to_string(path)?;
        let config: Self = ron::from_str(&text)?;
        config.validated()
    }

    fn validated(mut self) -> Result<Self, ConfigError> {
        if self.tick_rate == 0 {
            log::warn!("tick_rate of 0 is not runnable, clamping to 1");
            self.tick_rate = 1;
        }
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.window.extent(), Extent::new(640, 480));
        assert_eq!(config.tick_rate, 30);
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let config = EngineConfig::load_or_default("does/not/exist.ron").unwrap();
        assert_eq!(config.tick_rate, EngineConfig::default().tick_rate);
    }

    #[test]
    fn test_round_trip() {
        let config = EngineConfig::default();
        let text = ron::to_string(&config).unwrap();
        let parsed: EngineConfig = ron::from_str(&text).unwrap();
        assert_eq!(parsed.window.width, config.window.width);
        assert_eq!(parsed.assets_dir, config.assets_dir);
    }
}
