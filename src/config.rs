//! Engine configuration
//!
//! Uses RON (Rusty Object Notation) for the optional config file; every
//! field has a default, so a partial file (or none at all) works.

use std::fs;
use std::path::Path;

use macroquad::color::Color;
use serde::{Deserialize, Serialize};

/// Error type for config loading
#[derive(Debug)]
pub enum ConfigError {
    IoError(std::io::Error),
    ParseError(ron::error::SpannedError),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::IoError(e)
    }
}

impl From<ron::error::SpannedError> for ConfigError {
    fn from(e: ron::error::SpannedError) -> Self {
        ConfigError::ParseError(e)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::IoError(e) => write!(f, "IO error: {}", e),
            ConfigError::ParseError(e) => write!(f, "Parse error: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Virtual resolution and presentation settings for an [`Engine`].
///
/// [`Engine`]: crate::engine::Engine
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Window title
    pub title: String,
    /// Virtual resolution in world/UI pixels
    pub width: f32,
    pub height: f32,
    /// Canvas clear color as 8-bit RGB
    pub background: (u8, u8, u8),
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            title: "tinypix".to_string(),
            width: 160.0,
            height: 144.0,
            background: (0x34, 0x68, 0x56),
        }
    }
}

impl EngineConfig {
    /// Load a config from a RON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        let config = ron::from_str(&text)?;
        Ok(config)
    }

    /// Background as a drawable color.
    pub fn background_color(&self) -> Color {
        let (r, g, b) = self.background;
        Color::from_rgba(r, g, b, 255)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.width, 160.0);
        assert_eq!(config.height, 144.0);
        assert_eq!(config.background, (0x34, 0x68, 0x56));
    }

    #[test]
    fn test_load_partial_file_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "(width: 320.0, height: 240.0)").unwrap();

        let config = EngineConfig::load(file.path()).unwrap();
        assert_eq!(config.width, 320.0);
        assert_eq!(config.height, 240.0);
        assert_eq!(config.title, "tinypix");
    }

    #[test]
    fn test_load_missing_file_errors() {
        assert!(matches!(
            EngineConfig::load("/definitely/not/here.ron"),
            Err(ConfigError::IoError(_))
        ));
    }

    #[test]
    fn test_load_garbage_errors() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not ron at all }}{{").unwrap();

        assert!(matches!(
            EngineConfig::load(file.path()),
            Err(ConfigError::ParseError(_))
        ));
    }
}
