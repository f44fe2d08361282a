use std::fs;
use std::path::Path;

use egui::Color32;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur while loading a configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config: {0}")]
    Read(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Result type for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Brush defaults applied to every new surface
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrushConfig {
    pub color: Color32,
    /// Hundredths of the surface width
    pub size: f32,
    /// Inclusive bounds offered by the size slider
    pub size_range: [f32; 2],
}

impl Default for BrushConfig {
    fn default() -> Self {
        Self {
            color: Color32::BLACK,
            size: 1.0,
            size_range: [0.25, 4.0],
        }
    }
}

impl BrushConfig {
    /// Clamps a brush size into the configured range
    pub fn clamp_size(&self, size: f32) -> f32 {
        size.clamp(self.size_range[0], self.size_range[1])
    }
}

/// Application configuration, loadable from JSON
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)] // missing fields fall back to their defaults
pub struct WhiteboardConfig {
    /// Color every redraw clears to
    pub background: Color32,
    pub brush: BrushConfig,
    /// Swatches offered by the palette
    pub palette: Vec<Color32>,
    /// Selectors of extra named boards opened at start-up
    pub boards: Vec<String>,
}

impl Default for WhiteboardConfig {
    fn default() -> Self {
        Self {
            background: Color32::WHITE,
            brush: BrushConfig::default(),
            palette: vec![
                Color32::BLACK,
                Color32::from_rgb(0xe5, 0x39, 0x35),
                Color32::from_rgb(0xfb, 0x8c, 0x00),
                Color32::from_rgb(0xfd, 0xd8, 0x35),
                Color32::from_rgb(0x43, 0xa0, 0x47),
                Color32::from_rgb(0x1e, 0x88, 0xe5),
                Color32::from_rgb(0x8e, 0x24, 0xaa),
                Color32::WHITE,
            ],
            boards: Vec::new(),
        }
    }
}

impl WhiteboardConfig {
    /// Parses and validates a JSON configuration
    pub fn from_json_str(json: &str) -> ConfigResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()
    }

    /// Reads, parses and validates a JSON configuration file
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)?;
        let config = Self::from_json_str(&json)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Checks the brush range and pulls the default size into it
    pub fn validate(mut self) -> ConfigResult<Self> {
        let [min, max] = self.brush.size_range;
        if !(min > 0.0 && min <= max) {
            return Err(ConfigError::Invalid(format!(
                "brush size range [{}, {}] must be positive and ordered",
                min, max
            )));
        }
        if let Some(selector) = self.boards.iter().find(|s| s.trim().is_empty()) {
            return Err(ConfigError::Invalid(format!("empty board selector {:?}", selector)));
        }
        self.brush.size = self.brush.clamp_size(self.brush.size);
        Ok(self)
    }
}
