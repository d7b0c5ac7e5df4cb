//! Configuration file support for dinodraw.
//!
//! This module handles loading and validating user settings from the configuration file
//! located at `~/.config/dinodraw/config.toml`. Settings include canvas size, marker
//! presets, stamp glyphs, history behavior and export options.
//!
//! If no config file exists, sensible defaults are used automatically.

pub mod enums;
pub mod types;

// Re-export commonly used types at module level
pub use enums::DefaultTool;
pub use types::{CanvasConfig, DrawingConfig, ExportConfig, HistoryConfig, StampConfig};

use anyhow::{Context, Result};
use log::{debug, info, warn};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure containing all user settings.
///
/// This is the root configuration type that gets deserialized from the TOML file.
/// All fields have sensible defaults and will use those if not specified in the config file.
///
/// # Example TOML
/// ```toml
/// [canvas]
/// width = 256
/// height = 256
///
/// [drawing]
/// thin_thickness = 1.0
/// thick_thickness = 5.0
/// default_hue = 0.0
///
/// [stamp]
/// font_family = "Noto Color Emoji"
/// glyphs = ["🦖", "🦕"]
///
/// [history]
/// clear_redo_on_commit = false
///
/// [export]
/// scale = 4.0
/// ```
#[derive(Debug, Serialize, Deserialize, Default, JsonSchema)]
pub struct Config {
    /// Live canvas size
    #[serde(default)]
    pub canvas: CanvasConfig,

    /// Marker presets and starting ink
    #[serde(default)]
    pub drawing: DrawingConfig,

    /// Glyph stamp settings
    #[serde(default)]
    pub stamp: StampConfig,

    /// Undo/redo behavior
    #[serde(default)]
    pub history: HistoryConfig,

    /// PNG export settings
    #[serde(default)]
    pub export: ExportConfig,
}

impl Config {
    /// Validates and clamps all configuration values to acceptable ranges.
    ///
    /// Invalid values are clamped to the nearest valid value and a warning is logged.
    ///
    /// Validated ranges:
    /// - `canvas.width` / `canvas.height`: 16 - 8192
    /// - `thin_thickness` / `thick_thickness`: 0.5 - 100.0
    /// - `default_hue`: wrapped into 0.0 - 360.0
    /// - `stamp.font_size`: 8.0 - 200.0
    /// - `export.scale`: 1.0 - 16.0
    fn validate_and_clamp(&mut self) {
        for (name, value) in [
            ("width", &mut self.canvas.width),
            ("height", &mut self.canvas.height),
        ] {
            if !(16..=8192).contains(&*value) {
                warn!("Invalid canvas {name} {value}, clamping to 16-8192 range");
                *value = (*value).clamp(16, 8192);
            }
        }

        for (name, value) in [
            ("thin_thickness", &mut self.drawing.thin_thickness),
            ("thick_thickness", &mut self.drawing.thick_thickness),
        ] {
            if !(0.5..=100.0).contains(&*value) {
                warn!("Invalid {name} {value:.1}, clamping to 0.5-100.0 range");
                *value = if value.is_nan() { 1.0 } else { value.clamp(0.5, 100.0) };
            }
        }

        if !(0.0..360.0).contains(&self.drawing.default_hue) {
            let wrapped = crate::draw::Hue::new(self.drawing.default_hue).degrees();
            warn!(
                "Invalid default_hue {:.1}, using {:.1}",
                self.drawing.default_hue, wrapped
            );
            self.drawing.default_hue = wrapped;
        }

        if !(8.0..=200.0).contains(&self.stamp.font_size) {
            warn!(
                "Invalid stamp font_size {:.1}, clamping to 8.0-200.0 range",
                self.stamp.font_size
            );
            self.stamp.font_size = if self.stamp.font_size.is_nan() {
                40.0
            } else {
                self.stamp.font_size.clamp(8.0, 200.0)
            };
        }

        if self.stamp.glyphs.iter().any(|glyph| glyph.is_empty()) {
            warn!("Dropping empty entries from stamp glyphs");
            self.stamp.glyphs.retain(|glyph| !glyph.is_empty());
        }

        if !(1.0..=16.0).contains(&self.export.scale) {
            warn!(
                "Invalid export scale {:.1}, clamping to 1.0-16.0 range",
                self.export.scale
            );
            self.export.scale = if self.export.scale.is_nan() {
                4.0
            } else {
                self.export.scale.clamp(1.0, 16.0)
            };
        }

        if !self.export.format.eq_ignore_ascii_case("png") {
            warn!(
                "Unsupported export format '{}', falling back to 'png'",
                self.export.format
            );
            self.export.format = "png".to_string();
        }
    }

    /// Returns the path to the configuration file.
    ///
    /// The config file is located at `~/.config/dinodraw/config.toml`.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("dinodraw");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from the default location, or returns defaults if not found.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The config directory path cannot be determined
    /// - The file exists but cannot be read
    /// - The file exists but contains invalid TOML syntax
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;

        if !config_path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", config_path.display());
            return Ok(Self::default());
        }

        Self::load_from(&config_path)
    }

    /// Loads and validates configuration from an explicit path.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or contains invalid TOML.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        let config_str = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config from {}", config_path.display()))?;

        let config = Self::from_toml_str(&config_str)
            .with_context(|| format!("Failed to parse config from {}", config_path.display()))?;

        info!("Loaded config from {}", config_path.display());
        debug!("Config: {:?}", config);

        Ok(config)
    }

    /// Parses configuration from TOML text and clamps it into valid ranges.
    pub fn from_toml_str(config_str: &str) -> Result<Self> {
        let mut config: Config = toml::from_str(config_str)?;
        config.validate_and_clamp();
        Ok(config)
    }

    /// JSON schema describing the configuration file.
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Config)
    }
}
