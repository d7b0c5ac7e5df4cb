//! Configuration type definitions.

use super::enums::DefaultTool;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Live canvas dimensions.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct CanvasConfig {
    /// Canvas width in pixels (valid range: 16 - 8192)
    #[serde(default = "default_canvas_size")]
    pub width: u32,

    /// Canvas height in pixels (valid range: 16 - 8192)
    #[serde(default = "default_canvas_size")]
    pub height: u32,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: default_canvas_size(),
            height: default_canvas_size(),
        }
    }
}

/// Marker tool settings.
///
/// Controls the thin/thick presets and the ink selected when a session starts.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct DrawingConfig {
    /// Thin marker thickness in pixels (valid range: 0.5 - 100.0)
    #[serde(default = "default_thin_thickness")]
    pub thin_thickness: f64,

    /// Thick marker thickness in pixels (valid range: 0.5 - 100.0)
    #[serde(default = "default_thick_thickness")]
    pub thick_thickness: f64,

    /// Initial hue in degrees; 0 draws in black
    #[serde(default)]
    pub default_hue: f64,

    /// Marker preset selected at startup
    #[serde(default)]
    pub default_tool: DefaultTool,
}

impl Default for DrawingConfig {
    fn default() -> Self {
        Self {
            thin_thickness: default_thin_thickness(),
            thick_thickness: default_thick_thickness(),
            default_hue: 0.0,
            default_tool: DefaultTool::default(),
        }
    }
}

/// Glyph stamp settings.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct StampConfig {
    /// Font family used for stamps (emoji-capable fonts recommended)
    #[serde(default = "default_font_family")]
    pub font_family: String,

    /// Glyph size in pixels (valid range: 8.0 - 200.0)
    #[serde(default = "default_font_size")]
    pub font_size: f64,

    /// Glyphs offered by the stamp picker
    #[serde(default = "default_glyphs")]
    pub glyphs: Vec<String>,

    /// Suggested text when prompting for a custom glyph
    #[serde(default = "default_custom_glyph")]
    pub custom_glyph_default: String,
}

impl Default for StampConfig {
    fn default() -> Self {
        Self {
            font_family: default_font_family(),
            font_size: default_font_size(),
            glyphs: default_glyphs(),
            custom_glyph_default: default_custom_glyph(),
        }
    }
}

/// Undo/redo behavior.
#[derive(Debug, Default, Serialize, Deserialize, JsonSchema)]
pub struct HistoryConfig {
    /// Discard the redo buffer whenever a new mark is committed.
    /// When false (default), redo after drawing something new restores the
    /// previously undone mark on top.
    #[serde(default)]
    pub clear_redo_on_commit: bool,
}

/// PNG export settings.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct ExportConfig {
    /// Output scale relative to the live canvas (valid range: 1.0 - 16.0)
    #[serde(default = "default_export_scale")]
    pub scale: f64,

    /// Directory exports are saved to (supports `~/`)
    #[serde(default = "default_save_directory")]
    pub save_directory: String,

    /// Filename template (chrono format specifiers)
    #[serde(default = "default_filename_template")]
    pub filename_template: String,

    /// Image format extension
    #[serde(default = "default_format")]
    pub format: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            scale: default_export_scale(),
            save_directory: default_save_directory(),
            filename_template: default_filename_template(),
            format: default_format(),
        }
    }
}

// =============================================================================
// Default value functions
// =============================================================================

fn default_canvas_size() -> u32 {
    256
}

fn default_thin_thickness() -> f64 {
    1.0
}

fn default_thick_thickness() -> f64 {
    5.0
}

fn default_font_family() -> String {
    "Sans".to_string()
}

fn default_font_size() -> f64 {
    40.0
}

fn default_glyphs() -> Vec<String> {
    ["🦖", "🦕", "🌟", "🔥", "🌈"]
        .into_iter()
        .map(String::from)
        .collect()
}

fn default_custom_glyph() -> String {
    "⭐".to_string()
}

fn default_export_scale() -> f64 {
    4.0
}

fn default_save_directory() -> String {
    dirs::picture_dir()
        .unwrap_or_else(|| PathBuf::from("~"))
        .join("DinoDraw")
        .to_string_lossy()
        .into_owned()
}

fn default_filename_template() -> String {
    "drawing_%Y-%m-%d_%H%M%S".to_string()
}

fn default_format() -> String {
    "png".to_string()
}
