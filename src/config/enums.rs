//! Configuration enum types.

use super::types::DrawingConfig;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Marker preset active when a session starts.
///
/// # Examples
/// ```toml
/// [drawing]
/// default_tool = "thick"
/// ```
#[derive(Debug, Serialize, Deserialize, Clone, Copy, Default, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum DefaultTool {
    /// Thin marker
    #[default]
    Thin,
    /// Thick marker
    Thick,
}

impl DefaultTool {
    /// Resolves the preset to its configured thickness.
    pub fn thickness(self, drawing: &DrawingConfig) -> f64 {
        match self {
            DefaultTool::Thin => drawing.thin_thickness,
            DefaultTool::Thick => drawing.thick_thickness,
        }
    }
}
