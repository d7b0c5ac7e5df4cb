//! Drawing tool selection.

use crate::draw::Hue;

/// Drawing tool selection.
///
/// The active tool determines what drawable is created on pointer-down.
#[derive(Debug, Clone, PartialEq)]
pub enum Tool {
    /// Freehand marker with a fixed line thickness
    Marker {
        /// Line thickness in pixels
        thickness: f64,
    },
    /// Glyph stamp, rotated by dragging away from the anchor
    Stamp {
        /// Glyph text placed by the stamp
        glyph: String,
    },
}

/// Active tool plus the ink hue shared by every tool.
#[derive(Debug, Clone, PartialEq)]
pub struct ToolState {
    pub tool: Tool,
    pub hue: Hue,
}

impl ToolState {
    /// Starts in marker mode with the given thickness.
    pub fn new(thickness: f64, hue: Hue) -> Self {
        Self {
            tool: Tool::Marker { thickness },
            hue,
        }
    }

    /// Switches to the marker tool. Returns `true` if the selection changed.
    pub fn select_stroke(&mut self, thickness: f64) -> bool {
        let next = Tool::Marker { thickness };
        self.replace(next)
    }

    /// Switches to the stamp tool. Returns `true` if the selection changed.
    pub fn select_stamp(&mut self, glyph: impl Into<String>) -> bool {
        let next = Tool::Stamp {
            glyph: glyph.into(),
        };
        self.replace(next)
    }

    /// Sets the ink hue (wrapped into `[0, 360)`).
    pub fn set_hue(&mut self, degrees: f64) {
        self.hue = Hue::new(degrees);
    }

    /// Currently selected glyph, if in stamp mode.
    pub fn glyph(&self) -> Option<&str> {
        match &self.tool {
            Tool::Stamp { glyph } => Some(glyph),
            Tool::Marker { .. } => None,
        }
    }

    /// Currently selected thickness, if in marker mode.
    pub fn thickness(&self) -> Option<f64> {
        match self.tool {
            Tool::Marker { thickness } => Some(thickness),
            Tool::Stamp { .. } => None,
        }
    }

    fn replace(&mut self, next: Tool) -> bool {
        if self.tool == next {
            false
        } else {
            self.tool = next;
            true
        }
    }
}

/// Glyphs offered by the stamp picker.
///
/// Custom glyphs are appended; entries are never removed during a session.
#[derive(Debug, Clone, PartialEq)]
pub struct GlyphPalette {
    glyphs: Vec<String>,
}

impl GlyphPalette {
    pub fn new(glyphs: Vec<String>) -> Self {
        Self { glyphs }
    }

    pub fn glyphs(&self) -> &[String] {
        &self.glyphs
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.glyphs.get(index).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    /// Adds a user-entered glyph and returns its index.
    ///
    /// The text is stored as given; filtering empty input is the caller's job.
    pub fn add_custom(&mut self, glyph: impl Into<String>) -> usize {
        self.glyphs.push(glyph.into());
        self.glyphs.len() - 1
    }
}

impl Default for GlyphPalette {
    fn default() -> Self {
        Self::new(
            ["🦖", "🦕", "🌟", "🔥", "🌈"]
                .into_iter()
                .map(String::from)
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selecting_same_tool_reports_no_change() {
        let mut state = ToolState::new(1.0, Hue::NEUTRAL);
        assert!(!state.select_stroke(1.0));
        assert!(state.select_stroke(5.0));
        assert!(state.select_stamp("🦖"));
        assert!(!state.select_stamp("🦖"));
        assert_eq!(state.glyph(), Some("🦖"));
        assert_eq!(state.thickness(), None);
    }

    #[test]
    fn hue_is_shared_across_tools() {
        let mut state = ToolState::new(1.0, Hue::NEUTRAL);
        state.set_hue(200.0);
        state.select_stamp("🌈");
        assert_eq!(state.hue.degrees(), 200.0);
    }

    #[test]
    fn custom_glyphs_append_to_palette() {
        let mut palette = GlyphPalette::default();
        let before = palette.len();
        let index = palette.add_custom("⭐");
        assert_eq!(index, before);
        assert_eq!(palette.get(index), Some("⭐"));
        assert_eq!(palette.get(index + 1), None);
    }
}
