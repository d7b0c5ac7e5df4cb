//! Cursor preview shown while the pointer is idle.

use super::tool::{Tool, ToolState};
use crate::draw::{GlyphFont, Hue, Point, Surface};

/// Ghost of the mark the next pointer-down would produce.
///
/// Previews are never committed and carry a snapshot of the tool parameters
/// they were built from, so a selection change can be detected by comparison.
#[derive(Debug, Clone, PartialEq)]
pub enum Preview {
    /// Filled circle the width of the marker
    Marker {
        position: Point,
        thickness: f64,
        hue: Hue,
    },
    /// Unrotated glyph under the pointer
    Glyph {
        position: Point,
        glyph: String,
        font: GlyphFont,
        hue: Hue,
    },
}

impl Preview {
    /// Builds the preview for the given tool at `position`.
    pub fn for_tool(tools: &ToolState, font: &GlyphFont, position: Point) -> Self {
        match &tools.tool {
            Tool::Marker { thickness } => Preview::Marker {
                position,
                thickness: *thickness,
                hue: tools.hue,
            },
            Tool::Stamp { glyph } => Preview::Glyph {
                position,
                glyph: glyph.clone(),
                font: font.clone(),
                hue: tools.hue,
            },
        }
    }

    /// Whether this preview still reflects the current tool selection.
    pub fn matches(&self, tools: &ToolState) -> bool {
        match (self, &tools.tool) {
            (
                Preview::Marker { thickness, hue, .. },
                Tool::Marker {
                    thickness: selected,
                },
            ) => thickness == selected && *hue == tools.hue,
            (Preview::Glyph { glyph, hue, .. }, Tool::Stamp { glyph: selected }) => {
                glyph == selected && *hue == tools.hue
            }
            _ => false,
        }
    }

    pub fn position(&self) -> Point {
        match self {
            Preview::Marker { position, .. } | Preview::Glyph { position, .. } => *position,
        }
    }

    /// Moves the preview without rebuilding it.
    pub fn move_to(&mut self, point: Point) {
        match self {
            Preview::Marker { position, .. } | Preview::Glyph { position, .. } => {
                *position = point;
            }
        }
    }

    pub fn render<S: Surface + ?Sized>(&self, surface: &mut S) {
        match self {
            Preview::Marker {
                position,
                thickness,
                hue,
            } => surface.fill_circle(position.x, position.y, thickness / 2.0, hue.to_color()),
            Preview::Glyph {
                position,
                glyph,
                font,
                hue,
            } => surface.fill_glyph(glyph, font, *position, 0.0, hue.to_color()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::surface::{DrawOp, Recorder};

    #[test]
    fn marker_preview_is_half_thickness_circle() {
        let tools = ToolState::new(5.0, Hue::NEUTRAL);
        let preview = Preview::for_tool(&tools, &GlyphFont::default(), Point::new(3.0, 4.0));

        let mut recorder = Recorder::new();
        preview.render(&mut recorder);
        assert_eq!(
            recorder.ops,
            vec![DrawOp::FillCircle {
                cx: 3.0,
                cy: 4.0,
                radius: 2.5,
                color: Hue::NEUTRAL.to_color(),
            }]
        );
    }

    #[test]
    fn preview_stops_matching_after_selection_change() {
        let mut tools = ToolState::new(1.0, Hue::NEUTRAL);
        let preview = Preview::for_tool(&tools, &GlyphFont::default(), Point::new(0.0, 0.0));
        assert!(preview.matches(&tools));

        tools.select_stroke(5.0);
        assert!(!preview.matches(&tools));

        tools.select_stamp("🦕");
        assert!(!preview.matches(&tools));
        let glyph = Preview::for_tool(&tools, &GlyphFont::default(), Point::new(0.0, 0.0));
        assert!(glyph.matches(&tools));

        tools.set_hue(90.0);
        assert!(!glyph.matches(&tools));
    }

    #[test]
    fn move_keeps_parameters() {
        let tools = ToolState::new(1.0, Hue::new(45.0));
        let mut preview = Preview::for_tool(&tools, &GlyphFont::default(), Point::new(0.0, 0.0));
        preview.move_to(Point::new(9.0, 9.0));
        assert_eq!(preview.position(), Point::new(9.0, 9.0));
        assert!(preview.matches(&tools));
    }
}
