//! Drawing state machine and input state management.

use crate::config::Config;
use crate::draw::{Document, Drawable, GlyphFont, Hue, Point, Stamp, Stroke};
use crate::input::{
    preview::Preview,
    tool::{GlyphPalette, Tool, ToolState},
};

/// Current pointer interaction state.
///
/// While `Dragging`, the active drawable is always the newest entry of the
/// document's committed sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawingState {
    /// Not pressed - pointer moves update the preview
    Idle,
    /// Pointer held down - moves extend the active drawable
    Dragging,
}

/// Redraw request raised by a state change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Redraw {
    /// The document changed; redraw committed drawables only
    Content,
    /// Only the preview or tool changed; redraw with the preview on top when idle
    Cursor,
}

impl Redraw {
    /// Whether this redraw may include the preview.
    pub fn with_preview(self) -> bool {
        matches!(self, Redraw::Cursor)
    }
}

/// Main input state containing all sketching session state.
///
/// This struct holds the document (all committed drawables and the redo
/// buffer), the tool selection, the cursor preview and the drag state. It
/// processes pointer events and history commands, and records which redraw
/// the render pass owes the user.
pub struct InputState {
    /// Committed drawables and redo buffer
    pub document: Document,
    /// Current tool and hue
    pub tools: ToolState,
    /// Glyphs offered to the stamp tool
    pub palette: GlyphPalette,
    /// Font used for new stamps and glyph previews
    pub glyph_font: GlyphFont,
    /// Thin marker preset in pixels
    pub thin_thickness: f64,
    /// Thick marker preset in pixels
    pub thick_thickness: f64,
    /// Current pointer state machine
    pub state: DrawingState,
    /// Canvas width in pixels
    pub canvas_width: u32,
    /// Canvas height in pixels
    pub canvas_height: u32,
    /// Ghost shown under the idle pointer
    pub(crate) preview: Option<Preview>,
    /// Latest unconsumed redraw request
    pub(crate) pending_redraw: Option<Redraw>,
}

impl InputState {
    /// Creates a new InputState with specified defaults.
    ///
    /// Starts idle with an empty document, the marker tool at `thickness`, and
    /// no preview.
    ///
    /// # Arguments
    /// * `thickness` - Initial marker thickness in pixels
    /// * `hue` - Initial ink hue
    /// * `glyph_font` - Font for glyph stamps
    /// * `palette` - Glyphs offered to the stamp tool
    /// * `document` - Document to draw into (carries its redo policy)
    pub fn with_defaults(
        thickness: f64,
        hue: Hue,
        glyph_font: GlyphFont,
        palette: GlyphPalette,
        document: Document,
    ) -> Self {
        Self {
            document,
            tools: ToolState::new(thickness, hue),
            palette,
            glyph_font,
            thin_thickness: thickness,
            thick_thickness: thickness,
            state: DrawingState::Idle,
            canvas_width: 256,
            canvas_height: 256,
            preview: None,
            pending_redraw: Some(Redraw::Content),
        }
    }

    /// Builds the session from loaded configuration.
    pub fn from_config(config: &Config) -> Self {
        let drawing = &config.drawing;
        let thickness = drawing.default_tool.thickness(drawing);
        let mut palette = GlyphPalette::new(config.stamp.glyphs.clone());
        if palette.is_empty() {
            log::warn!("No stamp glyphs configured, using the built-in palette");
            palette = GlyphPalette::default();
        }
        let mut state = Self::with_defaults(
            thickness,
            Hue::new(drawing.default_hue),
            GlyphFont::new(config.stamp.font_family.clone(), config.stamp.font_size),
            palette,
            Document::with_redo_policy(config.history.clear_redo_on_commit),
        );
        state.thin_thickness = drawing.thin_thickness;
        state.thick_thickness = drawing.thick_thickness;
        state.update_canvas_dimensions(config.canvas.width, config.canvas.height);
        state
    }

    /// Updates the canvas size used by full redraws and exports.
    pub fn update_canvas_dimensions(&mut self, width: u32, height: u32) {
        self.canvas_width = width;
        self.canvas_height = height;
        self.request_redraw(Redraw::Content);
    }

    /// Whether a drag is in progress.
    pub fn is_dragging(&self) -> bool {
        self.state == DrawingState::Dragging
    }

    /// The current preview, if one is shown.
    pub fn preview(&self) -> Option<&Preview> {
        self.preview.as_ref()
    }

    /// Records a redraw request; the newest request wins.
    pub(crate) fn request_redraw(&mut self, redraw: Redraw) {
        self.pending_redraw = Some(redraw);
    }

    /// Takes the pending redraw request, if any.
    pub fn take_redraw(&mut self) -> Option<Redraw> {
        self.pending_redraw.take()
    }

    /// Whether a redraw is pending.
    pub fn needs_redraw(&self) -> bool {
        self.pending_redraw.is_some()
    }

    /// Builds a new drawable from the tool selection at `origin`.
    pub(crate) fn create_drawable(&self, origin: Point) -> Drawable {
        match &self.tools.tool {
            Tool::Marker { thickness } => Stroke::new(origin, *thickness, self.tools.hue).into(),
            Tool::Stamp { glyph } => Stamp::new(
                origin,
                glyph.clone(),
                self.glyph_font.clone(),
                self.tools.hue,
            )
            .into(),
        }
    }

    /// Shows the preview at `(x, y)`, rebuilding it when the tool changed.
    pub fn update_preview(&mut self, x: f64, y: f64) {
        let position = Point::new(x, y);
        match self.preview.as_mut() {
            Some(preview) if preview.matches(&self.tools) => preview.move_to(position),
            _ => {
                log::debug!("Rebuilding cursor preview for {:?}", self.tools.tool);
                let rebuilt = Preview::for_tool(&self.tools, &self.glyph_font, position);
                self.preview = Some(rebuilt);
            }
        }
        self.request_redraw(Redraw::Cursor);
    }

    /// Hides the preview until the next idle pointer move.
    pub fn hide_preview(&mut self) {
        self.preview = None;
    }
}
