use crate::draw::{Surface, redraw_all};
use crate::export::{self, ExportError};

use super::{InputState, Redraw};

impl InputState {
    /// Performs a full redraw of the live canvas.
    ///
    /// Clears the canvas and renders every committed drawable in order. The
    /// preview is drawn on top only for [`Redraw::Cursor`] and only while idle.
    pub fn render<S: Surface + ?Sized>(&self, surface: &mut S, redraw: Redraw) {
        redraw_all(
            surface,
            self.canvas_width as f64,
            self.canvas_height as f64,
            self.document.drawables(),
        );

        if redraw.with_preview() && !self.is_dragging() {
            if let Some(preview) = &self.preview {
                preview.render(surface);
            }
        }
    }

    /// Consumes the pending redraw request and renders it.
    ///
    /// Returns `true` if a redraw was performed.
    pub fn render_pending<S: Surface + ?Sized>(&mut self, surface: &mut S) -> bool {
        match self.take_redraw() {
            Some(redraw) => {
                self.render(surface, redraw);
                true
            }
            None => false,
        }
    }

    /// Encodes the committed document as PNG at `scale` times the canvas size.
    ///
    /// Read-only: the document, tool selection and drag state are left as they are.
    pub fn export_png(&self, scale: f64) -> Result<Vec<u8>, ExportError> {
        export::export_png(
            &self.document,
            self.canvas_width,
            self.canvas_height,
            scale,
        )
    }
}
