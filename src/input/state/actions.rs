use crate::input::preview::Preview;

use super::{InputState, Redraw};

impl InputState {
    /// Selects the marker tool with an explicit thickness.
    ///
    /// Drops the preview when the selection changed; it is rebuilt on the next
    /// idle pointer move.
    pub fn select_stroke(&mut self, thickness: f64) {
        if self.tools.select_stroke(thickness) {
            self.hide_preview();
            log::debug!("Selected marker tool ({thickness:.1}px)");
        }
        self.request_redraw(Redraw::Cursor);
    }

    /// Selects the thin marker preset.
    pub fn select_thin(&mut self) {
        self.select_stroke(self.thin_thickness);
    }

    /// Selects the thick marker preset.
    pub fn select_thick(&mut self) {
        self.select_stroke(self.thick_thickness);
    }

    /// Selects the stamp tool with the given glyph.
    pub fn select_stamp(&mut self, glyph: impl Into<String>) {
        let glyph = glyph.into();
        if self.tools.select_stamp(glyph.as_str()) {
            self.hide_preview();
            log::debug!("Selected stamp tool ({glyph})");
        }
        self.request_redraw(Redraw::Cursor);
    }

    /// Selects a palette glyph by index. Returns `false` if the index is out of range.
    pub fn select_stamp_index(&mut self, index: usize) -> bool {
        match self.palette.get(index) {
            Some(glyph) => {
                let glyph = glyph.to_string();
                self.select_stamp(glyph);
                true
            }
            None => {
                log::debug!(
                    "No glyph at palette index {index} ({} available)",
                    self.palette.len()
                );
                false
            }
        }
    }

    /// Adds a user-entered glyph to the palette and returns its index.
    ///
    /// The glyph is not selected; pick it with [`Self::select_stamp_index`].
    pub fn add_custom_glyph(&mut self, glyph: impl Into<String>) -> usize {
        let index = self.palette.add_custom(glyph);
        log::debug!("Added custom glyph at palette index {index}");
        index
    }

    /// Changes the ink hue for subsequent marks.
    ///
    /// A visible preview is rebuilt in place so it shows the new color right away.
    pub fn set_hue(&mut self, degrees: f64) {
        self.tools.set_hue(degrees);
        if let Some(position) = self.preview.as_ref().map(Preview::position) {
            self.preview = Some(Preview::for_tool(&self.tools, &self.glyph_font, position));
        }
        self.request_redraw(Redraw::Cursor);
    }

    /// Undoes the newest committed drawable.
    ///
    /// Returns `false` (and requests nothing) when there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        self.finish_drag();
        let changed = self.document.undo();
        if changed {
            self.request_redraw(Redraw::Content);
        } else {
            log::debug!("Nothing to undo");
        }
        changed
    }

    /// Restores the most recently undone drawable.
    ///
    /// Returns `false` (and requests nothing) when the redo buffer is empty.
    pub fn redo(&mut self) -> bool {
        self.finish_drag();
        let changed = self.document.redo();
        if changed {
            self.request_redraw(Redraw::Content);
        } else {
            log::debug!("Nothing to redo");
        }
        changed
    }

    /// Clears the document and the redo buffer.
    pub fn clear(&mut self) {
        self.finish_drag();
        self.document.clear();
        self.request_redraw(Redraw::Content);
        log::debug!("Cleared document");
    }
}
