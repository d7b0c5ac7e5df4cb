//! Committed drawables and their undo/redo history.

use super::shape::Drawable;

/// Container for all drawables of the current sketch.
///
/// Holds the committed sequence (draw order, first = bottom) and the redo
/// buffer. An entry lives in exactly one of the two at any time.
#[derive(Debug, Clone, Default)]
pub struct Document {
    drawables: Vec<Drawable>,
    redo: Vec<Drawable>,
    clear_redo_on_commit: bool,
}

impl Document {
    /// Creates an empty document that keeps the redo buffer across commits.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty document with the given redo policy.
    ///
    /// With `clear_redo_on_commit` set, committing discards the redo buffer so
    /// history never branches.
    pub fn with_redo_policy(clear_redo_on_commit: bool) -> Self {
        Self {
            clear_redo_on_commit,
            ..Self::default()
        }
    }

    /// Committed drawables in draw order.
    pub fn drawables(&self) -> &[Drawable] {
        &self.drawables
    }

    /// Undone drawables; the last entry is the next one `redo` restores.
    pub fn redo_buffer(&self) -> &[Drawable] {
        &self.redo
    }

    pub fn is_empty(&self) -> bool {
        self.drawables.is_empty()
    }

    pub fn can_undo(&self) -> bool {
        !self.drawables.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    /// Appends a drawable on top of everything committed so far.
    pub fn commit(&mut self, drawable: Drawable) {
        if self.clear_redo_on_commit {
            self.redo.clear();
        }
        self.drawables.push(drawable);
    }

    /// Moves the newest committed drawable to the redo buffer.
    ///
    /// Returns `false` when there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        match self.drawables.pop() {
            Some(drawable) => {
                self.redo.push(drawable);
                true
            }
            None => false,
        }
    }

    /// Restores the most recently undone drawable.
    ///
    /// Returns `false` when the redo buffer is empty.
    pub fn redo(&mut self) -> bool {
        match self.redo.pop() {
            Some(drawable) => {
                self.drawables.push(drawable);
                true
            }
            None => false,
        }
    }

    /// Removes every drawable, including the redo buffer.
    pub fn clear(&mut self) {
        self.drawables.clear();
        self.redo.clear();
    }

    /// The newest committed drawable, which is the one being dragged when a drag is active.
    pub(crate) fn last_mut(&mut self) -> Option<&mut Drawable> {
        self.drawables.last_mut()
    }
}
