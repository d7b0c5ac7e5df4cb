use crate::draw::Point;
use crate::input::events::{PointerEvent, PointerPhase};

use super::{DrawingState, InputState, Redraw};

impl InputState {
    /// Dispatches a pointer event to the matching handler.
    pub fn on_pointer(&mut self, event: PointerEvent) {
        match event.phase {
            PointerPhase::Down => self.on_pointer_down(event.x, event.y),
            PointerPhase::Move => self.on_pointer_move(event.x, event.y),
            PointerPhase::Up => self.on_pointer_up(event.x, event.y),
        }
    }

    /// Processes a pointer press.
    ///
    /// # Behavior
    /// - While Idle: creates a drawable from the current tool, commits it right
    ///   away so a tap still leaves a mark, hides the preview and starts dragging
    /// - While Dragging: ignored
    pub fn on_pointer_down(&mut self, x: f64, y: f64) {
        if self.state == DrawingState::Dragging {
            log::debug!("Ignoring pointer-down at ({x}, {y}) during an active drag");
            return;
        }

        let drawable = self.create_drawable(Point::new(x, y));
        self.document.commit(drawable);
        self.hide_preview();
        self.state = DrawingState::Dragging;
        self.request_redraw(Redraw::Content);
        log::debug!("Drag started at ({x}, {y}) with {:?}", self.tools.tool);
    }

    /// Processes pointer motion.
    ///
    /// # Behavior
    /// - While Dragging: extends the active drawable (stroke point or stamp rotation)
    /// - While Idle: moves or rebuilds the cursor preview
    pub fn on_pointer_move(&mut self, x: f64, y: f64) {
        match self.state {
            DrawingState::Dragging => {
                if let Some(active) = self.document.last_mut() {
                    active.extend(x, y);
                    self.request_redraw(Redraw::Content);
                }
            }
            DrawingState::Idle => self.update_preview(x, y),
        }
    }

    /// Processes a pointer release.
    ///
    /// Finalizes the active drawable, which stays in the document unchanged.
    /// No redraw is needed since nothing visible changed.
    pub fn on_pointer_up(&mut self, x: f64, y: f64) {
        if self.state == DrawingState::Dragging {
            self.state = DrawingState::Idle;
            log::debug!("Drag finished at ({x}, {y})");
        }
    }

    /// Ends any active drag without touching the document.
    pub(crate) fn finish_drag(&mut self) {
        if self.state == DrawingState::Dragging {
            log::debug!("Finalizing active drag before history change");
            self.state = DrawingState::Idle;
        }
    }
}
