//! Pointer event types delivered by the input source.

/// Phase of a pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerPhase {
    /// Pointer pressed (primary button, touch start, pen contact)
    Down,
    /// Pointer moved, pressed or not
    Move,
    /// Pointer released
    Up,
}

/// A pointer event in canvas-local coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub x: f64,
    pub y: f64,
    pub phase: PointerPhase,
}

impl PointerEvent {
    pub fn down(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            phase: PointerPhase::Down,
        }
    }

    pub fn moved(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            phase: PointerPhase::Move,
        }
    }

    pub fn up(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            phase: PointerPhase::Up,
        }
    }
}
