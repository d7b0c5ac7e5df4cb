//! Input handling and tool state machine.
//!
//! This module translates pointer events and history commands into document
//! changes. It maintains the current tool selection (marker thickness, glyph,
//! hue), the cursor preview, and the idle/dragging state machine.

pub mod events;
pub mod preview;
pub mod state;
pub mod tool;

// Re-export commonly used types at module level
pub use events::{PointerEvent, PointerPhase};
pub use preview::Preview;
pub use state::{DrawingState, InputState, Redraw};
pub use tool::{GlyphPalette, Tool, ToolState};
