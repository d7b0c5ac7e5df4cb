//! Rendering primitives and drawable definitions (Cairo-based).
//!
//! This module defines the core drawing types of a sketch:
//! - [`Color`] and [`Hue`]: ink colors, with hue 0 reserved for black
//! - [`Drawable`]: committed marks (freehand strokes and glyph stamps)
//! - [`Document`]: the committed marks plus the redo buffer
//! - [`Surface`]: the render target trait, implemented for `cairo::Context`

pub mod color;
pub mod document;
pub mod font;
pub mod render;
pub mod shape;
pub mod surface;

// Re-export commonly used types at module level
pub use color::{BLACK, Color, Hue};
pub use document::Document;
pub use font::GlyphFont;
pub use render::{redraw_all, render_drawables};
pub use shape::{Drawable, Point, Stamp, Stroke};
pub use surface::Surface;
