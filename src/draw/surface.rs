//! Render target abstraction and its Cairo implementation.

use super::color::Color;
use super::font::GlyphFont;
use super::shape::Point;

/// A 2D drawing target.
///
/// Drawables, previews and the export pass only ever talk to this trait, so
/// the live canvas and the export canvas share one rendering path.
pub trait Surface {
    /// Clears a rectangular region to full transparency.
    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64);

    /// Starts a new path, discarding any path under construction.
    fn begin_path(&mut self);

    /// Moves the path cursor without drawing.
    fn move_to(&mut self, x: f64, y: f64);

    /// Adds a line segment from the path cursor.
    fn line_to(&mut self, x: f64, y: f64);

    /// Strokes the current path with round caps and joins.
    fn stroke(&mut self, width: f64, color: Color);

    /// Fills a circle.
    fn fill_circle(&mut self, cx: f64, cy: f64, radius: f64, color: Color);

    /// Fills `text` centered on `origin`, rotated by `rotation` radians about it.
    fn fill_glyph(
        &mut self,
        text: &str,
        font: &GlyphFont,
        origin: Point,
        rotation: f64,
        color: Color,
    );
}

impl Surface for cairo::Context {
    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        let _ = self.save();
        self.set_operator(cairo::Operator::Clear);
        self.rectangle(x, y, width, height);
        let _ = self.fill();
        let _ = self.restore();
    }

    fn begin_path(&mut self) {
        self.new_path();
    }

    fn move_to(&mut self, x: f64, y: f64) {
        cairo::Context::move_to(self, x, y);
    }

    fn line_to(&mut self, x: f64, y: f64) {
        cairo::Context::line_to(self, x, y);
    }

    fn stroke(&mut self, width: f64, color: Color) {
        self.set_source_rgba(color.r, color.g, color.b, color.a);
        self.set_line_width(width);
        self.set_line_cap(cairo::LineCap::Round);
        self.set_line_join(cairo::LineJoin::Round);
        let _ = cairo::Context::stroke(self);
    }

    fn fill_circle(&mut self, cx: f64, cy: f64, radius: f64, color: Color) {
        self.new_path();
        self.set_source_rgba(color.r, color.g, color.b, color.a);
        self.arc(cx, cy, radius.max(0.0), 0.0, std::f64::consts::PI * 2.0);
        let _ = self.fill();
    }

    fn fill_glyph(
        &mut self,
        text: &str,
        font: &GlyphFont,
        origin: Point,
        rotation: f64,
        color: Color,
    ) {
        // Save context state so the translation and rotation don't leak
        let _ = self.save();
        self.set_antialias(cairo::Antialias::Best);
        self.new_path();
        self.translate(origin.x, origin.y);
        self.rotate(rotation);

        let layout = pangocairo::functions::create_layout(self);
        layout.set_font_description(Some(&font.to_pango()));
        layout.set_text(text);

        // Center on the origin using the logical extents
        let (_ink, logical) = layout.pixel_extents();
        let left = -(logical.x() as f64) - logical.width() as f64 / 2.0;
        let top = -(logical.y() as f64) - logical.height() as f64 / 2.0;

        self.move_to(left, top);
        self.set_source_rgba(color.r, color.g, color.b, color.a);
        pangocairo::functions::show_layout(self, &layout);

        let _ = self.restore();
    }
}

/// Draw calls captured by [`Recorder`].
#[cfg(test)]
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum DrawOp {
    Clear,
    BeginPath,
    MoveTo(f64, f64),
    LineTo(f64, f64),
    Stroke { width: f64, color: Color },
    FillCircle { cx: f64, cy: f64, radius: f64, color: Color },
    FillGlyph { text: String, origin: Point, rotation: f64, color: Color },
}

/// Surface that records every call instead of rasterizing.
#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct Recorder {
    pub ops: Vec<DrawOp>,
}

#[cfg(test)]
impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self, pred: impl Fn(&DrawOp) -> bool) -> usize {
        self.ops.iter().filter(|op| pred(op)).count()
    }
}

#[cfg(test)]
impl Surface for Recorder {
    fn clear_rect(&mut self, _x: f64, _y: f64, _width: f64, _height: f64) {
        self.ops.push(DrawOp::Clear);
    }

    fn begin_path(&mut self) {
        self.ops.push(DrawOp::BeginPath);
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.ops.push(DrawOp::MoveTo(x, y));
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.ops.push(DrawOp::LineTo(x, y));
    }

    fn stroke(&mut self, width: f64, color: Color) {
        self.ops.push(DrawOp::Stroke { width, color });
    }

    fn fill_circle(&mut self, cx: f64, cy: f64, radius: f64, color: Color) {
        self.ops.push(DrawOp::FillCircle {
            cx,
            cy,
            radius,
            color,
        });
    }

    fn fill_glyph(
        &mut self,
        text: &str,
        _font: &GlyphFont,
        origin: Point,
        rotation: f64,
        color: Color,
    ) {
        self.ops.push(DrawOp::FillGlyph {
            text: text.to_string(),
            origin,
            rotation,
            color,
        });
    }
}
