//! Scene rendering helpers built on [`Surface`].

use super::shape::Drawable;
use super::surface::Surface;

/// Renders all drawables in order (first drawable = bottom layer).
pub fn render_drawables<S: Surface + ?Sized>(surface: &mut S, drawables: &[Drawable]) {
    for drawable in drawables {
        drawable.render(surface);
    }
}

/// Clears a `width` x `height` region and redraws `drawables` from scratch.
///
/// Nothing is drawn incrementally: the output depends only on the drawables
/// passed in, so repeated calls produce identical results.
pub fn redraw_all<S: Surface + ?Sized>(
    surface: &mut S,
    width: f64,
    height: f64,
    drawables: &[Drawable],
) {
    surface.clear_rect(0.0, 0.0, width, height);
    render_drawables(surface, drawables);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::surface::{DrawOp, Recorder};
    use crate::draw::{GlyphFont, Hue, Point, Stamp, Stroke};

    #[test]
    fn redraw_clears_before_rendering_in_order() {
        let mut stroke = Drawable::from(Stroke::new(Point::new(0.0, 0.0), 1.0, Hue::NEUTRAL));
        stroke.extend(5.0, 5.0);
        let stamp = Drawable::from(Stamp::new(
            Point::new(2.0, 2.0),
            "🔥",
            GlyphFont::default(),
            Hue::NEUTRAL,
        ));

        let mut recorder = Recorder::new();
        redraw_all(&mut recorder, 256.0, 256.0, &[stroke, stamp]);

        assert_eq!(recorder.ops.first(), Some(&DrawOp::Clear));
        let stroke_at = recorder
            .ops
            .iter()
            .position(|op| matches!(op, DrawOp::Stroke { .. }))
            .expect("stroke drawn");
        let glyph_at = recorder
            .ops
            .iter()
            .position(|op| matches!(op, DrawOp::FillGlyph { .. }))
            .expect("glyph drawn");
        assert!(stroke_at < glyph_at);
    }
}
