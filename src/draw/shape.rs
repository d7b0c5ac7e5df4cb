//! Drawable definitions: freehand strokes and glyph stamps.

use super::color::Hue;
use super::font::GlyphFont;
use super::surface::Surface;
use crate::util;

/// A position in canvas space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Freehand polyline traced by the pointer.
#[derive(Clone, Debug, PartialEq)]
pub struct Stroke {
    points: Vec<Point>,
    thickness: f64,
    hue: Hue,
}

impl Stroke {
    /// Starts a stroke with a single point.
    pub fn new(origin: Point, thickness: f64, hue: Hue) -> Self {
        Self {
            points: vec![origin],
            thickness,
            hue,
        }
    }

    /// Appends a point to the end of the stroke.
    pub fn push(&mut self, point: Point) {
        self.points.push(point);
    }

    /// Points in drag order; never empty.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn thickness(&self) -> f64 {
        self.thickness
    }

    pub fn hue(&self) -> Hue {
        self.hue
    }

    /// Draws the polyline. A single-point stroke draws nothing.
    pub fn render<S: Surface + ?Sized>(&self, surface: &mut S) {
        let Some((first, rest)) = self.points.split_first() else {
            return;
        };
        if rest.is_empty() {
            return;
        }

        surface.begin_path();
        surface.move_to(first.x, first.y);
        for point in rest {
            surface.line_to(point.x, point.y);
        }
        surface.stroke(self.thickness, self.hue.to_color());
    }
}

/// A glyph placed at an anchor and rotated toward the drag position.
#[derive(Clone, Debug, PartialEq)]
pub struct Stamp {
    anchor: Point,
    current: Point,
    rotation: f64,
    glyph: String,
    font: GlyphFont,
    hue: Hue,
}

impl Stamp {
    /// Places a stamp with no rotation; the anchor doubles as current position.
    pub fn new(anchor: Point, glyph: impl Into<String>, font: GlyphFont, hue: Hue) -> Self {
        Self {
            anchor,
            current: anchor,
            rotation: 0.0,
            glyph: glyph.into(),
            font,
            hue,
        }
    }

    /// Moves the drag position and re-derives the rotation from it.
    pub fn drag_to(&mut self, point: Point) {
        self.current = point;
        self.rotation = util::rotation_between(self.anchor.x, self.anchor.y, point.x, point.y);
    }

    pub fn anchor(&self) -> Point {
        self.anchor
    }

    pub fn current(&self) -> Point {
        self.current
    }

    /// Rotation in radians.
    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    pub fn glyph(&self) -> &str {
        &self.glyph
    }

    pub fn hue(&self) -> Hue {
        self.hue
    }

    /// Draws the glyph at the anchor using the stored rotation.
    pub fn render<S: Surface + ?Sized>(&self, surface: &mut S) {
        surface.fill_glyph(
            &self.glyph,
            &self.font,
            self.anchor,
            self.rotation,
            self.hue.to_color(),
        );
    }
}

/// Represents a committed mark on the canvas.
///
/// Each variant stores its own appearance so it renders independently of the
/// tool selection that produced it.
#[derive(Clone, Debug, PartialEq)]
pub enum Drawable {
    /// Freehand stroke
    Stroke(Stroke),
    /// Rotatable glyph stamp
    Stamp(Stamp),
}

impl Drawable {
    /// Applies a drag update: strokes grow, stamps re-aim.
    pub fn extend(&mut self, x: f64, y: f64) {
        let point = Point::new(x, y);
        match self {
            Drawable::Stroke(stroke) => stroke.push(point),
            Drawable::Stamp(stamp) => stamp.drag_to(point),
        }
    }

    /// Renders the current geometry onto `surface`.
    pub fn render<S: Surface + ?Sized>(&self, surface: &mut S) {
        match self {
            Drawable::Stroke(stroke) => stroke.render(surface),
            Drawable::Stamp(stamp) => stamp.render(surface),
        }
    }

    pub fn as_stroke(&self) -> Option<&Stroke> {
        match self {
            Drawable::Stroke(stroke) => Some(stroke),
            Drawable::Stamp(_) => None,
        }
    }

    pub fn as_stamp(&self) -> Option<&Stamp> {
        match self {
            Drawable::Stamp(stamp) => Some(stamp),
            Drawable::Stroke(_) => None,
        }
    }
}

impl From<Stroke> for Drawable {
    fn from(stroke: Stroke) -> Self {
        Drawable::Stroke(stroke)
    }
}

impl From<Stamp> for Drawable {
    fn from(stamp: Stamp) -> Self {
        Drawable::Stamp(stamp)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::BLACK;
    use crate::draw::surface::{DrawOp, Recorder};

    #[test]
    fn single_point_stroke_renders_nothing() {
        let stroke = Stroke::new(Point::new(5.0, 5.0), 3.0, Hue::NEUTRAL);
        let mut recorder = Recorder::new();
        stroke.render(&mut recorder);
        assert!(recorder.ops.is_empty());
    }

    #[test]
    fn stroke_renders_one_connected_path() {
        let mut drawable = Drawable::from(Stroke::new(Point::new(10.0, 10.0), 2.0, Hue::NEUTRAL));
        drawable.extend(20.0, 10.0);
        drawable.extend(20.0, 20.0);

        let mut recorder = Recorder::new();
        drawable.render(&mut recorder);
        assert_eq!(
            recorder.ops,
            vec![
                DrawOp::BeginPath,
                DrawOp::MoveTo(10.0, 10.0),
                DrawOp::LineTo(20.0, 10.0),
                DrawOp::LineTo(20.0, 20.0),
                DrawOp::Stroke {
                    width: 2.0,
                    color: BLACK
                },
            ]
        );
    }

    #[test]
    fn stroke_points_grow_with_each_extend() {
        let mut drawable = Drawable::from(Stroke::new(Point::new(0.0, 0.0), 1.0, Hue::NEUTRAL));
        let moves = [(1.0, 2.0), (3.0, 4.0), (3.0, 4.0), (-7.5, 9.0)];
        let mut last_len = 1;
        for (x, y) in moves {
            drawable.extend(x, y);
            let points = drawable.as_stroke().expect("still a stroke").points();
            assert!(points.len() > last_len);
            assert_eq!(points.last(), Some(&Point::new(x, y)));
            last_len = points.len();
        }
    }

    #[test]
    fn stamp_rotation_tracks_drag_vector() {
        let anchor = Point::new(40.0, 40.0);
        let mut stamp = Stamp::new(anchor, "🌟", GlyphFont::default(), Hue::NEUTRAL);
        assert_eq!(stamp.rotation(), 0.0);
        assert_eq!(stamp.current(), stamp.anchor());

        for (x, y) in [(50.0, 40.0), (40.0, 80.0), (13.0, -2.5), (40.0, 40.0)] {
            stamp.drag_to(Point::new(x, y));
            let anchor = stamp.anchor();
            let current = stamp.current();
            let expected = (current.y - anchor.y).atan2(current.x - anchor.x);
            assert_eq!(stamp.rotation(), expected);
            assert_eq!(anchor, Point::new(40.0, 40.0));
        }
    }

    #[test]
    fn stamp_renders_glyph_at_anchor() {
        let mut drawable = Drawable::from(Stamp::new(
            Point::new(10.0, 10.0),
            "🦖",
            GlyphFont::default(),
            Hue::new(120.0),
        ));
        drawable.extend(10.0, 30.0);

        let mut recorder = Recorder::new();
        drawable.render(&mut recorder);
        assert_eq!(recorder.ops.len(), 1);
        match &recorder.ops[0] {
            DrawOp::FillGlyph {
                text,
                origin,
                rotation,
                color,
            } => {
                assert_eq!(text, "🦖");
                assert_eq!(*origin, Point::new(10.0, 10.0));
                assert_eq!(*rotation, std::f64::consts::FRAC_PI_2);
                assert_eq!(*color, Hue::new(120.0).to_color());
            }
            other => panic!("unexpected draw call {other:?}"),
        }
    }

    #[test]
    fn render_is_repeatable() {
        let mut drawable = Drawable::from(Stroke::new(Point::new(1.0, 1.0), 4.0, Hue::new(30.0)));
        drawable.extend(8.0, 3.0);

        let mut first = Recorder::new();
        let mut second = Recorder::new();
        drawable.render(&mut first);
        drawable.render(&mut second);
        assert_eq!(first.ops, second.ops);
    }
}
