//! RGBA color type and the hue model shared by strokes, stamps and previews.

use crate::util;

/// Represents an RGBA color with floating-point components.
///
/// All components are in the range 0.0 (minimum) to 1.0 (maximum).
///
/// # Examples
///
/// ```
/// use dinodraw::draw::Color;
/// let red = Color { r: 1.0, g: 0.0, b: 0.0, a: 1.0 };
/// let semi_transparent_blue = Color { r: 0.0, g: 0.0, b: 1.0, a: 0.5 };
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    /// Red component (0.0 = no red, 1.0 = full red)
    pub r: f64,
    /// Green component (0.0 = no green, 1.0 = full green)
    pub g: f64,
    /// Blue component (0.0 = no blue, 1.0 = full blue)
    pub b: f64,
    /// Alpha/transparency (0.0 = fully transparent, 1.0 = fully opaque)
    pub a: f64,
}

/// Neutral ink used for hue 0.
pub const BLACK: Color = Color {
    r: 0.0,
    g: 0.0,
    b: 0.0,
    a: 1.0,
};

/// Hue angle in degrees, always kept in `[0, 360)`.
///
/// Hue `0` is reserved for neutral black ink; every other value resolves to a
/// fully saturated, mid-lightness color at that angle.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct Hue(f64);

impl Hue {
    /// The neutral (black) hue.
    pub const NEUTRAL: Hue = Hue(0.0);

    /// Creates a hue, wrapping the value into `[0, 360)`.
    ///
    /// Non-finite input falls back to neutral.
    pub fn new(degrees: f64) -> Self {
        if !degrees.is_finite() {
            return Self::NEUTRAL;
        }
        let wrapped = degrees.rem_euclid(360.0);
        // rem_euclid rounds tiny negatives up to exactly 360
        if wrapped >= 360.0 {
            Self::NEUTRAL
        } else {
            Self(wrapped)
        }
    }

    /// Returns the hue angle in degrees.
    pub fn degrees(self) -> f64 {
        self.0
    }

    /// Whether this hue renders as neutral black.
    pub fn is_neutral(self) -> bool {
        self.0 == 0.0
    }

    /// Resolves the hue to the concrete ink color.
    pub fn to_color(self) -> Color {
        if self.is_neutral() {
            BLACK
        } else {
            let (r, g, b) = util::hsl_to_rgb(self.0, 1.0, 0.5);
            Color { r, g, b, a: 1.0 }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: Color, expected: (f64, f64, f64)) {
        let eps = 1e-9;
        assert!(
            (actual.r - expected.0).abs() < eps
                && (actual.g - expected.1).abs() < eps
                && (actual.b - expected.2).abs() < eps,
            "expected {expected:?}, got {actual:?}"
        );
    }

    #[test]
    fn zero_hue_is_black() {
        assert_eq!(Hue::new(0.0).to_color(), BLACK);
        assert_eq!(Hue::NEUTRAL.to_color(), BLACK);
    }

    #[test]
    fn primary_hues_are_fully_saturated() {
        assert_close(Hue::new(120.0).to_color(), (0.0, 1.0, 0.0));
        assert_close(Hue::new(240.0).to_color(), (0.0, 0.0, 1.0));
        assert_close(Hue::new(60.0).to_color(), (1.0, 1.0, 0.0));
    }

    #[test]
    fn hue_wraps_into_range() {
        assert_eq!(Hue::new(360.0).degrees(), 0.0);
        assert_eq!(Hue::new(-90.0).degrees(), 270.0);
        assert_eq!(Hue::new(725.0).degrees(), 5.0);
        assert!(Hue::new(f64::NAN).is_neutral());

        let tiny = Hue::new(-1e-20);
        assert_eq!(tiny.degrees(), 0.0);
        assert!(tiny.degrees() < 360.0);
        assert_eq!(tiny.to_color(), BLACK);
    }
}
