//! Utility functions for color conversion and stamp geometry.
//!
//! This module provides:
//! - HSL to RGB conversion used by hue resolution
//! - Rotation derivation for dragged glyph stamps

// ============================================================================
// Color Conversion
// ============================================================================

/// Converts an HSL triple to RGB components in `0.0..=1.0`.
///
/// # Arguments
/// * `hue` - Hue angle in degrees (wrapped into `[0, 360)`)
/// * `saturation` - Saturation in `0.0..=1.0`
/// * `lightness` - Lightness in `0.0..=1.0`
pub fn hsl_to_rgb(hue: f64, saturation: f64, lightness: f64) -> (f64, f64, f64) {
    let h = hue.rem_euclid(360.0) / 60.0;
    let s = saturation.clamp(0.0, 1.0);
    let l = lightness.clamp(0.0, 1.0);

    let chroma = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let x = chroma * (1.0 - (h % 2.0 - 1.0).abs());
    let m = l - chroma / 2.0;

    let (r, g, b) = match h as u32 {
        0 => (chroma, x, 0.0),
        1 => (x, chroma, 0.0),
        2 => (0.0, chroma, x),
        3 => (0.0, x, chroma),
        4 => (x, 0.0, chroma),
        _ => (chroma, 0.0, x),
    };

    (r + m, g + m, b + m)
}

// ============================================================================
// Stamp Geometry
// ============================================================================

/// Rotation (radians) of the vector from an anchor to the current pointer position.
///
/// Zero-length vectors yield `0.0`, matching `atan2(0, 0)`.
pub fn rotation_between(anchor_x: f64, anchor_y: f64, x: f64, y: f64) -> f64 {
    (y - anchor_y).atan2(x - anchor_x)
}
