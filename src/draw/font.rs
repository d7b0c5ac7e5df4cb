//! Font descriptor for glyph stamps.

/// Font used to render stamp glyphs and glyph previews.
///
/// The size is an absolute pixel size, so a stamp looks the same regardless of
/// the font resolution of the target surface.
#[derive(Debug, Clone, PartialEq)]
pub struct GlyphFont {
    /// Font family name (e.g., "Sans", "Noto Color Emoji")
    pub family: String,
    /// Glyph size in pixels
    pub size: f64,
}

impl GlyphFont {
    /// Creates a new glyph font.
    pub fn new(family: impl Into<String>, size: f64) -> Self {
        Self {
            family: family.into(),
            size,
        }
    }

    /// Builds the Pango description for this font.
    pub fn to_pango(&self) -> pango::FontDescription {
        let mut desc = pango::FontDescription::new();
        desc.set_family(&self.family);
        desc.set_absolute_size(self.size * pango::SCALE as f64);
        desc
    }
}

impl Default for GlyphFont {
    fn default() -> Self {
        Self::new("Sans", 40.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pango_description_uses_absolute_pixels() {
        let font = GlyphFont::new("Monospace", 24.0);
        let desc = font.to_pango();
        assert_eq!(desc.family().as_deref(), Some("Monospace"));
        assert!(desc.is_size_absolute());
        assert_eq!(desc.size(), 24 * pango::SCALE);
    }
}
