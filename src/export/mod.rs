//! PNG export of the committed document.
//!
//! Export is a read-only pass over the committed drawables onto a second,
//! scaled Cairo surface. The live canvas, tool selection and drag state are
//! never touched.

pub mod file;

pub use file::{FileSaveConfig, save_png};

use crate::draw::{Document, Surface, render_drawables};
use thiserror::Error;

/// Errors that can occur while exporting.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Invalid export size {width}x{height} at scale {scale}")]
    InvalidSize { width: u32, height: u32, scale: f64 },

    #[error("Cairo error: {0}")]
    Cairo(#[from] cairo::Error),

    #[error("PNG encoding failed: {0}")]
    Encode(#[from] cairo::IoError),

    #[error("Failed to save export: {0}")]
    Save(#[from] std::io::Error),
}

/// Renders the committed drawables onto `surface`.
///
/// The caller is responsible for any scaling applied to the surface.
pub fn render_document<S: Surface + ?Sized>(surface: &mut S, document: &Document) {
    render_drawables(surface, document.drawables());
}

/// Pixel size of an export of a `width` x `height` canvas at `scale`.
pub fn export_dimensions(width: u32, height: u32, scale: f64) -> Result<(i32, i32), ExportError> {
    let invalid = || ExportError::InvalidSize {
        width,
        height,
        scale,
    };
    if !scale.is_finite() || scale <= 0.0 {
        return Err(invalid());
    }

    let out_w = (width as f64 * scale).round();
    let out_h = (height as f64 * scale).round();
    if out_w < 1.0 || out_h < 1.0 || out_w > i32::MAX as f64 || out_h > i32::MAX as f64 {
        return Err(invalid());
    }
    Ok((out_w as i32, out_h as i32))
}

/// Encodes the committed document as a PNG of `canvas * scale` pixels.
///
/// The default 256x256 canvas at scale 4 yields a 1024x1024 image.
pub fn export_png(
    document: &Document,
    canvas_width: u32,
    canvas_height: u32,
    scale: f64,
) -> Result<Vec<u8>, ExportError> {
    let (out_w, out_h) = export_dimensions(canvas_width, canvas_height, scale)?;

    let surface = cairo::ImageSurface::create(cairo::Format::ARgb32, out_w, out_h)?;
    {
        let mut ctx = cairo::Context::new(&surface)?;
        ctx.scale(scale, scale);
        render_document(&mut ctx, document);
    }
    surface.flush();

    let mut png = Vec::new();
    surface.write_to_png(&mut png)?;
    log::debug!(
        "Exported {} drawables as {}x{} PNG ({} bytes)",
        document.drawables().len(),
        out_w,
        out_h,
        png.len()
    );
    Ok(png)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::surface::{DrawOp, Recorder};
    use crate::draw::{Drawable, Hue, Point, Stroke};

    #[test]
    fn dimensions_scale_canvas() {
        assert_eq!(export_dimensions(256, 256, 4.0).unwrap(), (1024, 1024));
        assert_eq!(export_dimensions(100, 50, 1.5).unwrap(), (150, 75));
    }

    #[test]
    fn dimensions_reject_bad_scale() {
        assert!(matches!(
            export_dimensions(256, 256, 0.0),
            Err(ExportError::InvalidSize { .. })
        ));
        assert!(export_dimensions(256, 256, f64::NAN).is_err());
        assert!(export_dimensions(0, 256, 4.0).is_err());
    }

    #[test]
    fn render_document_skips_redo_buffer() {
        let mut kept = Drawable::from(Stroke::new(Point::new(0.0, 0.0), 1.0, Hue::NEUTRAL));
        kept.extend(1.0, 1.0);
        let mut undone = Drawable::from(Stroke::new(Point::new(5.0, 5.0), 1.0, Hue::NEUTRAL));
        undone.extend(6.0, 6.0);

        let mut document = Document::new();
        document.commit(kept);
        document.commit(undone);
        document.undo();

        let mut recorder = Recorder::new();
        render_document(&mut recorder, &document);
        assert_eq!(recorder.count(|op| matches!(op, DrawOp::Stroke { .. })), 1);
        assert_eq!(recorder.ops[1], DrawOp::MoveTo(0.0, 0.0));
    }

    #[test]
    fn empty_document_exports_valid_png() {
        let png = export_png(&Document::new(), 32, 16, 2.0).unwrap();
        assert!(png.starts_with(&[0x89, b'P', b'N', b'G']));
    }
}
