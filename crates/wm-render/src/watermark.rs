//! End-to-end watermark application

use tiny_skia::Pixmap;
use wm_layout::{Layout, WatermarkConfig, compute_layout};
use wm_text::{FontDatabase, FontMeasure};

use crate::{Color, RenderError, Result, TiledOverlay, WatermarkImage, render_glyphs};

/// A rendered watermark ready to display
#[derive(Debug, Clone)]
pub struct Watermark {
    /// Wrapped lines and the canvas they were drawn on
    pub layout: Layout,
    /// Encoded tile and its placement
    pub overlay: TiledOverlay,
}

impl Watermark {
    /// Composite the overlay onto a `width` x `height` page filled with
    /// `background`
    pub fn preview(&self, width: u32, height: u32, background: Color) -> Result<Pixmap> {
        let mut viewport = Pixmap::new(width, height).ok_or(RenderError::Surface { width, height })?;
        viewport.fill(background.to_skia());
        self.overlay.composite(&mut viewport)?;
        Ok(viewport)
    }
}

/// Lay out, draw, encode and place a watermark.
///
/// Everything that can be rejected up front (fill style, layout numbers,
/// fonts) fails before any pixel is drawn.
pub fn apply_watermark(db: &FontDatabase, config: &WatermarkConfig) -> Result<Watermark> {
    let settings = config.layout();
    let fill = Color::parse(settings.fill_style())?;

    let mut measure = FontMeasure::new(db);
    let layout = compute_layout(&mut measure, config.texts(), settings)?;

    let surface = render_glyphs(db, &layout, settings.font(), fill)?;
    let image = WatermarkImage::encode(&surface)?;
    tracing::info!(
        "Watermark tile {}x{} ({} bytes PNG) placed at ({}, {})",
        image.width(),
        image.height(),
        image.png_bytes().len(),
        settings.overlay_offset_x(),
        settings.overlay_offset_y()
    );

    let overlay = TiledOverlay::new(image, settings.overlay_offset_x(), settings.overlay_offset_y());
    Ok(Watermark { layout, overlay })
}
