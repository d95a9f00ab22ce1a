//! Watermark Render - Glyphs to Tiled Overlay
//!
//! Takes a computed layout and produces what gets shown:
//! - Glyph rendering onto a rotated tiny-skia surface
//! - Fill style parsing (`rgba(...)`, `#rrggbb`, named colors)
//! - PNG encoding and `data:` URLs
//! - Tiled, non-interactive overlay placement and viewport compositing

mod color;
mod image;
mod overlay;
mod surface;
mod watermark;

pub use color::Color;
pub use image::WatermarkImage;
pub use overlay::{OVERLAY_Z_INDEX, OverlayPlacement, TiledOverlay};
pub use surface::render_glyphs;
pub use watermark::{Watermark, apply_watermark};

/// Rendering error types
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error(transparent)]
    Layout(#[from] wm_layout::LayoutError),

    #[error(transparent)]
    Text(#[from] wm_text::TextError),

    #[error("Invalid fill style: {0}")]
    InvalidFillStyle(String),

    #[error("Cannot allocate a {width}x{height} surface")]
    Surface { width: u32, height: u32 },

    #[error("Image encoding failed: {0}")]
    Encoding(String),
}

pub type Result<T> = std::result::Result<T, RenderError>;
