//! Watermark Text - Fonts, Shaping and Measurement
//!
//! This crate backs the layout oracle with real fonts:
//! - CSS font shorthand parsing (`italic bold 18px "Noto Sans", serif`)
//! - Font loading and matching (fontdb)
//! - Text shaping (rustybuzz - HarfBuzz port)
//! - Width measurement for line breaking
//! - Glyph outlines as tiny-skia paths

pub mod font;
pub mod measure;
pub mod outline;
pub mod shaping;

pub use font::{FontDatabase, FontFace, FontId, FontQuery, FontShorthand, FontStyle, FontWeight};
pub use measure::FontMeasure;
pub use outline::glyph_path;
pub use shaping::{PositionedGlyph, ShapedGlyph, ShapedRun, TextShaper};

/// Text error types
#[derive(Debug, thiserror::Error)]
pub enum TextError {
    #[error("Font not found: {0}")]
    FontNotFound(String),

    #[error("Invalid font descriptor: {0}")]
    InvalidFont(String),

    #[error("Failed to parse font: {0}")]
    FontParsing(String),
}

pub type Result<T> = std::result::Result<T, TextError>;

impl From<TextError> for wm_layout::LayoutError {
    fn from(err: TextError) -> Self {
        wm_layout::LayoutError::MeasurementUnavailable(err.to_string())
    }
}
