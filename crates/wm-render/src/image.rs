//! Encoded tile image

use base64::Engine as _;
use tiny_skia::Pixmap;

use crate::{RenderError, Result};

/// Rendered tile encoded as PNG
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WatermarkImage {
    png: Vec<u8>,
    width: u32,
    height: u32,
}

impl WatermarkImage {
    /// Encode a rendered surface
    pub fn encode(surface: &Pixmap) -> Result<Self> {
        let png = surface
            .encode_png()
            .map_err(|e| RenderError::Encoding(e.to_string()))?;
        Ok(Self {
            png,
            width: surface.width(),
            height: surface.height(),
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// PNG file contents
    pub fn png_bytes(&self) -> &[u8] {
        &self.png
    }

    /// `data:image/png;base64,...` reference usable as a CSS background
    pub fn data_url(&self) -> String {
        format!(
            "data:image/png;base64,{}",
            base64::engine::general_purpose::STANDARD.encode(&self.png)
        )
    }

    /// Decode back into pixels for compositing
    pub fn decode(&self) -> Result<Pixmap> {
        Pixmap::decode_png(&self.png).map_err(|e| RenderError::Encoding(e.to_string()))
    }
}
