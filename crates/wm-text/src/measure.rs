//! Text measurement backed by shaped fonts

use std::collections::HashMap;

use wm_layout::{FontDescriptor, TextMeasure};

use crate::Result;
use crate::font::{FontDatabase, FontId, FontShorthand};
use crate::shaping::TextShaper;

/// Layout oracle that shapes text with fonts from a [`FontDatabase`].
///
/// Descriptors are parsed and matched once and remembered for the life of
/// the measurer, so repeated prefix measurements only pay for shaping.
pub struct FontMeasure<'a> {
    db: &'a FontDatabase,
    shaper: TextShaper,
    resolved: HashMap<FontDescriptor, (FontId, f32)>,
}

impl<'a> FontMeasure<'a> {
    /// Measure with fonts from `db`
    pub fn new(db: &'a FontDatabase) -> Self {
        Self {
            db,
            shaper: TextShaper::new(),
            resolved: HashMap::new(),
        }
    }

    /// Face and pixel size a descriptor resolves to
    pub fn resolve(&mut self, font: &FontDescriptor) -> Result<(FontId, f32)> {
        if let Some(&resolved) = self.resolved.get(font) {
            return Ok(resolved);
        }
        let shorthand = FontShorthand::parse(font)?;
        let id = self.db.resolve(&shorthand)?;
        tracing::debug!(
            "Resolved font {:?} to {} at {}px",
            font.as_str(),
            self.db.family_name(id).unwrap_or("<unnamed>"),
            shorthand.size_px
        );
        self.resolved.insert(font.clone(), (id, shorthand.size_px));
        Ok((id, shorthand.size_px))
    }

    /// Advance width of `text` in pixels
    pub fn width(&mut self, text: &str, font: &FontDescriptor) -> Result<f32> {
        let (id, size) = self.resolve(font)?;
        Ok(self.shaper.shape(self.db, id, text, size)?.width())
    }
}

impl TextMeasure for FontMeasure<'_> {
    fn measure_text_width(
        &mut self,
        text: &str,
        font: &FontDescriptor,
    ) -> wm_layout::Result<f64> {
        Ok(self.width(text, font)? as f64)
    }
}
