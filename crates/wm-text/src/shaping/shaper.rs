//! Text shaper using rustybuzz

use rustybuzz::{Face, UnicodeBuffer, shape};

use super::{ShapedGlyph, ShapedRun};
use crate::font::{FontDatabase, FontId};
use crate::{Result, TextError};

/// Text shaper using HarfBuzz (via rustybuzz)
///
/// Shapes left-to-right with script and language guessed from the text,
/// which covers the mixed Latin/CJK strings watermarks usually carry.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextShaper;

impl TextShaper {
    /// Create a new text shaper
    pub fn new() -> Self {
        Self
    }

    /// Shape text using a font from the database
    pub fn shape(
        &self,
        db: &FontDatabase,
        font_id: FontId,
        text: &str,
        font_size: f32,
    ) -> Result<ShapedRun> {
        db.with_face_data(font_id, |data, index| {
            self.shape_with_data(data, index, text, font_size)
        })
        .ok_or_else(|| TextError::FontNotFound("Font not found in database".into()))?
    }

    /// Shape text with raw font data
    pub fn shape_with_data(
        &self,
        font_data: &[u8],
        face_index: u32,
        text: &str,
        font_size: f32,
    ) -> Result<ShapedRun> {
        let face = Face::from_slice(font_data, face_index)
            .ok_or_else(|| TextError::FontParsing("Failed to parse font".into()))?;

        let mut buffer = UnicodeBuffer::new();
        buffer.push_str(text);
        buffer.set_direction(rustybuzz::Direction::LeftToRight);
        buffer.guess_segment_properties();

        let output = shape(&face, &[], buffer);

        let glyphs: Vec<ShapedGlyph> = output
            .glyph_infos()
            .iter()
            .zip(output.glyph_positions())
            .map(|(info, pos)| ShapedGlyph {
                glyph_id: info.glyph_id as u16,
                x_offset: pos.x_offset,
                y_offset: pos.y_offset,
                x_advance: pos.x_advance,
                y_advance: pos.y_advance,
                cluster: info.cluster,
            })
            .collect();

        Ok(ShapedRun::new(glyphs, font_size, face.units_per_em() as u16))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_garbage_font_data() {
        let result = TextShaper::new().shape_with_data(b"not a font", 0, "abc", 16.0);
        assert!(matches!(result, Err(TextError::FontParsing(_))));
    }
}
