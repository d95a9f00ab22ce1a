//! Font face with parsed metrics

use ttf_parser::Face;

use super::FontId;

/// Hanging baseline as a fraction of the ascent, as browsers place it
/// when the font has no BASE table
const HANGING_BASELINE_RATIO: f32 = 0.8;

/// Parsed font face with metrics
pub struct FontFace<'a> {
    /// The underlying ttf-parser face
    face: Face<'a>,
    /// Font ID in database
    pub id: FontId,
}

impl<'a> FontFace<'a> {
    /// Parse a font face from data
    pub fn parse(data: &'a [u8], index: u32, id: FontId) -> Option<Self> {
        Face::parse(data, index).ok().map(|face| Self { face, id })
    }

    /// Units per em
    pub fn units_per_em(&self) -> u16 {
        self.face.units_per_em()
    }

    /// Ascender (above baseline)
    pub fn ascender(&self) -> i16 {
        self.face.ascender()
    }

    /// Scale from font units to pixels at `font_size`
    pub fn scale(&self, font_size: f32) -> f32 {
        font_size / self.units_per_em() as f32
    }

    /// Distance in pixels from a hanging-baseline origin down to the
    /// alphabetic baseline glyphs sit on
    pub fn hanging_baseline_offset(&self, font_size: f32) -> f32 {
        self.ascender() as f32 * self.scale(font_size) * HANGING_BASELINE_RATIO
    }

    /// Get underlying ttf-parser face
    pub fn ttf_face(&self) -> &Face<'a> {
        &self.face
    }
}
