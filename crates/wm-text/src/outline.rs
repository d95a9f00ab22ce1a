//! Glyph outlines as tiny-skia paths

use ttf_parser::{Face, GlyphId, OutlineBuilder};

/// Outline of `glyph_id` scaled to `font_size` pixels.
///
/// The path is relative to the glyph origin on the alphabetic baseline,
/// y-down. `None` for glyphs without an outline (spaces).
pub fn glyph_path(face: &Face, glyph_id: u16, font_size: f32) -> Option<tiny_skia::Path> {
    let scale = font_size / face.units_per_em() as f32;
    let mut builder = PathBuilder::new(scale);
    face.outline_glyph(GlyphId(glyph_id), &mut builder)?;
    builder.finish()
}

/// Path builder that converts ttf-parser outlines to tiny-skia paths
struct PathBuilder {
    builder: tiny_skia::PathBuilder,
    scale: f32,
}

impl PathBuilder {
    fn new(scale: f32) -> Self {
        Self {
            builder: tiny_skia::PathBuilder::new(),
            scale,
        }
    }

    fn transform_x(&self, x: f32) -> f32 {
        x * self.scale
    }

    fn transform_y(&self, y: f32) -> f32 {
        -y * self.scale // Flip Y axis
    }

    fn finish(self) -> Option<tiny_skia::Path> {
        self.builder.finish()
    }
}

impl OutlineBuilder for PathBuilder {
    fn move_to(&mut self, x: f32, y: f32) {
        self.builder.move_to(self.transform_x(x), self.transform_y(y));
    }

    fn line_to(&mut self, x: f32, y: f32) {
        self.builder.line_to(self.transform_x(x), self.transform_y(y));
    }

    fn quad_to(&mut self, x1: f32, y1: f32, x: f32, y: f32) {
        self.builder.quad_to(
            self.transform_x(x1), self.transform_y(y1),
            self.transform_x(x), self.transform_y(y),
        );
    }

    fn curve_to(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, x: f32, y: f32) {
        self.builder.cubic_to(
            self.transform_x(x1), self.transform_y(y1),
            self.transform_x(x2), self.transform_y(y2),
            self.transform_x(x), self.transform_y(y),
        );
    }

    fn close(&mut self) {
        self.builder.close();
    }
}
