//! Glyph rendering onto the tile surface

use tiny_skia::{FillRule, Paint, Pixmap, Transform};
use wm_layout::{FontDescriptor, Layout};
use wm_text::{FontDatabase, FontFace, FontShorthand, TextError, TextShaper, glyph_path};

use crate::{Color, RenderError, Result};

/// Draw the layout's lines onto a fresh transparent surface.
///
/// The surface is translated down by the plan's offset and rotated before
/// any glyph is placed. Lines start at x = 0 and are hung from their
/// nominal y (hanging baseline), one line height apart.
pub fn render_glyphs(
    db: &FontDatabase,
    layout: &Layout,
    font: &FontDescriptor,
    fill: Color,
) -> Result<Pixmap> {
    let plan = &layout.plan;
    let mut pixmap = Pixmap::new(plan.width, plan.height).ok_or(RenderError::Surface {
        width: plan.width,
        height: plan.height,
    })?;

    let shorthand = FontShorthand::parse(font)?;
    let id = db.resolve(&shorthand)?;
    let size = shorthand.size_px;

    let mut paint = Paint::default();
    paint.set_color(fill.to_skia());
    paint.anti_alias = true;

    let base = Transform::from_translate(0.0, plan.translate_y as f32)
        .pre_concat(Transform::from_rotate(plan.rotation_radians.to_degrees() as f32));
    let shaper = TextShaper::new();

    let drawn = db
        .with_face_data(id, |data, index| -> Result<usize> {
            let face = FontFace::parse(data, index, id)
                .ok_or_else(|| TextError::FontParsing(format!("face {} of {:?}", index, font.as_str())))?;
            let hanging = face.hanging_baseline_offset(size);
            let mut glyphs = 0;

            for (i, line) in layout.block.lines.iter().enumerate() {
                let run = shaper.shape_with_data(data, index, line, size)?;
                let (x, y) = plan.line_origin(i);
                let baseline = y as f32 + hanging;

                for glyph in run.positioned_glyphs() {
                    let Some(path) = glyph_path(face.ttf_face(), glyph.glyph_id, size) else {
                        continue;
                    };
                    let transform = base.pre_concat(Transform::from_translate(
                        x as f32 + glyph.x,
                        baseline + glyph.y,
                    ));
                    pixmap.fill_path(&path, &paint, FillRule::Winding, transform, None);
                    glyphs += 1;
                }
            }
            Ok(glyphs)
        })
        .ok_or_else(|| TextError::FontNotFound(format!("no face data for {:?}", font.as_str())))??;

    tracing::debug!(
        "Rendered {} glyphs onto {}x{} surface",
        drawn,
        plan.width,
        plan.height
    );
    Ok(pixmap)
}
