//! Integration tests - options to displayed overlay
//!
//! Tests that draw glyphs need a system font and return early without one.

use wm_layout::{LayoutError, WatermarkOptions};
use wm_render::{Color, RenderError, apply_watermark};
use wm_text::FontDatabase;

fn system_fonts() -> Option<FontDatabase> {
    let db = FontDatabase::with_system_fonts();
    if db.is_empty() { None } else { Some(db) }
}

fn options(json: &str) -> wm_layout::WatermarkConfig {
    WatermarkOptions::from_json(json).unwrap().into_config().unwrap()
}

#[test]
fn test_tile_matches_plan() {
    let Some(db) = system_fonts() else { return };
    let config = options(r#"{"textArr": ["test", "自定义水印"]}"#);
    let watermark = apply_watermark(&db, &config).unwrap();

    let plan = watermark.layout.plan;
    let image = watermark.overlay.image();
    assert_eq!((image.width(), image.height()), (plan.width, plan.height));
    assert_eq!(watermark.layout.block.lines, vec!["test", "自定义水印"]);
}

#[test]
fn test_tile_has_ink() {
    let Some(db) = system_fonts() else { return };
    let config = options(r##"{"textArr": ["CONFIDENTIAL"], "fillStyle": "#000", "deg": 0}"##);
    let watermark = apply_watermark(&db, &config).unwrap();

    let tile = watermark.overlay.image().decode().unwrap();
    let inked = tile.pixels().iter().filter(|p| p.alpha() > 0).count();
    assert!(inked > 0, "no glyph pixels drawn");
}

#[test]
fn test_margins_stay_clear() {
    let Some(db) = system_fonts() else { return };
    let config = options(
        r##"{"textArr": ["margin check"], "fillStyle": "#000", "deg": 0, "marginRight": 150, "marginBottom": 50}"##,
    );
    let watermark = apply_watermark(&db, &config).unwrap();
    let tile = watermark.overlay.image().decode().unwrap();

    // Unrotated: the right margin column band is never drawn into
    let block_width = watermark.layout.plan.content_width.ceil() as u32 + 4;
    for y in 0..tile.height() {
        for x in block_width..tile.width() {
            assert_eq!(tile.pixel(x, y).unwrap().alpha(), 0, "ink at ({}, {})", x, y);
        }
    }
}

#[test]
fn test_preview_covers_viewport() {
    let Some(db) = system_fonts() else { return };
    let config = options(r#"{"textArr": ["preview"], "fillStyle": "rgba(0,0,0,1)"}"#);
    let watermark = apply_watermark(&db, &config).unwrap();

    let preview = watermark.preview(800, 600, Color::WHITE).unwrap();
    assert_eq!((preview.width(), preview.height()), (800, 600));
    let darkened = preview.pixels().iter().filter(|p| p.red() < 255).count();
    assert!(darkened > 0);
}

#[test]
fn test_empty_text_without_margins_draws_blank_tile() {
    let Some(db) = system_fonts() else { return };
    let config = options(r#"{"textArr": [""], "minWidth": 0, "marginRight": 0, "deg": 0}"#);
    let watermark = apply_watermark(&db, &config).unwrap();

    let tile = watermark.overlay.image().decode().unwrap();
    assert_eq!(tile.width(), 1);
    assert_eq!(tile.height(), 50);
    assert!(tile.pixels().iter().all(|p| p.alpha() == 0));
}

#[test]
fn test_bad_fill_style_fails_before_drawing() {
    let db = FontDatabase::new();
    let config = options(r#"{"textArr": ["x"], "fillStyle": "not-a-color"}"#);
    let err = apply_watermark(&db, &config).unwrap_err();
    assert!(matches!(err, RenderError::InvalidFillStyle(_)));
}

#[test]
fn test_no_fonts_is_measurement_unavailable() {
    let db = FontDatabase::new();
    let config = options(r#"{"textArr": ["x"]}"#);
    let err = apply_watermark(&db, &config).unwrap_err();
    assert!(matches!(
        err,
        RenderError::Layout(LayoutError::MeasurementUnavailable(_))
    ));
}
