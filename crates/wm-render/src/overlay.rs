//! Tiled overlay placement
//!
//! The tile is shown as a repeating background over the whole viewport,
//! fixed in place, above everything else and transparent to pointer input.

use tiny_skia::{FilterQuality, Paint, Pattern, Pixmap, Rect, SpreadMode, Transform};

use crate::{RenderError, Result, WatermarkImage};

/// Paint order of the overlay layer
pub const OVERLAY_Z_INDEX: i32 = 9999;

/// Where and how the tile is displayed
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverlayPlacement {
    /// Horizontal position of the first tile
    pub offset_x: f64,
    /// Vertical position of the first tile
    pub offset_y: f64,
    pub z_index: i32,
}

impl OverlayPlacement {
    pub fn new(offset_x: f64, offset_y: f64) -> Self {
        Self {
            offset_x,
            offset_y,
            z_index: OVERLAY_Z_INDEX,
        }
    }

    /// Inline style for a full-viewport layer showing `image_url`
    pub fn css(&self, image_url: &str) -> String {
        format!(
            "position:fixed; left:0; top:0; right:0; bottom:0; z-index:{}; pointer-events:none; \
             background-image:url({}); background-repeat:repeat; background-position:{}px {}px;",
            self.z_index, image_url, self.offset_x, self.offset_y
        )
    }
}

/// Encoded tile plus its placement
#[derive(Debug, Clone, PartialEq)]
pub struct TiledOverlay {
    image: WatermarkImage,
    placement: OverlayPlacement,
}

impl TiledOverlay {
    pub fn new(image: WatermarkImage, offset_x: f64, offset_y: f64) -> Self {
        Self {
            image,
            placement: OverlayPlacement::new(offset_x, offset_y),
        }
    }

    pub fn image(&self) -> &WatermarkImage {
        &self.image
    }

    pub fn placement(&self) -> &OverlayPlacement {
        &self.placement
    }

    /// Inline style with the tile embedded as a data URL
    pub fn css(&self) -> String {
        self.placement.css(&self.image.data_url())
    }

    /// A `div` carrying the overlay style
    pub fn html(&self) -> String {
        format!("<div style=\"{}\"></div>", self.css())
    }

    /// Paint the tile repeatedly over all of `viewport`, source-over,
    /// with one tile's top-left corner at the placement offset
    pub fn composite(&self, viewport: &mut Pixmap) -> Result<()> {
        let tile = self.image.decode()?;
        let area = Rect::from_xywh(0.0, 0.0, viewport.width() as f32, viewport.height() as f32)
            .ok_or(RenderError::Surface {
                width: viewport.width(),
                height: viewport.height(),
            })?;

        let mut paint = Paint::default();
        paint.shader = Pattern::new(
            tile.as_ref(),
            SpreadMode::Repeat,
            FilterQuality::Nearest,
            1.0,
            Transform::from_translate(self.placement.offset_x as f32, self.placement.offset_y as f32),
        );
        viewport.fill_rect(area, &paint, Transform::identity(), None);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tiny_skia::{Color as SkiaColor, PremultipliedColorU8};

    /// 4x4 tile, left half opaque red, right half transparent
    fn half_red_tile() -> WatermarkImage {
        let mut tile = Pixmap::new(4, 4).unwrap();
        let mut paint = Paint::default();
        paint.set_color(SkiaColor::from_rgba8(255, 0, 0, 255));
        tile.fill_rect(Rect::from_xywh(0.0, 0.0, 2.0, 4.0).unwrap(), &paint, Transform::identity(), None);
        WatermarkImage::encode(&tile).unwrap()
    }

    fn is_red(pixel: PremultipliedColorU8) -> bool {
        pixel.red() == 255 && pixel.green() == 0 && pixel.alpha() == 255
    }

    fn is_white(pixel: PremultipliedColorU8) -> bool {
        pixel.red() == 255 && pixel.green() == 255 && pixel.blue() == 255
    }

    #[test]
    fn test_css_directive() {
        let overlay = TiledOverlay::new(half_red_tile(), 20.0, 30.0);
        let css = overlay.css();
        assert!(css.contains("position:fixed"));
        assert!(css.contains("pointer-events:none"));
        assert!(css.contains("z-index:9999"));
        assert!(css.contains("background-repeat:repeat"));
        assert!(css.contains("background-position:20px 30px"));
        assert!(css.contains("url(data:image/png;base64,"));
        assert!(overlay.html().starts_with("<div style=\""));
    }

    #[test]
    fn test_composite_repeats_tile() {
        let overlay = TiledOverlay::new(half_red_tile(), 0.0, 0.0);
        let mut viewport = Pixmap::new(12, 6).unwrap();
        viewport.fill(SkiaColor::WHITE);
        overlay.composite(&mut viewport).unwrap();

        for x in [1, 5, 9] {
            assert!(is_red(viewport.pixel(x, 1).unwrap()), "x = {}", x);
        }
        for x in [3, 7, 11] {
            assert!(is_white(viewport.pixel(x, 1).unwrap()), "x = {}", x);
        }
        // Second row of tiles
        assert!(is_red(viewport.pixel(1, 5).unwrap()));
    }

    #[test]
    fn test_composite_honors_offset() {
        let overlay = TiledOverlay::new(half_red_tile(), 2.0, 0.0);
        let mut viewport = Pixmap::new(8, 4).unwrap();
        viewport.fill(SkiaColor::WHITE);
        overlay.composite(&mut viewport).unwrap();

        assert!(is_white(viewport.pixel(1, 1).unwrap()));
        assert!(is_red(viewport.pixel(3, 1).unwrap()));
        assert!(is_white(viewport.pixel(5, 1).unwrap()));
        assert!(is_red(viewport.pixel(7, 1).unwrap()));
    }
}
