//! Rotated canvas sizing
//!
//! All input strings are wrapped and stacked into one block. The block is
//! rotated about its top-left corner, so the canvas must be the axis-aligned
//! box around the rotated rectangle, padded by the tile margins.

use crate::config::LayoutConfig;
use crate::line::break_lines;
use crate::measure::TextMeasure;
use crate::{LayoutError, Result};

/// Wrapped lines of every input string, in reading order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextBlock {
    /// Lines, top to bottom
    pub lines: Vec<String>,
    /// Widest `max_width_used` among the input strings
    pub max_width: f64,
}

impl TextBlock {
    /// Number of lines
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Height of the unrotated block
    pub fn content_height(&self, line_height: f64) -> f64 {
        self.lines.len() as f64 * line_height
    }
}

/// Pixel surface to allocate and the transform to draw the block with
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasPlan {
    /// Canvas width in pixels, tile margin included
    pub width: u32,
    /// Canvas height in pixels, tile margin included
    pub height: u32,
    /// Downward shift applied before rotating
    pub translate_y: f64,
    /// Signed rotation; negative turns counter-clockwise (y-down)
    pub rotation_radians: f64,
    /// Width of the unrotated block
    pub content_width: f64,
    /// Height of the unrotated block
    pub content_height: f64,
    /// Vertical distance between line origins before rotation
    pub line_height: f64,
}

impl CanvasPlan {
    /// Origin of line `index` in the rotated text frame
    pub fn line_origin(&self, index: usize) -> (f64, f64) {
        (0.0, index as f64 * self.line_height)
    }

    /// Map a point from the text frame onto the canvas
    ///
    /// Applies the rotation first, then the translation, which is the
    /// same as translating the canvas and then rotating it.
    pub fn map_point(&self, x: f64, y: f64) -> (f64, f64) {
        let (sin, cos) = self.rotation_radians.sin_cos();
        (x * cos - y * sin, x * sin + y * cos + self.translate_y)
    }
}

/// Wrapped block plus its canvas plan
#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    pub block: TextBlock,
    pub plan: CanvasPlan,
}

/// Wrap `texts` and size the canvas for the rotated block.
///
/// The block is at least `config.min_width()` wide. Canvas dimensions are
/// truncated to whole pixels, never below one, so an empty block still
/// yields a drawable (blank) tile.
pub fn compute_layout<M: TextMeasure + ?Sized>(
    measure: &mut M,
    texts: &[String],
    config: &LayoutConfig,
) -> Result<Layout> {
    if texts.is_empty() {
        return Err(LayoutError::InvalidConfiguration(
            "no watermark texts to lay out".into(),
        ));
    }
    config.validate()?;

    let mut lines = Vec::new();
    let mut widths = Vec::with_capacity(texts.len());
    for text in texts {
        let broken = break_lines(measure, text, config.max_width(), config.font())?;
        tracing::debug!(
            "Wrapped {:?} into {} lines ({}px)",
            text,
            broken.lines.len(),
            broken.max_width_used
        );
        lines.extend(broken.lines);
        widths.push(broken.max_width_used);
    }
    widths.sort_by(|a, b| b.total_cmp(a));

    let block = TextBlock {
        lines,
        max_width: widths.first().copied().unwrap_or(0.0),
    };

    let width = block.max_width.max(config.min_width());
    let height = block.content_height(config.line_height());
    let radians = config.rotation_degrees().to_radians();
    let (sin, cos) = radians.abs().sin_cos();

    let plan = CanvasPlan {
        width: to_pixels(height * sin + width * cos + config.tile_margin_right()),
        height: to_pixels(width * sin + height * cos + config.tile_margin_bottom()),
        translate_y: width * sin,
        rotation_radians: radians,
        content_width: width,
        content_height: height,
        line_height: config.line_height(),
    };

    tracing::info!(
        "Watermark layout: {} lines, canvas {}x{}",
        block.line_count(),
        plan.width,
        plan.height
    );

    Ok(Layout { block, plan })
}

fn to_pixels(extent: f64) -> u32 {
    extent.floor().clamp(1.0, u32::MAX as f64) as u32
}
