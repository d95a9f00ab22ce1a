//! Watermark options and layout configuration
//!
//! [`WatermarkOptions`] is the loosely-typed record callers hand in (every
//! key optional, unknown keys ignored). It is merged over the defaults and
//! validated into an immutable [`WatermarkConfig`].

use std::fmt;

use serde::Deserialize;

use crate::measure::FontDescriptor;
use crate::{LayoutError, Result};

pub const DEFAULT_FONT: &str = "18px '微软雅黑'";
pub const DEFAULT_FILL_STYLE: &str = "rgba(170,170,170,0.4)";
pub const DEFAULT_MAX_WIDTH: f64 = 200.0;
pub const DEFAULT_MIN_WIDTH: f64 = 120.0;
pub const DEFAULT_LINE_HEIGHT: f64 = 24.0;
pub const DEFAULT_ROTATION_DEGREES: f64 = -45.0;
pub const DEFAULT_MARGIN_RIGHT: f64 = 150.0;
pub const DEFAULT_MARGIN_BOTTOM: f64 = 50.0;
pub const DEFAULT_OFFSET_X: f64 = 20.0;
pub const DEFAULT_OFFSET_Y: f64 = 20.0;

/// Layout and paint settings for one watermark
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutConfig {
    max_width: f64,
    min_width: f64,
    line_height: f64,
    rotation_degrees: f64,
    tile_margin_right: f64,
    tile_margin_bottom: f64,
    overlay_offset_x: f64,
    overlay_offset_y: f64,
    font: FontDescriptor,
    fill_style: String,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            max_width: DEFAULT_MAX_WIDTH,
            min_width: DEFAULT_MIN_WIDTH,
            line_height: DEFAULT_LINE_HEIGHT,
            rotation_degrees: DEFAULT_ROTATION_DEGREES,
            tile_margin_right: DEFAULT_MARGIN_RIGHT,
            tile_margin_bottom: DEFAULT_MARGIN_BOTTOM,
            overlay_offset_x: DEFAULT_OFFSET_X,
            overlay_offset_y: DEFAULT_OFFSET_Y,
            font: FontDescriptor::default(),
            fill_style: DEFAULT_FILL_STYLE.to_string(),
        }
    }
}

impl LayoutConfig {
    /// Maximum line width in pixels
    pub fn max_width(&self) -> f64 {
        self.max_width
    }

    /// Minimum block width, never more than `max_width`
    pub fn min_width(&self) -> f64 {
        self.min_width.min(self.max_width)
    }

    pub fn line_height(&self) -> f64 {
        self.line_height
    }

    /// Rotation in degrees, within [-90, 0]
    pub fn rotation_degrees(&self) -> f64 {
        self.rotation_degrees
    }

    pub fn tile_margin_right(&self) -> f64 {
        self.tile_margin_right
    }

    pub fn tile_margin_bottom(&self) -> f64 {
        self.tile_margin_bottom
    }

    pub fn overlay_offset_x(&self) -> f64 {
        self.overlay_offset_x
    }

    pub fn overlay_offset_y(&self) -> f64 {
        self.overlay_offset_y
    }

    pub fn font(&self) -> &FontDescriptor {
        &self.font
    }

    /// Fill style as written (`"rgba(170,170,170,0.4)"`, `"#aaa"`, ...)
    pub fn fill_style(&self) -> &str {
        &self.fill_style
    }

    pub fn with_max_width(mut self, width: f64) -> Self {
        self.max_width = width;
        self
    }

    pub fn with_min_width(mut self, width: f64) -> Self {
        self.min_width = width;
        self
    }

    pub fn with_line_height(mut self, height: f64) -> Self {
        self.line_height = height;
        self
    }

    pub fn with_rotation_degrees(mut self, degrees: f64) -> Self {
        self.rotation_degrees = degrees;
        self
    }

    /// Set the gaps left to the right of and below each tile
    pub fn with_tile_margins(mut self, right: f64, bottom: f64) -> Self {
        self.tile_margin_right = right;
        self.tile_margin_bottom = bottom;
        self
    }

    /// Set where the first tile is placed on the viewport
    pub fn with_overlay_offset(mut self, x: f64, y: f64) -> Self {
        self.overlay_offset_x = x;
        self.overlay_offset_y = y;
        self
    }

    pub fn with_font(mut self, font: impl Into<FontDescriptor>) -> Self {
        self.font = font.into();
        self
    }

    pub fn with_fill_style(mut self, fill_style: impl Into<String>) -> Self {
        self.fill_style = fill_style.into();
        self
    }

    /// Check the numeric invariants layout depends on
    pub fn validate(&self) -> Result<()> {
        if !self.max_width.is_finite() || self.max_width <= 0.0 {
            return Err(invalid(format_args!("maxWidth must be positive, got {}", self.max_width)));
        }
        if !self.min_width.is_finite() || self.min_width < 0.0 {
            return Err(invalid(format_args!("minWidth must be non-negative, got {}", self.min_width)));
        }
        if !self.line_height.is_finite() || self.line_height <= 0.0 {
            return Err(invalid(format_args!("lineHeight must be positive, got {}", self.line_height)));
        }
        if !(-90.0..=0.0).contains(&self.rotation_degrees) {
            return Err(invalid(format_args!(
                "deg must be within [-90, 0], got {}",
                self.rotation_degrees
            )));
        }
        let spacing = [
            ("marginRight", self.tile_margin_right),
            ("marginBottom", self.tile_margin_bottom),
            ("left", self.overlay_offset_x),
            ("top", self.overlay_offset_y),
        ];
        for (name, value) in spacing {
            if !value.is_finite() {
                return Err(invalid(format_args!("{} must be finite, got {}", name, value)));
            }
        }
        Ok(())
    }
}

fn invalid(message: fmt::Arguments<'_>) -> LayoutError {
    LayoutError::InvalidConfiguration(message.to_string())
}

/// A `textArr` entry. Scalars are accepted and used in their string form.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum TextValue {
    Text(String),
    Number(serde_json::Number),
    Bool(bool),
}

impl fmt::Display for TextValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TextValue::Text(text) => f.write_str(text),
            // Floats print the shortest form, so 42.0 reads "42"
            TextValue::Number(number) => match number.as_f64() {
                Some(value) if number.is_f64() && value == 0.0 => f.write_str("0"),
                Some(value) if number.is_f64() => write!(f, "{}", value),
                _ => write!(f, "{}", number),
            },
            TextValue::Bool(value) => write!(f, "{}", value),
        }
    }
}

impl From<&str> for TextValue {
    fn from(text: &str) -> Self {
        TextValue::Text(text.to_string())
    }
}

impl From<String> for TextValue {
    fn from(text: String) -> Self {
        TextValue::Text(text)
    }
}

/// Caller-facing watermark options, all optional
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WatermarkOptions {
    pub text_arr: Option<Vec<TextValue>>,
    pub font: Option<String>,
    pub fill_style: Option<String>,
    pub max_width: Option<f64>,
    pub min_width: Option<f64>,
    pub line_height: Option<f64>,
    pub deg: Option<f64>,
    pub margin_right: Option<f64>,
    pub margin_bottom: Option<f64>,
    pub left: Option<f64>,
    pub top: Option<f64>,
}

impl WatermarkOptions {
    /// Parse options from a JSON object
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| LayoutError::InvalidConfiguration(e.to_string()))
    }

    /// Convert an already-parsed JSON value
    pub fn from_value(value: serde_json::Value) -> Result<Self> {
        serde_json::from_value(value).map_err(|e| LayoutError::InvalidConfiguration(e.to_string()))
    }

    /// Options carrying only the given texts
    pub fn with_texts<I, T>(texts: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<TextValue>,
    {
        Self {
            text_arr: Some(texts.into_iter().map(Into::into).collect()),
            ..Self::default()
        }
    }

    /// Merge over the defaults and validate
    pub fn into_config(self) -> Result<WatermarkConfig> {
        let texts: Vec<String> = match self.text_arr {
            Some(values) => values.iter().map(ToString::to_string).collect(),
            None => {
                return Err(LayoutError::InvalidConfiguration(
                    "textArr is required".into(),
                ));
            }
        };

        let defaults = LayoutConfig::default();
        let layout = LayoutConfig {
            max_width: self.max_width.unwrap_or(defaults.max_width),
            min_width: self.min_width.unwrap_or(defaults.min_width),
            line_height: self.line_height.unwrap_or(defaults.line_height),
            rotation_degrees: self.deg.unwrap_or(defaults.rotation_degrees),
            tile_margin_right: self.margin_right.unwrap_or(defaults.tile_margin_right),
            tile_margin_bottom: self.margin_bottom.unwrap_or(defaults.tile_margin_bottom),
            overlay_offset_x: self.left.unwrap_or(defaults.overlay_offset_x),
            overlay_offset_y: self.top.unwrap_or(defaults.overlay_offset_y),
            font: self.font.map(FontDescriptor::from).unwrap_or(defaults.font),
            fill_style: self.fill_style.unwrap_or(defaults.fill_style),
        };

        WatermarkConfig::new(texts, layout)
    }
}

/// Validated texts plus layout settings
#[derive(Debug, Clone, PartialEq)]
pub struct WatermarkConfig {
    texts: Vec<String>,
    layout: LayoutConfig,
}

impl WatermarkConfig {
    /// Validate and bundle texts with their layout
    pub fn new(texts: Vec<String>, layout: LayoutConfig) -> Result<Self> {
        if texts.is_empty() {
            return Err(LayoutError::InvalidConfiguration(
                "textArr must contain at least one entry".into(),
            ));
        }
        layout.validate()?;
        Ok(Self { texts, layout })
    }

    /// Texts in input order
    pub fn texts(&self) -> &[String] {
        &self.texts
    }

    pub fn layout(&self) -> &LayoutConfig {
        &self.layout
    }
}
