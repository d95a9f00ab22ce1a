//! Text measurement oracle

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::Result;
use crate::config::DEFAULT_FONT;

/// Font description in CSS shorthand form (`"18px 'Noto Sans'"`)
///
/// Layout never looks inside it; the descriptor is handed verbatim to the
/// measurement oracle and the glyph renderer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FontDescriptor(String);

impl FontDescriptor {
    /// Wrap a font shorthand string
    pub fn new(font: impl Into<String>) -> Self {
        Self(font.into())
    }

    /// The shorthand as given
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for FontDescriptor {
    fn default() -> Self {
        Self::new(DEFAULT_FONT)
    }
}

impl fmt::Display for FontDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for FontDescriptor {
    fn from(font: &str) -> Self {
        Self::new(font)
    }
}

impl From<String> for FontDescriptor {
    fn from(font: String) -> Self {
        Self(font)
    }
}

/// Measures the advance width of a string in pixels.
///
/// Implementations must be monotonic: appending characters to a string
/// never makes it narrower. Line breaking relies on this to binary-search
/// break points. Callers own the oracle for the duration of one layout;
/// nothing here locks it.
pub trait TextMeasure {
    /// Width of `text` set in `font`
    fn measure_text_width(&mut self, text: &str, font: &FontDescriptor) -> Result<f64>;
}

impl<F> TextMeasure for F
where
    F: FnMut(&str, &FontDescriptor) -> f64,
{
    fn measure_text_width(&mut self, text: &str, font: &FontDescriptor) -> Result<f64> {
        Ok(self(text, font))
    }
}
