//! Watermark Layout - Text Wrapping and Canvas Sizing
//!
//! This crate holds the pure layout half of the watermark pipeline:
//! - Measured line breaking (binary search over prefix widths)
//! - Bounding canvas for a rotated block of lines
//! - Watermark options, defaults and validation
//!
//! Nothing here touches fonts or pixels. Text widths come from a
//! [`TextMeasure`] oracle supplied by the caller.

pub mod config;
pub mod line;
pub mod measure;
pub mod sizer;

pub use config::{LayoutConfig, TextValue, WatermarkConfig, WatermarkOptions};
pub use line::{BrokenLines, break_lines, find_break_point};
pub use measure::{FontDescriptor, TextMeasure};
pub use sizer::{CanvasPlan, Layout, TextBlock, compute_layout};

/// Layout error types
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LayoutError {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Text measurement unavailable: {0}")]
    MeasurementUnavailable(String),
}

pub type Result<T> = std::result::Result<T, LayoutError>;
