//! Line breaking against a measured maximum width
//!
//! Breaks are searched per character, not per word: the watermark wraps
//! wherever the next character would overflow. Each break costs
//! O(log n) measurements because prefix width is monotonic in length.

use crate::Result;
use crate::measure::{FontDescriptor, TextMeasure};

/// One string wrapped into lines
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BrokenLines {
    /// Lines in reading order; concatenated they give back the input
    pub lines: Vec<String>,
    /// `max_width` if any break was forced, otherwise the width of the
    /// single line (0 for empty input)
    pub max_width_used: f64,
}

/// Find where `text` must break to stay within `max_width`.
///
/// Returns the byte offset of the longest prefix that still fits, with the
/// next character overflowing. `None` means the whole of `text` fits (or
/// `text` is empty). `Some(0)` means even the first character overflows.
pub fn find_break_point<M: TextMeasure + ?Sized>(
    measure: &mut M,
    text: &str,
    max_width: f64,
    font: &FontDescriptor,
) -> Result<Option<usize>> {
    let ends = char_ends(text);
    let fit = fitting_prefix(measure, text, &ends, max_width, font)?;
    Ok(fit.map(|chars| ends[chars]))
}

/// Wrap `text` into lines no wider than `max_width`.
///
/// A leading character that is wider than `max_width` on its own is
/// emitted as a line by itself, so a string of such characters wraps one
/// character per line. Those lines are the only ones allowed to overflow
/// besides the final remainder.
pub fn break_lines<M: TextMeasure + ?Sized>(
    measure: &mut M,
    text: &str,
    max_width: f64,
    font: &FontDescriptor,
) -> Result<BrokenLines> {
    let ends = char_ends(text);
    let mut lines = Vec::new();
    let mut max_width_used = 0.0;
    let mut wrapped = false;
    // First character not yet emitted
    let mut start = 0;

    while let Some(fit) = fitting_prefix(measure, text, &ends[start..], max_width, font)? {
        let end = start + fit.max(1);
        lines.push(text[ends[start]..ends[end]].to_string());
        start = end;
        max_width_used = max_width;
        wrapped = true;
    }

    let rest = &text[ends[start]..];
    if !rest.is_empty() {
        let width = measure.measure_text_width(rest, font)?;
        lines.push(rest.to_string());
        if !wrapped {
            max_width_used = width;
        }
    }

    Ok(BrokenLines { lines, max_width_used })
}

/// Byte offset of every char boundary in `text`, including `text.len()`
fn char_ends(text: &str) -> Vec<usize> {
    text.char_indices()
        .map(|(i, _)| i)
        .chain(std::iter::once(text.len()))
        .collect()
}

/// Number of characters of `text[ends[0]..]` that fit, or `None` if all
/// of it does. `ends` is a tail of the boundaries from `char_ends`.
fn fitting_prefix<M: TextMeasure + ?Sized>(
    measure: &mut M,
    text: &str,
    ends: &[usize],
    max_width: f64,
    font: &FontDescriptor,
) -> Result<Option<usize>> {
    let char_count = ends.len().saturating_sub(1);
    if char_count == 0 {
        return Ok(None);
    }
    let start = ends[0];

    // Smallest prefix length in [1, char_count] that overflows
    let mut lo = 1;
    let mut hi = char_count + 1;
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        let width = measure.measure_text_width(&text[start..ends[mid]], font)?;
        if width > max_width {
            hi = mid;
        } else {
            lo = mid + 1;
        }
    }

    Ok((lo <= char_count).then(|| lo - 1))
}
