//! CSS font shorthand parsing
//!
//! Accepts `[style] [variant] [weight] size[/line-height] family[, family]*`,
//! the same shape a canvas `font` property takes.

use wm_layout::FontDescriptor;

use super::matching::resolve_generic_family;
use super::{FontQuery, FontStyle, FontWeight};
use crate::{Result, TextError};

/// Pixels per CSS `em` when there is no parent font to inherit from
const ROOT_FONT_SIZE: f32 = 16.0;

/// Parsed font descriptor
#[derive(Debug, Clone, PartialEq)]
pub struct FontShorthand {
    /// Font size in pixels
    pub size_px: f32,
    pub weight: FontWeight,
    pub style: FontStyle,
    /// Families in preference order, quotes removed
    pub families: Vec<String>,
}

impl FontShorthand {
    /// Parse a descriptor such as `18px '微软雅黑'`
    pub fn parse(descriptor: &FontDescriptor) -> Result<Self> {
        let input = descriptor.as_str();
        let mut weight = FontWeight::NORMAL;
        let mut style = FontStyle::Normal;
        let mut rest = input.trim_start();

        loop {
            if rest.is_empty() {
                return Err(TextError::InvalidFont(format!("no font size in {:?}", input)));
            }
            let (token, tail) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));
            rest = tail.trim_start();

            match token.to_ascii_lowercase().as_str() {
                "normal" | "small-caps" => {}
                "italic" => style = FontStyle::Italic,
                "oblique" => style = FontStyle::Oblique,
                "bold" | "bolder" => weight = FontWeight::BOLD,
                "lighter" => weight = FontWeight::LIGHT,
                lower => {
                    if let Ok(numeric) = lower.parse::<u16>() {
                        weight = FontWeight::from(numeric);
                        continue;
                    }
                    let size = token.split('/').next().unwrap_or(token);
                    let size_px = parse_size(size).ok_or_else(|| {
                        TextError::InvalidFont(format!("unrecognized token {:?} in {:?}", token, input))
                    })?;
                    return Ok(Self {
                        size_px,
                        weight,
                        style,
                        families: parse_families(rest),
                    });
                }
            }
        }
    }

    /// Build a query trying each family, then the families a generic or
    /// alias name stands for
    pub fn to_query(&self) -> FontQuery {
        let mut families = Vec::new();
        for family in &self.families {
            families.push(family.clone());
            families.extend(resolve_generic_family(family).iter().map(|s| s.to_string()));
        }
        FontQuery {
            families,
            weight: self.weight,
            style: self.style,
        }
    }
}

fn parse_size(token: &str) -> Option<f32> {
    let lower = token.to_ascii_lowercase();
    let (number, factor) = if let Some(n) = lower.strip_suffix("px") {
        (n, 1.0)
    } else if let Some(n) = lower.strip_suffix("pt") {
        (n, 4.0 / 3.0)
    } else if let Some(n) = lower.strip_suffix("rem") {
        (n, ROOT_FONT_SIZE)
    } else if let Some(n) = lower.strip_suffix("em") {
        (n, ROOT_FONT_SIZE)
    } else if let Some(n) = lower.strip_suffix('%') {
        (n, ROOT_FONT_SIZE / 100.0)
    } else {
        return None;
    };
    let value: f32 = number.parse().ok()?;
    (value.is_finite() && value > 0.0).then_some(value * factor)
}

fn parse_families(list: &str) -> Vec<String> {
    let families: Vec<String> = list
        .split(',')
        .map(|f| f.trim().trim_matches(|c| c == '\'' || c == '"').trim().to_string())
        .filter(|f| !f.is_empty())
        .collect();
    if families.is_empty() {
        vec!["sans-serif".to_string()]
    } else {
        families
    }
}
