//! Font matching and query

use super::{FontStyle, FontWeight};

/// Font query for matching
#[derive(Debug, Clone)]
pub struct FontQuery {
    /// Font families to try (in order)
    pub families: Vec<String>,
    /// Desired weight
    pub weight: FontWeight,
    /// Desired style
    pub style: FontStyle,
}

impl FontQuery {
    /// Create a new font query
    pub fn new(families: &[&str]) -> Self {
        Self {
            families: families.iter().map(|s| s.to_string()).collect(),
            weight: FontWeight::NORMAL,
            style: FontStyle::Normal,
        }
    }

    /// Set font weight
    pub fn weight(mut self, weight: FontWeight) -> Self {
        self.weight = weight;
        self
    }

    /// Set font style
    pub fn style(mut self, style: FontStyle) -> Self {
        self.style = style;
        self
    }
}

impl Default for FontQuery {
    fn default() -> Self {
        Self::new(&["sans-serif"])
    }
}

/// Map a generic keyword onto fontdb's generic family
pub(crate) fn generic_family(family: &str) -> Option<fontdb::Family<'_>> {
    match family.to_ascii_lowercase().as_str() {
        "serif" | "ui-serif" => Some(fontdb::Family::Serif),
        "sans-serif" | "system-ui" | "ui-sans-serif" => Some(fontdb::Family::SansSerif),
        "monospace" | "ui-monospace" => Some(fontdb::Family::Monospace),
        "cursive" => Some(fontdb::Family::Cursive),
        "fantasy" => Some(fontdb::Family::Fantasy),
        _ => None,
    }
}

/// Resolve generic font family to concrete system families
pub fn resolve_generic_family(family: &str) -> &'static [&'static str] {
    match family.to_ascii_lowercase().as_str() {
        "serif" => &["Times New Roman", "Times", "DejaVu Serif", "Noto Serif", "Noto Serif CJK SC"],
        "sans-serif" => &[
            "Arial",
            "Helvetica",
            "DejaVu Sans",
            "Noto Sans",
            "Liberation Sans",
            "Noto Sans CJK SC",
            "Microsoft YaHei",
        ],
        "monospace" => &["Courier New", "Consolas", "DejaVu Sans Mono", "Noto Sans Mono"],
        "cursive" => &["Comic Sans MS", "Brush Script MT"],
        "fantasy" => &["Impact", "Papyrus"],
        "system-ui" => &["Segoe UI", "San Francisco", "Ubuntu", "Cantarell"],
        "ui-serif" => &["Georgia", "Times New Roman"],
        "ui-sans-serif" => &["Segoe UI", "SF Pro", "Roboto"],
        "ui-monospace" => &["SF Mono", "Consolas", "Menlo"],
        // Chinese UI fonts that are rarely installed outside Windows/macOS
        "微软雅黑" | "microsoft yahei" => &["Microsoft YaHei", "PingFang SC", "Noto Sans CJK SC", "WenQuanYi Micro Hei"],
        "宋体" | "simsun" => &["SimSun", "Songti SC", "Noto Serif CJK SC"],
        _ => &[],
    }
}
