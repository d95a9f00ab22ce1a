//! Command line arguments

use std::fs;
use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{Context, Result, bail};
use clap::{ArgAction, Args, Parser};
use wm_layout::{TextValue, WatermarkOptions};
use wm_text::FontDatabase;

#[derive(Parser, Debug)]
#[command(
    name = "watermark",
    version,
    about = "Render a rotated, tiled text watermark"
)]
pub struct Cli {
    /// JSON file with watermark options (textArr, font, fillStyle, maxWidth, ...)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Watermark text line (repeatable, replaces textArr)
    #[arg(long = "text", value_name = "TEXT")]
    pub texts: Vec<String>,

    /// Font shorthand, e.g. "18px 'Noto Sans'"
    #[arg(long)]
    pub font: Option<String>,

    /// Fill style, e.g. "rgba(170,170,170,0.4)"
    #[arg(long)]
    pub fill_style: Option<String>,

    /// Rotation in degrees, between -90 and 0
    #[arg(long, allow_negative_numbers = true)]
    pub deg: Option<f64>,

    #[command(flatten)]
    pub fonts: FontSourceArgs,

    /// Where to write the tile PNG
    #[arg(long, short, value_name = "FILE", default_value = "watermark.png")]
    pub output: PathBuf,

    /// Also write the tile composited over a white page
    #[arg(long, value_name = "FILE", requires = "viewport")]
    pub preview: Option<PathBuf>,

    /// Page size for --preview, as WIDTHxHEIGHT
    #[arg(long, value_name = "WxH")]
    pub viewport: Option<Viewport>,

    /// Write the overlay CSS (tile embedded as a data URL)
    #[arg(long, value_name = "FILE")]
    pub css: Option<PathBuf>,
}

#[derive(Args, Debug, Clone)]
pub struct FontSourceArgs {
    /// Additional font files to load (repeatable)
    #[arg(long = "font-file", value_name = "FILE")]
    pub font_file: Vec<PathBuf>,

    /// Additional font directories to load (repeatable)
    #[arg(long = "font-dir", value_name = "DIR")]
    pub font_dir: Vec<PathBuf>,

    /// Do not discover system fonts
    #[arg(long, action = ArgAction::SetTrue)]
    pub no_system_fonts: bool,
}

impl FontSourceArgs {
    pub fn load(&self) -> Result<FontDatabase> {
        let mut db = if self.no_system_fonts {
            FontDatabase::new()
        } else {
            FontDatabase::with_system_fonts()
        };
        for path in &self.font_file {
            db.load_font_file(path)
                .with_context(|| format!("loading font {}", path.display()))?;
        }
        for dir in &self.font_dir {
            db.load_fonts_dir(dir);
        }
        tracing::info!("{} font faces available", db.len());
        Ok(db)
    }
}

impl Cli {
    /// Options from the config file with command line overrides applied
    pub fn options(&self) -> Result<WatermarkOptions> {
        let mut options = match &self.config {
            Some(path) => {
                let json = fs::read_to_string(path)
                    .with_context(|| format!("reading {}", path.display()))?;
                WatermarkOptions::from_json(&json)
                    .with_context(|| format!("parsing {}", path.display()))?
            }
            None => WatermarkOptions::default(),
        };

        if !self.texts.is_empty() {
            options.text_arr = Some(self.texts.iter().cloned().map(TextValue::from).collect());
        }
        if let Some(font) = &self.font {
            options.font = Some(font.clone());
        }
        if let Some(fill_style) = &self.fill_style {
            options.fill_style = Some(fill_style.clone());
        }
        if let Some(deg) = self.deg {
            options.deg = Some(deg);
        }
        Ok(options)
    }
}

/// Page size for previews
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl FromStr for Viewport {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let Some((w, h)) = s.split_once(['x', 'X']) else {
            bail!("expected WIDTHxHEIGHT, got {:?}", s);
        };
        let width: u32 = w.trim().parse().with_context(|| format!("bad width in {:?}", s))?;
        let height: u32 = h.trim().parse().with_context(|| format!("bad height in {:?}", s))?;
        if width == 0 || height == 0 {
            bail!("viewport must be non-empty, got {:?}", s);
        }
        Ok(Self { width, height })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_viewport_parse() {
        assert_eq!("1280x720".parse::<Viewport>().unwrap(), Viewport { width: 1280, height: 720 });
        assert_eq!("64X48".parse::<Viewport>().unwrap(), Viewport { width: 64, height: 48 });
        assert!("1280".parse::<Viewport>().is_err());
        assert!("0x10".parse::<Viewport>().is_err());
        assert!("axb".parse::<Viewport>().is_err());
    }

    #[test]
    fn test_overrides_apply() {
        let cli = Cli::try_parse_from([
            "watermark",
            "--text",
            "first",
            "--text",
            "second",
            "--deg",
            "-30",
            "--fill-style",
            "#000",
        ])
        .unwrap();
        let config = cli.options().unwrap().into_config().unwrap();
        assert_eq!(config.texts(), &["first", "second"]);
        assert_eq!(config.layout().rotation_degrees(), -30.0);
        assert_eq!(config.layout().fill_style(), "#000");
        assert_eq!(cli.output, PathBuf::from("watermark.png"));
    }

    #[test]
    fn test_preview_requires_viewport() {
        let result = Cli::try_parse_from(["watermark", "--text", "a", "--preview", "p.png"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_texts_rejected() {
        let cli = Cli::try_parse_from(["watermark"]).unwrap();
        assert!(cli.options().unwrap().into_config().is_err());
    }
}
