//! Watermark CLI - Main Entry Point

mod args;

use std::fs;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;
use wm_render::{Color, apply_watermark};

use args::Cli;

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    let config = cli
        .options()?
        .into_config()
        .context("invalid watermark options")?;
    let db = cli.fonts.load()?;

    let watermark = apply_watermark(&db, &config).context("rendering watermark")?;

    fs::write(&cli.output, watermark.overlay.image().png_bytes())
        .with_context(|| format!("writing {}", cli.output.display()))?;
    tracing::info!("Wrote tile to {}", cli.output.display());

    if let Some(path) = &cli.css {
        fs::write(path, watermark.overlay.css())
            .with_context(|| format!("writing {}", path.display()))?;
        tracing::info!("Wrote overlay CSS to {}", path.display());
    }

    if let (Some(path), Some(viewport)) = (&cli.preview, cli.viewport) {
        let page = watermark.preview(viewport.width, viewport.height, Color::WHITE)?;
        page.save_png(path)
            .with_context(|| format!("writing {}", path.display()))?;
        tracing::info!("Wrote {}x{} preview to {}", viewport.width, viewport.height, path.display());
    }

    Ok(())
}
