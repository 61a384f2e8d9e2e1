pub mod config;
pub mod grade;
pub mod info;
pub mod poster;

use std::path::Path;

use anyhow::{Context, Result};
use postframe_core::config::EditorConfig;
use postframe_core::frame::FrameSize;
use postframe_core::viewport::{Point, ViewportController};

/// Load an editor config from TOML, or the defaults when no path is given.
pub fn load_config(path: Option<&Path>) -> Result<EditorConfig> {
    let config = match path {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config {}", path.display()))?;
            toml::from_str(&text)
                .with_context(|| format!("Invalid config {}", path.display()))?
        }
        None => EditorConfig::default(),
    };
    config.validate()?;
    Ok(config)
}

/// Parse "dx,dy" in output-frame pixels.
pub fn parse_pan(s: &str) -> Result<Point> {
    let parts: Vec<f64> = s
        .split(',')
        .map(|p| p.trim().parse::<f64>())
        .collect::<std::result::Result<_, _>>()
        .context("Invalid pan format (expected 'dx,dy')")?;
    if parts.len() != 2 {
        anyhow::bail!("Pan requires exactly 2 values: dx,dy");
    }
    Ok(Point::new(parts[0], parts[1]))
}

/// Apply `--zoom` (relative to the fitted size) then `--pan`.
pub fn apply_framing(
    controller: &mut ViewportController,
    frame: FrameSize,
    zoom: Option<f64>,
    pan: Option<&str>,
) -> Result<()> {
    if let Some(zoom) = zoom {
        if !(zoom.is_finite() && zoom > 0.0) {
            anyhow::bail!("Zoom must be a positive number, got {zoom}");
        }
        controller.zoom_to(zoom, frame);
    }
    if let Some(pan) = pan {
        controller.pan_by(parse_pan(pan)?);
    }
    Ok(())
}
