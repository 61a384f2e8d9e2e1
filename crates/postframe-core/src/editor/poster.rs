use std::path::Path;
use std::sync::Arc;

use tracing::debug;

use crate::compose::{draw_thirds, Compositor, GridStyle};
use crate::config::EditorConfig;
use crate::error::Result;
use crate::frame::OutputFrame;
use crate::io::save_png;
use crate::overlay::{render_overlay, render_placeholder, Category, OverlayConfig, PlaceholderText, TextRenderer};

use super::session::ImageSession;

/// Frames a photo under the club's title and category bands.
#[derive(Debug)]
pub struct PosterEditor {
    session: ImageSession,
    compositor: Compositor,
    overlay: OverlayConfig,
    grid: GridStyle,
    placeholder: PlaceholderText,
    title: String,
    category: Category,
    font: Option<Arc<TextRenderer>>,
}

impl PosterEditor {
    pub fn new(config: &EditorConfig) -> Self {
        Self {
            session: ImageSession::new(config.frame, &config.poster.viewport),
            compositor: Compositor::new(config.frame, config.poster.backdrop.clone()),
            overlay: config.overlay.clone(),
            grid: config.grid.clone(),
            placeholder: config.poster.placeholder.clone(),
            title: String::new(),
            category: Category::default(),
            font: None,
        }
    }

    pub fn session(&self) -> &ImageSession {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut ImageSession {
        &mut self.session
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn set_category(&mut self, category: Category) {
        self.category = category;
    }

    /// Without a font the bands are still drawn, only the text is skipped.
    pub fn set_font(&mut self, font: Option<Arc<TextRenderer>>) {
        self.font = font;
    }

    pub fn has_font(&self) -> bool {
        self.font.is_some()
    }

    pub fn overlay(&self) -> &OverlayConfig {
        &self.overlay
    }

    /// Re-fit the photo (the "fit" and "reset" buttons).
    pub fn fit(&mut self) {
        self.session.fit();
    }

    /// Drop any gesture in progress and re-fit.
    pub fn reset(&mut self) {
        self.session.controller_mut().reset();
        self.session.fit();
    }

    /// Frame as shown on screen: the grid appears while a gesture is active.
    pub fn render(&self) -> OutputFrame {
        self.render_frame(self.session.is_interacting())
    }

    /// Frame as exported: never carries the grid.
    pub fn render_export(&self) -> OutputFrame {
        self.render_frame(false)
    }

    fn render_frame(&self, with_grid: bool) -> OutputFrame {
        let font = self.font.as_deref();
        let Some(source) = self.session.source() else {
            let mut out = self.compositor.placeholder();
            render_placeholder(&mut out, &self.placeholder, font);
            return out;
        };

        let mut out = self
            .compositor
            .composite(source, &self.session.controller().transform());
        if with_grid {
            draw_thirds(&mut out, &self.grid);
        }
        let layout = render_overlay(&mut out, &self.overlay, &self.title, self.category, font);
        debug!(
            category = %self.category,
            title_bar_width = layout.title_bar.width,
            grid = with_grid,
            "Poster rendered"
        );
        out
    }

    pub fn export_png(&self, path: &Path) -> Result<()> {
        save_png(&self.render_export(), path)
    }
}
