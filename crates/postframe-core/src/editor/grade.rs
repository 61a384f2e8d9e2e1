use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{debug, info};

use crate::autograde::{auto_grade, AutoGradeConfig};
use crate::compose::{draw_thirds, BackdropCache, Compositor, GridStyle};
use crate::config::EditorConfig;
use crate::error::Result;
use crate::frame::{BaseBuffer, OutputFrame, SourceImage};
use crate::io::{graded_file_name, save_png, Tagged, UploadQueue};
use crate::overlay::{render_placeholder, PlaceholderText, TextRenderer};
use crate::tonal::{apply_adjustments, GradeState, TonalParam, TonalParams};

use super::session::{ImageSession, LoadOutcome};

/// Frames photos over a blurred copy of themselves and applies a tonal grade.
#[derive(Debug)]
pub struct GradeEditor {
    session: ImageSession,
    compositor: Compositor,
    backdrop: BackdropCache,
    queue: UploadQueue<PathBuf>,
    grade: GradeState,
    auto_config: AutoGradeConfig,
    grid: GridStyle,
    placeholder: PlaceholderText,
    font: Option<Arc<TextRenderer>>,
    base: Option<BaseBuffer>,
}

impl GradeEditor {
    pub fn new(config: &EditorConfig) -> Self {
        Self {
            session: ImageSession::new(config.frame, &config.grade.viewport),
            compositor: Compositor::new(config.frame, config.grade.backdrop.clone()),
            backdrop: BackdropCache::default(),
            queue: UploadQueue::default(),
            grade: GradeState::default(),
            auto_config: config.auto_grade.clone(),
            grid: config.grid.clone(),
            placeholder: config.grade.placeholder.clone(),
            font: None,
            base: None,
        }
    }

    pub fn session(&self) -> &ImageSession {
        &self.session
    }

    /// Gesture input goes through here.
    pub fn session_mut(&mut self) -> &mut ImageSession {
        &mut self.session
    }

    pub fn set_font(&mut self, font: Option<Arc<TextRenderer>>) {
        self.font = font;
    }

    pub fn queue(&self) -> &UploadQueue<PathBuf> {
        &self.queue
    }

    pub fn current_path(&self) -> Option<&Path> {
        self.queue.current().map(PathBuf::as_path)
    }

    pub fn grade(&self) -> &GradeState {
        &self.grade
    }

    pub fn params(&self) -> TonalParams {
        self.grade.params()
    }

    /// Snapshot from the last render, before grading.
    pub fn base(&self) -> Option<&BaseBuffer> {
        self.base.as_ref()
    }

    /// Replace the queue. Returns the first path to load, if any; an empty
    /// selection drops the current photo.
    pub fn set_queue(&mut self, paths: Vec<PathBuf>) -> Option<PathBuf> {
        info!(count = paths.len(), "Upload queue set");
        self.queue.set(paths);
        if self.queue.is_empty() {
            self.clear_image();
        }
        self.queue.current().cloned()
    }

    /// Step to the next queued file, wrapping. `None` for an empty queue.
    pub fn next_image(&mut self) -> Option<PathBuf> {
        self.queue.advance().cloned()
    }

    pub fn finish_load(&mut self, result: Tagged<Result<SourceImage>>) -> LoadOutcome {
        let outcome = self.session.finish_load(result);
        match outcome {
            LoadOutcome::Loaded => self.start_fresh(),
            LoadOutcome::Failed(_) => self.start_fresh(),
            LoadOutcome::Stale => {}
        }
        outcome
    }

    /// Use a decoded photo directly (no queue involved).
    pub fn set_source(&mut self, source: SourceImage) {
        self.session.set_source(source);
        self.start_fresh();
    }

    /// New photo: framing is already fitted, grading goes back to zero.
    fn start_fresh(&mut self) {
        self.grade.reset();
        self.base = None;
        self.backdrop.clear();
    }

    fn clear_image(&mut self) {
        self.session.clear();
        self.start_fresh();
    }

    pub fn set_param(&mut self, param: TonalParam, value: i32) {
        self.grade.set(param, value);
    }

    pub fn reset_param(&mut self, param: TonalParam) {
        self.grade.reset_param(param);
    }

    /// Back to the empty editor: no files, no photo, neutral grade, grid off.
    pub fn reset_all(&mut self) {
        info!("Grade editor reset");
        self.queue.clear();
        self.clear_image();
    }

    /// Composite the current framing into a fresh base buffer.
    fn compose_base(&mut self) -> Option<&BaseBuffer> {
        let source = self.session.source()?;
        let backdrop = self.backdrop.get_or_render(&self.compositor, source);
        let composed =
            self.compositor
                .composite_onto(backdrop, source, &self.session.controller().transform());
        self.base = Some(BaseBuffer::capture(&composed));
        self.base.as_ref()
    }

    /// Analyze the current framing and apply the derived grade.
    /// Does nothing without a photo.
    pub fn auto_grade(&mut self) -> Option<TonalParams> {
        let config = self.auto_config.clone();
        let base = self.compose_base()?;
        let derived = auto_grade(base, &config)?;
        self.grade.apply_auto(derived);
        Some(self.grade.params())
    }

    /// Frame as shown on screen, grid included while interacting.
    pub fn render(&mut self) -> OutputFrame {
        let with_grid = self.session.is_interacting();
        self.render_frame(with_grid)
    }

    pub fn render_export(&mut self) -> OutputFrame {
        self.render_frame(false)
    }

    fn render_frame(&mut self, with_grid: bool) -> OutputFrame {
        let params = self.grade.params();
        let Some(base) = self.compose_base() else {
            let mut out = self.compositor.placeholder();
            render_placeholder(&mut out, &self.placeholder, self.font.as_deref());
            return out;
        };
        let mut out = apply_adjustments(base, &params);
        if with_grid {
            draw_thirds(&mut out, &self.grid);
        }
        debug!(params = %params, grid = with_grid, "Grade rendered");
        out
    }

    /// Write the graded frame into `dir`; returns the written path.
    pub fn export_png(&mut self, dir: &Path) -> Result<PathBuf> {
        let path = dir.join(graded_file_name(self.current_path()));
        self.export_png_to(&path)?;
        Ok(path)
    }

    /// Render the export and write it to an explicit path.
    pub fn export_png_to(&mut self, path: &Path) -> Result<()> {
        let frame = self.render_export();
        save_png(&frame, path)
    }
}
