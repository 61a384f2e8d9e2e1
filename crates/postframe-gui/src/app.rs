use std::path::{Path, PathBuf};
use std::sync::{mpsc, Arc};
use std::time::{Duration, Instant};

use postframe_core::autograde::luma_histogram;
use postframe_core::config::EditorConfig;
use postframe_core::editor::{GradeEditor, ImageSession, LoadOutcome, PosterEditor};
use postframe_core::error::Result;
use postframe_core::frame::SourceImage;
use postframe_core::io::{graded_file_name, Tagged};
use postframe_core::overlay::TextRenderer;
use tracing::info;

use crate::convert::frame_to_color_image;
use crate::messages::{WorkerCommand, WorkerResult};
use crate::panels;
use crate::states::{EditorTab, UIState, ViewportState};
use crate::worker;

pub struct PostframeApp {
    pub cmd_tx: mpsc::Sender<WorkerCommand>,
    /// Dialog threads report back through this.
    pub result_tx: mpsc::Sender<WorkerResult>,
    pub result_rx: mpsc::Receiver<WorkerResult>,
    pub ui_state: UIState,
    pub viewport: ViewportState,
    pub config: EditorConfig,
    pub poster: PosterEditor,
    pub grade: GradeEditor,
    font: Option<Arc<TextRenderer>>,
}

impl PostframeApp {
    pub fn new(ctx: &egui::Context) -> Self {
        let (result_tx, result_rx) = mpsc::channel();
        let cmd_tx = worker::spawn_worker(result_tx.clone(), ctx.clone());
        let config = EditorConfig::default();

        Self {
            cmd_tx,
            result_tx,
            result_rx,
            ui_state: UIState::default(),
            viewport: ViewportState {
                dirty: true,
                ..Default::default()
            },
            poster: PosterEditor::new(&config),
            grade: GradeEditor::new(&config),
            config,
            font: None,
        }
    }

    /// Drain all pending results from the worker and dialog threads.
    fn poll_results(&mut self) {
        while let Ok(result) = self.result_rx.try_recv() {
            match result {
                WorkerResult::Decoded { tab, path, result } => {
                    self.handle_decoded(tab, &path, result);
                }
                WorkerResult::FontLoaded { path, font } => {
                    self.ui_state.add_log(format!("Font: {}", path.display()));
                    self.ui_state.font_path = Some(path);
                    self.set_font(Some(font));
                }
                WorkerResult::FilesChosen { tab, paths } => {
                    self.open_files(tab, paths);
                }
                WorkerResult::ExportChosen { tab, path } => {
                    self.export(tab, path);
                }
                WorkerResult::ConfigImported { config } => match config.validate() {
                    Ok(()) => {
                        self.apply_config(config);
                        self.ui_state.add_log("Config imported".into());
                    }
                    Err(e) => self.ui_state.add_log(format!("ERROR: rejected config: {e}")),
                },
                WorkerResult::Saved { path } => {
                    self.ui_state.add_log(format!("Saved: {}", path.display()));
                }
                WorkerResult::Error { message } => {
                    self.ui_state.add_log(format!("ERROR: {message}"));
                }
            }
        }
    }

    fn handle_decoded(&mut self, tab: EditorTab, path: &Path, result: Tagged<Result<SourceImage>>) {
        let outcome = match tab {
            EditorTab::Poster => self.poster.session_mut().finish_load(result),
            EditorTab::Grade => self.grade.finish_load(result),
        };
        match outcome {
            LoadOutcome::Loaded => {
                self.ui_state.set_loading(tab, false);
                let size = self
                    .session(tab)
                    .source()
                    .map(|source| (source.width(), source.height()));
                if let Some((w, h)) = size {
                    self.ui_state
                        .add_log(format!("Opened: {} ({w}x{h})", path.display()));
                }
            }
            // A newer decode for this tab is still on its way.
            LoadOutcome::Stale => {}
            LoadOutcome::Failed(e) => {
                self.ui_state.set_loading(tab, false);
                self.ui_state
                    .add_log(format!("ERROR: could not open {}: {e}", path.display()));
            }
        }
        if tab == self.ui_state.tab {
            self.viewport.invalidate();
        }
    }

    /// Start decoding `path` for `tab`; any earlier decode for that tab becomes stale.
    fn request_load(&mut self, tab: EditorTab, path: PathBuf) {
        let ticket = self.session_mut(tab).begin_load();
        self.ui_state.set_loading(tab, true);
        self.send_command(WorkerCommand::Decode { tab, ticket, path });
    }

    fn open_files(&mut self, tab: EditorTab, paths: Vec<PathBuf>) {
        match tab {
            EditorTab::Poster => {
                if let Some(path) = paths.into_iter().next() {
                    self.request_load(tab, path);
                }
            }
            EditorTab::Grade => {
                let count = paths.len();
                match self.grade.set_queue(paths) {
                    Some(first) => {
                        self.ui_state.add_log(format!("{count} photo(s) queued"));
                        self.request_load(tab, first);
                    }
                    None => {
                        self.ui_state.set_loading(tab, false);
                        self.viewport.invalidate();
                    }
                }
            }
        }
    }

    /// Load the next queued photo, wrapping around.
    pub fn next_grade_image(&mut self) {
        if let Some(path) = self.grade.next_image() {
            self.request_load(EditorTab::Grade, path);
        }
    }

    /// Render without the grid and hand the frame to the worker for encoding.
    fn export(&mut self, tab: EditorTab, target: PathBuf) {
        if !self.session(tab).has_image() {
            self.ui_state.add_log("Nothing to save: no photo loaded".into());
            return;
        }
        let (frame, path) = match tab {
            EditorTab::Poster => (self.poster.render_export(), target),
            EditorTab::Grade => {
                let path = target.join(graded_file_name(self.grade.current_path()));
                (self.grade.render_export(), path)
            }
        };
        self.send_command(WorkerCommand::SavePng { frame, path });
    }

    /// Rebuild both editors from a new config. Loaded photos are dropped;
    /// title, category and font carry over.
    pub fn apply_config(&mut self, config: EditorConfig) {
        let title = self.poster.title().to_string();
        let category = self.poster.category();

        self.poster = PosterEditor::new(&config);
        self.poster.set_title(title);
        self.poster.set_category(category);
        self.grade = GradeEditor::new(&config);
        self.config = config;
        self.set_font(self.font.clone());

        self.ui_state.poster_loading = false;
        self.ui_state.grade_loading = false;
        self.viewport.invalidate();
        info!("Editors rebuilt from config");
    }

    fn set_font(&mut self, font: Option<Arc<TextRenderer>>) {
        self.poster.set_font(font.clone());
        self.grade.set_font(font.clone());
        self.font = font;
        self.viewport.invalidate();
    }

    pub fn has_font(&self) -> bool {
        self.font.is_some()
    }

    pub fn session(&self, tab: EditorTab) -> &ImageSession {
        match tab {
            EditorTab::Poster => self.poster.session(),
            EditorTab::Grade => self.grade.session(),
        }
    }

    pub fn session_mut(&mut self, tab: EditorTab) -> &mut ImageSession {
        match tab {
            EditorTab::Poster => self.poster.session_mut(),
            EditorTab::Grade => self.grade.session_mut(),
        }
    }

    pub fn active_session(&self) -> &ImageSession {
        self.session(self.ui_state.tab)
    }

    pub fn active_session_mut(&mut self) -> &mut ImageSession {
        self.session_mut(self.ui_state.tab)
    }

    /// Re-render the active editor if anything changed since the last upload.
    pub fn refresh_texture(&mut self, ctx: &egui::Context) {
        if !self.viewport.dirty && self.viewport.texture.is_some() {
            return;
        }
        let frame = match self.ui_state.tab {
            EditorTab::Poster => self.poster.render(),
            EditorTab::Grade => {
                let frame = self.grade.render();
                self.viewport.histogram = if self.grade.session().has_image() {
                    luma_histogram(&frame)
                } else {
                    Vec::new()
                };
                frame
            }
        };
        let image = frame_to_color_image(&frame);
        match &mut self.viewport.texture {
            Some(texture) => texture.set(image, egui::TextureOptions::LINEAR),
            None => {
                self.viewport.texture =
                    Some(ctx.load_texture("viewport", image, egui::TextureOptions::LINEAR));
            }
        }
        self.viewport.dirty = false;
    }

    /// Advance the grid-hide timers and wake up again when the next one is due.
    fn tick_timers(&mut self, ctx: &egui::Context) {
        let now = Instant::now();
        let mut next: Option<Duration> = None;
        for tab in [EditorTab::Poster, EditorTab::Grade] {
            let due = self.session_mut(tab).tick(now);
            if due && tab == self.ui_state.tab {
                self.viewport.invalidate();
            }
            if let Some(wait) = self.session(tab).controller().next_tick_in(now) {
                next = Some(next.map_or(wait, |n| n.min(wait)));
            }
        }
        if let Some(wait) = next {
            ctx.request_repaint_after(wait);
        }
    }

    pub fn switch_tab(&mut self, tab: EditorTab) {
        if self.ui_state.tab != tab {
            self.ui_state.tab = tab;
            self.viewport.invalidate();
        }
    }

    pub fn send_command(&self, cmd: WorkerCommand) {
        let _ = self.cmd_tx.send(cmd);
    }
}

impl eframe::App for PostframeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_results();
        self.tick_timers(ctx);

        panels::menu_bar::show(ctx, self);
        panels::status::show(ctx, self);
        panels::controls::show(ctx, self);
        panels::viewport::show(ctx, self);

        if self.ui_state.show_about {
            egui::Window::new("About Postframe")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.heading("Postframe");
                        ui.label("Poster framing and photo grading");
                        ui.add_space(8.0);
                        ui.label(format!("Version {}", env!("CARGO_PKG_VERSION")));
                        ui.add_space(8.0);
                        if ui.button("Close").clicked() {
                            self.ui_state.show_about = false;
                        }
                    });
                });
        }
    }
}
