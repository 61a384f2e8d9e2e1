use postframe_core::config::EditorConfig;

use crate::app::PostframeApp;
use crate::messages::{WorkerCommand, WorkerResult};
use crate::states::EditorTab;

const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "webp", "bmp", "tif", "tiff"];

pub fn show(ctx: &egui::Context, app: &mut PostframeApp) {
    let open_shortcut = egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::O);
    let save_shortcut = egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::S);
    let quit_shortcut = egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::Q);

    egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
        egui::MenuBar::new().ui(ui, |ui| {
            ui.menu_button("File", |ui| {
                if ui.add(egui::Button::new("Open...").shortcut_text(ctx.format_shortcut(&open_shortcut))).clicked() {
                    ui.close();
                    open_images(ctx, app);
                }

                if ui.add(egui::Button::new("Save PNG...").shortcut_text(ctx.format_shortcut(&save_shortcut))).clicked() {
                    ui.close();
                    save_png(ctx, app);
                }

                ui.separator();

                if ui.button("Load Font...").clicked() {
                    ui.close();
                    load_font(app);
                }

                ui.separator();

                if ui.button("Import Config...").clicked() {
                    ui.close();
                    import_config(ctx, app);
                }

                if ui.button("Export Config...").clicked() {
                    ui.close();
                    export_config(ctx, app);
                }

                ui.separator();

                if ui.add(egui::Button::new("Quit").shortcut_text(ctx.format_shortcut(&quit_shortcut))).clicked() {
                    ui.close();
                    ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                }
            });

            ui.menu_button("Edit", |ui| {
                if ui.button("Reset Defaults").clicked() {
                    ui.close();
                    app.apply_config(EditorConfig::default());
                    app.ui_state.add_log("Config reset to defaults".into());
                }
            });

            ui.menu_button("Help", |ui| {
                if ui.button("About").clicked() {
                    ui.close();
                    app.ui_state.show_about = true;
                }
            });
        });

        // Keyboard shortcuts (consumed outside menus)
        if ctx.input_mut(|i| i.consume_shortcut(&open_shortcut)) {
            open_images(ctx, app);
        }
        if ctx.input_mut(|i| i.consume_shortcut(&save_shortcut)) {
            save_png(ctx, app);
        }
        if ctx.input_mut(|i| i.consume_shortcut(&quit_shortcut)) {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }
    });
}

/// One photo for the poster, any number for the grade queue.
pub(crate) fn open_images(ctx: &egui::Context, app: &mut PostframeApp) {
    let ctx = ctx.clone();
    let tab = app.ui_state.tab;
    let result_tx = app.result_tx.clone();
    std::thread::spawn(move || {
        let dialog = rfd::FileDialog::new()
            .add_filter("Images", IMAGE_EXTENSIONS)
            .add_filter("All files", &["*"]);
        let paths = match tab {
            EditorTab::Poster => dialog.pick_file().map(|p| vec![p]),
            EditorTab::Grade => dialog.pick_files(),
        };
        if let Some(paths) = paths {
            let _ = result_tx.send(WorkerResult::FilesChosen { tab, paths });
            ctx.request_repaint();
        }
    });
}

/// The poster is saved to a file, graded photos into a folder.
pub(crate) fn save_png(ctx: &egui::Context, app: &mut PostframeApp) {
    let ctx = ctx.clone();
    let tab = app.ui_state.tab;
    let result_tx = app.result_tx.clone();
    std::thread::spawn(move || {
        let path = match tab {
            EditorTab::Poster => rfd::FileDialog::new()
                .add_filter("PNG", &["png"])
                .set_file_name("poster.png")
                .save_file(),
            EditorTab::Grade => rfd::FileDialog::new().pick_folder(),
        };
        if let Some(path) = path {
            let _ = result_tx.send(WorkerResult::ExportChosen { tab, path });
            ctx.request_repaint();
        }
    });
}

pub(crate) fn load_font(app: &mut PostframeApp) {
    let cmd_tx = app.cmd_tx.clone();
    std::thread::spawn(move || {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("Fonts", &["ttf", "otf"])
            .pick_file()
        {
            let _ = cmd_tx.send(WorkerCommand::LoadFont { path });
        }
    });
}

fn import_config(ctx: &egui::Context, app: &mut PostframeApp) {
    let ctx = ctx.clone();
    let result_tx = app.result_tx.clone();
    std::thread::spawn(move || {
        let Some(path) = rfd::FileDialog::new()
            .add_filter("TOML", &["toml"])
            .pick_file()
        else {
            return;
        };
        let parsed = std::fs::read_to_string(&path)
            .map_err(|e| e.to_string())
            .and_then(|content| toml::from_str::<EditorConfig>(&content).map_err(|e| e.to_string()));
        let result = match parsed {
            Ok(config) => WorkerResult::ConfigImported { config },
            Err(e) => WorkerResult::Error {
                message: format!("Failed to read {}: {e}", path.display()),
            },
        };
        let _ = result_tx.send(result);
        ctx.request_repaint();
    });
}

fn export_config(ctx: &egui::Context, app: &mut PostframeApp) {
    let ctx = ctx.clone();
    let config = app.config.clone();
    let result_tx = app.result_tx.clone();

    std::thread::spawn(move || {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("TOML", &["toml"])
            .set_file_name("postframe.toml")
            .save_file()
        {
            let written = toml::to_string_pretty(&config)
                .map_err(|e| e.to_string())
                .and_then(|content| std::fs::write(&path, content).map_err(|e| e.to_string()));
            let result = match written {
                Ok(()) => WorkerResult::Saved { path },
                Err(e) => WorkerResult::Error {
                    message: format!("Failed to write config: {e}"),
                },
            };
            let _ = result_tx.send(result);
            ctx.request_repaint();
        }
    });
}
