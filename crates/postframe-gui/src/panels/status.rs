use crate::app::PostframeApp;

pub fn show(ctx: &egui::Context, app: &mut PostframeApp) {
    egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
        ui.add_space(2.0);

        // Log area, fixed height for 4 lines, scrollable.
        let line_height = ui.text_style_height(&egui::TextStyle::Body);
        let spacing = ui.spacing().item_spacing.y;
        let log_height = line_height * 4.0 + spacing * 3.0;

        egui::ScrollArea::vertical()
            .max_height(log_height)
            .min_scrolled_height(log_height)
            .stick_to_bottom(true)
            .show(ui, |ui| {
                if app.ui_state.log_messages.is_empty() {
                    // Reserve space for 4 empty lines to prevent layout jump.
                    for _ in 0..4 {
                        ui.label("");
                    }
                } else {
                    for msg in &app.ui_state.log_messages {
                        ui.label(msg);
                    }
                }
            });

        // Status line
        let tab = app.ui_state.tab;
        let session = app.active_session();
        ui.horizontal(|ui| {
            ui.label(tab.to_string());
            ui.separator();
            let frame = session.frame();
            ui.label(format!("Frame {}x{}", frame.width, frame.height));
            if let Some(source) = session.source() {
                ui.separator();
                ui.label(format!("Photo {}x{}", source.width(), source.height()));
                ui.separator();
                ui.label(format!(
                    "Zoom: {:.0}%",
                    session.controller().zoom_multiplier() * 100.0
                ));
            }
            if app.ui_state.is_loading(tab) {
                ui.separator();
                ui.spinner();
                ui.label("Loading...");
            }
            if session.is_interacting() {
                ui.separator();
                ui.label("Grid");
            }
            if !app.has_font() {
                ui.separator();
                ui.weak("No font loaded");
            }
        });

        ui.add_space(2.0);
    });
}
