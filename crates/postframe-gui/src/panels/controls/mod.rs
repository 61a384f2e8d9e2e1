mod grade;
mod poster;

use crate::app::PostframeApp;
use crate::states::EditorTab;

const LEFT_PANEL_WIDTH: f32 = 280.0;

pub fn show(ctx: &egui::Context, app: &mut PostframeApp) {
    egui::SidePanel::left("controls")
        .default_width(LEFT_PANEL_WIDTH)
        .resizable(true)
        .show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.set_min_width(LEFT_PANEL_WIDTH - 20.0);

                ui.horizontal(|ui| {
                    for tab in [EditorTab::Poster, EditorTab::Grade] {
                        if ui
                            .selectable_label(app.ui_state.tab == tab, tab.to_string())
                            .clicked()
                        {
                            app.switch_tab(tab);
                        }
                    }
                });
                ui.separator();

                match app.ui_state.tab {
                    EditorTab::Poster => poster::poster_controls(ui, app),
                    EditorTab::Grade => grade::grade_controls(ui, app),
                }
            });
        });
}

/// Zoom slider in multiples of the fit scale, shared by both editors.
fn zoom_slider(ui: &mut egui::Ui, app: &mut PostframeApp) {
    let session = app.active_session();
    if !session.has_image() {
        return;
    }
    let controller = session.controller();
    let fit = controller.fit_scale();
    if fit <= 0.0 {
        return;
    }
    let (lo, hi) = controller.limits().range(fit);
    let mut multiplier = controller.zoom_multiplier();
    let frame = session.frame();

    if ui
        .add(
            egui::Slider::new(&mut multiplier, lo / fit..=hi / fit)
                .logarithmic(true)
                .text("Zoom")
                .custom_formatter(|v, _| format!("{:.0}%", v * 100.0)),
        )
        .changed()
    {
        app.active_session_mut()
            .controller_mut()
            .zoom_to(multiplier, frame);
        app.viewport.invalidate();
    }
}
