use egui_plot::{Bar, BarChart, Plot, VLine};
use postframe_core::tonal::TonalParam;

use crate::app::PostframeApp;
use crate::panels::menu_bar;

/// Height of the luma histogram in pixels.
const CHART_HEIGHT: f32 = 110.0;

pub(super) fn grade_controls(ui: &mut egui::Ui, app: &mut PostframeApp) {
    photos_section(ui, app);
    ui.separator();
    adjustments_section(ui, app);

    if !app.viewport.histogram.is_empty() {
        ui.add_space(4.0);
        luma_chart(ui, &app.viewport.histogram, app.config.auto_grade.target_mean);
    }

    ui.separator();
    ui.horizontal(|ui| {
        let has_image = app.grade.session().has_image();
        if ui
            .add_enabled(has_image, egui::Button::new("Save PNG to Folder..."))
            .clicked()
        {
            menu_bar::save_png(ui.ctx(), app);
        }
        if ui.button("Reset All").clicked() {
            app.grade.reset_all();
            app.ui_state.grade_loading = false;
            app.viewport.invalidate();
            app.ui_state.add_log("Grade editor reset".into());
        }
    });
}

fn photos_section(ui: &mut egui::Ui, app: &mut PostframeApp) {
    let queue_len = app.grade.queue().len();
    let status = (queue_len > 0).then(|| format!("{} / {queue_len}", app.grade.queue().index() + 1));
    crate::panels::section_header(ui, "Photos", status.as_deref());
    ui.add_space(4.0);

    if let Some(name) = app.grade.current_path().and_then(|p| p.file_name()) {
        ui.small(name.to_string_lossy().into_owned());
    }

    let has_image = app.grade.session().has_image();
    ui.horizontal(|ui| {
        if ui.button("Open Photos...").clicked() {
            menu_bar::open_images(ui.ctx(), app);
        }
        if ui
            .add_enabled(queue_len > 1, egui::Button::new("Next"))
            .clicked()
        {
            app.next_grade_image();
        }
        if ui.add_enabled(has_image, egui::Button::new("Fit")).clicked() {
            app.grade.session_mut().fit();
            app.viewport.invalidate();
        }
    });
    super::zoom_slider(ui, app);
}

fn adjustments_section(ui: &mut egui::Ui, app: &mut PostframeApp) {
    let grade = app.grade.grade();
    let status = if grade.manually_overridden() {
        Some("auto, adjusted")
    } else if grade.auto_active() {
        Some("auto")
    } else {
        None
    };
    crate::panels::section_header(ui, "Adjustments", status);
    ui.add_space(4.0);

    for param in TonalParam::ALL {
        let mut value = app.grade.grade().get(param);
        ui.horizontal(|ui| {
            if ui
                .add(egui::Slider::new(&mut value, param.range()).text(param.to_string()))
                .changed()
            {
                app.grade.set_param(param, value);
                app.viewport.invalidate();
            }
            if ui
                .small_button("Reset")
                .on_hover_text("Back to the auto value, or zero")
                .clicked()
            {
                app.grade.reset_param(param);
                app.viewport.invalidate();
            }
        });
    }

    let has_image = app.grade.session().has_image();
    if ui
        .add_enabled(has_image, egui::Button::new("Auto"))
        .on_hover_text("Derive a grade from the framed photo")
        .clicked()
    {
        if let Some(params) = app.grade.auto_grade() {
            app.ui_state.add_log(format!("Auto grade: {params}"));
            app.viewport.invalidate();
        }
    }
}

/// Luma histogram of the graded frame with the auto-grade target mean marked.
fn luma_chart(ui: &mut egui::Ui, histogram: &[u32], target_mean: f64) {
    let bars: Vec<Bar> = histogram
        .iter()
        .enumerate()
        .map(|(level, &count)| {
            Bar::new(level as f64, count as f64)
                .fill(egui::Color32::from_gray(level as u8))
                .width(1.0)
        })
        .collect();

    let chart = BarChart::new("luma", bars);
    let target = VLine::new("target mean", target_mean)
        .color(egui::Color32::from_rgb(255, 160, 40))
        .width(1.0);

    Plot::new("luma_histogram")
        .height(CHART_HEIGHT)
        .include_x(0.0)
        .include_x(255.0)
        .include_y(0.0)
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .show_grid(false)
        .show_axes([true, false])
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(chart);
            plot_ui.vline(target);
        });
}
