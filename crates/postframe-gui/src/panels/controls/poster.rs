use postframe_core::overlay::Category;

use crate::app::PostframeApp;
use crate::panels::menu_bar;

pub(super) fn poster_controls(ui: &mut egui::Ui, app: &mut PostframeApp) {
    let has_image = app.poster.session().has_image();

    crate::panels::section_header(ui, "Photo", has_image.then_some("loaded"));
    ui.add_space(4.0);
    ui.horizontal(|ui| {
        if ui.button("Open Image...").clicked() {
            menu_bar::open_images(ui.ctx(), app);
        }
        if ui
            .add_enabled(has_image, egui::Button::new("Fit"))
            .on_hover_text("Contain-fit and center (double-click the frame)")
            .clicked()
        {
            app.poster.fit();
            app.viewport.invalidate();
        }
        if ui.add_enabled(has_image, egui::Button::new("Reset")).clicked() {
            app.poster.reset();
            app.viewport.invalidate();
        }
    });
    super::zoom_slider(ui, app);

    ui.separator();
    crate::panels::section_header(ui, "Overlay", None);
    ui.add_space(4.0);

    let mut title = app.poster.title().to_string();
    ui.label("Title");
    if ui.text_edit_singleline(&mut title).changed() {
        app.poster.set_title(title);
        app.viewport.invalidate();
    }

    let mut category = app.poster.category();
    if crate::panels::enum_combo(ui, "Category", &mut category, &Category::ALL) {
        app.poster.set_category(category);
        app.viewport.invalidate();
    }
    ui.small(category.label());

    ui.add_space(4.0);
    ui.horizontal(|ui| {
        match &app.ui_state.font_path {
            Some(path) => ui.small(
                path.file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_default(),
            ),
            None => ui.weak("No font: text is hidden"),
        };
        if ui.small_button("Load Font...").clicked() {
            menu_bar::load_font(app);
        }
    });

    ui.separator();
    if ui
        .add_enabled(has_image, egui::Button::new("Save PNG..."))
        .clicked()
    {
        menu_bar::save_png(ui.ctx(), app);
    }
}
