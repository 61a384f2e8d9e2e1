use std::time::Instant;

use postframe_core::frame::FrameSize;
use postframe_core::viewport::{Point, PointerId, SurfaceMapping};

use crate::app::PostframeApp;

/// Gap kept around the displayed frame.
const FRAME_MARGIN: f32 = 12.0;

pub fn show(ctx: &egui::Context, app: &mut PostframeApp) {
    egui::CentralPanel::default().show(ctx, |ui| {
        let available = ui.available_rect_before_wrap();
        paint_background(ui, available);

        let frame = app.active_session().frame();
        let rect = frame_rect(available, frame);
        let response = ui.allocate_rect(rect, egui::Sense::click_and_drag());
        let mapping = SurfaceMapping::new(
            Point::new(rect.min.x as f64, rect.min.y as f64),
            rect.width() as f64,
            rect.height() as f64,
            frame,
        );

        let now = Instant::now();
        if handle_pointers(ui, &response, &mapping, app, now) | handle_wheel(ui, &response, &mapping, app, now) {
            app.viewport.invalidate();
        }
        if response.double_clicked() {
            app.active_session_mut().fit();
            app.viewport.invalidate();
        }
        if let Some(wait) = app.active_session().controller().next_tick_in(now) {
            ctx.request_repaint_after(wait);
        }

        app.refresh_texture(ctx);
        ui.painter().rect_filled(rect, 0.0, egui::Color32::from_gray(18));
        if let Some(texture) = &app.viewport.texture {
            draw_image(ui, texture.id(), rect);
        }
        if app.ui_state.is_loading(app.ui_state.tab) {
            draw_loading_label(ui, rect);
        }
    });
}

fn paint_background(ui: &egui::Ui, rect: egui::Rect) {
    ui.painter()
        .rect_filled(rect, 0.0, egui::Color32::from_gray(30));
}

/// Largest rect with the frame's aspect ratio that fits, centered.
fn frame_rect(available: egui::Rect, frame: FrameSize) -> egui::Rect {
    let inner = available.shrink(FRAME_MARGIN);
    let (fw, fh) = (frame.width as f32, frame.height as f32);
    let scale = (inner.width() / fw).min(inner.height() / fh).max(0.0);
    egui::Rect::from_center_size(inner.center(), egui::vec2(fw * scale, fh * scale))
}

fn to_frame(mapping: &SurfaceMapping, pos: egui::Pos2) -> Option<Point> {
    mapping.to_frame(Point::new(pos.x as f64, pos.y as f64))
}

/// Feed mouse and touch events to the active session. Returns `true` when
/// the rendered frame needs updating.
fn handle_pointers(
    ui: &egui::Ui,
    response: &egui::Response,
    mapping: &SurfaceMapping,
    app: &mut PostframeApp,
    now: Instant,
) -> bool {
    let (events, touching) = ui.input(|i| (i.events.clone(), i.any_touches()));
    let over_frame = response.contains_pointer();
    let session = app.active_session_mut();
    let mut changed = false;

    for event in &events {
        match event {
            // Touch input also arrives as a simulated mouse; skip that while fingers are down.
            egui::Event::PointerButton {
                pos,
                button: egui::PointerButton::Primary,
                pressed,
                ..
            } if !touching => {
                let tracked = session.controller().gesture().contains(PointerId::Mouse);
                if *pressed && over_frame {
                    if let Some(p) = to_frame(mapping, *pos) {
                        session.on_drag_start(PointerId::Mouse, p, now);
                        changed = true;
                    }
                } else if !*pressed && tracked {
                    session.on_drag_end(PointerId::Mouse, now);
                    changed = true;
                }
            }
            egui::Event::PointerMoved(pos) if !touching => {
                if session.controller().gesture().contains(PointerId::Mouse) {
                    if let Some(p) = to_frame(mapping, *pos) {
                        changed |= session.on_drag_move(PointerId::Mouse, p);
                    }
                }
            }
            egui::Event::Touch { id, phase, pos, .. } => {
                let pointer = PointerId::Touch(id.0);
                match phase {
                    egui::TouchPhase::Start => {
                        if mapping_contains(mapping, *pos) {
                            if let Some(p) = to_frame(mapping, *pos) {
                                session.on_drag_start(pointer, p, now);
                                changed = true;
                            }
                        }
                    }
                    egui::TouchPhase::Move => {
                        if let Some(p) = to_frame(mapping, *pos) {
                            changed |= session.on_drag_move(pointer, p);
                        }
                    }
                    egui::TouchPhase::End => {
                        session.on_drag_end(pointer, now);
                        changed = true;
                    }
                    egui::TouchPhase::Cancel => {
                        session.on_pointer_cancel(now);
                        changed = true;
                    }
                }
            }
            _ => {}
        }
    }
    changed
}

fn mapping_contains(mapping: &SurfaceMapping, pos: egui::Pos2) -> bool {
    let (x, y) = (pos.x as f64 - mapping.origin.x, pos.y as f64 - mapping.origin.y);
    (0.0..=mapping.display_width).contains(&x) && (0.0..=mapping.display_height).contains(&y)
}

/// Wheel zoom around the cursor. egui reports scrolling up as positive,
/// the controller expects wheel-down positive.
fn handle_wheel(
    ui: &egui::Ui,
    response: &egui::Response,
    mapping: &SurfaceMapping,
    app: &mut PostframeApp,
    now: Instant,
) -> bool {
    let scroll = ui.input(|i| i.smooth_scroll_delta.y);
    if scroll == 0.0 || !response.hovered() {
        return false;
    }
    let Some(cursor) = ui
        .input(|i| i.pointer.hover_pos())
        .and_then(|pos| to_frame(mapping, pos))
    else {
        return false;
    };
    app.active_session_mut()
        .on_wheel(cursor, -(scroll as f64), now)
}

fn draw_image(ui: &egui::Ui, texture_id: egui::TextureId, rect: egui::Rect) {
    ui.painter().image(
        texture_id,
        rect,
        egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
        egui::Color32::WHITE,
    );
}

fn draw_loading_label(ui: &egui::Ui, rect: egui::Rect) {
    ui.painter().text(
        rect.left_top() + egui::vec2(8.0, 8.0),
        egui::Align2::LEFT_TOP,
        "Loading...",
        egui::FontId::proportional(14.0),
        egui::Color32::from_white_alpha(200),
    );
}
