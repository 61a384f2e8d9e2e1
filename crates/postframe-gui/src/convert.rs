use postframe_core::frame::OutputFrame;

/// Convert a rendered frame (straight-alpha RGBA8) to an egui ColorImage.
pub fn frame_to_color_image(frame: &OutputFrame) -> egui::ColorImage {
    let size = [frame.width() as usize, frame.height() as usize];
    egui::ColorImage::from_rgba_unmultiplied(size, frame.as_raw())
}
