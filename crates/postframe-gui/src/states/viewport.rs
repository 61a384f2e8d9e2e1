/// Viewport display state.
#[derive(Default)]
pub struct ViewportState {
    pub texture: Option<egui::TextureHandle>,
    /// Set whenever the active editor's output may have changed.
    pub dirty: bool,
    /// Luma histogram of the last graded render.
    pub histogram: Vec<u32>,
}

impl ViewportState {
    pub fn invalidate(&mut self) {
        self.dirty = true;
    }
}
