use tracing::debug;

use crate::frame::{FrameSize, OutputFrame, SourceImage};
use crate::viewport::ViewportTransform;

use super::backdrop::Backdrop;
use super::paint::{clear, Color};
use super::sample::draw_transformed;

/// Renders backdrop + foreground photo into a fixed-size frame.
#[derive(Clone, Debug)]
pub struct Compositor {
    frame: FrameSize,
    backdrop: Backdrop,
}

impl Compositor {
    pub fn new(frame: FrameSize, backdrop: Backdrop) -> Self {
        Self { frame, backdrop }
    }

    pub fn frame(&self) -> FrameSize {
        self.frame
    }

    pub fn backdrop(&self) -> &Backdrop {
        &self.backdrop
    }

    /// Solid black "no image" frame.
    pub fn placeholder(&self) -> OutputFrame {
        let mut out = self.frame.blank();
        clear(&mut out, Color::BLACK);
        out
    }

    pub fn render_backdrop(&self, source: &SourceImage) -> OutputFrame {
        self.backdrop.render(source, self.frame)
    }

    /// Draw the photo at `transform` over an already rendered backdrop.
    pub fn composite_onto(
        &self,
        backdrop: &OutputFrame,
        source: &SourceImage,
        transform: &ViewportTransform,
    ) -> OutputFrame {
        let mut out = backdrop.clone();
        draw_transformed(&mut out, source.pixels(), transform);
        out
    }

    pub fn composite(&self, source: &SourceImage, transform: &ViewportTransform) -> OutputFrame {
        self.composite_onto(&self.render_backdrop(source), source, transform)
    }
}

/// Keeps the rendered backdrop for the current photo so gestures only
/// redraw the foreground.
#[derive(Clone, Debug, Default)]
pub struct BackdropCache {
    entry: Option<(SourceImage, OutputFrame)>,
}

impl BackdropCache {
    pub fn get_or_render(&mut self, compositor: &Compositor, source: &SourceImage) -> &OutputFrame {
        if matches!(&self.entry, Some((cached, _)) if !cached.same_image(source)) {
            self.entry = None;
        }
        let (_, frame) = self.entry.get_or_insert_with(|| {
            debug!("Rendering backdrop for new source");
            (source.clone(), compositor.render_backdrop(source))
        });
        frame
    }

    pub fn clear(&mut self) {
        self.entry = None;
    }
}
