use std::time::Instant;

use tracing::{info, warn};

use crate::error::{PostframeError, Result};
use crate::frame::{FrameSize, SourceImage};
use crate::io::{LoadTicket, LoadTracker, Tagged};
use crate::viewport::{Point, PointerId, ViewportConfig, ViewportController};

/// What happened to a finished load.
#[derive(Debug)]
pub enum LoadOutcome {
    /// The image replaced the current one.
    Loaded,
    /// A newer load was requested meanwhile; the result was dropped.
    Stale,
    /// Decoding failed; the editor is back in the placeholder state.
    Failed(PostframeError),
}

impl LoadOutcome {
    pub fn is_loaded(&self) -> bool {
        matches!(self, LoadOutcome::Loaded)
    }
}

/// The photo being edited plus how it is framed.
///
/// Gesture input is ignored while no photo is loaded.
#[derive(Clone, Debug)]
pub struct ImageSession {
    source: Option<SourceImage>,
    controller: ViewportController,
    loads: LoadTracker,
    frame: FrameSize,
}

impl ImageSession {
    pub fn new(frame: FrameSize, viewport: &ViewportConfig) -> Self {
        Self {
            source: None,
            controller: ViewportController::new(viewport),
            loads: LoadTracker::default(),
            frame,
        }
    }

    pub fn source(&self) -> Option<&SourceImage> {
        self.source.as_ref()
    }

    pub fn has_image(&self) -> bool {
        self.source.is_some()
    }

    pub fn frame(&self) -> FrameSize {
        self.frame
    }

    pub fn controller(&self) -> &ViewportController {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut ViewportController {
        &mut self.controller
    }

    /// Start a new load; results for earlier tickets become stale.
    pub fn begin_load(&mut self) -> LoadTicket {
        self.loads.begin()
    }

    pub fn is_current(&self, ticket: LoadTicket) -> bool {
        self.loads.is_current(ticket)
    }

    pub fn finish_load(&mut self, result: Tagged<Result<SourceImage>>) -> LoadOutcome {
        if !self.loads.is_current(result.ticket) {
            info!(
                generation = result.ticket.generation(),
                current = self.loads.generation(),
                "Dropping stale load result"
            );
            return LoadOutcome::Stale;
        }
        match result.value {
            Ok(source) => {
                self.set_source(source);
                LoadOutcome::Loaded
            }
            Err(e) => {
                warn!("Image load failed: {e}");
                self.source = None;
                self.controller.reset();
                LoadOutcome::Failed(e)
            }
        }
    }

    /// Replace the photo and fit it to the frame.
    pub fn set_source(&mut self, source: SourceImage) {
        info!(width = source.width(), height = source.height(), "Source image set");
        self.controller.reset();
        self.controller.auto_fit(source.size(), self.frame);
        self.source = Some(source);
    }

    /// Drop the photo and any in-flight load.
    pub fn clear(&mut self) {
        self.source = None;
        self.loads.invalidate();
        self.controller.reset();
    }

    /// Re-fit the current photo to the frame.
    pub fn fit(&mut self) {
        if let Some(source) = &self.source {
            self.controller.auto_fit(source.size(), self.frame);
        }
    }

    pub fn on_drag_start(&mut self, id: PointerId, pos: Point, now: Instant) {
        if self.has_image() {
            self.controller.on_drag_start(id, pos, now);
        }
    }

    pub fn on_drag_move(&mut self, id: PointerId, pos: Point) -> bool {
        self.has_image() && self.controller.on_drag_move(id, pos)
    }

    pub fn on_drag_end(&mut self, id: PointerId, now: Instant) {
        self.controller.on_drag_end(id, now);
    }

    pub fn on_pointer_cancel(&mut self, now: Instant) {
        self.controller.on_pointer_cancel(now);
    }

    pub fn on_wheel(&mut self, cursor: Point, delta_y: f64, now: Instant) -> bool {
        self.has_image() && self.controller.on_wheel(cursor, delta_y, now)
    }

    /// Poll the grid-hide timer; `true` when a redraw is due.
    pub fn tick(&mut self, now: Instant) -> bool {
        self.controller.tick(now)
    }

    pub fn is_interacting(&self) -> bool {
        self.has_image() && self.controller.is_interacting()
    }
}
