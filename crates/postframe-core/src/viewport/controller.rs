use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::consts::{
    EPSILON, FRAMING_MAX_SCALE, FRAMING_MIN_SCALE, GRADE_MAX_ZOOM, GRADE_MIN_ZOOM,
    GRID_HIDE_DELAY_MS, WHEEL_ZOOM_INTENSITY,
};
use crate::frame::FrameSize;

use super::debounce::Debounce;
use super::fit::{contain_fit, contain_scale};
use super::gesture::{GestureState, PinchState, PointerId};
use super::transform::{Point, ScaleLimits, ViewportTransform};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ViewportConfig {
    pub limits: ScaleLimits,
    /// Wheel zoom factor = exp(-delta_y * wheel_intensity).
    pub wheel_intensity: f64,
    /// Grace period before the thirds grid hides after the last release.
    pub grid_hide_delay_ms: u64,
}

impl ViewportConfig {
    /// Free framing: absolute scale limits.
    pub fn framing() -> Self {
        Self {
            limits: ScaleLimits::absolute(FRAMING_MIN_SCALE, FRAMING_MAX_SCALE),
            wheel_intensity: WHEEL_ZOOM_INTENSITY,
            grid_hide_delay_ms: GRID_HIDE_DELAY_MS,
        }
    }

    /// Grade framing: zoom limits relative to the contain-fit baseline.
    pub fn grade() -> Self {
        Self {
            limits: ScaleLimits::fit_relative(GRADE_MIN_ZOOM, GRADE_MAX_ZOOM),
            ..Self::framing()
        }
    }
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self::framing()
    }
}

/// Turns pointer, touch and wheel input into transform updates.
///
/// All positions are output-frame pixels; use
/// [`SurfaceMapping`](super::SurfaceMapping) to convert from display space.
#[derive(Clone, Debug)]
pub struct ViewportController {
    transform: ViewportTransform,
    limits: ScaleLimits,
    fit_scale: f64,
    wheel_intensity: f64,
    gesture: GestureState,
    interacting: bool,
    grid_hide: Debounce,
}

impl ViewportController {
    pub fn new(config: &ViewportConfig) -> Self {
        Self {
            transform: ViewportTransform::default(),
            limits: config.limits,
            fit_scale: 1.0,
            wheel_intensity: config.wheel_intensity,
            gesture: GestureState::default(),
            interacting: false,
            grid_hide: Debounce::new(Duration::from_millis(config.grid_hide_delay_ms)),
        }
    }

    pub fn transform(&self) -> ViewportTransform {
        self.transform
    }

    pub fn limits(&self) -> &ScaleLimits {
        &self.limits
    }

    pub fn fit_scale(&self) -> f64 {
        self.fit_scale
    }

    /// Current scale relative to the contain-fit baseline.
    pub fn zoom_multiplier(&self) -> f64 {
        self.transform.scale / self.fit_scale
    }

    pub fn is_interacting(&self) -> bool {
        self.interacting
    }

    pub fn gesture(&self) -> &GestureState {
        &self.gesture
    }

    /// Contain-fit the image and center it.
    pub fn auto_fit(&mut self, image: (f64, f64), frame: FrameSize) {
        if image.0 <= 0.0 || image.1 <= 0.0 {
            return;
        }
        self.fit_scale = contain_scale(image, frame);
        self.transform = contain_fit(image, frame);
        debug!(
            scale = self.transform.scale,
            tx = self.transform.translate_x,
            ty = self.transform.translate_y,
            "Auto-fit"
        );
    }

    /// Adjust the user zoom multiplier around the frame center.
    pub fn zoom_to(&mut self, multiplier: f64, frame: FrameSize) {
        let center = Point::new(frame.width_f64() / 2.0, frame.height_f64() / 2.0);
        let factor = multiplier * self.fit_scale / self.transform.scale;
        self.transform = self
            .transform
            .zoom_at(center, factor, &self.limits, self.fit_scale);
    }

    pub fn pan_by(&mut self, delta: Point) {
        self.transform = self.transform.pan(delta);
    }

    fn begin_interaction(&mut self) {
        self.interacting = true;
        self.grid_hide.cancel();
    }

    pub fn on_drag_start(&mut self, id: PointerId, pos: Point, _now: Instant) {
        if !pos.is_finite() || !self.gesture.press(id, pos) {
            return;
        }
        self.begin_interaction();

        if let Some((a, b)) = self.gesture.pair() {
            let distance = a.distance(b);
            self.gesture.pinch = Some(PinchState {
                last_distance: distance,
                start_distance: distance,
                start_transform: self.transform,
            });
        }
    }

    /// Returns `true` when the transform changed.
    pub fn on_drag_move(&mut self, id: PointerId, pos: Point) -> bool {
        if !pos.is_finite() {
            return false;
        }
        let Some(previous) = self.gesture.update(id, pos) else {
            return false;
        };

        match self.gesture.pair() {
            Some((a, b)) => self.on_pinch_update(a, b),
            None => {
                let before = self.transform;
                self.transform = self.transform.pan(pos - previous);
                self.transform != before
            }
        }
    }

    /// Zoom around the midpoint by the change in pointer distance.
    ///
    /// The first update of a pinch (or one following a degenerate distance)
    /// only records the distance.
    pub fn on_pinch_update(&mut self, a: Point, b: Point) -> bool {
        if !a.is_finite() || !b.is_finite() {
            return false;
        }
        let distance = a.distance(b);
        let midpoint = a.midpoint(b);

        let Some(pinch) = self.gesture.pinch.as_mut() else {
            self.gesture.pinch = Some(PinchState {
                last_distance: distance,
                start_distance: distance,
                start_transform: self.transform,
            });
            return false;
        };

        let previous = pinch.last_distance;
        pinch.last_distance = distance;
        if previous <= EPSILON || distance <= EPSILON {
            return false;
        }

        let before = self.transform;
        self.transform =
            self.transform
                .zoom_at(midpoint, distance / previous, &self.limits, self.fit_scale);
        self.transform != before
    }

    pub fn on_wheel(&mut self, cursor: Point, delta_y: f64, now: Instant) -> bool {
        if !cursor.is_finite() || !delta_y.is_finite() {
            return false;
        }
        self.begin_interaction();
        let factor = (-delta_y * self.wheel_intensity).exp();
        let before = self.transform;
        self.transform = self
            .transform
            .zoom_at(cursor, factor, &self.limits, self.fit_scale);
        self.on_interaction_end(now);
        self.transform != before
    }

    pub fn on_drag_end(&mut self, id: PointerId, now: Instant) {
        if self.gesture.release(id).is_none() {
            return;
        }
        match self.gesture.len() {
            0 => {
                self.gesture.clear();
                self.on_interaction_end(now);
            }
            // Continue as a drag from the remaining pointer's last position.
            1 => self.gesture.pinch = None,
            _ => {}
        }
    }

    /// Platform took the contacts away: undo the pinch in progress.
    pub fn on_pointer_cancel(&mut self, now: Instant) {
        if self.gesture.is_empty() {
            return;
        }
        if let Some(pinch) = self.gesture.pinch {
            self.transform = pinch.start_transform;
        }
        self.gesture.clear();
        self.on_interaction_end(now);
    }

    /// Start the grid-hide grace period.
    pub fn on_interaction_end(&mut self, now: Instant) {
        self.grid_hide.schedule(now);
    }

    /// Poll the grid-hide timer. Returns `true` when the interacting flag
    /// turned off.
    pub fn tick(&mut self, now: Instant) -> bool {
        if self.grid_hide.poll(now).is_some() && self.interacting {
            self.interacting = false;
            return true;
        }
        false
    }

    /// Time until the next `tick` can change state.
    pub fn next_tick_in(&self, now: Instant) -> Option<Duration> {
        self.grid_hide.remaining(now)
    }

    /// Drop all gesture and interaction state (the transform is kept).
    pub fn reset(&mut self) {
        self.gesture.clear();
        self.grid_hide.cancel();
        self.interacting = false;
    }
}
