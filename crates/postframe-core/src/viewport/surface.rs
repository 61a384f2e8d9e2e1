use crate::frame::FrameSize;

use super::transform::Point;

/// Maps positions on the displayed surface to output-frame pixels.
///
/// The surface may be drawn at any size on screen (layout scaling, HiDPI);
/// gestures are always applied in frame pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SurfaceMapping {
    /// Top-left of the displayed frame in display coordinates.
    pub origin: Point,
    /// Displayed width and height.
    pub display_width: f64,
    pub display_height: f64,
    pub frame: FrameSize,
}

impl SurfaceMapping {
    pub fn new(origin: Point, display_width: f64, display_height: f64, frame: FrameSize) -> Self {
        Self {
            origin,
            display_width,
            display_height,
            frame,
        }
    }

    /// Frame pixels per display unit along each axis, or `None` for an
    /// empty surface.
    pub fn ratio(&self) -> Option<(f64, f64)> {
        if self.display_width <= 0.0 || self.display_height <= 0.0 {
            return None;
        }
        let sx = self.frame.width_f64() / self.display_width;
        let sy = self.frame.height_f64() / self.display_height;
        (sx.is_finite() && sy.is_finite()).then_some((sx, sy))
    }

    pub fn to_frame(&self, display: Point) -> Option<Point> {
        let (sx, sy) = self.ratio()?;
        Some(Point::new(
            (display.x - self.origin.x) * sx,
            (display.y - self.origin.y) * sy,
        ))
    }

    pub fn delta_to_frame(&self, delta: Point) -> Option<Point> {
        let (sx, sy) = self.ratio()?;
        Some(Point::new(delta.x * sx, delta.y * sy))
    }

    pub fn to_display(&self, frame: Point) -> Option<Point> {
        let (sx, sy) = self.ratio()?;
        Some(Point::new(
            frame.x / sx + self.origin.x,
            frame.y / sy + self.origin.y,
        ))
    }
}
