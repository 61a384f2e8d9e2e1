use serde::{Deserialize, Serialize};

/// A position in output-frame pixels (or source pixels, depending on context).
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    pub fn distance(&self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    pub fn midpoint(&self, other: Point) -> Point {
        Point::new((self.x + other.x) / 2.0, (self.y + other.y) / 2.0)
    }
}

impl std::ops::Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl std::ops::Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

/// What the configured scale limits are measured against.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScaleBasis {
    /// Limits apply to the transform scale itself.
    Absolute,
    /// Limits apply to the zoom multiplier on top of the contain-fit scale.
    FitRelative,
}

/// Allowed zoom range for one editor.
///
/// `EditorConfig::validate` rejects `min > max`; clamping still tolerates it.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScaleLimits {
    pub min: f64,
    pub max: f64,
    pub basis: ScaleBasis,
}

impl ScaleLimits {
    pub fn absolute(min: f64, max: f64) -> Self {
        Self {
            min,
            max,
            basis: ScaleBasis::Absolute,
        }
    }

    pub fn fit_relative(min: f64, max: f64) -> Self {
        Self {
            min,
            max,
            basis: ScaleBasis::FitRelative,
        }
    }

    /// Effective `[lo, hi]` range on the transform scale.
    ///
    /// Absolute limits always include the fit scale itself. Swapped bounds
    /// are reordered.
    pub fn range(&self, fit_scale: f64) -> (f64, f64) {
        let (lo, hi) = match self.basis {
            ScaleBasis::Absolute if fit_scale.is_finite() && fit_scale > 0.0 => {
                (self.min.min(fit_scale), self.max.max(fit_scale))
            }
            ScaleBasis::Absolute => (self.min, self.max),
            ScaleBasis::FitRelative => (self.min * fit_scale, self.max * fit_scale),
        };
        if lo <= hi {
            (lo, hi)
        } else {
            (hi, lo)
        }
    }

    pub fn clamp(&self, scale: f64, fit_scale: f64) -> f64 {
        let (lo, hi) = self.range(fit_scale);
        scale.max(lo).min(hi)
    }
}

/// Affine mapping from source pixels to output-frame pixels:
/// `output = source * scale + translate`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ViewportTransform {
    pub scale: f64,
    pub translate_x: f64,
    pub translate_y: f64,
}

impl Default for ViewportTransform {
    fn default() -> Self {
        Self {
            scale: 1.0,
            translate_x: 0.0,
            translate_y: 0.0,
        }
    }
}

impl ViewportTransform {
    pub fn new(scale: f64, translate_x: f64, translate_y: f64) -> Self {
        Self {
            scale,
            translate_x,
            translate_y,
        }
    }

    pub fn translate(&self) -> Point {
        Point::new(self.translate_x, self.translate_y)
    }

    /// Source → frame.
    pub fn apply(&self, source: Point) -> Point {
        Point::new(
            source.x * self.scale + self.translate_x,
            source.y * self.scale + self.translate_y,
        )
    }

    /// Frame → source (the "world point" under a frame coordinate).
    pub fn invert(&self, frame: Point) -> Point {
        Point::new(
            (frame.x - self.translate_x) / self.scale,
            (frame.y - self.translate_y) / self.scale,
        )
    }

    /// Shift by a delta in frame pixels.
    pub fn pan(&self, delta: Point) -> Self {
        if !delta.is_finite() {
            return *self;
        }
        Self::new(
            self.scale,
            self.translate_x + delta.x,
            self.translate_y + delta.y,
        )
    }

    /// Zoom by `factor` keeping the world point under `anchor` fixed.
    ///
    /// The new scale is clamped to `limits`; non-finite or non-positive
    /// factors leave the transform unchanged.
    pub fn zoom_at(&self, anchor: Point, factor: f64, limits: &ScaleLimits, fit_scale: f64) -> Self {
        if !anchor.is_finite() || !factor.is_finite() || factor <= 0.0 {
            return *self;
        }
        let world = self.invert(anchor);
        let scale = limits.clamp(self.scale * factor, fit_scale);
        let next = Self::new(
            scale,
            anchor.x - world.x * scale,
            anchor.y - world.y * scale,
        );
        if next.is_finite() {
            next
        } else {
            *self
        }
    }

    pub fn is_finite(&self) -> bool {
        self.scale.is_finite()
            && self.scale > 0.0
            && self.translate_x.is_finite()
            && self.translate_y.is_finite()
    }
}
