/// Minimum pixel count (h*w) to use row-level Rayon parallelism.
pub const PARALLEL_PIXEL_THRESHOLD: usize = 65_536;

/// Default output frame width in pixels (4:5 portrait).
pub const DEFAULT_FRAME_WIDTH: u32 = 1080;

/// Default output frame height in pixels (4:5 portrait).
pub const DEFAULT_FRAME_HEIGHT: u32 = 1350;

/// Small epsilon to avoid division by zero in floating-point comparisons.
pub const EPSILON: f64 = 1e-9;

/// Rec.709 luma coefficient for the red channel.
pub const LUMA_R: f64 = 0.2126;

/// Rec.709 luma coefficient for the green channel.
pub const LUMA_G: f64 = 0.7152;

/// Rec.709 luma coefficient for the blue channel.
pub const LUMA_B: f64 = 0.0722;

/// Wheel zoom intensity: factor = exp(-delta_y * intensity).
pub const WHEEL_ZOOM_INTENSITY: f64 = 0.0015;

/// Grace period after the last pointer release before the thirds grid hides.
pub const GRID_HIDE_DELAY_MS: u64 = 650;

/// Scale range for free framing (poster editor), absolute.
pub const FRAMING_MIN_SCALE: f64 = 0.15;
pub const FRAMING_MAX_SCALE: f64 = 8.0;

/// Zoom multiplier range on top of the contain-fit baseline (grade editor).
pub const GRADE_MIN_ZOOM: f64 = 0.5;
pub const GRADE_MAX_ZOOM: f64 = 6.0;

/// Bounds for brightness, contrast and saturation sliders.
pub const TONAL_SIGNED_LIMIT: i32 = 40;

/// Upper bound for the clarity slider (lower bound is zero).
pub const CLARITY_LIMIT: i32 = 40;

/// Every Nth pixel is sampled for auto-grade statistics.
pub const AUTO_GRADE_SAMPLE_STRIDE: usize = 16;

/// Target mean luma for auto-grade.
pub const AUTO_GRADE_TARGET_MEAN: f64 = 135.0;

/// Target luma standard deviation for auto-grade.
pub const AUTO_GRADE_TARGET_STD: f64 = 55.0;

/// Number of luma histogram bins.
pub const LUMA_HISTOGRAM_BINS: usize = 256;

/// Backdrop blur radius in output pixels (CSS `blur(24px)` equivalent).
pub const DEFAULT_BACKDROP_BLUR: f32 = 24.0;

/// Opacity of the black layer darkening the blurred backdrop.
pub const DEFAULT_BACKDROP_DIM: f32 = 0.18;

/// Backdrop is rendered at 1/N resolution before blurring.
pub const DEFAULT_BACKDROP_DOWNSAMPLE: u32 = 4;
