use image::RgbaImage;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::consts::{
    AUTO_GRADE_SAMPLE_STRIDE, AUTO_GRADE_TARGET_MEAN, AUTO_GRADE_TARGET_STD, LUMA_B, LUMA_G,
    LUMA_HISTOGRAM_BINS, LUMA_R,
};
use crate::frame::BaseBuffer;
use crate::tonal::TonalParams;

/// Tuning constants of the auto-grade heuristic.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AutoGradeConfig {
    /// Every Nth pixel is sampled.
    pub sample_stride: usize,
    pub target_mean: f64,
    pub target_std: f64,
    /// Luma spread below which saturation is boosted.
    pub saturation_pivot: f64,
}

impl Default for AutoGradeConfig {
    fn default() -> Self {
        Self {
            sample_stride: AUTO_GRADE_SAMPLE_STRIDE,
            target_mean: AUTO_GRADE_TARGET_MEAN,
            target_std: AUTO_GRADE_TARGET_STD,
            saturation_pivot: 50.0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LumaStats {
    pub mean: f64,
    pub std: f64,
    pub samples: usize,
}

/// Rec.709 luma of an 8-bit RGB triple.
pub fn luma(r: u8, g: u8, b: u8) -> f64 {
    LUMA_R * r as f64 + LUMA_G * g as f64 + LUMA_B * b as f64
}

/// Mean and standard deviation of luma over every `stride`-th pixel.
/// Returns `None` for an empty raster.
pub fn luma_stats(pixels: &RgbaImage, stride: usize) -> Option<LumaStats> {
    let stride = stride.max(1);
    let mut sum = 0.0f64;
    let mut sum2 = 0.0f64;
    let mut n = 0usize;

    for px in pixels.pixels().step_by(stride) {
        let y = luma(px[0], px[1], px[2]);
        sum += y;
        sum2 += y * y;
        n += 1;
    }
    if n == 0 {
        return None;
    }

    let mean = sum / n as f64;
    let variance = sum2 / n as f64 - mean * mean;
    Some(LumaStats {
        mean,
        std: variance.max(0.0).sqrt(),
        samples: n,
    })
}

/// Map luma statistics to slider values.
pub fn derive_params(stats: &LumaStats, config: &AutoGradeConfig) -> TonalParams {
    let brightness = ((config.target_mean - stats.mean) / 2.0).clamp(-20.0, 20.0);
    let contrast = ((config.target_std - stats.std) / 2.0).clamp(-20.0, 20.0);
    let saturation = ((config.saturation_pivot - stats.std) / 3.0).clamp(-10.0, 12.0);
    let clarity = ((config.target_std - stats.std) / 6.0).clamp(0.0, 12.0);

    TonalParams::new(
        round_half_toward_zero(brightness),
        round_half_toward_zero(contrast),
        round_half_toward_zero(saturation),
        round_half_toward_zero(clarity),
    )
}

/// Analyze a composited frame and derive a grade.
pub fn auto_grade(base: &BaseBuffer, config: &AutoGradeConfig) -> Option<TonalParams> {
    let stats = luma_stats(base.pixels(), config.sample_stride)?;
    let params = derive_params(&stats, config);
    debug!(
        mean = stats.mean,
        std = stats.std,
        samples = stats.samples,
        params = %params,
        "Auto-grade analysis"
    );
    Some(params)
}

/// Luma histogram over every pixel.
pub fn luma_histogram(pixels: &RgbaImage) -> Vec<u32> {
    let mut bins = vec![0u32; LUMA_HISTOGRAM_BINS];
    for px in pixels.pixels() {
        let y = luma(px[0], px[1], px[2]).round().clamp(0.0, 255.0) as usize;
        bins[y] += 1;
    }
    bins
}

/// Nearest integer; exact halves go toward zero (17.5 → 17, -2.5 → -2).
pub fn round_half_toward_zero(v: f64) -> i32 {
    let t = v.trunc();
    if (v - t).abs() == 0.5 {
        t as i32
    } else {
        v.round() as i32
    }
}
