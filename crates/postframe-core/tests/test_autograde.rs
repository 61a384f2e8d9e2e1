mod common;

use approx::assert_relative_eq;
use image::{Rgba, RgbaImage};

use postframe_core::autograde::{
    auto_grade, derive_params, luma, luma_histogram, luma_stats, round_half_toward_zero,
    AutoGradeConfig, LumaStats,
};
use postframe_core::frame::BaseBuffer;
use postframe_core::tonal::TonalParams;

use common::{ramp_image, solid_image};

// ---------------------------------------------------------------------------
// Luma statistics
// ---------------------------------------------------------------------------

#[test]
fn test_luma_weights() {
    assert_relative_eq!(luma(255, 0, 0), 0.2126 * 255.0, epsilon = 1e-9);
    assert_relative_eq!(luma(0, 255, 0), 0.7152 * 255.0, epsilon = 1e-9);
    assert_relative_eq!(luma(100, 100, 100), 100.0, epsilon = 1e-9);
}

#[test]
fn test_stats_of_uniform_gray() {
    let stats = luma_stats(&solid_image(64, 64, [100, 100, 100]), 16).unwrap();
    assert_relative_eq!(stats.mean, 100.0, epsilon = 1e-9);
    assert_relative_eq!(stats.std, 0.0, epsilon = 1e-6);
    assert_eq!(stats.samples, 64 * 64 / 16);
}

#[test]
fn test_stats_sample_every_nth_pixel_in_raster_order() {
    // Only pixels 0, 16, 32, ... are white.
    let img = RgbaImage::from_fn(32, 2, |x, y| {
        let i = y * 32 + x;
        if i % 16 == 0 {
            Rgba([255, 255, 255, 255])
        } else {
            Rgba([0, 0, 0, 255])
        }
    });
    let stats = luma_stats(&img, 16).unwrap();
    assert_eq!(stats.samples, 4);
    assert_relative_eq!(stats.mean, 255.0, epsilon = 1e-9);
}

#[test]
fn test_stats_of_empty_raster() {
    assert!(luma_stats(&RgbaImage::new(0, 0), 16).is_none());
}

// ---------------------------------------------------------------------------
// Parameter derivation
// ---------------------------------------------------------------------------

#[test]
fn test_flat_mid_gray_scenario() {
    let base = BaseBuffer::capture(&solid_image(40, 50, [100, 100, 100]));
    let params = auto_grade(&base, &AutoGradeConfig::default()).unwrap();
    assert_eq!(params, TonalParams::new(17, 20, 12, 9));
}

#[test]
fn test_black_frame_clamps_brightness() {
    let base = BaseBuffer::capture(&solid_image(16, 16, [0, 0, 0]));
    let params = auto_grade(&base, &AutoGradeConfig::default()).unwrap();
    assert_eq!(params.brightness, 20);
    assert_eq!(params.contrast, 20);
}

#[test]
fn test_high_contrast_frame_lowers_contrast() {
    let stats = LumaStats {
        mean: 127.5,
        std: 127.5,
        samples: 2,
    };
    let params = derive_params(&stats, &AutoGradeConfig::default());
    assert_eq!(params, TonalParams::new(4, -20, -10, 0));
}

#[test]
fn test_target_stats_give_near_neutral_grade() {
    let stats = LumaStats {
        mean: 135.0,
        std: 55.0,
        samples: 100,
    };
    let params = derive_params(&stats, &AutoGradeConfig::default());
    assert_eq!(params, TonalParams::new(0, 0, -2, 0));
}

#[test]
fn test_auto_grade_is_deterministic() {
    let base = BaseBuffer::capture(&ramp_image(200, 37));
    let config = AutoGradeConfig::default();
    let a = auto_grade(&base, &config);
    let b = auto_grade(&base, &config);
    assert!(a.is_some());
    assert_eq!(a, b);
}

#[test]
fn test_auto_grade_without_pixels() {
    let base = BaseBuffer::capture(&RgbaImage::new(0, 0));
    assert!(auto_grade(&base, &AutoGradeConfig::default()).is_none());
}

#[test]
fn test_round_half_toward_zero() {
    assert_eq!(round_half_toward_zero(17.5), 17);
    assert_eq!(round_half_toward_zero(-2.5), -2);
    assert_eq!(round_half_toward_zero(2.6), 3);
    assert_eq!(round_half_toward_zero(-2.6), -3);
    assert_eq!(round_half_toward_zero(9.1666), 9);
    assert_eq!(round_half_toward_zero(0.0), 0);
}

// ---------------------------------------------------------------------------
// Histogram
// ---------------------------------------------------------------------------

#[test]
fn test_histogram_counts_every_pixel() {
    let img = solid_image(10, 7, [100, 100, 100]);
    let bins = luma_histogram(&img);
    assert_eq!(bins.len(), 256);
    assert_eq!(bins[100], 70);
    assert_eq!(bins.iter().sum::<u32>(), 70);
}
