mod common;

use image::{Rgba, RgbaImage};

use postframe_core::compose::grid::thirds_points;
use postframe_core::compose::paint::{blend_pixel, fill_rect};
use postframe_core::compose::sample::sample_bilinear;
use postframe_core::compose::{draw_thirds, Backdrop, BackdropCache, Color, Compositor, GridStyle};
use postframe_core::frame::{FrameSize, SourceImage};
use postframe_core::viewport::fit::contain_fit;
use postframe_core::viewport::ViewportTransform;

use common::{color_source, rgb_at, solid_image};

// ---------------------------------------------------------------------------
// Placeholder and transparent backdrop
// ---------------------------------------------------------------------------

#[test]
fn test_placeholder_is_opaque_black() {
    let comp = Compositor::new(FrameSize::new(12, 15), Backdrop::Transparent);
    let out = comp.placeholder();
    assert_eq!(out.dimensions(), (12, 15));
    assert!(out.pixels().all(|p| p.0 == [0, 0, 0, 255]));
}

#[test]
fn test_identity_composite_copies_source() {
    let comp = Compositor::new(FrameSize::new(10, 10), Backdrop::Transparent);
    let src = color_source(10, 10, [200, 30, 40]);
    let out = comp.composite(&src, &ViewportTransform::default());
    assert!(out.pixels().all(|p| p.0 == [200, 30, 40, 255]));
}

#[test]
fn test_contain_fit_letterbox_stays_transparent() {
    let frame = FrameSize::new(10, 10);
    let comp = Compositor::new(frame, Backdrop::Transparent);
    let src = color_source(20, 10, [0, 0, 255]);
    let out = comp.composite(&src, &contain_fit(src.size(), frame));

    // Image occupies rows 2.5..7.5.
    assert_eq!(out.get_pixel(5, 0).0[3], 0);
    assert_eq!(out.get_pixel(5, 9).0[3], 0);
    assert_eq!(out.get_pixel(5, 5).0, [0, 0, 255, 255]);
}

#[test]
fn test_solid_backdrop_fills_uncovered_area() {
    let frame = FrameSize::new(8, 8);
    let comp = Compositor::new(frame, Backdrop::Solid(Color::rgb(10, 20, 30)));
    let src = color_source(4, 4, [255, 255, 255]);
    let out = comp.composite(&src, &ViewportTransform::new(1.0, 100.0, 100.0));
    assert!(out.pixels().all(|p| p.0 == [10, 20, 30, 255]));
}

#[test]
fn test_panned_out_of_frame_draws_nothing() {
    let comp = Compositor::new(FrameSize::new(8, 8), Backdrop::Transparent);
    let src = color_source(4, 4, [255, 0, 0]);
    let out = comp.composite(&src, &ViewportTransform::new(1.0, -50.0, 0.0));
    assert!(out.pixels().all(|p| p.0[3] == 0));
}

#[test]
fn test_large_composite_matches_uniform_source() {
    // Above the parallel threshold.
    let frame = FrameSize::new(400, 300);
    let comp = Compositor::new(frame, Backdrop::Transparent);
    let src = color_source(800, 600, [90, 120, 150]);
    let out = comp.composite(&src, &contain_fit(src.size(), frame));
    assert!(out.pixels().all(|p| p.0 == [90, 120, 150, 255]));
}

// ---------------------------------------------------------------------------
// Blurred cover backdrop
// ---------------------------------------------------------------------------

#[test]
fn test_blurred_cover_of_uniform_image_is_dimmed_color() {
    let frame = FrameSize::new(40, 50);
    let backdrop = Backdrop::blurred_cover();
    let src = color_source(30, 10, [200, 100, 50]);
    let out = backdrop.render(&src, frame);

    assert_eq!(out.dimensions(), (40, 50));
    // 18% black over the color.
    assert_eq!(rgb_at(&out, 20, 25), [164, 82, 41]);
    assert_eq!(out.get_pixel(20, 25).0[3], 255);
}

#[test]
fn test_blurred_cover_covers_whole_frame() {
    let frame = FrameSize::new(40, 50);
    let src = color_source(100, 10, [255, 255, 255]);
    let out = Backdrop::blurred_cover().render(&src, frame);
    assert!(out.pixels().all(|p| p.0[3] == 255));
}

#[test]
fn test_backdrop_uses_source() {
    assert!(Backdrop::blurred_cover().uses_source());
    assert!(!Backdrop::Transparent.uses_source());
    assert!(!Backdrop::Solid(Color::BLACK).uses_source());
}

#[test]
fn test_grade_composite_has_backdrop_behind_letterbox() {
    let frame = FrameSize::new(40, 50);
    let comp = Compositor::new(frame, Backdrop::blurred_cover());
    let src = color_source(40, 20, [100, 200, 100]);
    let out = comp.composite(&src, &contain_fit(src.size(), frame));
    assert_eq!(out.get_pixel(20, 2).0[3], 255);
    assert_eq!(rgb_at(&out, 20, 25), [100, 200, 100]);
    assert_eq!(rgb_at(&out, 20, 2), [82, 164, 82]);
}

#[test]
fn test_backdrop_cache_rerenders_for_new_source() {
    let frame = FrameSize::new(16, 16);
    let comp = Compositor::new(frame, Backdrop::blurred_cover());
    let red = color_source(16, 16, [255, 0, 0]);
    let blue = color_source(16, 16, [0, 0, 255]);

    let mut cache = BackdropCache::default();
    let first = cache.get_or_render(&comp, &red).clone();
    let again = cache.get_or_render(&comp, &red).clone();
    assert_eq!(first, again);

    let other = cache.get_or_render(&comp, &blue).clone();
    assert_ne!(rgb_at(&first, 8, 8), rgb_at(&other, 8, 8));
    assert_eq!(rgb_at(&other, 8, 8), [0, 0, 209]);
}

// ---------------------------------------------------------------------------
// Sampling and painting
// ---------------------------------------------------------------------------

#[test]
fn test_bilinear_between_two_pixels() {
    let mut img = RgbaImage::new(2, 1);
    img.put_pixel(0, 0, Rgba([0, 0, 0, 255]));
    img.put_pixel(1, 0, Rgba([200, 100, 50, 255]));
    let s = sample_bilinear(&img, 1.0, 0.5);
    assert!((s[0] - 100.0).abs() < 1e-3);
    assert!((s[1] - 50.0).abs() < 1e-3);
    assert!((s[3] - 1.0).abs() < 1e-6);
}

#[test]
fn test_bilinear_clamps_at_edges() {
    let img = solid_image(3, 3, [7, 8, 9]);
    let s = sample_bilinear(&img, -4.0, 10.0);
    assert_eq!([s[0], s[1], s[2]], [7.0, 8.0, 9.0]);
}

#[test]
fn test_blend_half_alpha_over_opaque() {
    let mut dst = [0u8, 0, 0, 255];
    blend_pixel(&mut dst, [255.0, 255.0, 255.0, 0.5]);
    assert_eq!(dst, [128, 128, 128, 255]);
}

#[test]
fn test_blend_over_transparent_keeps_source_color() {
    let mut dst = [0u8, 0, 0, 0];
    blend_pixel(&mut dst, [40.0, 50.0, 60.0, 0.5]);
    assert_eq!(dst, [40, 50, 60, 128]);
}

#[test]
fn test_fill_rect_partial_coverage() {
    let mut img = solid_image(4, 1, [0, 0, 0]);
    fill_rect(&mut img, 0.0, 0.0, 1.5, 1.0, Color::WHITE);
    assert_eq!(rgb_at(&img, 0, 0), [255, 255, 255]);
    assert_eq!(rgb_at(&img, 1, 0), [128, 128, 128]);
    assert_eq!(rgb_at(&img, 2, 0), [0, 0, 0]);
}

#[test]
fn test_color_hex_round_trip() {
    let c = Color::from_hex("#1a355b").unwrap();
    assert_eq!((c.r, c.g, c.b), (0x1a, 0x35, 0x5b));
    assert_eq!(c.to_hex(), "#1a355b");
    assert!(Color::from_hex("#12345").is_none());
    assert!(Color::from_hex("zzzzzz").is_none());
}

// ---------------------------------------------------------------------------
// Thirds grid
// ---------------------------------------------------------------------------

#[test]
fn test_thirds_points() {
    let pts = thirds_points(90.0, 60.0);
    assert_eq!(pts, [(30.0, 20.0), (60.0, 20.0), (30.0, 40.0), (60.0, 40.0)]);
}

#[test]
fn test_grid_draws_lines_only_on_thirds() {
    let mut img = solid_image(90, 90, [0, 0, 0]);
    draw_thirds(&mut img, &GridStyle::default());

    // 2px line centered on x = 30 covers columns 29 and 30.
    assert!(rgb_at(&img, 30, 5)[0] > 100);
    assert!(rgb_at(&img, 29, 5)[0] > 100);
    assert!(rgb_at(&img, 60, 5)[0] > 100);
    assert_eq!(rgb_at(&img, 15, 5), [0, 0, 0]);
    assert_eq!(rgb_at(&img, 45, 75), [0, 0, 0]);
}

#[test]
fn test_grid_on_copy_leaves_original() {
    let src = SourceImage::new(solid_image(30, 30, [50, 50, 50])).unwrap();
    let comp = Compositor::new(FrameSize::new(30, 30), Backdrop::Transparent);
    let base = comp.composite(&src, &ViewportTransform::default());
    let mut shown = base.clone();
    draw_thirds(&mut shown, &GridStyle::default());
    assert_ne!(shown, base);
    assert!(base.pixels().all(|p| p.0 == [50, 50, 50, 255]));
}
