mod common;

use approx::assert_relative_eq;

use postframe_core::compose::Color;
use postframe_core::error::PostframeError;
use postframe_core::overlay::{
    layout, measure_text, render_overlay, render_placeholder, Category, OverlayConfig,
    PlaceholderText, TextRenderer,
};

use common::{rgb_at, solid_image};

// ---------------------------------------------------------------------------
// Category
// ---------------------------------------------------------------------------

#[test]
fn test_category_labels() {
    assert_eq!(Category::Active.label(), "TV BAD RAGAZ");
    assert_eq!(Category::Youth.label(), "JUGI BAD RAGAZ");
    assert_eq!(Category::Performance.label(), "TV BAD RAGAZ LA LEISTUNGSTEAM");
    assert_eq!(Category::Community.label(), "TV BAD RAGAZ");
}

#[test]
fn test_category_band_colors() {
    assert_eq!(Category::Active.band_color().to_hex(), "#ffffff");
    assert_eq!(Category::Youth.band_color().to_hex(), "#76869d");
    assert_eq!(Category::Performance.band_color().to_hex(), "#ffffff");
    assert_eq!(Category::Community.band_color().to_hex(), "#cdcccc");
}

#[test]
fn test_only_performance_has_accent() {
    let with_accent: Vec<_> = Category::ALL.iter().filter(|c| c.has_accent()).collect();
    assert_eq!(with_accent, vec![&Category::Performance]);
}

#[test]
fn test_category_parse() {
    assert_eq!("performance".parse::<Category>(), Ok(Category::Performance));
    assert_eq!(" Jugi ".parse::<Category>(), Ok(Category::Youth));
    assert_eq!("Gesellschaft".parse::<Category>(), Ok(Category::Community));
    assert!("chess".parse::<Category>().is_err());
    assert_eq!(Category::default(), Category::Active);
}

// ---------------------------------------------------------------------------
// Layout
// ---------------------------------------------------------------------------

#[test]
fn test_title_bar_width_from_estimate() {
    let config = OverlayConfig::default();
    let l = layout(&config, 1080.0, "ABC", Category::Active, None);
    // 3 chars * 20 px * 0.55 + 2 * 26 padding
    assert_relative_eq!(l.title_bar.width, 85.0, epsilon = 1e-4);
    assert_relative_eq!(l.title_bar.x, (1080.0 - 85.0) / 2.0, epsilon = 1e-4);
    assert_relative_eq!(l.title_bar.y, 1040.0);
    assert_relative_eq!(l.title_bar.height, 64.0);
}

#[test]
fn test_long_title_is_capped_by_margin() {
    let config = OverlayConfig::default();
    let title = "W".repeat(500);
    let l = layout(&config, 1080.0, &title, Category::Active, None);
    assert_relative_eq!(l.title_bar.width, 960.0);
    assert_relative_eq!(l.title_bar.x, 60.0);
}

#[test]
fn test_sub_band_and_accent_geometry() {
    let config = OverlayConfig::default();
    let l = layout(&config, 1080.0, "x", Category::Performance, None);
    assert_relative_eq!(l.sub_bar.y, 1116.0);
    assert_relative_eq!(l.sub_bar.height, 130.0);
    let accent = l.accent_bar.unwrap();
    assert_relative_eq!(accent.y, 1098.0);
    assert_relative_eq!(accent.bottom(), 1132.0);

    let plain = layout(&config, 1080.0, "x", Category::Youth, None);
    assert!(plain.accent_bar.is_none());
}

#[test]
fn test_fallback_measure() {
    assert_relative_eq!(measure_text(None, "abcd", 40.0), 88.0, epsilon = 1e-4);
    assert_relative_eq!(measure_text(None, "", 40.0), 0.0);
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

#[test]
fn test_community_band_rendered() {
    let mut img = solid_image(1080, 1350, [30, 60, 90]);
    render_overlay(&mut img, &OverlayConfig::default(), "Turnfest", Category::Community, None);
    assert_eq!(rgb_at(&img, 500, 1180), [0xcd, 0xcc, 0xcc]);
    assert_eq!(img.get_pixel(500, 1180).0[3], 255);
}

#[test]
fn test_performance_accent_over_band() {
    let mut img = solid_image(1080, 1350, [30, 60, 90]);
    render_overlay(&mut img, &OverlayConfig::default(), "Finale", Category::Performance, None);
    assert_eq!(rgb_at(&img, 500, 1100), [0xe6, 0x7e, 0x22]);
    assert_eq!(rgb_at(&img, 500, 1125), [0xe6, 0x7e, 0x22]);
    assert_eq!(rgb_at(&img, 500, 1140), [255, 255, 255]);
}

#[test]
fn test_title_bar_rendered_centered() {
    let mut img = solid_image(1080, 1350, [200, 200, 200]);
    render_overlay(&mut img, &OverlayConfig::default(), "Saisonstart", Category::Youth, None);
    assert_eq!(rgb_at(&img, 540, 1072), [0x1a, 0x35, 0x5b]);
    // Left of the bar only the gradient shows.
    let left = rgb_at(&img, 20, 1072);
    assert_ne!(left, [0x1a, 0x35, 0x5b]);
    assert!(left[0] < 200);
}

#[test]
fn test_gradient_only_near_bottom() {
    let mut img = solid_image(1080, 1350, [255, 255, 255]);
    render_overlay(&mut img, &OverlayConfig::default(), "x", Category::Active, None);
    assert_eq!(rgb_at(&img, 10, 800), [255, 255, 255]);
    let bottom = rgb_at(&img, 10, 1340)[0];
    assert!(bottom > 80 && bottom < 130, "bottom = {bottom}");
    let mid = rgb_at(&img, 10, 950)[0];
    assert!(mid > bottom && mid < 255);
}

#[test]
fn test_rounded_corner_is_soft() {
    let config = OverlayConfig {
        title_bar_color: Color::BLACK,
        gradient_max_alpha: 0.0,
        ..OverlayConfig::default()
    };
    let mut img = solid_image(1080, 1350, [255, 255, 255]);
    let l = render_overlay(&mut img, &config, "Corner", Category::Active, None);
    let x0 = l.title_bar.x.floor() as u32;
    // The very corner pixel lies outside the radius.
    assert_eq!(rgb_at(&img, x0, 1040), [255, 255, 255]);
    assert_eq!(rgb_at(&img, x0 + 20, 1070), [0, 0, 0]);
}

#[test]
fn test_placeholder_without_font_is_noop() {
    let mut img = solid_image(20, 20, [0, 0, 0]);
    render_placeholder(&mut img, &PlaceholderText::poster(), None);
    assert!(img.pixels().all(|p| p.0 == [0, 0, 0, 255]));
}

#[test]
fn test_invalid_font_bytes() {
    let err = TextRenderer::from_bytes(vec![1, 2, 3, 4]).unwrap_err();
    assert!(matches!(err, PostframeError::Font(_)));
}

#[test]
fn test_missing_font_file() {
    let err = TextRenderer::from_file(std::path::Path::new("/definitely/not/here.ttf")).unwrap_err();
    assert!(matches!(err, PostframeError::Io(_)));
}
