use postframe_core::autograde::AutoGradeConfig;
use postframe_core::compose::{Backdrop, Color};
use postframe_core::config::EditorConfig;
use postframe_core::error::PostframeError;
use postframe_core::frame::FrameSize;
use postframe_core::overlay::OverlayConfig;
use postframe_core::viewport::{ScaleBasis, ScaleLimits, ViewportConfig};

// ---------------------------------------------------------------------------
// Defaults
// ---------------------------------------------------------------------------

#[test]
fn test_default_frame_is_portrait_4_5() {
    let config = EditorConfig::default();
    assert_eq!(config.frame, FrameSize::new(1080, 1350));
}

#[test]
fn test_default_viewports() {
    let config = EditorConfig::default();
    assert_eq!(config.poster.viewport.limits, ScaleLimits::absolute(0.15, 8.0));
    assert_eq!(config.grade.viewport.limits.basis, ScaleBasis::FitRelative);
    assert_eq!(config.grade.viewport.limits.min, 0.5);
    assert_eq!(config.grade.viewport.limits.max, 6.0);
    assert_eq!(config.poster.viewport.grid_hide_delay_ms, 650);
    assert_eq!(config.poster.viewport.wheel_intensity, 0.0015);
}

#[test]
fn test_default_backdrops() {
    let config = EditorConfig::default();
    assert_eq!(config.poster.backdrop, Backdrop::Transparent);
    match config.grade.backdrop {
        Backdrop::BlurredCover { dim_alpha, .. } => assert_eq!(dim_alpha, 0.18),
        ref other => panic!("unexpected grade backdrop {other:?}"),
    }
}

#[test]
fn test_default_auto_grade_targets() {
    let config = AutoGradeConfig::default();
    assert_eq!(config.sample_stride, 16);
    assert_eq!(config.target_mean, 135.0);
    assert_eq!(config.target_std, 55.0);
}

#[test]
fn test_default_overlay_colors() {
    let overlay = OverlayConfig::default();
    assert_eq!(overlay.title_bar_color.to_hex(), "#1a355b");
    assert_eq!(overlay.accent_color.to_hex(), "#e67e22");
    assert_eq!(overlay.sub_bar_y(), 1116.0);
}

#[test]
fn test_default_validates() {
    EditorConfig::default().validate().unwrap();
}

// ---------------------------------------------------------------------------
// Serialization
// ---------------------------------------------------------------------------

#[test]
fn test_toml_round_trip() {
    let config = EditorConfig::default();
    let text = toml::to_string(&config).unwrap();
    let back: EditorConfig = toml::from_str(&text).unwrap();
    assert_eq!(back, config);
}

#[test]
fn test_json_round_trip_with_solid_backdrop() {
    let mut config = EditorConfig::default();
    config.poster.backdrop = Backdrop::Solid(Color::rgb(1, 2, 3));
    let json = serde_json::to_string(&config).unwrap();
    let back: EditorConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(back.poster.backdrop, Backdrop::Solid(Color::rgb(1, 2, 3)));
}

#[test]
fn test_empty_toml_gives_defaults() {
    let config: EditorConfig = toml::from_str("").unwrap();
    assert_eq!(config, EditorConfig::default());
}

#[test]
fn test_partial_toml_keeps_other_defaults() {
    let text = r#"
[frame]
width = 800
height = 1000

[auto_grade]
target_mean = 120.0

[grade.backdrop]
kind = "solid"
r = 10
g = 20
b = 30
a = 1.0
"#;
    let config: EditorConfig = toml::from_str(text).unwrap();
    assert_eq!(config.frame, FrameSize::new(800, 1000));
    assert_eq!(config.auto_grade.target_mean, 120.0);
    assert_eq!(config.auto_grade.target_std, 55.0);
    assert_eq!(config.grade.backdrop, Backdrop::Solid(Color::rgb(10, 20, 30)));
    assert_eq!(config.grade.viewport, ViewportConfig::grade());
    assert_eq!(config.overlay, OverlayConfig::default());
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

#[test]
fn test_validate_rejects_zero_frame() {
    let config = EditorConfig {
        frame: FrameSize::new(0, 100),
        ..EditorConfig::default()
    };
    assert!(matches!(
        config.validate(),
        Err(PostframeError::InvalidDimensions { width: 0, height: 100 })
    ));
}

#[test]
fn test_validate_rejects_inverted_limits() {
    let mut config = EditorConfig::default();
    config.poster.viewport.limits = ScaleLimits::absolute(5.0, 1.0);
    assert!(matches!(config.validate(), Err(PostframeError::Config(_))));
}

#[test]
fn test_validate_rejects_zero_stride() {
    let mut config = EditorConfig::default();
    config.auto_grade.sample_stride = 0;
    assert!(matches!(config.validate(), Err(PostframeError::Config(_))));
}
