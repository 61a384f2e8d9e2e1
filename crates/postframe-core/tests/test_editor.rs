mod common;

use std::path::PathBuf;
use std::time::{Duration, Instant};

use approx::assert_relative_eq;

use postframe_core::compose::Backdrop;
use postframe_core::config::EditorConfig;
use postframe_core::editor::{GradeEditor, LoadOutcome, PosterEditor};
use postframe_core::io::{decode_source_bytes, Tagged};
use postframe_core::overlay::Category;
use postframe_core::tonal::{TonalParam, TonalParams};
use postframe_core::viewport::{Point, PointerId};

use common::{color_source, gray_source, rgb_at, small_config};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn grade_editor_with(width: u32, height: u32, value: u8) -> GradeEditor {
    let mut editor = GradeEditor::new(&small_config(width, height));
    editor.set_source(gray_source(width, height, value));
    editor
}

fn press(editor: &mut GradeEditor, now: Instant) {
    editor
        .session_mut()
        .on_drag_start(PointerId::Mouse, Point::new(5.0, 5.0), now);
}

// ---------------------------------------------------------------------------
// Poster editor
// ---------------------------------------------------------------------------

#[test]
fn test_poster_placeholder_without_image() {
    let editor = PosterEditor::new(&EditorConfig::default());
    let out = editor.render();
    assert_eq!(out.dimensions(), (1080, 1350));
    assert_eq!(out.get_pixel(540, 675).0, [0, 0, 0, 255]);
    assert_eq!(out.get_pixel(540, 1200).0, [0, 0, 0, 255]);
}

#[test]
fn test_poster_ignores_gestures_without_image() {
    let mut editor = PosterEditor::new(&EditorConfig::default());
    let now = Instant::now();
    let session = editor.session_mut();
    session.on_drag_start(PointerId::Mouse, Point::new(10.0, 10.0), now);
    assert!(!session.on_drag_move(PointerId::Mouse, Point::new(50.0, 50.0)));
    assert!(!session.on_wheel(Point::new(10.0, 10.0), -100.0, now));
    assert!(!session.is_interacting());
}

#[test]
fn test_poster_fits_new_image() {
    let mut editor = PosterEditor::new(&EditorConfig::default());
    editor.session_mut().set_source(gray_source(2000, 1000, 128));
    let t = editor.session().controller().transform();
    assert_relative_eq!(t.scale, 0.54, epsilon = 1e-12);
    assert_relative_eq!(t.translate_y, 405.0, epsilon = 1e-9);
}

#[test]
fn test_poster_fit_after_pan() {
    let mut editor = PosterEditor::new(&EditorConfig::default());
    editor.session_mut().set_source(gray_source(2000, 1000, 128));
    let fitted = editor.session().controller().transform();
    let now = Instant::now();
    editor
        .session_mut()
        .on_drag_start(PointerId::Mouse, Point::new(100.0, 100.0), now);
    editor
        .session_mut()
        .on_drag_move(PointerId::Mouse, Point::new(300.0, 150.0));
    assert_ne!(editor.session().controller().transform(), fitted);

    editor.fit();
    assert_eq!(editor.session().controller().transform(), fitted);
}

#[test]
fn test_poster_reset_ends_gesture() {
    let mut editor = PosterEditor::new(&EditorConfig::default());
    editor.session_mut().set_source(gray_source(2000, 1000, 128));
    let fitted = editor.session().controller().transform();
    let now = Instant::now();
    editor
        .session_mut()
        .on_drag_start(PointerId::Mouse, Point::new(100.0, 100.0), now);
    editor
        .session_mut()
        .on_drag_move(PointerId::Mouse, Point::new(40.0, 20.0));
    assert!(editor.session().is_interacting());

    editor.reset();
    assert!(!editor.session().is_interacting());
    assert_eq!(editor.session().controller().transform(), fitted);
    // The released pointer no longer pans.
    assert!(!editor
        .session_mut()
        .on_drag_move(PointerId::Mouse, Point::new(90.0, 90.0)));
}

#[test]
fn test_poster_grid_shown_while_interacting_but_not_exported() {
    let mut editor = PosterEditor::new(&EditorConfig::default());
    editor.session_mut().set_source(gray_source(1080, 1350, 60));
    let now = Instant::now();
    editor
        .session_mut()
        .on_drag_start(PointerId::Mouse, Point::new(10.0, 10.0), now);

    let shown = editor.render();
    let exported = editor.render_export();
    assert_eq!(rgb_at(&exported, 360, 600), [60, 60, 60]);
    assert!(rgb_at(&shown, 360, 600)[0] > 150);

    editor.session_mut().on_drag_end(PointerId::Mouse, now);
    editor.session_mut().tick(now + Duration::from_millis(700));
    assert_eq!(editor.render(), exported);
}

#[test]
fn test_poster_category_band_in_render() {
    let mut editor = PosterEditor::new(&EditorConfig::default());
    editor.session_mut().set_source(gray_source(1080, 1350, 60));
    editor.set_title("Herbstlauf");
    editor.set_category(Category::Youth);
    let out = editor.render();
    assert_eq!(rgb_at(&out, 540, 1200), [0x76, 0x86, 0x9d]);
    assert_eq!(editor.title(), "Herbstlauf");
    assert_eq!(editor.category(), Category::Youth);
    assert!(!editor.has_font());
}

#[test]
fn test_poster_export_png() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("poster.png");
    let mut editor = PosterEditor::new(&small_config(108, 135));
    editor.session_mut().set_source(gray_source(50, 50, 90));
    editor.export_png(&path).unwrap();

    let written = image::open(&path).unwrap();
    assert_eq!((written.width(), written.height()), (108, 135));
}

// ---------------------------------------------------------------------------
// Loading
// ---------------------------------------------------------------------------

#[test]
fn test_stale_load_is_ignored() {
    let mut editor = GradeEditor::new(&small_config(20, 25));
    let old = editor.session_mut().begin_load();
    let new = editor.session_mut().begin_load();

    let outcome = editor.finish_load(Tagged::new(old, Ok(gray_source(20, 25, 10))));
    assert!(matches!(outcome, LoadOutcome::Stale));
    assert!(!editor.session().has_image());

    let outcome = editor.finish_load(Tagged::new(new, Ok(gray_source(20, 25, 10))));
    assert!(outcome.is_loaded());
    assert!(editor.session().has_image());
}

#[test]
fn test_failed_load_clears_image() {
    let mut editor = grade_editor_with(20, 25, 100);
    let ticket = editor.session_mut().begin_load();
    let outcome = editor.finish_load(Tagged::new(ticket, decode_source_bytes(b"not an image")));
    assert!(matches!(outcome, LoadOutcome::Failed(_)));
    assert!(!editor.session().has_image());
    assert_eq!(editor.render().get_pixel(10, 10).0, [0, 0, 0, 255]);
}

#[test]
fn test_failed_load_resets_grading() {
    let mut editor = grade_editor_with(20, 25, 100);
    editor.auto_grade();
    editor.set_param(TonalParam::Contrast, 25);

    let ticket = editor.session_mut().begin_load();
    let outcome = editor.finish_load(Tagged::new(ticket, decode_source_bytes(b"not an image")));
    assert!(matches!(outcome, LoadOutcome::Failed(_)));
    assert_eq!(editor.params(), TonalParams::default());
    assert!(!editor.grade().auto_active());
    assert!(editor.grade().auto_applied().is_none());
}

#[test]
fn test_new_image_resets_grading() {
    let mut editor = grade_editor_with(20, 25, 100);
    editor.auto_grade();
    editor.set_param(TonalParam::Brightness, -30);

    let ticket = editor.session_mut().begin_load();
    editor.finish_load(Tagged::new(ticket, Ok(gray_source(30, 10, 50))));
    assert_eq!(editor.params(), TonalParams::default());
    assert!(!editor.grade().auto_active());
    assert!(editor.grade().auto_applied().is_none());
}

// ---------------------------------------------------------------------------
// Grade editor
// ---------------------------------------------------------------------------

#[test]
fn test_auto_grade_flat_gray_frame() {
    let mut editor = grade_editor_with(40, 50, 100);
    let params = editor.auto_grade().unwrap();
    assert_eq!(params, TonalParams::new(17, 20, 12, 9));
    assert!(editor.grade().auto_active());
}

#[test]
fn test_auto_grade_without_image_is_noop() {
    let mut editor = GradeEditor::new(&small_config(20, 25));
    assert!(editor.auto_grade().is_none());
    assert_eq!(editor.params(), TonalParams::default());
}

#[test]
fn test_reset_param_back_to_auto() {
    let mut editor = grade_editor_with(40, 50, 100);
    editor.auto_grade();
    editor.set_param(TonalParam::Clarity, 33);
    editor.reset_param(TonalParam::Clarity);
    assert_eq!(editor.params().clarity, 9);
}

#[test]
fn test_render_applies_grade() {
    let mut editor = grade_editor_with(20, 25, 100);
    editor.set_param(TonalParam::Brightness, 10);
    let out = editor.render();
    assert_eq!(rgb_at(&out, 10, 10), [120, 120, 120]);
    // The base stays ungraded.
    assert_eq!(rgb_at(editor.base().unwrap().pixels(), 10, 10), [100, 100, 100]);
}

#[test]
fn test_grid_never_lands_in_base() {
    let mut editor = grade_editor_with(60, 60, 100);
    press(&mut editor, Instant::now());
    assert!(editor.session().is_interacting());

    let shown = editor.render();
    assert!(rgb_at(&shown, 20, 5)[0] > 150);
    let base = editor.base().unwrap().pixels();
    assert!(base.pixels().all(|p| p.0 == [100, 100, 100, 255]));
}

#[test]
fn test_letterbox_shows_blurred_backdrop() {
    let mut editor = GradeEditor::new(&small_config(40, 50));
    editor.set_source(color_source(40, 20, [100, 200, 100]));
    let out = editor.render();
    assert_eq!(rgb_at(&out, 20, 2), [82, 164, 82]);
    assert_eq!(rgb_at(&out, 20, 25), [100, 200, 100]);
}

#[test]
fn test_queue_next_wraps() {
    let mut editor = GradeEditor::new(&small_config(20, 25));
    let first = editor.set_queue(vec![PathBuf::from("a.jpg"), PathBuf::from("b.jpg")]);
    assert_eq!(first, Some(PathBuf::from("a.jpg")));
    assert_eq!(editor.next_image(), Some(PathBuf::from("b.jpg")));
    assert_eq!(editor.next_image(), Some(PathBuf::from("a.jpg")));
}

#[test]
fn test_empty_selection_clears_image() {
    let mut editor = grade_editor_with(20, 25, 100);
    assert_eq!(editor.set_queue(Vec::new()), None);
    assert!(!editor.session().has_image());
    assert_eq!(editor.next_image(), None);
}

#[test]
fn test_reset_all() {
    let mut editor = grade_editor_with(20, 25, 100);
    editor.set_queue(vec![PathBuf::from("a.jpg")]);
    editor.set_source(gray_source(20, 25, 100));
    editor.auto_grade();
    press(&mut editor, Instant::now());

    editor.reset_all();
    assert!(editor.queue().is_empty());
    assert!(!editor.session().has_image());
    assert_eq!(editor.params(), TonalParams::default());
    assert!(!editor.session().controller().is_interacting());
    assert!(editor.base().is_none());
}

#[test]
fn test_export_uses_source_stem() {
    let dir = tempfile::tempdir().unwrap();
    let mut editor = GradeEditor::new(&small_config(20, 25));
    editor.set_queue(vec![PathBuf::from("/photos/IMG_7.jpg")]);
    editor.set_source(gray_source(20, 25, 100));

    let path = editor.export_png(dir.path()).unwrap();
    assert_eq!(path, dir.path().join("IMG_7_graded.png"));
    assert!(path.exists());
}

#[test]
fn test_export_without_queue_uses_default_name() {
    let dir = tempfile::tempdir().unwrap();
    let mut editor = grade_editor_with(20, 25, 100);
    let path = editor.export_png(dir.path()).unwrap();
    assert_eq!(path.file_name().unwrap(), "graded.png");
}

#[test]
fn test_export_to_explicit_path() {
    let dir = tempfile::tempdir().unwrap();
    let mut editor = grade_editor_with(20, 25, 100);
    let path = dir.path().join("IMG_1_2_graded.png");
    editor.export_png_to(&path).unwrap();
    assert!(path.exists());
}

#[test]
fn test_transparent_grade_backdrop_config() {
    let mut config = small_config(20, 20);
    config.grade.backdrop = Backdrop::Transparent;
    let mut editor = GradeEditor::new(&config);
    editor.set_source(gray_source(20, 10, 100));
    let out = editor.render();
    assert_eq!(out.get_pixel(10, 1).0[3], 0);
}
