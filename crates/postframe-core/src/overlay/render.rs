use image::RgbaImage;

use crate::compose::paint::{blend_color, fill_rect, Color};

use super::category::Category;
use super::config::{OverlayConfig, PlaceholderText};
use super::text::{measure_text, TextRenderer};

/// Where the overlay pieces ended up; useful for hit-testing and tests.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OverlayLayout {
    pub title_bar: Rect,
    pub sub_bar: Rect,
    pub accent_bar: Option<Rect>,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn center(&self) -> (f64, f64) {
        (self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }
}

/// Compute overlay geometry for a frame width and title.
pub fn layout(
    config: &OverlayConfig,
    frame_width: f64,
    title: &str,
    category: Category,
    text: Option<&TextRenderer>,
) -> OverlayLayout {
    let shown = display_title(title);
    let text_w = measure_text(text, shown, config.title_font_px) as f64;
    let bar_w = (frame_width - 2.0 * config.title_max_margin)
        .min(text_w + 2.0 * config.title_pad_x)
        .max(0.0);

    let title_bar = Rect {
        x: (frame_width - bar_w) / 2.0,
        y: config.base_y,
        width: bar_w,
        height: config.title_bar_height,
    };
    let sub_bar = Rect {
        x: 0.0,
        y: config.sub_bar_y(),
        width: frame_width,
        height: config.sub_bar_height,
    };
    let accent_bar = category.has_accent().then(|| Rect {
        x: 0.0,
        y: sub_bar.y - config.accent_cut,
        width: frame_width,
        height: config.accent_height + config.accent_cut,
    });

    OverlayLayout {
        title_bar,
        sub_bar,
        accent_bar,
    }
}

/// Draw gradient, title bar, category sub-band, accent and label.
pub fn render_overlay(
    image: &mut RgbaImage,
    config: &OverlayConfig,
    title: &str,
    category: Category,
    text: Option<&TextRenderer>,
) -> OverlayLayout {
    let w = image.width() as f64;
    let geometry = layout(config, w, title, category, text);

    draw_bottom_gradient(image, config);

    let bar = geometry.title_bar;
    fill_rounded_rect(image, bar, config.title_bar_radius, config.title_bar_color);
    if let Some(renderer) = text {
        let shown = display_title(title);
        let text_w = renderer.measure(shown, config.title_font_px);
        let (cx, cy) = bar.center();
        renderer.draw(
            image,
            shown,
            config.title_font_px,
            cx as f32 - text_w / 2.0,
            cy as f32 + renderer.middle_to_baseline(config.title_font_px),
            config.title_text_color,
        );
    }

    let sub = geometry.sub_bar;
    fill_rect(image, sub.x, sub.y, sub.x + sub.width, sub.bottom(), category.band_color());

    if let Some(accent) = geometry.accent_bar {
        fill_rect(
            image,
            accent.x,
            accent.y,
            accent.x + accent.width,
            accent.bottom(),
            config.accent_color,
        );
    }

    if let Some(renderer) = text {
        renderer.draw(
            image,
            category.label(),
            config.label_font_px,
            config.label_x as f32,
            (sub.y + config.label_baseline) as f32,
            config.label_text_color,
        );
    }

    geometry
}

/// Headline and hint on an empty frame.
pub fn render_placeholder(image: &mut RgbaImage, placeholder: &PlaceholderText, text: Option<&TextRenderer>) {
    let Some(renderer) = text else {
        return;
    };
    renderer.draw(image, &placeholder.headline, 72.0, 70.0, 160.0, Color::WHITE.with_alpha(0.55));
    renderer.draw(image, &placeholder.hint, 34.0, 70.0, 220.0, Color::WHITE.with_alpha(0.35));
}

/// Trimmed title; an empty title keeps a one-space bar.
fn display_title(title: &str) -> &str {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        " "
    } else {
        trimmed
    }
}

/// Transparent at `base_y - gradient_rise`, ramping to black at the bottom edge.
fn draw_bottom_gradient(image: &mut RgbaImage, config: &OverlayConfig) {
    let (w, h) = image.dimensions();
    let start = config.base_y - config.gradient_rise;
    let span = (h as f64 - start).max(1.0);

    for y in 0..h {
        let t = ((y as f64 + 0.5 - start) / span).clamp(0.0, 1.0) as f32;
        let alpha = t * config.gradient_max_alpha;
        if alpha <= 0.0 {
            continue;
        }
        let shade = Color::BLACK.with_alpha(alpha);
        for x in 0..w {
            blend_color(image.get_pixel_mut(x, y), shade, 1.0);
        }
    }
}

/// Anti-aliased rounded rectangle; the radius is capped at half the shorter side.
fn fill_rounded_rect(image: &mut RgbaImage, rect: Rect, radius: f64, color: Color) {
    if rect.width <= 0.0 || rect.height <= 0.0 {
        return;
    }
    let (w, h) = image.dimensions();
    let r = radius.min(rect.width / 2.0).min(rect.height / 2.0).max(0.0);
    let (cx, cy) = rect.center();
    let half_w = rect.width / 2.0 - r;
    let half_h = rect.height / 2.0 - r;

    let x0 = rect.x.floor().max(0.0) as u32;
    let y0 = rect.y.floor().max(0.0) as u32;
    let x1 = ((rect.x + rect.width).ceil().max(0.0) as u32).min(w);
    let y1 = ((rect.y + rect.height).ceil().max(0.0) as u32).min(h);

    for py in y0..y1 {
        for px in x0..x1 {
            // Signed distance from the pixel center to the rounded outline.
            let dx = ((px as f64 + 0.5 - cx).abs() - half_w).max(0.0);
            let dy = ((py as f64 + 0.5 - cy).abs() - half_h).max(0.0);
            let inner = ((px as f64 + 0.5 - cx).abs() - half_w)
                .max((py as f64 + 0.5 - cy).abs() - half_h)
                .min(0.0);
            let sd = dx.hypot(dy) + inner - r;
            let coverage = (0.5 - sd).clamp(0.0, 1.0) as f32;
            if coverage > 0.0 {
                blend_color(image.get_pixel_mut(px, py), color, coverage);
            }
        }
    }
}
