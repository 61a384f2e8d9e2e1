use image::RgbaImage;
use serde::{Deserialize, Serialize};

use super::paint::{fill_rect, Color};

/// Appearance of the rule-of-thirds guide.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GridStyle {
    pub line_width: f64,
    pub line_color: Color,
    pub marker_size: f64,
    pub marker_color: Color,
}

impl Default for GridStyle {
    fn default() -> Self {
        Self {
            line_width: 2.0,
            line_color: Color::WHITE.with_alpha(0.55),
            marker_size: 6.0,
            marker_color: Color::WHITE.with_alpha(0.75),
        }
    }
}

/// Draw thirds lines and the four intersection markers.
pub fn draw_thirds(image: &mut RgbaImage, style: &GridStyle) {
    let w = image.width() as f64;
    let h = image.height() as f64;
    let half = style.line_width / 2.0;

    for i in 1..=2 {
        let x = w * i as f64 / 3.0;
        fill_rect(image, x - half, 0.0, x + half, h, style.line_color);
    }
    for i in 1..=2 {
        let y = h * i as f64 / 3.0;
        fill_rect(image, 0.0, y - half, w, y + half, style.line_color);
    }

    let m = style.marker_size / 2.0;
    for (x, y) in thirds_points(w, h) {
        fill_rect(image, x - m, y - m, x + m, y + m, style.marker_color);
    }
}

pub fn thirds_points(w: f64, h: f64) -> [(f64, f64); 4] {
    [
        (w / 3.0, h / 3.0),
        (2.0 * w / 3.0, h / 3.0),
        (w / 3.0, 2.0 * h / 3.0),
        (2.0 * w / 3.0, 2.0 * h / 3.0),
    ]
}
