//! Small raster painting helpers shared by the compositor, grid and overlay.

use image::{Rgba, RgbaImage};
use serde::{Deserialize, Serialize};

/// Straight-alpha RGBA color with channels in `0..=255` and alpha in `0.0..=1.0`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }

    /// Parse `#rrggbb`.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if hex.len() != 6 {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
        Some(Self::rgb(channel(0)?, channel(2)?, channel(4)?))
    }

    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    pub fn to_rgba8(&self) -> Rgba<u8> {
        Rgba([self.r, self.g, self.b, (self.a.clamp(0.0, 1.0) * 255.0).round() as u8])
    }
}

/// Source-over blend of `src` (straight alpha, channels 0..255, alpha 0..1)
/// onto `dst`.
pub fn blend_pixel(dst: &mut [u8], src: [f32; 4]) {
    let sa = src[3].clamp(0.0, 1.0);
    if sa <= 0.0 {
        return;
    }
    let da = dst[3] as f32 / 255.0;
    let out_a = sa + da * (1.0 - sa);
    if out_a <= 0.0 {
        dst.copy_from_slice(&[0, 0, 0, 0]);
        return;
    }
    for c in 0..3 {
        let v = (src[c] * sa + dst[c] as f32 * da * (1.0 - sa)) / out_a;
        dst[c] = v.round().clamp(0.0, 255.0) as u8;
    }
    dst[3] = (out_a * 255.0).round().clamp(0.0, 255.0) as u8;
}

pub fn blend_color(dst: &mut Rgba<u8>, color: Color, coverage: f32) {
    blend_pixel(
        &mut dst.0,
        [
            color.r as f32,
            color.g as f32,
            color.b as f32,
            color.a * coverage,
        ],
    );
}

/// Fill an axis-aligned rectangle with fractional edge coverage.
pub fn fill_rect(image: &mut RgbaImage, x0: f64, y0: f64, x1: f64, y1: f64, color: Color) {
    let (w, h) = image.dimensions();
    let (x0, x1) = (x0.max(0.0), x1.min(w as f64));
    let (y0, y1) = (y0.max(0.0), y1.min(h as f64));
    if x1 <= x0 || y1 <= y0 {
        return;
    }

    for py in y0.floor() as u32..(y1.ceil() as u32).min(h) {
        let cov_y = overlap(py as f64, y0, y1);
        for px in x0.floor() as u32..(x1.ceil() as u32).min(w) {
            let coverage = cov_y * overlap(px as f64, x0, x1);
            if coverage > 0.0 {
                blend_color(image.get_pixel_mut(px, py), color, coverage as f32);
            }
        }
    }
}

/// Fill the whole raster with an opaque color.
pub fn clear(image: &mut RgbaImage, color: Color) {
    let px = color.to_rgba8();
    for p in image.pixels_mut() {
        *p = px;
    }
}

/// Length of `[cell, cell + 1) ∩ [lo, hi)`.
fn overlap(cell: f64, lo: f64, hi: f64) -> f64 {
    ((cell + 1.0).min(hi) - cell.max(lo)).max(0.0)
}
