use std::path::Path;

use ab_glyph::{point, Font, FontVec, PxScale, ScaleFont};
use image::RgbaImage;

use crate::compose::paint::{blend_color, Color};
use crate::error::{PostframeError, Result};

/// Advance used to estimate text width when no font is loaded, in ems.
const FALLBACK_ADVANCE_EM: f32 = 0.55;

/// Single-line text rasterizer backed by a user-supplied font.
pub struct TextRenderer {
    font: FontVec,
}

impl std::fmt::Debug for TextRenderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextRenderer").finish_non_exhaustive()
    }
}

impl TextRenderer {
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self> {
        let font = FontVec::try_from_vec(bytes).map_err(|e| PostframeError::Font(e.to_string()))?;
        Ok(Self { font })
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        Self::from_bytes(std::fs::read(path)?)
    }

    /// Scale for a CSS-style font size (em size in pixels).
    fn scale(&self, font_px: f32) -> PxScale {
        let upem = self.font.units_per_em().unwrap_or(1000.0);
        PxScale::from(font_px * self.font.height_unscaled() / upem)
    }

    pub fn measure(&self, text: &str, font_px: f32) -> f32 {
        let scaled = self.font.as_scaled(self.scale(font_px));
        let mut width = 0.0f32;
        let mut prev = None;
        for ch in text.chars() {
            let id = self.font.glyph_id(ch);
            if let Some(p) = prev {
                width += scaled.kern(p, id);
            }
            width += scaled.h_advance(id);
            prev = Some(id);
        }
        width
    }

    /// Offset from the vertical middle of the em box to the baseline.
    pub fn middle_to_baseline(&self, font_px: f32) -> f32 {
        let scaled = self.font.as_scaled(self.scale(font_px));
        (scaled.ascent() + scaled.descent()) / 2.0
    }

    /// Draw `text` with its left edge at `x` and baseline at `baseline`.
    pub fn draw(
        &self,
        image: &mut RgbaImage,
        text: &str,
        font_px: f32,
        x: f32,
        baseline: f32,
        color: Color,
    ) {
        let scale = self.scale(font_px);
        let scaled = self.font.as_scaled(scale);
        let (w, h) = image.dimensions();
        let mut caret = x;
        let mut prev = None;

        for ch in text.chars() {
            let id = self.font.glyph_id(ch);
            if let Some(p) = prev {
                caret += scaled.kern(p, id);
            }
            let glyph = id.with_scale_and_position(scale, point(caret, baseline));
            caret += scaled.h_advance(id);
            prev = Some(id);

            let Some(outlined) = self.font.outline_glyph(glyph) else {
                continue;
            };
            let bounds = outlined.px_bounds();
            outlined.draw(|gx, gy, coverage| {
                let px = bounds.min.x as i64 + gx as i64;
                let py = bounds.min.y as i64 + gy as i64;
                if px >= 0 && py >= 0 && (px as u32) < w && (py as u32) < h {
                    blend_color(image.get_pixel_mut(px as u32, py as u32), color, coverage);
                }
            });
        }
    }
}

/// Text width with the font if available, else an average-advance estimate.
pub fn measure_text(renderer: Option<&TextRenderer>, text: &str, font_px: f32) -> f32 {
    match renderer {
        Some(r) => r.measure(text, font_px),
        None => text.chars().count() as f32 * font_px * FALLBACK_ADVANCE_EM,
    }
}
