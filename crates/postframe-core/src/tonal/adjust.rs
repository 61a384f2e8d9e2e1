use image::RgbaImage;
use rayon::prelude::*;

use crate::consts::{LUMA_B, LUMA_G, LUMA_R, PARALLEL_PIXEL_THRESHOLD};
use crate::frame::{BaseBuffer, OutputFrame};

use super::params::TonalParams;

/// Per-channel factors derived once per grade.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ToneCurve {
    pub offset: f64,
    pub contrast: f64,
    pub saturation: f64,
    pub clarity: f64,
}

impl ToneCurve {
    pub fn new(params: &TonalParams) -> Self {
        let p = params.clamped();
        let c = p.contrast as f64;
        Self {
            offset: p.brightness as f64 * 2.0,
            contrast: (259.0 * (c + 255.0)) / (255.0 * (259.0 - c)),
            saturation: 1.0 + p.saturation as f64 / 60.0,
            clarity: 1.0 + p.clarity as f64 / 120.0,
        }
    }

    /// Brightness, contrast, saturation (luma mix), clarity, clamp.
    pub fn apply(&self, rgb: [u8; 3]) -> [u8; 3] {
        let mut v = rgb.map(|c| c as f64 + self.offset);
        for c in &mut v {
            *c = self.contrast * (*c - 128.0) + 128.0;
        }

        let y = LUMA_R * v[0] + LUMA_G * v[1] + LUMA_B * v[2];
        for c in &mut v {
            *c = y + (*c - y) * self.saturation;
            *c = 128.0 + (*c - 128.0) * self.clarity;
        }

        v.map(|c| c.clamp(0.0, 255.0).round() as u8)
    }
}

/// Grade a full frame. `base` is only read; a fresh buffer is returned.
pub fn apply_adjustments(base: &BaseBuffer, params: &TonalParams) -> OutputFrame {
    let mut out: RgbaImage = base.pixels().clone();
    if params.clamped().is_identity() {
        return out;
    }
    let curve = ToneCurve::new(params);

    let grade_px = |px: &mut [u8]| {
        let [r, g, b] = curve.apply([px[0], px[1], px[2]]);
        px[0] = r;
        px[1] = g;
        px[2] = b;
    };

    let pixel_count = out.width() as usize * out.height() as usize;
    let raw: &mut [u8] = &mut out;
    if pixel_count >= PARALLEL_PIXEL_THRESHOLD {
        raw.par_chunks_mut(4).for_each(grade_px);
    } else {
        raw.chunks_mut(4).for_each(grade_px);
    }
    out
}
