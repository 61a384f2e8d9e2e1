use image::RgbaImage;
use rayon::prelude::*;

use crate::consts::PARALLEL_PIXEL_THRESHOLD;
use crate::viewport::{Point, ViewportTransform};

use super::paint::blend_pixel;

/// Bilinear sample at continuous pixel coordinates (pixel centers at `i + 0.5`),
/// clamped at the image edges. Returns straight RGBA with alpha in `0..1`.
pub fn sample_bilinear(src: &RgbaImage, x: f64, y: f64) -> [f32; 4] {
    let (w, h) = src.dimensions();
    let fx = (x - 0.5).clamp(0.0, (w - 1) as f64);
    let fy = (y - 0.5).clamp(0.0, (h - 1) as f64);
    let x0 = fx.floor() as u32;
    let y0 = fy.floor() as u32;
    let x1 = (x0 + 1).min(w - 1);
    let y1 = (y0 + 1).min(h - 1);
    let tx = (fx - x0 as f64) as f32;
    let ty = (fy - y0 as f64) as f32;

    let p00 = src.get_pixel(x0, y0).0;
    let p10 = src.get_pixel(x1, y0).0;
    let p01 = src.get_pixel(x0, y1).0;
    let p11 = src.get_pixel(x1, y1).0;

    let mut out = [0.0f32; 4];
    for c in 0..4 {
        let top = p00[c] as f32 * (1.0 - tx) + p10[c] as f32 * tx;
        let bottom = p01[c] as f32 * (1.0 - tx) + p11[c] as f32 * tx;
        out[c] = top * (1.0 - ty) + bottom * ty;
    }
    out[3] /= 255.0;
    out
}

/// Draw `src` into `dest` through `transform` (source → dest pixels),
/// source-over. Destination pixels whose centers map outside the source
/// are left untouched.
pub fn draw_transformed(dest: &mut RgbaImage, src: &RgbaImage, transform: &ViewportTransform) {
    if !transform.is_finite() {
        return;
    }
    let (dw, dh) = dest.dimensions();
    let (sw, sh) = (src.width() as f64, src.height() as f64);

    // Destination rows touched by the placed image.
    let top = transform.translate_y.max(0.0).floor() as u32;
    let bottom = (transform.translate_y + sh * transform.scale)
        .min(dh as f64)
        .ceil()
        .max(0.0) as u32;
    if top >= bottom || dw == 0 {
        return;
    }

    let row_len = dw as usize * 4;
    let paint_row = |y: u32, row: &mut [u8]| {
        for x in 0..dw {
            let p = transform.invert(Point::new(x as f64 + 0.5, y as f64 + 0.5));
            if p.x < 0.0 || p.y < 0.0 || p.x >= sw || p.y >= sh {
                continue;
            }
            let i = x as usize * 4;
            blend_pixel(&mut row[i..i + 4], sample_bilinear(src, p.x, p.y));
        }
    };

    let raw: &mut [u8] = dest;
    let rows = &mut raw[top as usize * row_len..bottom as usize * row_len];
    if (bottom - top) as usize * dw as usize >= PARALLEL_PIXEL_THRESHOLD {
        rows.par_chunks_mut(row_len)
            .enumerate()
            .for_each(|(i, row)| paint_row(top + i as u32, row));
    } else {
        for (i, row) in rows.chunks_mut(row_len).enumerate() {
            paint_row(top + i as u32, row);
        }
    }
}
