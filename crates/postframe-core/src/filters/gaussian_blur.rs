use image::RgbaImage;
use ndarray::{Array2, Axis};
use rayon::prelude::*;

use crate::consts::PARALLEL_PIXEL_THRESHOLD;

/// Blur the color channels of an RGBA raster with a separable Gaussian.
///
/// Alpha is blurred alongside so transparent edges stay soft.
pub fn gaussian_blur_rgba(image: &RgbaImage, sigma: f32) -> RgbaImage {
    if sigma <= 0.0 {
        return image.clone();
    }
    let (w, h) = image.dimensions();
    let kernel = make_gaussian_kernel(sigma);

    let planes: Vec<Array2<f32>> = (0..4)
        .map(|c| {
            let plane = Array2::from_shape_fn((h as usize, w as usize), |(row, col)| {
                image.get_pixel(col as u32, row as u32).0[c] as f32
            });
            gaussian_blur_plane(&plane, &kernel)
        })
        .collect();

    RgbaImage::from_fn(w, h, |x, y| {
        let at = [y as usize, x as usize];
        image::Rgba([
            to_u8(planes[0][at]),
            to_u8(planes[1][at]),
            to_u8(planes[2][at]),
            to_u8(planes[3][at]),
        ])
    })
}

/// Apply a precomputed kernel to a single plane (rows, then columns).
pub fn gaussian_blur_plane(data: &Array2<f32>, kernel: &[f32]) -> Array2<f32> {
    let row_pass = convolve_rows(data, kernel);
    convolve_cols(&row_pass, kernel)
}

pub fn make_gaussian_kernel(sigma: f32) -> Vec<f32> {
    let radius = (sigma * 3.0).ceil() as usize;
    let size = 2 * radius + 1;
    let mut kernel = vec![0.0f32; size];
    let s2 = 2.0 * sigma * sigma;
    let mut sum = 0.0f32;

    for (i, k) in kernel.iter_mut().enumerate() {
        let x = i as f32 - radius as f32;
        *k = (-x * x / s2).exp();
        sum += *k;
    }

    for v in &mut kernel {
        *v /= sum;
    }

    kernel
}

fn to_u8(v: f32) -> u8 {
    v.round().clamp(0.0, 255.0) as u8
}

fn convolve_rows(data: &Array2<f32>, kernel: &[f32]) -> Array2<f32> {
    let (h, w) = data.dim();
    let radius = kernel.len() / 2;
    let mut result = Array2::<f32>::zeros((h, w));

    let convolve_row = |row: usize, out: &mut ndarray::ArrayViewMut1<f32>| {
        for col in 0..w {
            let mut sum = 0.0f32;
            for (ki, &kv) in kernel.iter().enumerate() {
                let src_col =
                    (col as isize + ki as isize - radius as isize).clamp(0, w as isize - 1) as usize;
                sum += data[[row, src_col]] * kv;
            }
            out[col] = sum;
        }
    };

    if h * w >= PARALLEL_PIXEL_THRESHOLD {
        result
            .axis_iter_mut(Axis(0))
            .into_par_iter()
            .enumerate()
            .for_each(|(row, mut out)| convolve_row(row, &mut out));
    } else {
        for (row, mut out) in result.axis_iter_mut(Axis(0)).enumerate() {
            convolve_row(row, &mut out);
        }
    }
    result
}

fn convolve_cols(data: &Array2<f32>, kernel: &[f32]) -> Array2<f32> {
    let (h, w) = data.dim();
    let radius = kernel.len() / 2;
    let mut result = Array2::<f32>::zeros((h, w));

    let convolve_row = |row: usize, out: &mut ndarray::ArrayViewMut1<f32>| {
        for col in 0..w {
            let mut sum = 0.0f32;
            for (ki, &kv) in kernel.iter().enumerate() {
                let src_row =
                    (row as isize + ki as isize - radius as isize).clamp(0, h as isize - 1) as usize;
                sum += data[[src_row, col]] * kv;
            }
            out[col] = sum;
        }
    };

    if h * w >= PARALLEL_PIXEL_THRESHOLD {
        result
            .axis_iter_mut(Axis(0))
            .into_par_iter()
            .enumerate()
            .for_each(|(row, mut out)| convolve_row(row, &mut out));
    } else {
        for (row, mut out) in result.axis_iter_mut(Axis(0)).enumerate() {
            convolve_row(row, &mut out);
        }
    }
    result
}
