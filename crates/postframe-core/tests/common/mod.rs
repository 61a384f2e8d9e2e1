#![allow(dead_code)]

use image::{Rgba, RgbaImage};

use postframe_core::config::EditorConfig;
use postframe_core::frame::{FrameSize, SourceImage};

/// Opaque single-color raster.
pub fn solid_image(width: u32, height: u32, rgb: [u8; 3]) -> RgbaImage {
    RgbaImage::from_pixel(width, height, Rgba([rgb[0], rgb[1], rgb[2], 255]))
}

/// Opaque gray source image.
pub fn gray_source(width: u32, height: u32, value: u8) -> SourceImage {
    SourceImage::new(solid_image(width, height, [value; 3])).unwrap()
}

pub fn color_source(width: u32, height: u32, rgb: [u8; 3]) -> SourceImage {
    SourceImage::new(solid_image(width, height, rgb)).unwrap()
}

/// Horizontal ramp from black to white, opaque.
pub fn ramp_image(width: u32, height: u32) -> RgbaImage {
    RgbaImage::from_fn(width, height, |x, _| {
        let v = (x * 255 / (width - 1).max(1)) as u8;
        Rgba([v, v, v, 255])
    })
}

/// Default config shrunk to a small frame so editor tests stay fast.
pub fn small_config(width: u32, height: u32) -> EditorConfig {
    EditorConfig {
        frame: FrameSize::new(width, height),
        ..EditorConfig::default()
    }
}

pub fn rgb_at(image: &RgbaImage, x: u32, y: u32) -> [u8; 3] {
    let p = image.get_pixel(x, y).0;
    [p[0], p[1], p[2]]
}
