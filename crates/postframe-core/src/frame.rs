use std::sync::Arc;

use image::RgbaImage;
use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_FRAME_HEIGHT, DEFAULT_FRAME_WIDTH};
use crate::error::{PostframeError, Result};

/// Rendered output raster. Always sized to the editor's [`FrameSize`].
pub type OutputFrame = RgbaImage;

/// Fixed pixel size of the output frame (defines the export aspect ratio).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameSize {
    pub width: u32,
    pub height: u32,
}

impl FrameSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn width_f64(&self) -> f64 {
        self.width as f64
    }

    pub fn height_f64(&self) -> f64 {
        self.height as f64
    }

    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Blank (fully transparent) raster of this size.
    pub fn blank(&self) -> OutputFrame {
        RgbaImage::new(self.width, self.height)
    }
}

impl Default for FrameSize {
    fn default() -> Self {
        Self {
            width: DEFAULT_FRAME_WIDTH,
            height: DEFAULT_FRAME_HEIGHT,
        }
    }
}

/// A decoded source photo. Cheap to clone; the pixels are shared and never mutated.
#[derive(Clone, Debug)]
pub struct SourceImage {
    pixels: Arc<RgbaImage>,
}

impl SourceImage {
    /// Wrap a decoded raster. Zero-sized images are rejected.
    pub fn new(pixels: RgbaImage) -> Result<Self> {
        let (width, height) = pixels.dimensions();
        if width == 0 || height == 0 {
            return Err(PostframeError::InvalidDimensions { width, height });
        }
        Ok(Self {
            pixels: Arc::new(pixels),
        })
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    pub fn size(&self) -> (f64, f64) {
        (self.width() as f64, self.height() as f64)
    }

    pub fn pixels(&self) -> &RgbaImage {
        &self.pixels
    }

    /// True when both handles share the same decoded pixels.
    pub fn same_image(&self, other: &SourceImage) -> bool {
        Arc::ptr_eq(&self.pixels, &other.pixels)
    }
}

/// Composited frame captured before grading.
///
/// Only shared access to the pixels is exposed, so every re-grade reads the
/// same data.
#[derive(Clone, Debug)]
pub struct BaseBuffer {
    pixels: RgbaImage,
}

impl BaseBuffer {
    pub fn capture(frame: &OutputFrame) -> Self {
        Self {
            pixels: frame.clone(),
        }
    }

    pub fn pixels(&self) -> &RgbaImage {
        &self.pixels
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }
}
