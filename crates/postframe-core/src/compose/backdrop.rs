use image::imageops::{self, FilterType};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::consts::{DEFAULT_BACKDROP_BLUR, DEFAULT_BACKDROP_DIM, DEFAULT_BACKDROP_DOWNSAMPLE};
use crate::filters::gaussian_blur::gaussian_blur_rgba;
use crate::frame::{FrameSize, OutputFrame, SourceImage};
use crate::viewport::fit::cover_fit;

use super::paint::{fill_rect, Color};
use super::sample::draw_transformed;

/// What sits behind the foreground photo.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Backdrop {
    /// Cleared frame.
    Transparent,
    /// Opaque fill.
    Solid(Color),
    /// The photo cover-fit over the whole frame, blurred and darkened.
    BlurredCover {
        /// Blur sigma in output pixels.
        blur_sigma: f32,
        /// Opacity of the black layer on top.
        dim_alpha: f32,
        /// Render at 1/N resolution before blurring.
        downsample: u32,
    },
}

impl Backdrop {
    pub fn blurred_cover() -> Self {
        Backdrop::BlurredCover {
            blur_sigma: DEFAULT_BACKDROP_BLUR,
            dim_alpha: DEFAULT_BACKDROP_DIM,
            downsample: DEFAULT_BACKDROP_DOWNSAMPLE,
        }
    }

    /// Whether the backdrop depends on the source photo.
    pub fn uses_source(&self) -> bool {
        matches!(self, Backdrop::BlurredCover { .. })
    }

    pub fn render(&self, source: &SourceImage, frame: FrameSize) -> OutputFrame {
        let mut out = frame.blank();
        match *self {
            Backdrop::Transparent => {}
            Backdrop::Solid(color) => super::paint::clear(&mut out, color),
            Backdrop::BlurredCover {
                blur_sigma,
                dim_alpha,
                downsample,
            } => {
                let downsample = downsample.max(1);
                let small = FrameSize::new(
                    frame.width.div_ceil(downsample).max(1),
                    frame.height.div_ceil(downsample).max(1),
                );
                let mut reduced = small.blank();
                draw_transformed(&mut reduced, source.pixels(), &cover_fit(source.size(), small));
                let blurred = gaussian_blur_rgba(&reduced, blur_sigma / downsample as f32);
                out = imageops::resize(&blurred, frame.width, frame.height, FilterType::Triangle);
                fill_rect(
                    &mut out,
                    0.0,
                    0.0,
                    frame.width_f64(),
                    frame.height_f64(),
                    Color::BLACK.with_alpha(dim_alpha),
                );
                debug!(
                    width = small.width,
                    height = small.height,
                    sigma = blur_sigma,
                    "Backdrop rendered"
                );
            }
        }
        out
    }
}

impl Default for Backdrop {
    fn default() -> Self {
        Backdrop::Transparent
    }
}
