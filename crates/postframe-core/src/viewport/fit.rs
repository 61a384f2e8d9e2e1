use crate::frame::FrameSize;

use super::transform::ViewportTransform;

/// Scale that fits the whole image inside the frame.
pub fn contain_scale(image: (f64, f64), frame: FrameSize) -> f64 {
    (frame.width_f64() / image.0).min(frame.height_f64() / image.1)
}

/// Scale that makes the image fill the whole frame.
pub fn cover_scale(image: (f64, f64), frame: FrameSize) -> f64 {
    (frame.width_f64() / image.0).max(frame.height_f64() / image.1)
}

/// Transform placing the image at `scale`, centered in the frame.
pub fn centered(image: (f64, f64), frame: FrameSize, scale: f64) -> ViewportTransform {
    ViewportTransform::new(
        scale,
        (frame.width_f64() - image.0 * scale) / 2.0,
        (frame.height_f64() - image.1 * scale) / 2.0,
    )
}

/// Contain-fit: whole image visible, letterboxed and centered.
pub fn contain_fit(image: (f64, f64), frame: FrameSize) -> ViewportTransform {
    centered(image, frame, contain_scale(image, frame))
}

/// Cover-fit: frame filled, overflow cropped, centered.
pub fn cover_fit(image: (f64, f64), frame: FrameSize) -> ViewportTransform {
    centered(image, frame, cover_scale(image, frame))
}
