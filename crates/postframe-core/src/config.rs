use serde::{Deserialize, Serialize};

use crate::autograde::AutoGradeConfig;
use crate::compose::{Backdrop, GridStyle};
use crate::error::{PostframeError, Result};
use crate::frame::FrameSize;
use crate::overlay::{OverlayConfig, PlaceholderText};
use crate::viewport::ViewportConfig;

/// Everything tunable about both editors. Missing TOML fields take defaults.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    pub frame: FrameSize,
    pub poster: PosterConfig,
    pub grade: GradeConfig,
    pub grid: GridStyle,
    pub auto_grade: AutoGradeConfig,
    pub overlay: OverlayConfig,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PosterConfig {
    pub viewport: ViewportConfig,
    pub backdrop: Backdrop,
    pub placeholder: PlaceholderText,
}

impl Default for PosterConfig {
    fn default() -> Self {
        Self {
            viewport: ViewportConfig::framing(),
            backdrop: Backdrop::Transparent,
            placeholder: PlaceholderText::poster(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GradeConfig {
    pub viewport: ViewportConfig,
    pub backdrop: Backdrop,
    pub placeholder: PlaceholderText,
}

impl Default for GradeConfig {
    fn default() -> Self {
        Self {
            viewport: ViewportConfig::grade(),
            backdrop: Backdrop::blurred_cover(),
            placeholder: PlaceholderText::grade(),
        }
    }
}

impl EditorConfig {
    /// Reject values the editors cannot work with.
    pub fn validate(&self) -> Result<()> {
        if self.frame.width == 0 || self.frame.height == 0 {
            return Err(PostframeError::InvalidDimensions {
                width: self.frame.width,
                height: self.frame.height,
            });
        }
        for (name, viewport) in [("poster", &self.poster.viewport), ("grade", &self.grade.viewport)] {
            let limits = viewport.limits;
            if !(limits.min > 0.0 && limits.min <= limits.max && limits.max.is_finite()) {
                return Err(PostframeError::Config(format!(
                    "{name}: scale limits must satisfy 0 < min <= max (got {}..{})",
                    limits.min, limits.max
                )));
            }
            if !(viewport.wheel_intensity.is_finite() && viewport.wheel_intensity >= 0.0) {
                return Err(PostframeError::Config(format!(
                    "{name}: wheel_intensity must be a non-negative number"
                )));
            }
        }
        if let Backdrop::BlurredCover {
            blur_sigma,
            dim_alpha,
            downsample,
        } = self.grade.backdrop
        {
            if blur_sigma < 0.0 || !(0.0..=1.0).contains(&dim_alpha) || downsample == 0 {
                return Err(PostframeError::Config(
                    "grade: blurred backdrop needs sigma >= 0, dim_alpha in 0..=1, downsample >= 1".into(),
                ));
            }
        }
        if self.auto_grade.sample_stride == 0 {
            return Err(PostframeError::Config("auto_grade.sample_stride must be at least 1".into()));
        }
        Ok(())
    }
}
