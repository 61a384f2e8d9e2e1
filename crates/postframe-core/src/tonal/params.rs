use std::fmt;
use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::consts::{CLARITY_LIMIT, TONAL_SIGNED_LIMIT};

/// One of the four tonal sliders.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TonalParam {
    Brightness,
    Contrast,
    Saturation,
    Clarity,
}

impl TonalParam {
    pub const ALL: [TonalParam; 4] = [
        TonalParam::Brightness,
        TonalParam::Contrast,
        TonalParam::Saturation,
        TonalParam::Clarity,
    ];

    /// Allowed slider range. The contrast curve is only well-behaved inside it.
    pub fn range(self) -> RangeInclusive<i32> {
        match self {
            TonalParam::Clarity => 0..=CLARITY_LIMIT,
            _ => -TONAL_SIGNED_LIMIT..=TONAL_SIGNED_LIMIT,
        }
    }

    pub fn clamp(self, value: i32) -> i32 {
        let range = self.range();
        value.clamp(*range.start(), *range.end())
    }
}

impl fmt::Display for TonalParam {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TonalParam::Brightness => write!(f, "Brightness"),
            TonalParam::Contrast => write!(f, "Contrast"),
            TonalParam::Saturation => write!(f, "Saturation"),
            TonalParam::Clarity => write!(f, "Clarity"),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct TonalParams {
    pub brightness: i32,
    pub contrast: i32,
    pub saturation: i32,
    pub clarity: i32,
}

impl TonalParams {
    pub fn new(brightness: i32, contrast: i32, saturation: i32, clarity: i32) -> Self {
        Self {
            brightness,
            contrast,
            saturation,
            clarity,
        }
        .clamped()
    }

    pub fn get(&self, param: TonalParam) -> i32 {
        match param {
            TonalParam::Brightness => self.brightness,
            TonalParam::Contrast => self.contrast,
            TonalParam::Saturation => self.saturation,
            TonalParam::Clarity => self.clarity,
        }
    }

    /// Set one value, clamped to its range.
    pub fn set(&mut self, param: TonalParam, value: i32) {
        let value = param.clamp(value);
        match param {
            TonalParam::Brightness => self.brightness = value,
            TonalParam::Contrast => self.contrast = value,
            TonalParam::Saturation => self.saturation = value,
            TonalParam::Clarity => self.clarity = value,
        }
    }

    pub fn clamped(self) -> Self {
        Self {
            brightness: TonalParam::Brightness.clamp(self.brightness),
            contrast: TonalParam::Contrast.clamp(self.contrast),
            saturation: TonalParam::Saturation.clamp(self.saturation),
            clarity: TonalParam::Clarity.clamp(self.clarity),
        }
    }

    pub fn is_identity(&self) -> bool {
        *self == Self::default()
    }
}

impl fmt::Display for TonalParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "B {:+} / C {:+} / S {:+} / K {:+}",
            self.brightness, self.contrast, self.saturation, self.clarity
        )
    }
}
