use serde::{Deserialize, Serialize};

use crate::compose::Color;

/// Layout of the poster overlay, in output-frame pixels.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OverlayConfig {
    /// Top of the title bar.
    pub base_y: f64,
    pub title_bar_height: f64,
    /// Horizontal padding between title text and bar edge.
    pub title_pad_x: f64,
    pub title_bar_radius: f64,
    pub title_font_px: f32,
    /// Minimum distance between the title bar and the frame sides.
    pub title_max_margin: f64,

    /// Gap between title bar and sub-band.
    pub sub_bar_gap: f64,
    pub sub_bar_height: f64,

    pub accent_height: f64,
    /// How far the accent band reaches above the sub-band.
    pub accent_cut: f64,

    /// Readability gradient starts this far above `base_y`.
    pub gradient_rise: f64,
    pub gradient_max_alpha: f32,

    pub label_font_px: f32,
    pub label_x: f64,
    /// Label baseline offset below the sub-band top.
    pub label_baseline: f64,

    pub title_bar_color: Color,
    pub accent_color: Color,
    pub title_text_color: Color,
    pub label_text_color: Color,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            base_y: 1040.0,
            title_bar_height: 64.0,
            title_pad_x: 26.0,
            title_bar_radius: 14.0,
            title_font_px: 20.0,
            title_max_margin: 60.0,
            sub_bar_gap: 12.0,
            sub_bar_height: 130.0,
            accent_height: 16.0,
            accent_cut: 18.0,
            gradient_rise: 140.0,
            gradient_max_alpha: 0.60,
            label_font_px: 40.0,
            label_x: 60.0,
            label_baseline: 85.0,
            title_bar_color: Color::rgb(0x1a, 0x35, 0x5b),
            accent_color: Color::rgb(0xe6, 0x7e, 0x22),
            title_text_color: Color::WHITE,
            label_text_color: Color::rgb(0x11, 0x11, 0x11),
        }
    }
}

impl OverlayConfig {
    pub fn sub_bar_y(&self) -> f64 {
        self.base_y + self.title_bar_height + self.sub_bar_gap
    }
}

/// Two lines shown on an empty frame.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlaceholderText {
    pub headline: String,
    pub hint: String,
}

impl PlaceholderText {
    pub fn poster() -> Self {
        Self {
            headline: "Bild laden …".into(),
            hint: "Dann ziehen & pinch-zoomen".into(),
        }
    }

    pub fn grade() -> Self {
        Self {
            headline: "Fotos laden …".into(),
            hint: "Dann verschieben / zoomen".into(),
        }
    }
}
