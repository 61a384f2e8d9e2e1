use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::compose::Color;

/// Club section a poster belongs to; selects the sub-band color and label.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    #[default]
    Active,
    Youth,
    Performance,
    Community,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Active,
        Category::Youth,
        Category::Performance,
        Category::Community,
    ];

    pub fn band_color(self) -> Color {
        match self {
            Category::Active => Color::rgb(0xff, 0xff, 0xff),
            Category::Youth => Color::rgb(0x76, 0x86, 0x9d),
            Category::Performance => Color::rgb(0xff, 0xff, 0xff),
            Category::Community => Color::rgb(0xcd, 0xcc, 0xcc),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Category::Youth => "JUGI BAD RAGAZ",
            Category::Performance => "TV BAD RAGAZ LA LEISTUNGSTEAM",
            Category::Active | Category::Community => "TV BAD RAGAZ",
        }
    }

    /// Only the performance team gets the accent band.
    pub fn has_accent(self) -> bool {
        matches!(self, Category::Performance)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Active => write!(f, "Active"),
            Category::Youth => write!(f, "Youth"),
            Category::Performance => write!(f, "Performance"),
            Category::Community => write!(f, "Community"),
        }
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "active" | "aktiv" => Ok(Category::Active),
            "youth" | "jugi" => Ok(Category::Youth),
            "performance" | "leistung" => Ok(Category::Performance),
            "community" | "gesellschaft" => Ok(Category::Community),
            other => Err(format!("unknown category '{other}'")),
        }
    }
}
