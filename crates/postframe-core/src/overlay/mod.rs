pub mod category;
pub mod config;
pub mod render;
pub mod text;

pub use category::Category;
pub use config::{OverlayConfig, PlaceholderText};
pub use render::{layout, render_overlay, render_placeholder, OverlayLayout, Rect};
pub use text::{measure_text, TextRenderer};
