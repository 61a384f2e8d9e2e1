pub mod backdrop;
pub mod compositor;
pub mod grid;
pub mod paint;
pub mod sample;

pub use backdrop::Backdrop;
pub use compositor::{BackdropCache, Compositor};
pub use grid::{draw_thirds, GridStyle};
pub use paint::Color;
