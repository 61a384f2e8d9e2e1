mod ui;
mod viewport;

pub use ui::{EditorTab, UIState};
pub use viewport::ViewportState;
