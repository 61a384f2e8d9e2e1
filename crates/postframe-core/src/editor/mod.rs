pub mod grade;
pub mod poster;
pub mod session;

pub use grade::GradeEditor;
pub use poster::PosterEditor;
pub use session::{ImageSession, LoadOutcome};
