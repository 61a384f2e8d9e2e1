pub mod adjust;
pub mod grade;
pub mod params;

pub use adjust::{apply_adjustments, ToneCurve};
pub use grade::GradeState;
pub use params::{TonalParam, TonalParams};
