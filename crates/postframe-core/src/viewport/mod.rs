pub mod controller;
pub mod debounce;
pub mod fit;
pub mod gesture;
pub mod surface;
pub mod transform;

pub use controller::{ViewportConfig, ViewportController};
pub use debounce::{CancelToken, Debounce};
pub use gesture::{GestureState, PinchState, PointerId};
pub use surface::SurfaceMapping;
pub use transform::{Point, ScaleBasis, ScaleLimits, ViewportTransform};
