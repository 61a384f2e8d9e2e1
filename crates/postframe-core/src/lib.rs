pub mod autograde;
pub mod compose;
pub mod config;
pub mod consts;
pub mod editor;
pub mod error;
pub mod filters;
pub mod frame;
pub mod io;
pub mod overlay;
pub mod tonal;
pub mod viewport;
