pub mod image_io;
pub mod loader;
pub mod queue;

pub use image_io::{
    decode_source, decode_source_bytes, graded_file_name, save_png, unique_graded_file_names,
};
pub use loader::{LoadTicket, LoadTracker, Tagged};
pub use queue::UploadQueue;
