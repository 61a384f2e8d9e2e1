use std::collections::HashSet;
use std::path::{Path, PathBuf};

use image::ImageFormat;
use tracing::{debug, info};

use crate::error::Result;
use crate::frame::{OutputFrame, SourceImage};

/// Decode any format the `image` crate understands into an RGBA8 source.
pub fn decode_source(path: &Path) -> Result<SourceImage> {
    let decoded = image::open(path)?;
    debug!(
        path = %path.display(),
        width = decoded.width(),
        height = decoded.height(),
        color = ?decoded.color(),
        "Decoded source image"
    );
    SourceImage::new(decoded.into_rgba8())
}

/// Decode an in-memory encoded image (format guessed from the header).
pub fn decode_source_bytes(bytes: &[u8]) -> Result<SourceImage> {
    let decoded = image::load_from_memory(bytes)?;
    SourceImage::new(decoded.into_rgba8())
}

/// Save a rendered frame as 8-bit RGBA PNG.
pub fn save_png(frame: &OutputFrame, path: &Path) -> Result<()> {
    frame.save_with_format(path, ImageFormat::Png)?;
    info!(
        path = %path.display(),
        width = frame.width(),
        height = frame.height(),
        "Saved PNG"
    );
    Ok(())
}

/// `<stem>_graded.png`, or `graded.png` when the source has no usable stem.
pub fn graded_file_name(source: Option<&Path>) -> PathBuf {
    numbered_graded_name(usable_stem(source), 1)
}

fn usable_stem(source: Option<&Path>) -> Option<&str> {
    source
        .and_then(|p| p.file_stem())
        .and_then(|s| s.to_str())
        .filter(|s| !s.is_empty())
}

fn numbered_graded_name(stem: Option<&str>, n: usize) -> PathBuf {
    match (stem, n) {
        (Some(stem), 1) => PathBuf::from(format!("{stem}_graded.png")),
        (Some(stem), n) => PathBuf::from(format!("{stem}_{n}_graded.png")),
        (None, 1) => PathBuf::from("graded.png"),
        (None, n) => PathBuf::from(format!("graded_{n}.png")),
    }
}

/// Output names for a batch, one per source, with no two alike.
///
/// The first source with a given stem keeps `<stem>_graded.png`; later ones
/// get `<stem>_2_graded.png`, `<stem>_3_graded.png` and so on. Names are
/// compared case-insensitively.
pub fn unique_graded_file_names(sources: &[PathBuf]) -> Vec<PathBuf> {
    let mut taken = HashSet::new();
    sources
        .iter()
        .map(|source| {
            let stem = usable_stem(Some(source));
            let mut n = 1;
            let mut name = numbered_graded_name(stem, n);
            while !taken.insert(name.to_string_lossy().to_lowercase()) {
                n += 1;
                name = numbered_graded_name(stem, n);
            }
            if n > 1 {
                debug!(
                    source = %source.display(),
                    output = %name.display(),
                    "Renamed duplicate output"
                );
            }
            name
        })
        .collect()
}
