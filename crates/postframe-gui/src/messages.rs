use std::path::PathBuf;
use std::sync::Arc;

use postframe_core::config::EditorConfig;
use postframe_core::error::Result;
use postframe_core::frame::{OutputFrame, SourceImage};
use postframe_core::io::{LoadTicket, Tagged};
use postframe_core::overlay::TextRenderer;

use crate::states::EditorTab;

/// Commands sent from UI thread to worker thread.
pub enum WorkerCommand {
    /// Decode a photo for one of the editors.
    Decode {
        tab: EditorTab,
        ticket: LoadTicket,
        path: PathBuf,
    },

    /// Read a TTF/OTF file for the overlay text.
    LoadFont { path: PathBuf },

    /// Encode an already rendered frame as PNG.
    SavePng { frame: OutputFrame, path: PathBuf },
}

/// Results sent back to the UI thread, by the worker or by dialog threads.
pub enum WorkerResult {
    Decoded {
        tab: EditorTab,
        path: PathBuf,
        result: Tagged<Result<SourceImage>>,
    },
    FontLoaded {
        path: PathBuf,
        font: Arc<TextRenderer>,
    },
    /// Files picked in an open dialog.
    FilesChosen { tab: EditorTab, paths: Vec<PathBuf> },
    /// Target picked in a save dialog (a file for the poster, a folder for grades).
    ExportChosen { tab: EditorTab, path: PathBuf },
    ConfigImported { config: EditorConfig },
    Saved { path: PathBuf },
    Error { message: String },
}
