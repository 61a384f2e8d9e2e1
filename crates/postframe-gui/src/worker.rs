use std::path::Path;
use std::sync::mpsc;
use std::sync::Arc;
use std::time::Instant;

use postframe_core::frame::OutputFrame;
use postframe_core::io::{decode_source, save_png, LoadTicket, Tagged};
use postframe_core::overlay::TextRenderer;
use tracing::{debug, warn};

use crate::messages::{WorkerCommand, WorkerResult};
use crate::states::EditorTab;

/// Spawn the worker thread. Returns the command sender.
pub fn spawn_worker(
    result_tx: mpsc::Sender<WorkerResult>,
    ctx: egui::Context,
) -> mpsc::Sender<WorkerCommand> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<WorkerCommand>();

    std::thread::Builder::new()
        .name("postframe-worker".into())
        .spawn(move || {
            worker_loop(cmd_rx, result_tx, ctx);
        })
        .expect("Failed to spawn worker thread");

    cmd_tx
}

fn send(tx: &mpsc::Sender<WorkerResult>, ctx: &egui::Context, result: WorkerResult) {
    let _ = tx.send(result);
    ctx.request_repaint();
}

fn send_error(tx: &mpsc::Sender<WorkerResult>, ctx: &egui::Context, msg: impl Into<String>) {
    send(tx, ctx, WorkerResult::Error { message: msg.into() });
}

fn worker_loop(
    cmd_rx: mpsc::Receiver<WorkerCommand>,
    tx: mpsc::Sender<WorkerResult>,
    ctx: egui::Context,
) {
    while let Ok(cmd) = cmd_rx.recv() {
        match cmd {
            WorkerCommand::Decode { tab, ticket, path } => {
                handle_decode(tab, ticket, &path, &tx, &ctx);
            }
            WorkerCommand::LoadFont { path } => {
                handle_load_font(&path, &tx, &ctx);
            }
            WorkerCommand::SavePng { frame, path } => {
                handle_save_png(&frame, &path, &tx, &ctx);
            }
        }
    }
}

fn handle_decode(
    tab: EditorTab,
    ticket: LoadTicket,
    path: &Path,
    tx: &mpsc::Sender<WorkerResult>,
    ctx: &egui::Context,
) {
    let start = Instant::now();
    let result = decode_source(path);
    debug!(
        tab = %tab,
        generation = ticket.generation(),
        ok = result.is_ok(),
        elapsed_ms = start.elapsed().as_millis() as u64,
        "Decode finished"
    );
    send(tx, ctx, WorkerResult::Decoded {
        tab,
        path: path.to_path_buf(),
        result: Tagged::new(ticket, result),
    });
}

fn handle_load_font(path: &Path, tx: &mpsc::Sender<WorkerResult>, ctx: &egui::Context) {
    match TextRenderer::from_file(path) {
        Ok(font) => send(tx, ctx, WorkerResult::FontLoaded {
            path: path.to_path_buf(),
            font: Arc::new(font),
        }),
        Err(e) => {
            warn!(path = %path.display(), "Font load failed: {e}");
            send_error(tx, ctx, format!("Failed to load font: {e}"));
        }
    }
}

fn handle_save_png(
    frame: &OutputFrame,
    path: &Path,
    tx: &mpsc::Sender<WorkerResult>,
    ctx: &egui::Context,
) {
    match save_png(frame, path) {
        Ok(()) => send(tx, ctx, WorkerResult::Saved { path: path.to_path_buf() }),
        Err(e) => send_error(tx, ctx, format!("Failed to save {}: {e}", path.display())),
    }
}
