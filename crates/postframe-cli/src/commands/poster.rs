use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Args;
use postframe_core::editor::PosterEditor;
use postframe_core::io::decode_source;
use postframe_core::overlay::{Category, TextRenderer};

use super::{apply_framing, load_config};
use crate::summary::{print_poster_summary, PosterSummary};

#[derive(Args)]
pub struct PosterArgs {
    /// Source photo
    pub file: PathBuf,

    /// Title shown in the dark bar
    #[arg(long, default_value = "")]
    pub title: String,

    /// Category band: active, youth, performance or community
    #[arg(long, default_value = "active")]
    pub category: Category,

    /// Zoom relative to the fitted size (1.0 = fit)
    #[arg(long)]
    pub zoom: Option<f64>,

    /// Pan in output pixels: "dx,dy" (e.g. "0,-120")
    #[arg(long, allow_hyphen_values = true)]
    pub pan: Option<String>,

    /// TrueType/OpenType font for the title and label text
    #[arg(long)]
    pub font: Option<PathBuf>,

    /// Editor config (TOML); defaults are used when omitted
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Output file path
    #[arg(short, long, default_value = "poster.png")]
    pub output: PathBuf,
}

pub fn run(args: &PosterArgs) -> Result<()> {
    let config = load_config(args.config.as_deref())?;
    let mut editor = PosterEditor::new(&config);

    if let Some(ref font_path) = args.font {
        let font = TextRenderer::from_file(font_path)
            .with_context(|| format!("Failed to load font {}", font_path.display()))?;
        editor.set_font(Some(Arc::new(font)));
    } else {
        println!("No --font given: bands are drawn without text");
    }

    let source = decode_source(&args.file)
        .with_context(|| format!("Failed to load {}", args.file.display()))?;
    println!("Loaded {}x{} image", source.width(), source.height());
    let source_size = (source.width(), source.height());

    editor.session_mut().set_source(source);
    apply_framing(
        editor.session_mut().controller_mut(),
        config.frame,
        args.zoom,
        args.pan.as_deref(),
    )?;
    editor.set_title(args.title.clone());
    editor.set_category(args.category);

    editor
        .export_png(&args.output)
        .with_context(|| format!("Failed to write {}", args.output.display()))?;

    print_poster_summary(&PosterSummary {
        input: &args.file,
        output: &args.output,
        source_size,
        frame: config.frame,
        transform: editor.session().controller().transform(),
        title: editor.title(),
        category: editor.category(),
        has_font: editor.has_font(),
    });
    Ok(())
}
