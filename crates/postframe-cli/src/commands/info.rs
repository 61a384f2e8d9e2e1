use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use postframe_core::autograde::luma_stats;
use postframe_core::editor::GradeEditor;
use postframe_core::io::decode_source;
use postframe_core::viewport::fit::{contain_scale, cover_scale};

use super::load_config;

#[derive(Args)]
pub struct InfoArgs {
    /// Input image
    pub file: PathBuf,

    /// Editor config (TOML); defaults are used when omitted
    #[arg(long)]
    pub config: Option<PathBuf>,
}

pub fn run(args: &InfoArgs) -> Result<()> {
    let config = load_config(args.config.as_deref())?;
    let source = decode_source(&args.file)
        .with_context(|| format!("Failed to load {}", args.file.display()))?;

    let (w, h) = (source.width(), source.height());
    let frame = config.frame;
    println!("File:         {}", args.file.display());
    println!("Dimensions:   {}x{}", w, h);
    println!("Aspect:       {:.3}", w as f64 / h as f64);
    println!("Frame:        {}x{}", frame.width, frame.height);
    println!("Fit scale:    {:.4}", contain_scale(source.size(), frame));
    println!("Cover scale:  {:.4}", cover_scale(source.size(), frame));

    let mut editor = GradeEditor::new(&config);
    editor.set_source(source);
    let suggested = editor.auto_grade();

    if let Some(stats) = editor
        .base()
        .and_then(|base| luma_stats(base.pixels(), config.auto_grade.sample_stride))
    {
        println!("Luma mean:    {:.2}", stats.mean);
        println!("Luma std:     {:.2}", stats.std);
        println!("Samples:      {}", stats.samples);
    }
    match suggested {
        Some(params) => println!("Auto-grade:   {}", params),
        None => println!("Auto-grade:   n/a"),
    }

    Ok(())
}
