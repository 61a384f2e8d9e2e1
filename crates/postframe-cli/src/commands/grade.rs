use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use postframe_core::config::EditorConfig;
use postframe_core::editor::GradeEditor;
use postframe_core::io::{decode_source, unique_graded_file_names};
use postframe_core::tonal::{TonalParam, TonalParams};
use rayon::prelude::*;
use tracing::warn;

use super::{apply_framing, load_config};
use crate::summary::{print_grade_summary, GradeResult};

#[derive(Args)]
pub struct GradeArgs {
    /// Source photos
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Brightness (-40 to 40)
    #[arg(long, allow_hyphen_values = true)]
    pub brightness: Option<i32>,

    /// Contrast (-40 to 40)
    #[arg(long, allow_hyphen_values = true)]
    pub contrast: Option<i32>,

    /// Saturation (-40 to 40)
    #[arg(long, allow_hyphen_values = true)]
    pub saturation: Option<i32>,

    /// Clarity (0 to 40)
    #[arg(long)]
    pub clarity: Option<i32>,

    /// Run auto-grade first; explicit values above override it
    #[arg(long)]
    pub auto: bool,

    /// Zoom relative to the fitted size (1.0 = fit)
    #[arg(long)]
    pub zoom: Option<f64>,

    /// Pan in output pixels: "dx,dy"
    #[arg(long, allow_hyphen_values = true)]
    pub pan: Option<String>,

    /// Editor config (TOML); defaults are used when omitted
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Output directory
    #[arg(short, long, default_value = ".")]
    pub output: PathBuf,
}

impl GradeArgs {
    fn manual(&self) -> impl Iterator<Item = (TonalParam, i32)> + '_ {
        [
            (TonalParam::Brightness, self.brightness),
            (TonalParam::Contrast, self.contrast),
            (TonalParam::Saturation, self.saturation),
            (TonalParam::Clarity, self.clarity),
        ]
        .into_iter()
        .filter_map(|(param, value)| value.map(|v| (param, v)))
    }
}

pub fn run(args: &GradeArgs) -> Result<()> {
    let config = load_config(args.config.as_deref())?;
    if let Some(ref pan) = args.pan {
        super::parse_pan(pan)?;
    }
    std::fs::create_dir_all(&args.output)
        .with_context(|| format!("Failed to create {}", args.output.display()))?;

    println!("Grading {} image(s) into {}", args.files.len(), args.output.display());

    let pb = ProgressBar::new(args.files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("Grading [{bar:40}] {pos}/{len} {msg}")
            .unwrap()
            .progress_chars("=> "),
    );

    let names = unique_graded_file_names(&args.files);
    let results: Vec<GradeResult> = args
        .files
        .par_iter()
        .zip(names.par_iter())
        .map(|(file, name)| {
            let result = grade_one(file, &args.output.join(name), args, &config);
            pb.inc(1);
            match result {
                Ok(r) => r,
                Err(e) => {
                    warn!("{}: {e:#}", file.display());
                    GradeResult::failed(file, format!("{e:#}"))
                }
            }
        })
        .collect();
    pb.finish_and_clear();

    print_grade_summary(&results);

    let failures = results.iter().filter(|r| r.error.is_some()).count();
    if failures > 0 {
        anyhow::bail!("{failures} of {} image(s) failed", results.len());
    }
    Ok(())
}

fn grade_one(
    file: &Path,
    output: &Path,
    args: &GradeArgs,
    config: &EditorConfig,
) -> Result<GradeResult> {
    let source =
        decode_source(file).with_context(|| format!("Failed to load {}", file.display()))?;

    let mut editor = GradeEditor::new(config);
    editor.set_queue(vec![file.to_path_buf()]);
    editor.set_source(source);
    apply_framing(
        editor.session_mut().controller_mut(),
        config.frame,
        args.zoom,
        args.pan.as_deref(),
    )?;

    let auto = if args.auto { editor.auto_grade() } else { None };
    for (param, value) in args.manual() {
        editor.set_param(param, value);
    }
    let params: TonalParams = editor.params();

    editor
        .export_png_to(output)
        .with_context(|| format!("Failed to export {}", file.display()))?;

    Ok(GradeResult {
        input: file.to_path_buf(),
        output: Some(output.to_path_buf()),
        auto,
        params,
        error: None,
    })
}
