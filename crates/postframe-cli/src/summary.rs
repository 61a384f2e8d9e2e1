use std::path::{Path, PathBuf};

use console::Style;
use postframe_core::frame::FrameSize;
use postframe_core::overlay::Category;
use postframe_core::tonal::TonalParams;
use postframe_core::viewport::ViewportTransform;

struct Styles {
    title: Style,
    label: Style,
    value: Style,
    method: Style,
    disabled: Style,
    error: Style,
    path: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            method: Style::new().green(),
            disabled: Style::new().dim().yellow(),
            error: Style::new().red().bold(),
            path: Style::new().underlined(),
        }
    }
}

fn rule(s: &Styles, text: &str) {
    println!();
    println!("  {}", s.title.apply_to(text));
    println!("  {}", s.title.apply_to("\u{2550}".repeat(text.chars().count())));
    println!();
}

pub struct PosterSummary<'a> {
    pub input: &'a Path,
    pub output: &'a Path,
    pub source_size: (u32, u32),
    pub frame: FrameSize,
    pub transform: ViewportTransform,
    pub title: &'a str,
    pub category: Category,
    pub has_font: bool,
}

pub fn print_poster_summary(summary: &PosterSummary<'_>) {
    let s = Styles::new();
    rule(&s, "Postframe Poster");

    println!("  {:<14}{}", s.label.apply_to("Input"), s.path.apply_to(summary.input.display()));
    println!("  {:<14}{}", s.label.apply_to("Output"), s.path.apply_to(summary.output.display()));
    println!(
        "  {:<14}{}",
        s.label.apply_to("Source"),
        s.value
            .apply_to(format!("{}x{}", summary.source_size.0, summary.source_size.1))
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Frame"),
        s.value
            .apply_to(format!("{}x{}", summary.frame.width, summary.frame.height))
    );
    let t = summary.transform;
    println!(
        "  {:<14}{}",
        s.label.apply_to("Transform"),
        s.value.apply_to(format!(
            "scale {:.4}, offset ({:.1}, {:.1})",
            t.scale, t.translate_x, t.translate_y
        ))
    );
    if summary.title.trim().is_empty() {
        println!("  {:<14}{}", s.label.apply_to("Title"), s.disabled.apply_to("(empty)"));
    } else {
        println!("  {:<14}{}", s.label.apply_to("Title"), s.value.apply_to(summary.title));
    }
    println!(
        "  {:<14}{} {}",
        s.label.apply_to("Category"),
        s.method.apply_to(summary.category),
        s.label.apply_to(format!("({})", summary.category.label()))
    );
    if !summary.has_font {
        println!("  {:<14}{}", s.label.apply_to("Text"), s.disabled.apply_to("skipped (no font)"));
    }
    println!();
}

/// Outcome for one photo of a grade batch.
pub struct GradeResult {
    pub input: PathBuf,
    pub output: Option<PathBuf>,
    pub auto: Option<TonalParams>,
    pub params: TonalParams,
    pub error: Option<String>,
}

impl GradeResult {
    pub fn failed(input: &Path, error: String) -> Self {
        Self {
            input: input.to_path_buf(),
            output: None,
            auto: None,
            params: TonalParams::default(),
            error: Some(error),
        }
    }
}

pub fn print_grade_summary(results: &[GradeResult]) {
    let s = Styles::new();
    rule(&s, "Postframe Grade");

    for r in results {
        let name = r
            .input
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| r.input.display().to_string());
        println!("  {}", s.value.apply_to(name));

        if let Some(ref err) = r.error {
            println!("    {:<12}{}", s.label.apply_to("Error"), s.error.apply_to(err));
            continue;
        }
        match r.auto {
            Some(auto) => println!("    {:<12}{}", s.label.apply_to("Auto"), s.method.apply_to(auto)),
            None => println!("    {:<12}{}", s.label.apply_to("Auto"), s.disabled.apply_to("off")),
        }
        println!("    {:<12}{}", s.label.apply_to("Applied"), s.value.apply_to(r.params));
        if let Some(ref out) = r.output {
            println!("    {:<12}{}", s.label.apply_to("Output"), s.path.apply_to(out.display()));
        }
    }

    let ok = results.iter().filter(|r| r.error.is_none()).count();
    println!();
    println!(
        "  {:<14}{}",
        s.label.apply_to("Done"),
        s.value.apply_to(format!("{ok}/{}", results.len()))
    );
    println!();
}
