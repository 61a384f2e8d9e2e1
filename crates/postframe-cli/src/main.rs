mod commands;
mod summary;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "postframe", about = "Framing, poster overlay and tonal grading for 4:5 photos")]
#[command(version)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a poster: framed photo with title and category bands
    Poster(commands::poster::PosterArgs),
    /// Frame and grade one or more photos
    Grade(commands::grade::GradeArgs),
    /// Show image dimensions, luma statistics and the suggested grade
    Info(commands::info::InfoArgs),
    /// Print or save the default editor config as TOML
    Config(commands::config::ConfigArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match &cli.command {
        Commands::Poster(args) => commands::poster::run(args),
        Commands::Grade(args) => commands::grade::run(args),
        Commands::Info(args) => commands::info::run(args),
        Commands::Config(args) => commands::config::run(args),
    }
}
