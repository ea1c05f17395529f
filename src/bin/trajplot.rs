use std::path::PathBuf;

use anyhow::Context as _;
use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Render planner results as PNG snapshots and MP4 animations.
///
/// With no arguments, reads `results/<name>_data.txt` / `results/<name>_path.txt` for the six
/// built-in scenarios and writes `images/<name>.png` and `videos/<name>.mp4`.
#[derive(Parser, Debug)]
#[command(name = "trajplot", version)]
struct Cli {
    /// JSON scene configuration (omitted fields keep their defaults).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Directory containing `<name>_data.txt` and `<name>_path.txt`.
    #[arg(long)]
    results_dir: Option<PathBuf>,

    /// Directory receiving PNG snapshots.
    #[arg(long)]
    images_dir: Option<PathBuf>,

    /// Directory receiving MP4 animations.
    #[arg(long)]
    videos_dir: Option<PathBuf>,

    /// Only render this scenario (repeatable).
    #[arg(long = "only", value_name = "NAME")]
    only: Vec<String>,

    /// Skip MP4 output (no `ffmpeg` needed).
    #[arg(long)]
    no_video: bool,

    /// Create missing output directories.
    #[arg(long)]
    create_dirs: bool,

    /// Extra directory of font files for axis text (system fonts are always loaded).
    #[arg(long)]
    font_dir: Option<PathBuf>,

    /// Print each scenario's path length to stdout.
    #[arg(long)]
    print_lengths: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut cfg = match &cli.config {
        Some(path) => trajplot::SceneConfig::from_path(path)
            .with_context(|| format!("load config '{}'", path.display()))?,
        None => trajplot::SceneConfig::default(),
    };
    if let Some(dir) = cli.results_dir {
        cfg.results_dir = dir;
    }
    if let Some(dir) = cli.images_dir {
        cfg.images_dir = dir;
    }
    if let Some(dir) = cli.videos_dir {
        cfg.videos_dir = dir;
    }
    if cli.create_dirs {
        cfg.create_output_dirs = true;
    }

    let chrome = match &cli.font_dir {
        Some(dir) => trajplot::ChromeRasterizer::with_font_dir(dir),
        None => trajplot::ChromeRasterizer::with_system_fonts(),
    };
    if chrome.font_faces() == 0 {
        tracing::warn!("no fonts found; tick and axis labels will be omitted");
    }
    let plotter = trajplot::Plotter::with_chrome(cfg, chrome)?;
    tracing::debug!(scenarios = ?plotter.config().scenarios, "configuration loaded");

    let opts = trajplot::RunOpts {
        only: (!cli.only.is_empty()).then_some(cli.only),
        skip_video: cli.no_video,
    };
    let reports = plotter.run_all(&opts)?;

    if cli.print_lengths {
        for r in &reports {
            println!("{},{}", r.name, r.path_length);
        }
    }
    Ok(())
}
