//! Command-line entry point for the DEM relief viewer.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use relief_common::ReadWindow;

#[derive(Parser, Debug)]
#[command(name = "relief-view")]
#[command(about = "Render a DEM raster as an interactive 3D surface")]
struct Args {
    /// GeoTIFF elevation raster to display
    path: PathBuf,

    /// Column offset of the read window
    #[arg(long, default_value_t = 0)]
    x_off: usize,

    /// Row offset of the read window
    #[arg(long, default_value_t = 0)]
    y_off: usize,

    /// Window width in pixels (default: to the raster's right edge)
    #[arg(long)]
    width: Option<usize>,

    /// Window height in pixels (default: to the raster's bottom edge)
    #[arg(long)]
    height: Option<usize>,

    /// Vertical exaggeration applied to elevations
    #[arg(short, long, default_value_t = 1.0)]
    scale: f64,

    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let level = match args.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("failed to install tracing subscriber")?;

    let window = ReadWindow {
        x_off: args.x_off,
        y_off: args.y_off,
        width: args.width,
        height: args.height,
    };

    relief_view::render_from_path(&args.path, window, args.scale)
        .with_context(|| format!("failed to display {}", args.path.display()))?;
    Ok(())
}
