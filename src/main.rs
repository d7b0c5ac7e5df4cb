use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

use dinodraw::export::{self, FileSaveConfig};
use dinodraw::script::Script;
use dinodraw::{Config, InputState};

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("DINODRAW_GIT_HASH"),
    ")"
);

#[derive(Parser, Debug)]
#[command(name = "dinodraw")]
#[command(version, long_version = LONG_VERSION)]
#[command(about = "Freehand sketching with markers and glyph stamps")]
struct Cli {
    /// Replay script (TOML list of [[step]] entries)
    #[arg(long, short = 's', value_name = "FILE")]
    script: PathBuf,

    /// Write the PNG here instead of the configured save directory
    #[arg(long, short = 'o', value_name = "FILE")]
    output: Option<PathBuf>,

    /// Export scale relative to the canvas (overrides config)
    #[arg(long, value_name = "N")]
    scale: Option<f64>,

    /// Config file to use instead of ~/.config/dinodraw/config.toml
    #[arg(long, short = 'c', value_name = "FILE")]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    let script = Script::load(&cli.script)?;

    let mut state = InputState::from_config(&config);
    let canvas = cairo::ImageSurface::create(
        cairo::Format::ARgb32,
        state.canvas_width as i32,
        state.canvas_height as i32,
    )
    .context("Failed to create canvas surface")?;
    let mut ctx = cairo::Context::new(&canvas).context("Failed to create canvas context")?;

    let redraws = script.replay(&mut state, &mut ctx, &config.stamp.custom_glyph_default);
    log::info!(
        "Replayed {} steps ({} redraws): {} committed, {} in redo buffer",
        script.steps.len(),
        redraws,
        state.document.drawables().len(),
        state.document.redo_buffer().len()
    );

    let scale = cli.scale.unwrap_or(config.export.scale);
    let png = state.export_png(scale).context("Failed to export drawing")?;

    let path = match &cli.output {
        Some(path) => export::file::write_png(&png, path),
        None => export::save_png(&png, &FileSaveConfig::from(&config.export)),
    }
    .context("Failed to save drawing")?;

    println!("{}", path.display());
    Ok(())
}
