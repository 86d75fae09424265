//! Offline renderer entry point: parse arguments, load the scene
//! description, render, and write the PNG.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;

use glint_core::{Image, SceneDesc};
use glint_renderer::build_scene;

/// Command line arguments structure using clap derive macros
#[derive(Parser)]
#[command(name = "glint")]
#[command(about = "A Whitted ray tracer: renders a JSON scene to a PNG image")]
struct Args {
    /// Scene description file (JSON)
    scene: PathBuf,

    /// Output image; defaults to the scene file with a .png extension
    output: Option<PathBuf>,

    /// Image width in pixels
    #[arg(long, default_value = "400", help = "Image width in pixels")]
    width: u32,

    /// Image height in pixels
    #[arg(long, default_value = "400", help = "Image height in pixels")]
    height: u32,
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let args = Args::parse();
    let output = args
        .output
        .clone()
        .unwrap_or_else(|| args.scene.with_extension("png"));

    let desc = SceneDesc::from_path(&args.scene)
        .with_context(|| format!("failed to read scene {}", args.scene.display()))?;
    let base_dir = args.scene.parent().unwrap_or_else(|| Path::new("."));
    let scene = build_scene(&desc, base_dir)
        .with_context(|| format!("failed to build scene {}", args.scene.display()))?;

    let mut image = Image::new(args.width, args.height);
    scene.render(&mut image);

    image
        .save_png(&output)
        .with_context(|| format!("failed to write {}", output.display()))?;
    log::info!("wrote {}", output.display());

    Ok(())
}
