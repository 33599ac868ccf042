//! Lume command line renderer.
//!
//! Renders a JSON scene (or the built-in demo) and writes a PPM image.

mod scene;

use anyhow::{Context, Result};
use lume_renderer::{render, render_parallel, save_image};
use scene::SceneDescription;
use std::path::PathBuf;
use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(name = "lume", rename_all = "kebab-case")]
struct Opt {
    /// JSON scene file; renders the demo scene when omitted
    #[structopt(long, parse(from_os_str))]
    scene: Option<PathBuf>,
    /// Output image path
    #[structopt(short, long, parse(from_os_str), default_value = "output.ppm")]
    output: PathBuf,
    /// Override the scene width
    #[structopt(long)]
    width: Option<u32>,
    /// Override the scene height
    #[structopt(long)]
    height: Option<u32>,
    /// Render buckets in parallel
    #[structopt(short, long)]
    parallel: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let opt = Opt::from_args();

    let mut desc = match &opt.scene {
        Some(path) => SceneDescription::load(path)?,
        None => {
            log::info!("No scene given, rendering the demo scene");
            SceneDescription::demo()
        }
    };
    if let Some(width) = opt.width {
        desc.width = width;
    }
    if let Some(height) = opt.height {
        desc.height = height;
    }

    let scene = desc.build()?;

    let image = if opt.parallel {
        render_parallel(&scene.camera, &scene.world, &scene.config)?
    } else {
        render(&scene.camera, &scene.world, &scene.config)?
    };

    save_image(&image, &opt.output)
        .with_context(|| format!("Failed to save image to {}", opt.output.display()))?;

    Ok(())
}
