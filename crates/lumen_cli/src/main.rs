mod cli;
mod demo;

use std::path::Path;
use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use lumen_core::{Color, Texture};
use lumen_renderer::{RenderConfig, Raytracer};

use crate::cli::Args;

fn load_config(path: Option<&Path>) -> Result<RenderConfig> {
    let Some(path) = path else {
        return Ok(RenderConfig::default());
    };

    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    let config = serde_json::from_str(&text)
        .with_context(|| format!("Failed to parse config {}", path.display()))?;
    log::info!("Loaded render config from {}", path.display());
    Ok(config)
}

fn load_floor_texture(path: Option<&Path>) -> Result<Arc<Texture>> {
    let texture = match path {
        Some(path) => Texture::load(path)
            .with_context(|| format!("Failed to load floor texture {}", path.display()))?,
        None => Texture::checkerboard(256, 16, Color::splat(0.95), Color::splat(0.25)),
    };
    Ok(Arc::new(texture))
}

/// Write a bottom-row-first RGBA buffer as a top-row-first PNG.
fn save_png(path: &Path, width: u32, height: u32, buffer: Vec<u8>) -> Result<()> {
    let image = image::RgbaImage::from_raw(width, height, buffer)
        .context("Render buffer does not match the image size")?;
    image::imageops::flip_vertical(&image)
        .save(path)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();

    env_logger::Builder::from_default_env()
        .filter_level(args.log_level.into())
        .init();

    log::info!("Starting Lumen");

    let mut config = load_config(args.config.as_deref())?;
    if let Some(max_depth) = args.max_depth {
        config.max_depth = max_depth;
    }
    config.parallel |= args.parallel;

    let floor = load_floor_texture(args.texture.as_deref())?;
    let scene = demo::demo_scene(floor, args.width as f32 / args.height.max(1) as f32);

    let tracer = Raytracer::new(&scene, config).context("Demo scene failed validation")?;
    let mut job = tracer.initialize(args.width, args.height)?;
    let mut buffer = job.allocate_buffer();

    let budget = args.budget_ms.map(Duration::from_millis);
    let start = Instant::now();
    let mut slices = 0u32;
    while !tracer.render(&mut job, &mut buffer, budget)? {
        slices += 1;
        log::debug!("Slice {} ended at {:.0}%", slices, job.progress() * 100.0);
    }

    log::info!(
        "Rendered {}x{} in {:.2?} ({} slices)",
        args.width,
        args.height,
        start.elapsed(),
        slices + 1
    );

    save_png(&args.output, job.width(), job.height(), buffer)?;
    log::info!("Saved {}", args.output.display());

    Ok(())
}
