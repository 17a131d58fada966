use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use lux_core::{load_scene_from_value, SceneDescription};
use lux_renderer::{RayTracer, RenderConfig, Scene};

mod demo;

const DEFAULT_OUTPUT: &str = "output.png";

#[derive(Parser, Debug)]
#[command(name = "lux")]
#[command(about = "Phong ray tracer", long_about = None)]
#[command(after_help = "The output format is chosen from the file extension (png, ppm, ...).")]
struct Cli {
    /// JSON scene description
    #[arg(required_unless_present = "demo")]
    scene: Option<PathBuf>,

    /// Output image (defaults to the scene's `image.output`, then output.png)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Render the built-in demo scene
    #[arg(long, conflicts_with = "scene")]
    demo: bool,

    /// Seed for the demo scene's random spheres
    #[arg(long, default_value_t = demo::DEFAULT_SEED)]
    seed: u64,

    /// Render on the calling thread only
    #[arg(long)]
    serial: bool,
}

/// Load the scene description and the optional `render` section of a scene file.
fn load_file(path: &Path) -> Result<(SceneDescription, RenderConfig)> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read scene file {}", path.display()))?;
    let mut value: serde_json::Value = serde_json::from_str(&contents)
        .with_context(|| format!("Failed to parse {}", path.display()))?;

    let config = match value.get_mut("render") {
        Some(section) => serde_json::from_value(section.take())
            .with_context(|| format!("Invalid render settings in {}", path.display()))?,
        None => RenderConfig::default(),
    };
    let description = load_scene_from_value(value)
        .with_context(|| format!("Failed to load scene {}", path.display()))?;

    Ok((description, config))
}

fn run(cli: Cli) -> Result<PathBuf> {
    // Without a scene file the parser only accepts `--demo`
    let (description, mut config) = match &cli.scene {
        Some(path) => load_file(path)?,
        None => (demo::build_demo_scene(cli.seed), RenderConfig::default()),
    };
    if cli.serial {
        config.parallel = false;
    }

    let camera = description.camera().context("Invalid camera")?;
    let scene = Scene::from_description(&description).context("Failed to build scene")?;

    let output = cli
        .output
        .or_else(|| description.image.output.as_ref().map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT));

    RayTracer::new(&scene)
        .with_config(config)
        .render_to_file(
            &camera,
            description.image.width,
            description.image.height,
            &output,
        )
        .with_context(|| format!("Failed to render to {}", output.display()))?;

    Ok(output)
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let cli = Cli::parse();

    log::info!("Starting Lux");
    let output = run(cli)?;
    println!("Saved to {}", output.display());

    Ok(())
}
