use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use cavegen::{CaveGenerator, GeneratorConfig};
use clap::{Parser, ValueEnum};
use env_logger::Env;
use log::{debug, info};

mod render;
mod seed_file;
mod settings;

use seed_file::SeedFile;
use settings::{Overrides, load_config};

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

/// Generates a cave level and prints it as text or JSON.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// TOML file with generator options; flags below override it
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Seed text, at most 32 characters. Takes precedence over the seed file and the config file
    #[arg(short, long, value_parser = parse_seed)]
    seed: Option<String>,
    /// File whose first line is the seed; missing or empty means no seed
    #[arg(long)]
    seed_file: Option<PathBuf>,
    /// Write the seed used back to the seed file, or remove it when there was none
    #[arg(long, requires = "seed_file")]
    save_seed: bool,
    #[arg(long)]
    width: Option<usize>,
    #[arg(long)]
    height: Option<usize>,
    #[arg(long)]
    wall_density: Option<u8>,
    #[arg(long)]
    smoothing_passes: Option<u32>,
    #[arg(long)]
    wall_min_region_size: Option<usize>,
    #[arg(long)]
    floor_min_region_size: Option<usize>,
    #[arg(long)]
    corridor_radius: Option<u32>,
    #[arg(long)]
    border: Option<usize>,
    /// Do not force the player and goal corner squares open
    #[arg(long)]
    no_spawn_zones: bool,
    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    format: Format,
    /// Write the rendered cave here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
    #[arg(short, long)]
    verbose: bool,
}

const MAX_SEED_CHARS: usize = 32;

fn parse_seed(raw: &str) -> Result<String, String> {
    let chars = raw.chars().count();
    if chars > MAX_SEED_CHARS {
        return Err(format!("seed is {chars} characters long; the limit is {MAX_SEED_CHARS}"));
    }
    Ok(raw.to_string())
}

fn main() -> Result<()> {
    let args = Args::parse();
    let default_filter = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_filter)).init();

    let base = match &args.config {
        Some(path) => load_config(path)?,
        None => GeneratorConfig::default(),
    };

    let seed_file = args.seed_file.as_ref().map(SeedFile::new);
    let file_seed = match &seed_file {
        Some(store) => store
            .read()
            .with_context(|| format!("Failed to read seed file: {}", store.path().display()))?,
        None => None,
    };
    if let Some(seed) = &file_seed {
        debug!("seed file supplied seed {seed:?}");
    }

    let overrides = Overrides {
        seed: args.seed.clone().or(file_seed),
        width: args.width,
        height: args.height,
        wall_density: args.wall_density,
        smoothing_passes: args.smoothing_passes,
        wall_min_region_size: args.wall_min_region_size,
        floor_min_region_size: args.floor_min_region_size,
        corridor_radius: args.corridor_radius,
        border_thickness: args.border,
        no_spawn_zones: args.no_spawn_zones,
    };
    let config = overrides.apply(base);

    let generator = CaveGenerator::new(config).context("Invalid generator options")?;
    let cave = generator.generate();

    if args.save_seed
        && let Some(store) = &seed_file
    {
        let seed = &generator.config().seed;
        let result = if seed.is_empty() { store.remove() } else { store.write(seed) };
        result.with_context(|| format!("Failed to update seed file: {}", store.path().display()))?;
        info!("saved seed to {}", store.path().display());
    }

    let rendered = match args.format {
        Format::Text => render::render_text(&cave),
        Format::Json => render::render_json(&cave).context("Failed to serialize cave")?,
    };
    match &args.output {
        Some(path) => fs::write(path, rendered)
            .with_context(|| format!("Failed to write output: {}", path.display()))?,
        None => print!("{rendered}"),
    }

    eprintln!("{}", render::summary(&cave));
    Ok(())
}
