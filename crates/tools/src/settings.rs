use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use cavegen::GeneratorConfig;

/// Loads a TOML generator config. Missing keys take their defaults.
pub fn load_config(path: &Path) -> Result<GeneratorConfig> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    parse_config(&text).with_context(|| format!("Failed to parse config file: {}", path.display()))
}

pub fn parse_config(text: &str) -> Result<GeneratorConfig> {
    Ok(toml::from_str(text)?)
}

/// Command-line values that override the config file when present.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Overrides {
    pub seed: Option<String>,
    pub width: Option<usize>,
    pub height: Option<usize>,
    pub wall_density: Option<u8>,
    pub smoothing_passes: Option<u32>,
    pub wall_min_region_size: Option<usize>,
    pub floor_min_region_size: Option<usize>,
    pub corridor_radius: Option<u32>,
    pub border_thickness: Option<usize>,
    pub no_spawn_zones: bool,
}

impl Overrides {
    pub fn apply(self, mut config: GeneratorConfig) -> GeneratorConfig {
        if let Some(seed) = self.seed {
            config.seed = seed;
        }
        config.width = self.width.unwrap_or(config.width);
        config.height = self.height.unwrap_or(config.height);
        config.wall_density = self.wall_density.unwrap_or(config.wall_density);
        config.smoothing_passes = self.smoothing_passes.unwrap_or(config.smoothing_passes);
        config.wall_min_region_size =
            self.wall_min_region_size.unwrap_or(config.wall_min_region_size);
        config.floor_min_region_size =
            self.floor_min_region_size.unwrap_or(config.floor_min_region_size);
        config.corridor_radius = self.corridor_radius.unwrap_or(config.corridor_radius);
        config.border_thickness = self.border_thickness.unwrap_or(config.border_thickness);
        if self.no_spawn_zones {
            config.reserve_spawn_zones = false;
        }
        config
    }
}
