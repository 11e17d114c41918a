pub mod config;
pub mod mapgen;
pub mod types;

pub use config::{ConfigError, GeneratorConfig};
pub use mapgen::{CaveGenerator, GeneratedCave, Grid, SeedSource, generate};
pub use types::*;
