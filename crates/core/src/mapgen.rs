//! Cave generation: seeded noise, automaton smoothing, region cleanup, and room connection.
//!
//! Stages run in this order on a grid owned by one run:
//! [`fill`] → [`smoothing`] → [`spawns`] → [`rooms`] (via [`regions`]) → [`connectivity`]
//! (via [`corridor`]) → [`border`].

pub mod border;
pub mod connectivity;
pub mod corridor;
pub mod fill;
pub mod model;
pub mod regions;
pub mod rooms;
pub mod smoothing;
pub mod spawns;

mod generator;
mod grid;
mod seed;

pub use generator::CaveGenerator;
pub use grid::Grid;
pub use model::{Corridor, GeneratedCave, RoomSummary};
pub use seed::{SeedSource, fnv1a_64};

use crate::config::{ConfigError, GeneratorConfig};

pub fn generate(config: GeneratorConfig) -> Result<GeneratedCave, ConfigError> {
    Ok(CaveGenerator::new(config)?.generate())
}
