//! Generation pipeline: fill, smooth, clean up regions, connect rooms, frame.

use log::{debug, info};

use super::border::{frame_with_border, interior_to_framed};
use super::connectivity::{Connection, connect_to_main_room};
use super::fill::initialize_grid;
use super::model::{Corridor, GeneratedCave, RoomSummary};
use super::rooms::{RoomGraph, build_rooms};
use super::seed::{SeedSource, seeded_rng};
use super::smoothing::smooth;
use super::spawns::reserve_spawn_zones;
use crate::config::{ConfigError, GeneratorConfig};
use crate::types::{CellState, Coord};

pub struct CaveGenerator {
    config: GeneratorConfig,
}

impl CaveGenerator {
    pub fn new(config: GeneratorConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generates from the configured seed text, or from runtime entropy when it is empty.
    pub fn generate(&self) -> GeneratedCave {
        let seed = SeedSource::resolve(&self.config.seed);
        if !seed.is_reproducible() {
            debug!("no seed supplied; using runtime entropy {}", seed.value());
        }
        self.generate_from(seed)
    }

    /// Replays a run from a numeric seed, e.g. one reported by an earlier entropy run.
    pub fn generate_with_seed_value(&self, seed: u64) -> GeneratedCave {
        self.generate_from(SeedSource::Value(seed))
    }

    fn generate_from(&self, seed: SeedSource) -> GeneratedCave {
        let config = &self.config;
        let mut rng = seeded_rng(seed.value());

        let mut grid = initialize_grid(config.width, config.height, config.wall_density, &mut rng);
        smooth(&mut grid, config.smoothing_passes);
        debug!(
            "smoothed {}x{} grid: {} floor cells after {} passes",
            config.width,
            config.height,
            grid.count(CellState::Floor),
            config.smoothing_passes
        );

        let zones = if config.reserve_spawn_zones { reserve_spawn_zones(&mut grid) } else { None };

        let mut graph =
            build_rooms(&mut grid, config.wall_min_region_size, config.floor_min_region_size).graph;
        let connections = connect_to_main_room(&mut grid, &mut graph, config.corridor_radius);
        assert!(graph.all_accessible(), "every room must be reachable from the main room");

        let rooms = summarize_rooms(&graph);
        let corridors = summarize_connections(&graph, &connections);
        let framed = frame_with_border(&grid, config.border_thickness);

        let border = config.border_thickness;
        let surviving_centre = |centre: Coord| {
            let framed_centre = interior_to_framed(centre, border);
            (framed.get(framed_centre) == Some(CellState::Floor)).then_some(framed_centre)
        };
        let player_spawn = zones.and_then(|zones| surviving_centre(zones.player.centre()));
        let goal_spawn = zones.and_then(|zones| surviving_centre(zones.goal.centre()));
        let spawn_zones = zones.map(|zones| zones.offset(border as i32));

        info!(
            "generated {}x{} cave (seed {}, reproducible: {}): {} rooms, {} corridors",
            framed.width(),
            framed.height(),
            seed.value(),
            seed.is_reproducible(),
            rooms.len(),
            corridors.len()
        );

        GeneratedCave {
            seed,
            border_thickness: border,
            grid: framed,
            rooms,
            corridors,
            spawn_zones,
            player_spawn,
            goal_spawn,
        }
    }
}

fn summarize_rooms(graph: &RoomGraph) -> Vec<RoomSummary> {
    graph
        .iter()
        .enumerate()
        .map(|(rank, (_, room))| {
            let mut connected: Vec<usize> =
                room.connections.iter().filter_map(|&other| graph.rank(other)).collect();
            connected.sort_unstable();
            RoomSummary {
                rank,
                size: room.size(),
                edge_tiles: room.edge_tiles.len(),
                is_main: room.is_main,
                connected,
            }
        })
        .collect()
}

fn summarize_connections(graph: &RoomGraph, connections: &[Connection]) -> Vec<Corridor> {
    connections
        .iter()
        .map(|connection| Corridor {
            pending_room: graph.rank(connection.pending).expect("connected room is in the graph"),
            reachable_room: graph
                .rank(connection.reachable)
                .expect("connected room is in the graph"),
            from: connection.from,
            to: connection.to,
        })
        .collect()
}
