//! Public output model of a generation run.

use serde::Serialize;
use xxhash_rust::xxh3::xxh3_64;

use super::grid::Grid;
use super::seed::SeedSource;
use super::spawns::SpawnZones;
use crate::types::{CellState, Coord};

/// A surviving room, identified by its rank in size order (0 is the main room).
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RoomSummary {
    pub rank: usize,
    pub size: usize,
    pub edge_tiles: usize,
    pub is_main: bool,
    pub connected: Vec<usize>,
}

/// A carved corridor. Endpoints are interior coordinates, before the border offset.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Corridor {
    pub pending_room: usize,
    pub reachable_room: usize,
    pub from: Coord,
    pub to: Coord,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GeneratedCave {
    pub seed: SeedSource,
    pub border_thickness: usize,
    /// Final grid including the border margin.
    pub grid: Grid,
    pub rooms: Vec<RoomSummary>,
    pub corridors: Vec<Corridor>,
    /// Reserved spawn squares in output coordinates.
    pub spawn_zones: Option<SpawnZones>,
    /// Centre of the player zone, when it survived as floor.
    pub player_spawn: Option<Coord>,
    /// Centre of the goal zone, when it survived as floor.
    pub goal_spawn: Option<Coord>,
}

impl GeneratedCave {
    pub fn width(&self) -> usize {
        self.grid.width()
    }

    pub fn height(&self) -> usize {
        self.grid.height()
    }

    pub fn is_reproducible(&self) -> bool {
        self.seed.is_reproducible()
    }

    pub fn cell_at(&self, coord: Coord) -> CellState {
        self.grid.cell_or_wall(coord)
    }

    pub fn main_room(&self) -> Option<&RoomSummary> {
        self.rooms.iter().find(|room| room.is_main)
    }

    pub fn canonical_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::new();
        bytes.extend(self.seed.value().to_le_bytes());
        bytes.extend((self.grid.width() as u32).to_le_bytes());
        bytes.extend((self.grid.height() as u32).to_le_bytes());
        bytes.extend((self.border_thickness as u32).to_le_bytes());
        for cell in self.grid.cells() {
            bytes.push(match cell {
                CellState::Floor => 0,
                CellState::Wall => 1,
            });
        }

        bytes.extend((self.rooms.len() as u32).to_le_bytes());
        for room in &self.rooms {
            bytes.extend((room.size as u32).to_le_bytes());
            bytes.extend((room.edge_tiles as u32).to_le_bytes());
            bytes.push(u8::from(room.is_main));
        }

        bytes.extend((self.corridors.len() as u32).to_le_bytes());
        for corridor in &self.corridors {
            bytes.extend((corridor.pending_room as u32).to_le_bytes());
            bytes.extend((corridor.reachable_room as u32).to_le_bytes());
            for coord in [corridor.from, corridor.to] {
                bytes.extend(coord.x.to_le_bytes());
                bytes.extend(coord.y.to_le_bytes());
            }
        }

        for spawn in [self.player_spawn, self.goal_spawn] {
            match spawn {
                Some(coord) => {
                    bytes.push(1);
                    bytes.extend(coord.x.to_le_bytes());
                    bytes.extend(coord.y.to_le_bytes());
                }
                None => bytes.push(0),
            }
        }
        bytes
    }

    pub fn fingerprint(&self) -> u64 {
        xxh3_64(&self.canonical_bytes())
    }
}
