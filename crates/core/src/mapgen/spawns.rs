//! Reserved floor squares near opposite corners for player and goal placement.
//!
//! The squares sit between 5% and 15% of each axis from their corner, clamped into the
//! interior. They are opened before region cleanup, so on small grids cleanup can still
//! reclaim them.

use serde::Serialize;

use super::grid::Grid;
use crate::types::{CellState, Coord};

/// Inclusive rectangle of cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct SpawnZone {
    pub min: Coord,
    pub max: Coord,
}

impl SpawnZone {
    pub fn centre(self) -> Coord {
        Coord::new((self.min.x + self.max.x) / 2, (self.min.y + self.max.y) / 2)
    }

    pub fn contains(self, coord: Coord) -> bool {
        (self.min.x..=self.max.x).contains(&coord.x)
            && (self.min.y..=self.max.y).contains(&coord.y)
    }

    pub fn offset(self, by: i32) -> Self {
        Self { min: self.min.offset(by, by), max: self.max.offset(by, by) }
    }

    fn cells(self) -> impl Iterator<Item = Coord> {
        (self.min.y..=self.max.y)
            .flat_map(move |y| (self.min.x..=self.max.x).map(move |x| Coord::new(x, y)))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct SpawnZones {
    pub player: SpawnZone,
    pub goal: SpawnZone,
}

impl SpawnZones {
    /// `None` when the grid has no interior (either side under 3 cells).
    pub fn for_dimensions(width: usize, height: usize) -> Option<Self> {
        if width < 3 || height < 3 {
            return None;
        }
        let (near_x, far_x) = axis_spans(width);
        let (near_y, far_y) = axis_spans(height);
        Some(Self {
            player: SpawnZone {
                min: Coord::new(near_x.0, near_y.0),
                max: Coord::new(near_x.1, near_y.1),
            },
            goal: SpawnZone {
                min: Coord::new(far_x.0, far_y.0),
                max: Coord::new(far_x.1, far_y.1),
            },
        })
    }

    pub fn offset(self, by: i32) -> Self {
        Self { player: self.player.offset(by), goal: self.goal.offset(by) }
    }
}

/// Near and far spans along one axis of length `len`, clamped into `1..=len - 2`.
fn axis_spans(len: usize) -> ((i32, i32), (i32, i32)) {
    let inner_low = 1_usize;
    let inner_high = len - 2;
    let clamp = |value: usize| value.clamp(inner_low, inner_high) as i32;
    let near_offset = len / 20;
    let far_offset = len * 3 / 20;
    (
        (clamp(near_offset), clamp(far_offset)),
        (clamp(len - far_offset), clamp(len - near_offset)),
    )
}

pub fn reserve_spawn_zones(grid: &mut Grid) -> Option<SpawnZones> {
    let zones = SpawnZones::for_dimensions(grid.width(), grid.height())?;
    for zone in [zones.player, zones.goal] {
        for cell in zone.cells() {
            grid.set(cell, CellState::Floor);
        }
    }
    Some(zones)
}
