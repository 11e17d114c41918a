//! Random initial fill: interior noise inside a solid wall ring.

use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::Rng;

use super::grid::Grid;
use crate::types::CellState;

pub fn initialize_grid(
    width: usize,
    height: usize,
    wall_density: u8,
    rng: &mut ChaCha8Rng,
) -> Grid {
    let mut grid = Grid::filled(width, height, CellState::Wall);
    for coord in grid.coords() {
        if grid.is_outer_ring(coord) {
            continue;
        }
        let roll = rng.next_u64() % 100;
        let state = if roll < u64::from(wall_density) { CellState::Wall } else { CellState::Floor };
        grid.set(coord, state);
    }
    grid
}
