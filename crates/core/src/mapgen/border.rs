//! Wall margin around the finished interior.

use super::grid::Grid;
use crate::types::{CellState, Coord};

/// Copies `interior` into a larger grid with a solid wall margin `thickness` cells wide.
pub fn frame_with_border(interior: &Grid, thickness: usize) -> Grid {
    let mut framed = Grid::filled(
        interior.width() + 2 * thickness,
        interior.height() + 2 * thickness,
        CellState::Wall,
    );
    let offset = thickness as i32;
    for coord in interior.coords() {
        if let Some(state) = interior.get(coord) {
            framed.set(coord.offset(offset, offset), state);
        }
    }
    framed
}

pub fn interior_to_framed(coord: Coord, thickness: usize) -> Coord {
    coord.offset(thickness as i32, thickness as i32)
}
