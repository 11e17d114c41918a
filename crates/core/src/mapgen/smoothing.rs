//! Cellular-automaton smoothing that turns fill noise into cave shapes.
//!
//! Each pass counts walls in the 8-cell Moore neighbourhood of every cell, reading the
//! previous pass's grid. Neighbours outside the grid count as wall, which pulls the edges
//! toward solid rock.

use super::grid::Grid;
use crate::types::{CellState, Coord};

const BIRTH_THRESHOLD: u8 = 4;

pub fn smooth(grid: &mut Grid, passes: u32) {
    for _ in 0..passes {
        *grid = smoothing_pass(grid);
    }
}

fn smoothing_pass(previous: &Grid) -> Grid {
    let mut next = previous.clone();
    for coord in previous.coords() {
        let walls = surrounding_wall_count(previous, coord);
        if walls > BIRTH_THRESHOLD {
            next.set(coord, CellState::Wall);
        } else if walls < BIRTH_THRESHOLD {
            next.set(coord, CellState::Floor);
        }
    }
    next
}

pub fn surrounding_wall_count(grid: &Grid, coord: Coord) -> u8 {
    let mut walls = 0;
    for dy in -1..=1 {
        for dx in -1..=1 {
            if dx == 0 && dy == 0 {
                continue;
            }
            if grid.cell_or_wall(coord.offset(dx, dy)) == CellState::Wall {
                walls += 1;
            }
        }
    }
    walls
}
