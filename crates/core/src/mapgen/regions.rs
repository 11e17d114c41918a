//! Connected-region segmentation over orthogonal adjacency.
//!
//! Diagonal neighbours are never connected here, even though smoothing samples all eight
//! neighbours. The two adjacency models are deliberately different.

use std::collections::VecDeque;

use super::grid::Grid;
use crate::types::{CellState, Coord};

/// One maximal connected set of same-state cells, in breadth-first discovery order.
pub type Region = Vec<Coord>;

/// Regions are returned in row-major order of their first discovered cell.
pub fn find_regions(grid: &Grid, state: CellState) -> Vec<Region> {
    let mut visited = vec![false; grid.width() * grid.height()];
    let mut regions = Vec::new();
    for coord in grid.coords() {
        if visited[grid.index(coord)] || grid.get(coord) != Some(state) {
            continue;
        }
        regions.push(flood_region(grid, coord, state, &mut visited));
    }
    regions
}

fn flood_region(grid: &Grid, start: Coord, state: CellState, visited: &mut [bool]) -> Region {
    let mut region = Vec::new();
    let mut open = VecDeque::from([start]);
    visited[grid.index(start)] = true;

    while let Some(coord) = open.pop_front() {
        region.push(coord);
        for next in coord.orthogonal_neighbors() {
            if grid.get(next) != Some(state) || visited[grid.index(next)] {
                continue;
            }
            visited[grid.index(next)] = true;
            open.push_back(next);
        }
    }
    region
}
