//! Corridor rasterization and carving.

use super::grid::Grid;
use crate::types::{CellState, Coord};

/// Integer line from `from` to `to`, both endpoints included.
///
/// The axis with the larger delta drives the walk; the other axis steps once the accumulated
/// error reaches the driving magnitude.
pub fn line(from: Coord, to: Coord) -> Vec<Coord> {
    let dx = to.x - from.x;
    let dy = to.y - from.y;

    let steep = dy.abs() > dx.abs();
    let (longest, shortest, step, gradient_step) = if steep {
        (dy.abs(), dx.abs(), dy.signum(), dx.signum())
    } else {
        (dx.abs(), dy.abs(), dx.signum(), dy.signum())
    };

    let mut points = Vec::with_capacity(longest as usize + 1);
    let mut current = from;
    let mut accumulated = longest / 2;
    for _ in 0..longest {
        points.push(current);
        if steep {
            current.y += step;
        } else {
            current.x += step;
        }
        accumulated += shortest;
        if accumulated >= longest {
            if steep {
                current.x += gradient_step;
            } else {
                current.y += gradient_step;
            }
            accumulated -= longest;
        }
    }
    points.push(current);
    points
}

/// Sets every in-bounds cell within `radius` (Euclidean, inclusive) of `centre` to floor.
///
/// The scan is clipped to the grid, so the cost is bounded by the grid size for any radius.
pub fn stamp_disk(grid: &mut Grid, centre: Coord, radius: u32) {
    let r = i64::from(radius);
    let r_squared = u64::from(radius).pow(2);
    let (cx, cy) = (i64::from(centre.x), i64::from(centre.y));
    let x_range = (cx - r).max(0)..=(cx + r).min(grid.width() as i64 - 1);
    let y_range = (cy - r).max(0)..=(cy + r).min(grid.height() as i64 - 1);

    for y in y_range {
        for x in x_range.clone() {
            let distance_squared = (x - cx).unsigned_abs().pow(2) + (y - cy).unsigned_abs().pow(2);
            if distance_squared <= r_squared {
                grid.set(Coord::new(x as i32, y as i32), CellState::Floor);
            }
        }
    }
}

/// Carves a floor corridor of the given radius between two tiles.
///
/// Diagonal steps of the centre line also open the orthogonal corner cell, so the corridor
/// stays connected under orthogonal adjacency even at radius 0.
pub fn carve_corridor(grid: &mut Grid, from: Coord, to: Coord, radius: u32) {
    let path = line(from, to);
    for &point in &path {
        stamp_disk(grid, point, radius);
    }
    for pair in path.windows(2) {
        let (previous, point) = (pair[0], pair[1]);
        if previous.x != point.x && previous.y != point.y {
            stamp_disk(grid, Coord::new(point.x, previous.y), 0);
        }
    }
}
