//! Region cleanup and promotion of surviving floor regions to rooms.
//!
//! Rooms live in an arena keyed by [`RoomId`]. Connections are stored as id sets on both
//! ends, so the room graph can contain cycles without shared ownership.

use std::cmp::Reverse;
use std::collections::BTreeSet;

use log::debug;
use slotmap::{SlotMap, new_key_type};

use super::grid::Grid;
use super::regions::{Region, find_regions};
use crate::types::{CellState, Coord};

new_key_type! {
    pub struct RoomId;
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Room {
    pub tiles: Vec<Coord>,
    /// Tiles with at least one orthogonal wall neighbour, in `tiles` order.
    pub edge_tiles: Vec<Coord>,
    pub is_main: bool,
    pub accessible_from_main: bool,
    pub connections: BTreeSet<RoomId>,
}

impl Room {
    fn new(tiles: Vec<Coord>, grid: &Grid) -> Self {
        let edge_tiles = tiles
            .iter()
            .copied()
            .filter(|tile| {
                tile.orthogonal_neighbors()
                    .into_iter()
                    .any(|neighbor| grid.cell_or_wall(neighbor) == CellState::Wall)
            })
            .collect();
        Self {
            tiles,
            edge_tiles,
            is_main: false,
            accessible_from_main: false,
            connections: BTreeSet::new(),
        }
    }

    pub fn size(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_connected(&self, other: RoomId) -> bool {
        self.connections.contains(&other)
    }
}

#[derive(Clone, Debug, Default)]
pub struct RoomGraph {
    rooms: SlotMap<RoomId, Room>,
    /// Largest first; ties keep region discovery order.
    order: Vec<RoomId>,
}

impl RoomGraph {
    /// Builds the graph from floor regions and marks the largest as the main room.
    pub fn from_regions(regions: Vec<Region>, grid: &Grid) -> Self {
        let mut rooms = SlotMap::with_key();
        let mut order: Vec<RoomId> =
            regions.into_iter().map(|region| rooms.insert(Room::new(region, grid))).collect();
        order.sort_by_key(|&id| Reverse(rooms[id].size()));

        if let Some(&main) = order.first() {
            let room = &mut rooms[main];
            room.is_main = true;
            room.accessible_from_main = true;
        }
        Self { rooms, order }
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn main_room(&self) -> Option<RoomId> {
        self.order.first().copied()
    }

    pub fn room(&self, id: RoomId) -> Option<&Room> {
        self.rooms.get(id)
    }

    /// Room ids, largest room first.
    pub fn ids(&self) -> &[RoomId] {
        &self.order
    }

    pub fn iter(&self) -> impl Iterator<Item = (RoomId, &Room)> {
        self.order.iter().map(|&id| (id, &self.rooms[id]))
    }

    /// Position of a room in size order; the main room is rank 0.
    pub fn rank(&self, id: RoomId) -> Option<usize> {
        self.order.iter().position(|&candidate| candidate == id)
    }

    /// Links two rooms both ways. If either side is reachable from the main room, everything
    /// reachable through the other side becomes reachable too.
    pub fn connect(&mut self, a: RoomId, b: RoomId) {
        assert_ne!(a, b, "a room cannot be connected to itself");
        self.rooms[a].connections.insert(b);
        self.rooms[b].connections.insert(a);

        if self.rooms[a].accessible_from_main {
            self.mark_accessible(b);
        } else if self.rooms[b].accessible_from_main {
            self.mark_accessible(a);
        }
    }

    fn mark_accessible(&mut self, start: RoomId) {
        let mut stack = vec![start];
        while let Some(id) = stack.pop() {
            let room = &mut self.rooms[id];
            if room.accessible_from_main {
                continue;
            }
            room.accessible_from_main = true;
            stack.extend(room.connections.iter().copied());
        }
    }

    pub fn all_accessible(&self) -> bool {
        self.rooms.values().all(|room| room.accessible_from_main)
    }
}

/// Result of region cleanup: the room graph plus how many cells changed state.
#[derive(Clone, Debug)]
pub struct RoomBuild {
    pub graph: RoomGraph,
    pub walls_opened: usize,
    pub floors_filled: usize,
}

/// Opens wall slivers below `wall_min_size`, fills floor pockets below `floor_min_size`, and
/// promotes the remaining floor regions to rooms.
pub fn build_rooms(grid: &mut Grid, wall_min_size: usize, floor_min_size: usize) -> RoomBuild {
    let (_, walls_opened) = reclassify_small_regions(grid, CellState::Wall, wall_min_size);
    let (survivors, floors_filled) =
        reclassify_small_regions(grid, CellState::Floor, floor_min_size);
    debug!(
        "region cleanup opened {walls_opened} wall cells, filled {floors_filled} floor cells, \
         {} rooms survive",
        survivors.len()
    );

    let graph = RoomGraph::from_regions(survivors, grid);
    RoomBuild { graph, walls_opened, floors_filled }
}

/// Flips every region of `state` smaller than `min_size` to the opposite state. Returns the
/// surviving regions and the number of flipped cells.
fn reclassify_small_regions(
    grid: &mut Grid,
    state: CellState,
    min_size: usize,
) -> (Vec<Region>, usize) {
    let mut survivors = Vec::new();
    let mut flipped = 0;
    for region in find_regions(grid, state) {
        if region.len() >= min_size {
            survivors.push(region);
            continue;
        }
        flipped += region.len();
        for &tile in &region {
            grid.set(tile, state.opposite());
        }
    }
    (survivors, flipped)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(text: &str) -> Grid {
        Grid::from_ascii(text).expect("valid grid")
    }

    #[test]
    fn edge_tiles_are_listed_once_and_treat_outside_as_wall() {
        let grid = grid(
            "
            ...
            ...
            ...
            ",
        );
        let room = Room::new(find_regions(&grid, CellState::Floor).remove(0), &grid);
        assert_eq!(room.size(), 9);
        assert_eq!(room.edge_tiles.len(), 8);
        assert!(!room.edge_tiles.contains(&Coord::new(1, 1)));
    }

    #[test]
    fn small_regions_are_reclassified_both_ways() {
        let mut grid = grid(
            "
            #########
            #....#..#
            #.##.#..#
            #....####
            #########
            ",
        );
        let build = build_rooms(&mut grid, 3, 5);
        // The 2-cell wall sliver opens up; the 4-cell pocket on the right fills in.
        assert_eq!(build.walls_opened, 2);
        assert_eq!(build.floors_filled, 4);
        assert_eq!(build.graph.len(), 1);
        assert_eq!(grid.get(Coord::new(2, 2)), Some(CellState::Floor));
        assert_eq!(grid.get(Coord::new(6, 1)), Some(CellState::Wall));
    }

    #[test]
    fn largest_room_is_main_and_ties_keep_discovery_order() {
        let mut grid = grid(
            "
            ###########
            #..#...#..#
            #..#...#..#
            ###########
            ",
        );
        let build = build_rooms(&mut grid, 1, 1);
        let graph = build.graph;
        assert_eq!(graph.len(), 3);

        let sizes: Vec<usize> = graph.iter().map(|(_, room)| room.size()).collect();
        assert_eq!(sizes, vec![6, 4, 4]);

        let main = graph.main_room().expect("main room");
        let main_room = graph.room(main).expect("room");
        assert!(main_room.is_main && main_room.accessible_from_main);
        assert_eq!(graph.iter().filter(|(_, room)| room.is_main).count(), 1);

        let second = graph.room(graph.ids()[1]).expect("room");
        assert_eq!(second.tiles[0], Coord::new(1, 1));
    }

    #[test]
    fn connecting_a_hub_propagates_reachability_through_its_links() {
        let mut grid = grid(
            "
            #############
            #...#..#..#.#
            #...#..#..#.#
            #############
            ",
        );
        let mut graph = build_rooms(&mut grid, 1, 1).graph;
        let ids = graph.ids().to_vec();
        let (main, hub, leaf, far_leaf) = (ids[0], ids[1], ids[2], ids[3]);

        graph.connect(hub, leaf);
        graph.connect(leaf, far_leaf);
        assert!(!graph.room(leaf).expect("room").accessible_from_main);

        graph.connect(main, hub);
        assert!(graph.all_accessible());
        assert!(graph.room(main).expect("room").is_connected(hub));
        assert!(graph.room(hub).expect("room").is_connected(main));
    }

    #[test]
    fn no_floor_means_no_rooms() {
        let mut grid = Grid::filled(6, 6, CellState::Wall);
        let build = build_rooms(&mut grid, 50, 50);
        assert!(build.graph.is_empty());
        assert_eq!(build.graph.main_room(), None);
        assert!(build.graph.all_accessible());
    }
}
