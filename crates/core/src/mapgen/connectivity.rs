//! Joins every room to the main room with carved corridors.
//!
//! Each round finds the closest pair of edge tiles between a room that is not yet reachable
//! from the main room and one that is, connects the two rooms, and carves a corridor between
//! the tiles. Rounds repeat until nothing is pending. Every round makes at least one more room
//! reachable, so the loop runs at most `rooms - 1` times.

use log::debug;

use super::corridor::carve_corridor;
use super::grid::Grid;
use super::rooms::{Room, RoomGraph, RoomId};
use crate::types::Coord;

/// A connection made by the resolver, in the order it was made.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Connection {
    /// The room that was not yet reachable.
    pub pending: RoomId,
    pub reachable: RoomId,
    pub from: Coord,
    pub to: Coord,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Candidate {
    distance: i64,
    from: Coord,
    to: Coord,
}

pub fn connect_to_main_room(
    grid: &mut Grid,
    graph: &mut RoomGraph,
    corridor_radius: u32,
) -> Vec<Connection> {
    let mut connections = Vec::new();
    while let Some(connection) = closest_pending_pair(graph) {
        graph.connect(connection.pending, connection.reachable);
        carve_corridor(grid, connection.from, connection.to, corridor_radius);
        debug!(
            "connected room {:?} to {:?} via {:?} -> {:?}",
            connection.pending, connection.reachable, connection.from, connection.to
        );
        connections.push(connection);
    }
    connections
}

/// Closest (pending, reachable) edge-tile pair over all unconnected room pairs. Ties keep the
/// first pair found, scanning rooms largest first and edge tiles in room order.
fn closest_pending_pair(graph: &RoomGraph) -> Option<Connection> {
    let (reachable, pending): (Vec<(RoomId, &Room)>, Vec<(RoomId, &Room)>) =
        graph.iter().partition(|(_, room)| room.accessible_from_main);

    let mut best: Option<(Candidate, RoomId, RoomId)> = None;
    for &(pending_id, pending_room) in &pending {
        for &(reachable_id, reachable_room) in &reachable {
            if pending_room.is_connected(reachable_id) {
                continue;
            }
            let Some(candidate) = closest_edge_tiles(pending_room, reachable_room) else {
                continue;
            };
            if best.is_none_or(|(current, _, _)| candidate.distance < current.distance) {
                best = Some((candidate, pending_id, reachable_id));
            }
        }
    }

    best.map(|(candidate, pending, reachable)| Connection {
        pending,
        reachable,
        from: candidate.from,
        to: candidate.to,
    })
}

fn closest_edge_tiles(a: &Room, b: &Room) -> Option<Candidate> {
    let mut best: Option<Candidate> = None;
    for &from in &a.edge_tiles {
        for &to in &b.edge_tiles {
            let distance = from.squared_distance(to);
            if best.is_none_or(|current| distance < current.distance) {
                best = Some(Candidate { distance, from, to });
            }
        }
    }
    best
}
