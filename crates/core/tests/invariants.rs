use std::collections::{BTreeSet, VecDeque};

use cavegen::mapgen::connectivity::connect_to_main_room;
use cavegen::mapgen::fill::initialize_grid;
use cavegen::mapgen::regions::find_regions;
use cavegen::mapgen::rooms::build_rooms;
use cavegen::mapgen::smoothing::smooth;
use cavegen::{CaveGenerator, CellState, Coord, GeneratedCave, GeneratorConfig};
use proptest::prelude::*;
use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::SeedableRng;

fn floor_reachable_from(cave: &GeneratedCave, start: Coord) -> BTreeSet<Coord> {
    let mut open = VecDeque::from([start]);
    let mut seen = BTreeSet::from([start]);
    while let Some(pos) = open.pop_front() {
        for next in pos.orthogonal_neighbors() {
            if cave.cell_at(next) == CellState::Floor && seen.insert(next) {
                open.push_back(next);
            }
        }
    }
    seen
}

#[test]
fn cleanup_leaves_no_undersized_regions_before_corridors() {
    for seed in 0..16_u64 {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut grid = initialize_grid(60, 45, 51, &mut rng);
        smooth(&mut grid, 5);

        let mut graph = build_rooms(&mut grid, 50, 50).graph;
        for region in find_regions(&grid, CellState::Wall) {
            assert!(region.len() >= 50, "seed {seed}: wall region of {}", region.len());
        }
        let floor_regions = find_regions(&grid, CellState::Floor);
        assert_eq!(floor_regions.len(), graph.len());
        assert!(floor_regions.iter().all(|region| region.len() >= 50));

        connect_to_main_room(&mut grid, &mut graph, 4);
        assert!(find_regions(&grid, CellState::Floor).len() <= 1, "seed {seed}");
    }
}

#[test]
fn main_room_reaches_every_floor_tile() {
    for seed in ["north", "south", "east", "west"] {
        let cave = CaveGenerator::new(GeneratorConfig::with_seed(seed))
            .expect("valid config")
            .generate();
        let Some(start) = cave.grid.coords().find(|&c| cave.cell_at(c) == CellState::Floor)
        else {
            continue;
        };
        let reached = floor_reachable_from(&cave, start);
        assert_eq!(reached.len(), cave.grid.count(CellState::Floor), "seed {seed}");
        assert_eq!(cave.main_room().map(|room| room.rank), Some(0));
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]
    #[test]
    fn border_and_single_region_hold_for_random_configs(
        seed in "\\PC{1,16}",
        width in 1_usize..80,
        height in 1_usize..80,
        wall_density in 0_u8..=100,
        smoothing_passes in 0_u32..7,
        corridor_radius in 0_u32..6,
        border_thickness in 1_usize..4,
        reserve_spawn_zones in any::<bool>(),
    ) {
        let config = GeneratorConfig {
            seed,
            width,
            height,
            wall_density,
            smoothing_passes,
            corridor_radius,
            border_thickness,
            reserve_spawn_zones,
            ..GeneratorConfig::default()
        };
        let cave = CaveGenerator::new(config).expect("valid config").generate();
        let (w, h) = (cave.width() as i32, cave.height() as i32);
        for coord in cave.grid.coords() {
            if coord.x == 0 || coord.y == 0 || coord.x == w - 1 || coord.y == h - 1 {
                prop_assert_eq!(cave.cell_at(coord), CellState::Wall);
            }
        }
        prop_assert!(find_regions(&cave.grid, CellState::Floor).len() <= 1);
        let main_rooms = cave.rooms.iter().filter(|room| room.is_main).count();
        prop_assert_eq!(main_rooms, usize::from(!cave.rooms.is_empty()));
    }
}
