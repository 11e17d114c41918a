use cavegen::mapgen::connectivity::connect_to_main_room;
use cavegen::mapgen::regions::find_regions;
use cavegen::mapgen::rooms::build_rooms;
use cavegen::{CaveGenerator, CellState, Coord, GeneratorConfig, Grid};

fn small_config(seed: &str) -> GeneratorConfig {
    GeneratorConfig {
        seed: seed.to_string(),
        width: 20,
        height: 20,
        wall_density: 51,
        smoothing_passes: 5,
        border_thickness: 1,
        ..GeneratorConfig::default()
    }
}

#[test]
fn seeded_small_cave_is_deterministic_and_walled() {
    let generator = CaveGenerator::new(small_config("test")).expect("valid config");
    let first = generator.generate();
    let second = generator.generate();

    assert_eq!((first.width(), first.height()), (22, 22));
    assert_eq!(first.grid, second.grid);
    assert_eq!(first.fingerprint(), second.fingerprint());
    for corner in [Coord::new(0, 0), Coord::new(21, 0), Coord::new(0, 21), Coord::new(21, 21)] {
        assert_eq!(first.cell_at(corner), CellState::Wall, "corner {corner:?}");
    }
}

#[test]
fn zero_density_yields_one_open_room_and_no_corridors() {
    let config = GeneratorConfig {
        wall_density: 0,
        reserve_spawn_zones: false,
        ..small_config("open")
    };
    let cave = CaveGenerator::new(config).expect("valid config").generate();

    assert_eq!(cave.rooms.len(), 1);
    assert!(cave.corridors.is_empty());
    // An 18x18 interior loses one cell at each inner corner to smoothing.
    assert_eq!(cave.rooms[0].size, 18 * 18 - 4);
    assert_eq!(cave.grid.count(CellState::Floor), 18 * 18 - 4);
    assert_eq!(find_regions(&cave.grid, CellState::Floor).len(), 1);
}

#[test]
fn full_density_yields_no_rooms() {
    let config = GeneratorConfig {
        wall_density: 100,
        reserve_spawn_zones: false,
        ..small_config("solid")
    };
    let cave = CaveGenerator::new(config).expect("valid config").generate();

    assert!(cave.rooms.is_empty());
    assert!(cave.corridors.is_empty());
    assert_eq!(cave.grid.count(CellState::Floor), 0);
    assert_eq!(cave.player_spawn, None);
}

#[test]
fn full_density_with_spawn_zones_connects_the_two_zones() {
    let config = GeneratorConfig { wall_density: 100, ..GeneratorConfig::with_seed("zones") };
    let cave = CaveGenerator::new(config).expect("valid config").generate();

    assert_eq!(cave.rooms.len(), 2);
    assert_eq!(cave.corridors.len(), 1);
    assert_eq!(find_regions(&cave.grid, CellState::Floor).len(), 1);
    assert!(cave.player_spawn.is_some() && cave.goal_spawn.is_some());
}

#[test]
fn two_isolated_rooms_get_exactly_one_corridor() {
    let mut grid = Grid::filled(30, 14, CellState::Wall);
    let mut left = Vec::new();
    let mut right = Vec::new();
    for y in 2..12 {
        for x in 2..8 {
            left.push(Coord::new(x, y));
            right.push(Coord::new(x + 18, y));
        }
    }
    for &tile in left.iter().chain(&right) {
        grid.set(tile, CellState::Floor);
    }
    assert_eq!((left.len(), right.len()), (60, 60));

    let mut graph = build_rooms(&mut grid, 50, 50).graph;
    assert_eq!(graph.len(), 2);

    let connections = connect_to_main_room(&mut grid, &mut graph, 4);
    assert_eq!(connections.len(), 1);
    assert!(graph.all_accessible());

    let regions = find_regions(&grid, CellState::Floor);
    assert_eq!(regions.len(), 1);
    let region = &regions[0];
    assert!(left.iter().chain(&right).all(|tile| region.contains(tile)));
}
