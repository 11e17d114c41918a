use std::collections::{BTreeSet, VecDeque};

use anyhow::{Result, bail};
use cavegen::mapgen::regions::find_regions;
use cavegen::{CaveGenerator, CellState, Coord, GeneratedCave, GeneratorConfig};
use clap::Parser;
use rand_chacha::{
    ChaCha8Rng,
    rand_core::{Rng, SeedableRng},
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long, default_value_t = 42)]
    seed: u64,
    #[arg(short, long, default_value_t = 200)]
    runs: u32,
}

fn choose<T: Clone>(rng: &mut ChaCha8Rng, slice: &[T]) -> T {
    let p = rng.next_u64() as usize % slice.len();
    slice[p].clone()
}

fn in_range(rng: &mut ChaCha8Rng, low: u64, high: u64) -> u64 {
    low + rng.next_u64() % (high - low + 1)
}

fn random_seed_text(rng: &mut ChaCha8Rng) -> String {
    const ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789 -_";
    let len = in_range(rng, 1, 16) as usize;
    (0..len).map(|_| char::from(choose(rng, ALPHABET))).collect()
}

fn random_config(rng: &mut ChaCha8Rng) -> GeneratorConfig {
    GeneratorConfig {
        seed: random_seed_text(rng),
        width: in_range(rng, 3, 120) as usize,
        height: in_range(rng, 3, 120) as usize,
        wall_density: in_range(rng, 0, 100) as u8,
        smoothing_passes: in_range(rng, 0, 8) as u32,
        wall_min_region_size: choose(rng, &[0, 1, 10, 50, 200]),
        floor_min_region_size: choose(rng, &[0, 1, 10, 50, 200]),
        corridor_radius: in_range(rng, 0, 5) as u32,
        border_thickness: in_range(rng, 1, 3) as usize,
        reserve_spawn_zones: choose(rng, &[true, false]),
    }
}

fn reachable_floor(cave: &GeneratedCave, start: Coord) -> usize {
    let mut open = VecDeque::from([start]);
    let mut seen = BTreeSet::from([start]);
    while let Some(pos) = open.pop_front() {
        for next in pos.orthogonal_neighbors() {
            if cave.cell_at(next) == CellState::Floor && seen.insert(next) {
                open.push_back(next);
            }
        }
    }
    seen.len()
}

fn check(config: &GeneratorConfig, cave: &GeneratedCave) -> Result<()> {
    let border = config.border_thickness;
    if cave.width() != config.width + 2 * border || cave.height() != config.height + 2 * border {
        bail!("output is {}x{}, expected the interior plus border", cave.width(), cave.height());
    }
    for coord in cave.grid.coords() {
        let depth = coord
            .x
            .min(coord.y)
            .min(cave.width() as i32 - 1 - coord.x)
            .min(cave.height() as i32 - 1 - coord.y);
        if (depth as usize) < border && cave.cell_at(coord) != CellState::Wall {
            bail!("border cell {coord:?} is not wall");
        }
    }

    let floors: Vec<Coord> =
        cave.grid.coords().filter(|&c| cave.cell_at(c) == CellState::Floor).collect();
    if let Some(&start) = floors.first()
        && reachable_floor(cave, start) != floors.len()
    {
        bail!("floor is not fully connected");
    }
    if find_regions(&cave.grid, CellState::Floor).len() > 1 {
        bail!("more than one floor region");
    }

    let mains = cave.rooms.iter().filter(|room| room.is_main).count();
    if !cave.rooms.is_empty() && mains != 1 {
        bail!("{mains} main rooms among {} rooms", cave.rooms.len());
    }
    if let Some(room) = cave.rooms.iter().find(|room| room.size < config.floor_min_region_size) {
        bail!("room {} has {} tiles, below the threshold", room.rank, room.size);
    }
    for spawn in [cave.player_spawn, cave.goal_spawn].into_iter().flatten() {
        if cave.cell_at(spawn) != CellState::Floor {
            bail!("spawn {spawn:?} is not floor");
        }
    }

    let replay = CaveGenerator::new(config.clone())?.generate();
    if replay.fingerprint() != cave.fingerprint() {
        bail!("seed {:?} did not reproduce", config.seed);
    }
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    env_logger::init();

    println!("Starting fuzz harness on seed {} for {} runs...", args.seed, args.runs);
    let mut rng = ChaCha8Rng::seed_from_u64(args.seed);

    for run in 0..args.runs {
        let config = random_config(&mut rng);
        let cave = CaveGenerator::new(config.clone())?.generate();
        if let Err(err) = check(&config, &cave) {
            bail!("run {run} failed with {config:?}: {err}");
        }
    }

    println!("Fuzzing completed successfully.");
    Ok(())
}
