use cavegen::{CellState, Coord, GeneratedCave};

/// `#` wall, `.` floor, `P` player spawn, `G` goal spawn.
pub fn render_text(cave: &GeneratedCave) -> String {
    let mut text = String::with_capacity((cave.width() + 1) * cave.height());
    for y in 0..cave.height() as i32 {
        for x in 0..cave.width() as i32 {
            let coord = Coord::new(x, y);
            let glyph = if cave.player_spawn == Some(coord) {
                'P'
            } else if cave.goal_spawn == Some(coord) {
                'G'
            } else {
                cave.cell_at(coord).glyph()
            };
            text.push(glyph);
        }
        text.push('\n');
    }
    text
}

pub fn render_json(cave: &GeneratedCave) -> serde_json::Result<String> {
    serde_json::to_string_pretty(cave)
}

pub fn summary(cave: &GeneratedCave) -> String {
    let floor = cave.grid.count(CellState::Floor);
    format!(
        "{}x{} cave, {} rooms, {} corridors, {} floor cells, seed {} ({}), fingerprint {:#018x}",
        cave.width(),
        cave.height(),
        cave.rooms.len(),
        cave.corridors.len(),
        floor,
        cave.seed.value(),
        if cave.is_reproducible() { "reproducible" } else { "not reproducible" },
        cave.fingerprint()
    )
}
