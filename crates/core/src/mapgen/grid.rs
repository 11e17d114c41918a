//! Fixed-size cell grid shared by every generation stage.

use serde::ser::{Serialize, SerializeStruct, Serializer};

use crate::types::{CellState, Coord};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<CellState>,
}

impl Grid {
    pub fn filled(width: usize, height: usize, state: CellState) -> Self {
        Self { width, height, cells: vec![state; width * height] }
    }

    /// Parses rows of `#` (wall) and `.` (floor). Returns `None` for ragged rows or unknown glyphs.
    pub fn from_ascii(text: &str) -> Option<Self> {
        let rows: Vec<&str> = text.lines().map(str::trim).filter(|row| !row.is_empty()).collect();
        let width = rows.first()?.chars().count();
        let mut cells = Vec::with_capacity(width * rows.len());
        for row in &rows {
            if row.chars().count() != width {
                return None;
            }
            for glyph in row.chars() {
                cells.push(CellState::from_glyph(glyph)?);
            }
        }
        Some(Self { width, height: rows.len(), cells })
    }

    pub fn to_ascii(&self) -> String {
        let mut text = String::with_capacity((self.width + 1) * self.height);
        for row in self.rows() {
            text.extend(row.iter().map(|cell| cell.glyph()));
            text.push('\n');
        }
        text
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn in_bounds(&self, coord: Coord) -> bool {
        coord.x >= 0
            && coord.y >= 0
            && (coord.x as usize) < self.width
            && (coord.y as usize) < self.height
    }

    pub fn is_outer_ring(&self, coord: Coord) -> bool {
        self.in_bounds(coord)
            && (coord.x == 0
                || coord.y == 0
                || coord.x as usize == self.width - 1
                || coord.y as usize == self.height - 1)
    }

    pub fn get(&self, coord: Coord) -> Option<CellState> {
        self.in_bounds(coord).then(|| self.cells[self.index(coord)])
    }

    /// Anything outside the grid reads as wall.
    pub fn cell_or_wall(&self, coord: Coord) -> CellState {
        self.get(coord).unwrap_or(CellState::Wall)
    }

    /// Panics when `coord` is outside the grid: stages only write cells they have bounds-checked.
    pub fn set(&mut self, coord: Coord, state: CellState) {
        assert!(
            self.in_bounds(coord),
            "write outside {}x{} grid at {coord:?}",
            self.width,
            self.height
        );
        let index = self.index(coord);
        self.cells[index] = state;
    }

    pub fn count(&self, state: CellState) -> usize {
        self.cells.iter().filter(|&&cell| cell == state).count()
    }

    /// Row-major: `y` outer, `x` inner.
    pub fn coords(&self) -> impl Iterator<Item = Coord> + use<> {
        let width = self.width as i32;
        let height = self.height as i32;
        (0..height).flat_map(move |y| (0..width).map(move |x| Coord::new(x, y)))
    }

    pub fn rows(&self) -> impl Iterator<Item = &[CellState]> {
        self.cells.chunks(self.width.max(1))
    }

    pub fn cells(&self) -> &[CellState] {
        &self.cells
    }

    pub(crate) fn index(&self, coord: Coord) -> usize {
        (coord.y as usize) * self.width + (coord.x as usize)
    }
}

/// Serialized as `{ width, height, rows }` with one glyph string per row.
impl Serialize for Grid {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let rows: Vec<String> =
            self.rows().map(|row| row.iter().map(|cell| cell.glyph()).collect()).collect();
        let mut state = serializer.serialize_struct("Grid", 3)?;
        state.serialize_field("width", &self.width)?;
        state.serialize_field("height", &self.height)?;
        state.serialize_field("rows", &rows)?;
        state.end()
    }
}
