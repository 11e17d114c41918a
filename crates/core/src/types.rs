use serde::{Deserialize, Serialize};

/// A cell position on a grid. `x` grows to the right, `y` grows downward.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Coord {
    pub x: i32,
    pub y: i32,
}

impl Coord {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self { x: self.x + dx, y: self.y + dy }
    }

    pub fn squared_distance(self, other: Self) -> i64 {
        let dx = i64::from(self.x) - i64::from(other.x);
        let dy = i64::from(self.y) - i64::from(other.y);
        dx * dx + dy * dy
    }

    /// Up, right, down, left.
    pub const fn orthogonal_neighbors(self) -> [Self; 4] {
        [
            Self { x: self.x, y: self.y - 1 },
            Self { x: self.x + 1, y: self.y },
            Self { x: self.x, y: self.y + 1 },
            Self { x: self.x - 1, y: self.y },
        ]
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CellState {
    Floor,
    Wall,
}

impl CellState {
    pub const fn opposite(self) -> Self {
        match self {
            Self::Floor => Self::Wall,
            Self::Wall => Self::Floor,
        }
    }

    pub const fn glyph(self) -> char {
        match self {
            Self::Floor => '.',
            Self::Wall => '#',
        }
    }

    pub const fn from_glyph(glyph: char) -> Option<Self> {
        match glyph {
            '.' => Some(Self::Floor),
            '#' => Some(Self::Wall),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn orthogonal_neighbors_exclude_diagonals() {
        let origin = Coord::new(3, 3);
        let neighbors = origin.orthogonal_neighbors();
        assert!(neighbors.iter().all(|n| origin.squared_distance(*n) == 1));
    }

    #[test]
    fn squared_distance_does_not_overflow_for_extreme_coordinates() {
        let a = Coord::new(i32::MIN, 0);
        let b = Coord::new(0, 0);
        assert!(a.squared_distance(b) > 0);
    }

    #[test]
    fn glyphs_round_trip() {
        for state in [CellState::Floor, CellState::Wall] {
            assert_eq!(CellState::from_glyph(state.glyph()), Some(state));
        }
        assert_eq!(CellState::from_glyph('x'), None);
    }
}
