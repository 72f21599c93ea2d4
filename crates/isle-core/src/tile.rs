//! Tile coordinates and facing directions.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A tile coordinate on some map.
///
/// Signed so that off-map staging tiles (the bus-stop edge at x = -1) can be
/// expressed.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default, Serialize, Deserialize)]
pub struct Tile {
    pub x: i32,
    pub y: i32,
}

impl Tile {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The tile `(dx, dy)` away from `self`, clamped at the `i32` range.
    #[inline]
    pub fn offset(self, dx: i32, dy: i32) -> Tile {
        Tile::new(self.x.saturating_add(dx), self.y.saturating_add(dy))
    }

    /// Number of orthogonal steps between two tiles.
    #[inline]
    pub fn manhattan(self, other: Tile) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }
}

impl From<(i32, i32)> for Tile {
    fn from((x, y): (i32, i32)) -> Self {
        Tile::new(x, y)
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Which way an actor faces once it reaches a tile.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Facing {
    Up,
    Right,
    #[default]
    Down,
    Left,
}

impl Facing {
    /// Map a schedule digit (0–3) to a facing.
    pub fn from_digit(digit: u32) -> Option<Facing> {
        match digit {
            0 => Some(Facing::Up),
            1 => Some(Facing::Right),
            2 => Some(Facing::Down),
            3 => Some(Facing::Left),
            _ => None,
        }
    }

    /// Parse a schedule field, falling back to [`Facing::Down`] for anything
    /// that is not a known digit.
    pub fn parse_or_default(field: &str) -> Facing {
        field
            .trim()
            .parse::<u32>()
            .ok()
            .and_then(Facing::from_digit)
            .unwrap_or_default()
    }

    pub fn digit(self) -> u32 {
        match self {
            Facing::Up => 0,
            Facing::Right => 1,
            Facing::Down => 2,
            Facing::Left => 3,
        }
    }
}
