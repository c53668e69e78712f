//! Coordinates and counters shared by oracles and the decision runtime.
use std::fmt;

use crate::direction::Direction;

/// Discrete grid position expressed in tile coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TilePosition {
    pub x: i32,
    pub y: i32,
}

impl TilePosition {
    pub const ORIGIN: Self = Self { x: 0, y: 0 };

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Adjacent tile one step in `direction`.
    pub const fn step(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self::new(self.x + dx, self.y + dy)
    }

    pub const fn distance_squared(self, other: TilePosition) -> i64 {
        let dx = (self.x - other.x) as i64;
        let dy = (self.y - other.y) as i64;
        dx * dx + dy * dy
    }
}

impl Default for TilePosition {
    fn default() -> Self {
        Self::ORIGIN
    }
}

impl fmt::Display for TilePosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Continuous position in world units (pixels).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WorldPosition {
    pub x: f32,
    pub y: f32,
}

impl WorldPosition {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Converts to tile coordinates, truncating toward zero.
    pub fn to_tile(self, tile_size: f32) -> TilePosition {
        TilePosition::new(
            (self.x / tile_size).trunc() as i32,
            (self.y / tile_size).trunc() as i32,
        )
    }

    /// World position of the given tile's origin corner.
    pub fn of_tile(tile: TilePosition, tile_size: f32) -> Self {
        Self::new(tile.x as f32 * tile_size, tile.y as f32 * tile_size)
    }
}

/// Level score as reported by the host game.
pub type Score = u64;

/// Simulation step counter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Self = Self(0);

    pub fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the next tick.
    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }

    /// True when this tick lands on a multiple of `interval`. Tick zero and a
    /// zero interval never match.
    pub fn is_multiple_of(self, interval: u64) -> bool {
        interval != 0 && self.0 != 0 && self.0 % interval == 0
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
