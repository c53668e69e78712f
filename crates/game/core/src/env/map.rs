use crate::direction::Direction;
use crate::state::{TilePosition, WorldPosition};

/// Edge length of one maze tile in world units.
pub const DEFAULT_TILE_SIZE: f32 = 8.0;

/// Read-only maze oracle exposing layout and tile classification.
pub trait MazeOracle: Send + Sync {
    fn dimensions(&self) -> MazeDimensions;

    /// Returns the tile state, or `None` outside the maze.
    fn tile(&self, position: TilePosition) -> Option<TileState>;

    fn tile_size(&self) -> f32 {
        DEFAULT_TILE_SIZE
    }

    fn contains(&self, position: TilePosition) -> bool {
        self.dimensions().contains(position)
    }

    /// State of the tile adjacent to `position` in `direction`.
    fn neighbor(&self, position: TilePosition, direction: Direction) -> Option<TileState> {
        self.tile(position.step(direction))
    }

    /// Tile containing a continuous world position.
    fn tile_at(&self, position: WorldPosition) -> TilePosition {
        position.to_tile(self.tile_size())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MazeDimensions {
    pub width: u32,
    pub height: u32,
}

impl MazeDimensions {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn contains(&self, position: TilePosition) -> bool {
        position.x >= 0
            && position.y >= 0
            && position.x < self.width as i32
            && position.y < self.height as i32
    }

    /// Every tile position in row-major order (y outer, x inner).
    pub fn row_major(&self) -> impl Iterator<Item = TilePosition> + use<> {
        let (width, height) = (self.width as i32, self.height as i32);
        (0..height).flat_map(move |y| (0..width).map(move |x| TilePosition::new(x, y)))
    }

    pub const fn area(&self) -> usize {
        self.width as usize * self.height as usize
    }
}

/// Classification of a single maze tile.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum TileState {
    #[default]
    Empty,
    Pellet,
    PowerPellet,
    Wall,
}

impl TileState {
    pub const fn is_passable(self) -> bool {
        !matches!(self, TileState::Wall)
    }

    /// True for both regular and power pellets.
    pub const fn has_pellet(self) -> bool {
        matches!(self, TileState::Pellet | TileState::PowerPellet)
    }

    /// Parses an ASCII layout glyph.
    pub const fn from_glyph(glyph: char) -> Option<Self> {
        match glyph {
            ' ' | '-' => Some(TileState::Empty),
            '.' => Some(TileState::Pellet),
            'o' => Some(TileState::PowerPellet),
            '#' => Some(TileState::Wall),
            _ => None,
        }
    }

    pub const fn glyph(self) -> char {
        match self {
            TileState::Empty => ' ',
            TileState::Pellet => '.',
            TileState::PowerPellet => 'o',
            TileState::Wall => '#',
        }
    }
}
