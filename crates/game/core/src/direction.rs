//! Absolute and facing-relative movement directions.

/// Absolute cardinal direction on the maze grid.
///
/// Coordinate system: Y-axis increases upward, X-axis increases rightward.
/// Declaration order is the enumeration order used by every search in the
/// decision core.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Returns the unit offset (dx, dy) for this direction.
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, 1),
            Direction::Down => (0, -1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    /// Direction after a quarter turn counter-clockwise.
    pub const fn left(self) -> Self {
        match self {
            Direction::Up => Direction::Left,
            Direction::Left => Direction::Down,
            Direction::Down => Direction::Right,
            Direction::Right => Direction::Up,
        }
    }

    /// Direction after a quarter turn clockwise.
    pub const fn right(self) -> Self {
        match self {
            Direction::Up => Direction::Right,
            Direction::Right => Direction::Down,
            Direction::Down => Direction::Left,
            Direction::Left => Direction::Up,
        }
    }

    pub const fn behind(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Numeric code fed to scorers: UP=1, DOWN=2, LEFT=3, RIGHT=4, and 0 for
    /// no direction at all.
    pub fn code(direction: Option<Direction>) -> f32 {
        match direction {
            Some(Direction::Up) => 1.0,
            Some(Direction::Down) => 2.0,
            Some(Direction::Left) => 3.0,
            Some(Direction::Right) => 4.0,
            None => 0.0,
        }
    }
}

/// Direction expressed in an agent's own frame of reference.
///
/// The discriminant is the candidate index used by scorer outputs.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumIter,
    strum::AsRefStr,
    strum::FromRepr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
#[repr(usize)]
pub enum RelativeDirection {
    Forward = 0,
    Left = 1,
    Right = 2,
    Behind = 3,
}

impl RelativeDirection {
    pub const COUNT: usize = 4;

    pub const fn index(self) -> usize {
        self as usize
    }

    /// Resolves this relative direction against an absolute facing.
    pub const fn resolve(self, facing: Direction) -> Direction {
        match self {
            RelativeDirection::Forward => facing,
            RelativeDirection::Left => facing.left(),
            RelativeDirection::Right => facing.right(),
            RelativeDirection::Behind => facing.behind(),
        }
    }

    /// Feature slot credited for an absolute direction.
    ///
    /// The mapping is fixed and does not rotate with the agent's facing:
    /// UP credits forward, DOWN credits behind, LEFT and RIGHT credit their
    /// namesakes.
    pub const fn slot_for(direction: Direction) -> Self {
        match direction {
            Direction::Up => RelativeDirection::Forward,
            Direction::Down => RelativeDirection::Behind,
            Direction::Left => RelativeDirection::Left,
            Direction::Right => RelativeDirection::Right,
        }
    }
}
