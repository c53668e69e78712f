//! Traits describing the host game surfaces a decision core consumes.
//!
//! Oracles expose the maze layout, the controlled agent, and the level score.
//! The [`AgentEnv`] aggregate bundles the read-only ones so decision code can
//! query everything it needs without coupling to concrete implementations.
mod agent;
mod error;
mod map;
mod score;

pub use agent::AgentControl;
pub use error::MazeError;
pub use map::{DEFAULT_TILE_SIZE, MazeDimensions, MazeOracle, TileState};
pub use score::ScoreOracle;

/// Aggregates the read-only oracles visible to a decision core during one tick.
#[derive(Clone, Copy)]
pub struct AgentEnv<'a> {
    maze: &'a dyn MazeOracle,
    score: &'a dyn ScoreOracle,
}

impl<'a> AgentEnv<'a> {
    pub fn new(maze: &'a dyn MazeOracle, score: &'a dyn ScoreOracle) -> Self {
        Self { maze, score }
    }

    pub fn maze(&self) -> &'a dyn MazeOracle {
        self.maze
    }

    /// Reads the current level score.
    pub fn score(&self) -> crate::Score {
        self.score.score()
    }
}

impl core::fmt::Debug for AgentEnv<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("AgentEnv")
            .field("dimensions", &self.maze.dimensions())
            .field("score", &self.score.score())
            .finish()
    }
}
