//! Maze domain types and collaborator contracts shared by agent behaviours.
//!
//! `maze-core` defines the vocabulary a per-tick decision core speaks: absolute
//! and facing-relative directions, tile and world coordinates, tile
//! classification, and the read-only oracles (maze, agent, score) the host game
//! exposes. Nothing here owns mutable per-agent state; that lives in the
//! runtime crate.
pub mod config;
pub mod direction;
pub mod env;
pub mod error;
pub mod state;

pub use config::BehaviorConfig;
pub use direction::{Direction, RelativeDirection};
pub use env::{
    AgentControl, AgentEnv, DEFAULT_TILE_SIZE, MazeDimensions, MazeError, MazeOracle, ScoreOracle,
    TileState,
};
pub use error::{CoreError, ErrorSeverity};
pub use state::{Score, Tick, TilePosition, WorldPosition};
