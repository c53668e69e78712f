//! In-memory implementations of the host game surfaces.
//!
//! These adapters implement the `maze-core` oracle and control traits so the
//! decision core can be exercised without a game engine: by the
//! [`crate::simulation`] harness, by tests, and by offline tooling.
mod agent;
mod maze;
mod score;

pub use agent::SimAgent;
pub use maze::GridMaze;
pub use score::ScoreBoard;
