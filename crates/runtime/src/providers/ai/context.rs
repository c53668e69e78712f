//! Per-tick snapshot shared by every stage of the decision pipeline.
//!
//! The [`TickContext`] is captured once, before any feature is computed, so
//! all stages see the same facing, tile, and move legality even if the
//! host mutates the agent afterwards.

use maze_core::{
    AgentControl, AgentEnv, Direction, MazeOracle, RelativeDirection, Tick, TilePosition,
    TileState,
};

/// Context for one decision tick.
///
/// # Lifetime
///
/// The `'a` lifetime ties the context to the oracles borrowed for the tick;
/// evaluation is synchronous and never outlives the call to `decide`.
pub struct TickContext<'a> {
    /// Tick number, counted from 1 for the first decision of an episode.
    pub tick: Tick,

    /// Read-only access to the maze and score oracles.
    pub env: AgentEnv<'a>,

    /// Agent facing at capture time; the frame for relative directions.
    pub facing: Direction,

    /// Tile containing the agent's world position at capture time.
    pub tile: TilePosition,

    /// Cached `can_move` answers indexed by [`RelativeDirection::index`].
    mobility: [bool; RelativeDirection::COUNT],
}

impl<'a> TickContext<'a> {
    /// Captures the agent's state for this tick.
    pub fn capture(tick: Tick, agent: &dyn AgentControl, env: AgentEnv<'a>) -> Self {
        let facing = agent.facing();
        let tile = env.maze().tile_at(agent.position());

        let mobility = [
            RelativeDirection::Forward,
            RelativeDirection::Left,
            RelativeDirection::Right,
            RelativeDirection::Behind,
        ]
        .map(|relative| agent.can_move(relative.resolve(facing)));

        Self {
            tick,
            env,
            facing,
            tile,
            mobility,
        }
    }

    pub fn maze(&self) -> &'a dyn MazeOracle {
        self.env.maze()
    }

    /// Whether the agent could legally move toward `relative` at capture time.
    pub fn can_move(&self, relative: RelativeDirection) -> bool {
        self.mobility[relative.index()]
    }

    /// Absolute direction for a relative one under the captured facing.
    pub fn resolve(&self, relative: RelativeDirection) -> Direction {
        relative.resolve(self.facing)
    }

    /// Tile adjacent to the agent's tile in absolute `direction`.
    pub fn neighbor_tile(&self, direction: Direction) -> TilePosition {
        self.tile.step(direction)
    }

    pub fn neighbor(&self, direction: Direction) -> Option<TileState> {
        self.maze().neighbor(self.tile, direction)
    }

    /// True if the adjacent tile holds a pellet or power pellet.
    pub fn neighbor_has_pellet(&self, direction: Direction) -> bool {
        self.neighbor(direction).is_some_and(TileState::has_pellet)
    }
}
