//! Tile-stepping agent implementing [`maze_core::AgentControl`].
use maze_core::{AgentControl, Direction, MazeOracle, TilePosition, TileState, WorldPosition};

/// Agent that moves one whole tile per step and stands on tile centers.
///
/// Move legality is cached from the maze: a direction is legal when the
/// adjacent tile is passable. Call [`SimAgent::refresh_moves`] after the maze
/// changes underneath the agent.
#[derive(Clone, Debug, PartialEq)]
pub struct SimAgent {
    position: WorldPosition,
    facing: Direction,
    tile_size: f32,
    legal: [bool; 4],
    kills: u32,
}

impl SimAgent {
    /// Places an agent at the center of `tile`.
    pub fn at_tile(tile: TilePosition, facing: Direction, maze: &dyn MazeOracle) -> Self {
        let tile_size = maze.tile_size();
        let mut agent = Self {
            position: Self::center_of(tile, tile_size),
            facing,
            tile_size,
            legal: [false; 4],
            kills: 0,
        };
        agent.refresh_moves(maze);
        agent
    }

    /// Recomputes which directions are legal from the current tile.
    pub fn refresh_moves(&mut self, maze: &dyn MazeOracle) {
        let tile = self.tile();
        for direction in Direction::ALL {
            self.legal[Self::slot(direction)] = maze
                .neighbor(tile, direction)
                .is_some_and(TileState::is_passable);
        }
    }

    /// Overrides move legality, e.g. to model a collision rule the maze
    /// does not know about.
    pub fn set_legal(&mut self, direction: Direction, legal: bool) {
        self.legal[Self::slot(direction)] = legal;
    }

    /// Turns toward `direction` and advances one tile if the move is legal.
    /// Returns whether the agent moved.
    pub fn step(&mut self, direction: Direction, maze: &dyn MazeOracle) -> bool {
        if !self.is_alive() {
            return false;
        }

        self.facing = direction;
        if !self.can_move(direction) {
            return false;
        }

        let next = self.tile().step(direction);
        self.position = Self::center_of(next, self.tile_size);
        self.refresh_moves(maze);
        true
    }

    pub fn tile(&self) -> TilePosition {
        self.position.to_tile(self.tile_size)
    }

    pub fn is_alive(&self) -> bool {
        self.kills == 0
    }

    /// Number of kill requests received.
    pub fn kills(&self) -> u32 {
        self.kills
    }

    fn center_of(tile: TilePosition, tile_size: f32) -> WorldPosition {
        let origin = WorldPosition::of_tile(tile, tile_size);
        WorldPosition::new(origin.x + tile_size / 2.0, origin.y + tile_size / 2.0)
    }

    fn slot(direction: Direction) -> usize {
        match direction {
            Direction::Up => 0,
            Direction::Down => 1,
            Direction::Left => 2,
            Direction::Right => 3,
        }
    }
}

impl AgentControl for SimAgent {
    fn facing(&self) -> Direction {
        self.facing
    }

    fn position(&self) -> WorldPosition {
        self.position
    }

    fn can_move(&self, direction: Direction) -> bool {
        self.legal[Self::slot(direction)]
    }

    fn kill(&mut self) {
        self.kills = self.kills.saturating_add(1);
    }
}
