//! Target pellet search.
//!
//! The target is the first pellet met in a row-major scan of the grid, not the
//! pellet closest to the agent. The approach direction is then chosen among
//! the cardinal directions whose neighbor of the pellet tile is passable, by
//! how close one step from the agent's tile lands to the pellet.

use maze_core::{Direction, MazeOracle, TilePosition, TileState};

/// A located pellet and the direction chosen to approach it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PelletTarget {
    pub tile: TilePosition,
    pub direction: Direction,
}

/// First tile holding a pellet or power pellet, scanning y outer, x inner.
pub fn first_pellet(maze: &dyn MazeOracle) -> Option<TilePosition> {
    maze.dimensions()
        .row_major()
        .find(|&position| maze.tile(position).is_some_and(TileState::has_pellet))
}

/// Direction whose step from `agent_tile` lands closest to `pellet`.
///
/// Only directions with a passable neighbor of the pellet tile are
/// considered. Equal distances go to the later direction in enumeration
/// order. Falls back to `facing` when the pellet has no passable neighbor.
pub fn approach_direction(
    maze: &dyn MazeOracle,
    pellet: TilePosition,
    agent_tile: TilePosition,
    facing: Direction,
) -> Direction {
    let mut best: Option<(i64, Direction)> = None;

    for direction in Direction::ALL {
        if !maze
            .neighbor(pellet, direction)
            .is_some_and(TileState::is_passable)
        {
            continue;
        }

        let distance = agent_tile.step(direction).distance_squared(pellet);
        match best {
            Some((smallest, _)) if distance > smallest => {}
            _ => best = Some((distance, direction)),
        }
    }

    best.map_or(facing, |(_, direction)| direction)
}

/// Locates the target pellet and its approach direction, if any pellet remains.
pub fn find_target(
    maze: &dyn MazeOracle,
    agent_tile: TilePosition,
    facing: Direction,
) -> Option<PelletTarget> {
    let tile = first_pellet(maze)?;
    let direction = approach_direction(maze, tile, agent_tile, facing);

    tracing::trace!(%tile, %direction, "pellet target located");

    Some(PelletTarget { tile, direction })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::oracle::GridMaze;

    // Rows are listed top (highest y) to bottom (y = 0).
    fn open_field() -> GridMaze {
        GridMaze::parse(
            "#######\n\
             #     #\n\
             #     #\n\
             #     #\n\
             #######",
        )
        .unwrap()
    }

    #[test]
    fn no_pellet_means_no_target() {
        let maze = open_field();
        assert_eq!(first_pellet(&maze), None);
        assert_eq!(find_target(&maze, TilePosition::new(1, 1), Direction::Up), None);
    }

    #[test]
    fn scan_returns_first_in_row_major_order_not_nearest() {
        let mut maze = open_field();
        // Near the agent but on a later row.
        maze.set_tile(TilePosition::new(2, 3), TileState::Pellet).unwrap();
        // Far from the agent but on the first scanned row with a pellet.
        maze.set_tile(TilePosition::new(5, 1), TileState::PowerPellet).unwrap();

        assert_eq!(first_pellet(&maze), Some(TilePosition::new(5, 1)));
    }

    #[test]
    fn approaches_along_the_shorter_axis() {
        let mut maze = open_field();
        let pellet = TilePosition::new(4, 1);
        maze.set_tile(pellet, TileState::Pellet).unwrap();

        let direction = approach_direction(&maze, pellet, TilePosition::new(1, 1), Direction::Up);
        assert_eq!(direction, Direction::Right);
    }

    #[test]
    fn equal_distances_prefer_later_direction() {
        let mut maze = open_field();
        let pellet = TilePosition::new(2, 2);
        maze.set_tile(pellet, TileState::Pellet).unwrap();

        // Up and Right both land one tile away; Right is enumerated last.
        let direction = approach_direction(&maze, pellet, TilePosition::new(1, 1), Direction::Down);
        assert_eq!(direction, Direction::Right);
    }

    #[test]
    fn walled_in_pellet_falls_back_to_facing() {
        let maze = GridMaze::parse(
            "###\n\
             #.#\n\
             ###",
        )
        .unwrap();
        let pellet = TilePosition::new(1, 1);

        let target = find_target(&maze, TilePosition::new(0, 0), Direction::Left).unwrap();
        assert_eq!(target.tile, pellet);
        assert_eq!(target.direction, Direction::Left);
    }

    #[test]
    fn blocked_sides_of_the_pellet_are_skipped() {
        let maze = GridMaze::parse(
            "#####\n\
             ###.#\n\
             ### #\n\
             #####",
        )
        .unwrap();
        // Pellet at (3, 2); only its down neighbor (3, 1) is passable.
        let pellet = TilePosition::new(3, 2);
        assert_eq!(first_pellet(&maze), Some(pellet));

        let direction = approach_direction(&maze, pellet, TilePosition::new(3, 3), Direction::Up);
        assert_eq!(direction, Direction::Down);
    }
}
