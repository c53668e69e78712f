//! Headless episode driver.
//!
//! [`Simulation`] owns an in-memory maze, agent, and score board and steps a
//! [`DirectionProvider`] against them one tick at a time. It stands in for the
//! host game loop in tests and offline evaluation of scorers.

use maze_core::{AgentEnv, Direction, Score, Tick, TilePosition, TileState};
use tracing::{debug, info};

use crate::api::{DirectionProvider, Result};
use crate::oracle::{GridMaze, ScoreBoard, SimAgent};

/// Points awarded for eating a regular pellet.
pub const PELLET_POINTS: Score = 10;
/// Points awarded for eating a power pellet.
pub const POWER_PELLET_POINTS: Score = 50;

/// Why an episode stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum EpisodeOutcome {
    /// Every pellet was eaten.
    Cleared,
    /// The agent received a kill request.
    Killed,
    /// The tick limit was reached first.
    TimedOut,
}

/// Result of [`Simulation::run`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EpisodeSummary {
    pub ticks: Tick,
    pub score: Score,
    pub outcome: EpisodeOutcome,
}

/// One agent in one maze.
#[derive(Clone, Debug)]
pub struct Simulation {
    maze: GridMaze,
    agent: SimAgent,
    score: ScoreBoard,
    tick: Tick,
}

impl Simulation {
    pub fn new(maze: GridMaze, agent: SimAgent) -> Self {
        Self {
            maze,
            agent,
            score: ScoreBoard::default(),
            tick: Tick::ZERO,
        }
    }

    /// Parses `layout` and places the agent on `start`.
    ///
    /// # Errors
    ///
    /// Fails with [`crate::DecisionError::Maze`] if the layout does not parse.
    pub fn from_layout(layout: &str, start: TilePosition, facing: Direction) -> Result<Self> {
        let maze = GridMaze::parse(layout)?;
        let agent = SimAgent::at_tile(start, facing, &maze);
        Ok(Self::new(maze, agent))
    }

    /// Runs one tick: ask the provider for a direction, move, eat.
    ///
    /// Returns the outcome if the episode ended during this tick.
    ///
    /// # Errors
    ///
    /// Propagates provider failures; the tick counter has already advanced.
    pub fn step(&mut self, provider: &mut dyn DirectionProvider) -> Result<Option<EpisodeOutcome>> {
        if let Some(outcome) = self.finished() {
            return Ok(Some(outcome));
        }

        self.tick = self.tick.next();
        let env = AgentEnv::new(&self.maze, &self.score);
        let direction = provider.provide_direction(&mut self.agent, env)?;

        if !self.agent.is_alive() {
            debug!(tick = %self.tick, "agent killed by provider");
            return Ok(Some(EpisodeOutcome::Killed));
        }

        if self.agent.step(direction, &self.maze) {
            self.eat(self.agent.tile());
        }

        Ok(self.finished())
    }

    /// Steps until the episode ends or the tick counter reaches `max_ticks`.
    /// A limit already reached runs no tick at all.
    pub fn run(
        &mut self,
        provider: &mut dyn DirectionProvider,
        max_ticks: u64,
    ) -> Result<EpisodeSummary> {
        info!(
            pellets = self.maze.pellet_count(),
            start = %self.agent.tile(),
            max_ticks,
            "episode started"
        );

        let outcome = loop {
            if let Some(outcome) = self.finished() {
                break outcome;
            }
            if self.tick.0 >= max_ticks {
                break EpisodeOutcome::TimedOut;
            }
            if let Some(outcome) = self.step(provider)? {
                break outcome;
            }
        };

        let summary = self.summary(outcome);
        info!(
            ticks = %summary.ticks,
            score = summary.score,
            %outcome,
            "episode finished"
        );
        Ok(summary)
    }

    fn finished(&self) -> Option<EpisodeOutcome> {
        if !self.agent.is_alive() {
            Some(EpisodeOutcome::Killed)
        } else if self.maze.pellet_count() == 0 {
            Some(EpisodeOutcome::Cleared)
        } else {
            None
        }
    }

    fn eat(&mut self, tile: TilePosition) {
        let points = match self.maze.eat(tile) {
            Some(TileState::Pellet) => PELLET_POINTS,
            Some(TileState::PowerPellet) => POWER_PELLET_POINTS,
            _ => return,
        };
        self.score.add(points);
        debug!(tick = %self.tick, %tile, points, score = self.score.value(), "pellet eaten");
    }

    fn summary(&self, outcome: EpisodeOutcome) -> EpisodeSummary {
        EpisodeSummary {
            ticks: self.tick,
            score: self.score.value(),
            outcome,
        }
    }

    pub fn maze(&self) -> &GridMaze {
        &self.maze
    }

    pub fn agent(&self) -> &SimAgent {
        &self.agent
    }

    pub fn score(&self) -> Score {
        self.score.value()
    }

    pub fn tick(&self) -> Tick {
        self.tick
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{DecisionError, FixedDirectionProvider};
    use maze_core::{CoreError, ErrorSeverity, MazeError};

    fn sim(layout: &str, start: TilePosition, facing: Direction) -> Simulation {
        Simulation::from_layout(layout, start, facing).unwrap()
    }

    #[test]
    fn walking_a_corridor_clears_it() {
        let mut sim = sim(
            "######\n\
             # ..o#\n\
             ######",
            TilePosition::new(1, 1),
            Direction::Right,
        );
        let mut provider = FixedDirectionProvider(Direction::Right);

        let summary = sim.run(&mut provider, 100).unwrap();
        assert_eq!(summary.outcome, EpisodeOutcome::Cleared);
        assert_eq!(summary.ticks, Tick(3));
        assert_eq!(summary.score, 2 * PELLET_POINTS + POWER_PELLET_POINTS);
        assert_eq!(sim.agent().tile(), TilePosition::new(4, 1));
    }

    #[test]
    fn blocked_agent_times_out() {
        let mut sim = sim(
            "#####\n\
             #  .#\n\
             #####",
            TilePosition::new(1, 1),
            Direction::Left,
        );
        let mut provider = FixedDirectionProvider(Direction::Left);

        let summary = sim.run(&mut provider, 10).unwrap();
        assert_eq!(summary.outcome, EpisodeOutcome::TimedOut);
        assert_eq!(summary.ticks, Tick(10));
        assert_eq!(summary.score, 0);
    }

    #[test]
    fn finished_episode_does_not_advance() {
        let mut sim = sim(
            "####\n\
             # .#\n\
             ####",
            TilePosition::new(1, 1),
            Direction::Right,
        );
        let mut provider = FixedDirectionProvider(Direction::Right);

        assert_eq!(sim.step(&mut provider).unwrap(), Some(EpisodeOutcome::Cleared));
        assert_eq!(sim.step(&mut provider).unwrap(), Some(EpisodeOutcome::Cleared));
        assert_eq!(sim.tick(), Tick(1));
    }

    #[test]
    fn zero_tick_limit_runs_nothing() {
        let mut sim = sim(
            "#####\n\
             #  .#\n\
             #####",
            TilePosition::new(2, 1),
            Direction::Right,
        );
        let mut provider = FixedDirectionProvider(Direction::Right);

        let summary = sim.run(&mut provider, 0).unwrap();
        assert_eq!(summary.ticks, Tick(0));
        assert_eq!(summary.outcome, EpisodeOutcome::TimedOut);
        assert_eq!(sim.agent().tile(), TilePosition::new(2, 1));
        assert_eq!(sim.maze().pellet_count(), 1);
    }

    #[test]
    fn bad_layout_is_a_maze_error() {
        let err = Simulation::from_layout("#?#", TilePosition::ORIGIN, Direction::Up).unwrap_err();
        assert!(matches!(
            err,
            DecisionError::Maze(MazeError::UnknownGlyph { glyph: '?', .. })
        ));
        assert_eq!(err.severity(), ErrorSeverity::Validation);
        assert_eq!(err.error_code(), "MAZE_UNKNOWN_GLYPH");
    }
}
