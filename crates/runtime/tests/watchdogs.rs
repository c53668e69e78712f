use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use agent_runtime::{
    DecisionCore, EpisodeOutcome, FixedScorer, GridMaze, ScoreBoard, SimAgent, Simulation,
};
use maze_core::{AgentEnv, BehaviorConfig, Direction, Tick, TilePosition};

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

/// Scorer that always picks forward and counts its invocations.
fn counting_scorer(calls: Arc<AtomicUsize>) -> impl Fn(&[f32]) -> Vec<f32> + Send + Sync {
    move |_features: &[f32]| {
        calls.fetch_add(1, Ordering::SeqCst);
        vec![1.0, 0.0, 0.0, 0.0]
    }
}

#[test]
fn progress_watchdog_forces_fallback_after_900_idle_ticks() {
    let maze = open_field();
    let score = ScoreBoard::default();
    let mut agent = SimAgent::at_tile(TilePosition::new(3, 2), Direction::Up, &maze);
    let calls = Arc::new(AtomicUsize::new(0));
    let mut core = DecisionCore::new(counting_scorer(calls.clone()));

    for _ in 0..900 {
        let direction = core.decide(&mut agent, AgentEnv::new(&maze, &score)).unwrap();
        assert_eq!(direction, Direction::Up);
    }
    assert!(agent.is_alive());
    assert_eq!(calls.load(Ordering::SeqCst), 900);
    let features_before_trip = core.last_features();

    // Tick 901: counter reaches 901 > 900.
    let direction = core.decide(&mut agent, AgentEnv::new(&maze, &score)).unwrap();
    assert_eq!(direction, Direction::Right);
    assert!(!agent.is_alive());
    assert_eq!(core.tick(), Tick(901));

    // Scoring was skipped entirely.
    assert_eq!(calls.load(Ordering::SeqCst), 900);
    assert_eq!(core.last_features(), features_before_trip);
    assert!(!core.score_watchdog().is_tripped());
}

#[test]
fn fallback_direction_is_absolute() {
    let maze = open_field();
    let score = ScoreBoard::default();
    let mut agent = SimAgent::at_tile(TilePosition::new(3, 2), Direction::Left, &maze);
    let mut core = DecisionCore::with_config(
        BehaviorConfig::with_timeouts(2400, 0),
        FixedScorer::new([1.0, 0.0, 0.0, 0.0]),
    );

    let direction = core.decide(&mut agent, AgentEnv::new(&maze, &score)).unwrap();
    assert_eq!(direction, Direction::Right);
    assert_eq!(agent.kills(), 1);
}

#[test]
fn score_watchdog_kills_without_overriding_direction() {
    let maze = open_field();
    let score = ScoreBoard::default();
    let mut agent = SimAgent::at_tile(TilePosition::new(3, 2), Direction::Up, &maze);
    let mut core = DecisionCore::with_config(
        BehaviorConfig::with_timeouts(10, 1_000),
        FixedScorer::new([0.0, 1.0, 0.0, 0.0]),
    );

    for _ in 0..10 {
        core.decide(&mut agent, AgentEnv::new(&maze, &score)).unwrap();
    }
    assert!(agent.is_alive());

    // Tick 11 trips the score watchdog; the scorer's choice still comes back.
    let direction = core.decide(&mut agent, AgentEnv::new(&maze, &score)).unwrap();
    assert_eq!(direction, Direction::Left);
    assert_eq!(agent.kills(), 1);
    assert!(core.score_watchdog().is_tripped());
    assert!(!core.progress_watchdog().is_tripped());

    // Not re-armed: every further idle tick requests another kill.
    core.decide(&mut agent, AgentEnv::new(&maze, &score)).unwrap();
    assert_eq!(agent.kills(), 2);
}

#[test]
fn rising_score_resets_both_watchdogs() {
    let maze = open_field();
    let mut score = ScoreBoard::default();
    let mut agent = SimAgent::at_tile(TilePosition::new(3, 2), Direction::Up, &maze);
    let mut core = DecisionCore::with_config(
        BehaviorConfig::with_timeouts(3, 3),
        FixedScorer::new([1.0, 0.0, 0.0, 0.0]),
    );

    for idle in 1..=3 {
        core.decide(&mut agent, AgentEnv::new(&maze, &score)).unwrap();
        assert_eq!(core.score_watchdog().ticks_since_change(), idle);
        assert_eq!(core.progress_watchdog().ticks_since_change(), idle);
    }

    score.add(10);
    core.decide(&mut agent, AgentEnv::new(&maze, &score)).unwrap();
    assert_eq!(core.score_watchdog().ticks_since_change(), 0);
    assert_eq!(core.progress_watchdog().ticks_since_change(), 0);
    assert_eq!(core.progress_watchdog().last_observed_score(), 10);

    for _ in 0..3 {
        core.decide(&mut agent, AgentEnv::new(&maze, &score)).unwrap();
    }
    assert!(agent.is_alive());

    let direction = core.decide(&mut agent, AgentEnv::new(&maze, &score)).unwrap();
    assert_eq!(direction, Direction::Right);
    assert!(!agent.is_alive());
}

#[test]
fn stalled_episode_ends_in_kill() {
    // The pellet is walled off, so the score can never rise.
    let maze = GridMaze::parse(
        "#####\n\
         # #.#\n\
         #####",
    )
    .unwrap();
    let agent = SimAgent::at_tile(TilePosition::new(1, 1), Direction::Up, &maze);
    let mut sim = Simulation::new(maze, agent);
    let mut core = DecisionCore::with_config(
        BehaviorConfig::with_timeouts(2400, 5),
        FixedScorer::new([1.0, 0.0, 0.0, 0.0]),
    );

    let summary = sim.run(&mut core, 100).unwrap();
    assert_eq!(summary.outcome, EpisodeOutcome::Killed);
    assert_eq!(summary.ticks, Tick(6));
    assert_eq!(summary.score, 0);
}
