//! Per-tick decision runtime for maze agents.
//!
//! This crate wires the stateful decision core, the scorer boundary, and
//! in-memory collaborator adapters into an API a host game loop can call once
//! per simulation tick.
//!
//! Modules are organized by responsibility:
//! - [`api`] exposes the provider trait and error types hosts interact with
//! - [`providers`] hosts [`DecisionCore`] and its feature/watchdog/search parts
//! - [`oracle`] provides in-memory maze, agent, and score adapters
//! - [`simulation`] drives a provider against the in-memory adapters
//! - [`config`] loads behaviour configuration files
pub mod api;
pub mod config;
pub mod oracle;
pub mod providers;
pub mod simulation;

pub use api::{DecisionError, DirectionProvider, FixedDirectionProvider, Result};
pub use config::{load_behavior_config, parse_behavior_config};
pub use oracle::{GridMaze, ScoreBoard, SimAgent};
pub use providers::ai::{
    AsyncScorer, BlockingScorer, DecisionCore, FeatureVector, FixedScorer, HotspotMemory,
    PelletTarget, Scorer, ScorerError, TickContext, Watchdog, WatchdogKind,
};
pub use simulation::{EpisodeOutcome, EpisodeSummary, Simulation};
