//! Feature-based decision core for maze agents.
//!
//! Each tick the core runs a fixed pipeline:
//!
//! 1. **Watchdogs**: two stagnation timers observe the level score and may
//!    terminate the agent ([`Watchdog`])
//! 2. **Pellet search**: locate a target pellet and the direction that
//!    approaches it ([`pellet`])
//! 3. **Features**: legal-move bases plus pellet rewards and hotspot
//!    penalties, applied through first-match rule chains ([`features`])
//! 4. **Scoring**: an external [`Scorer`] rates forward/left/right/behind
//! 5. **Selection**: the first maximal output is mapped back to an absolute
//!    direction
//!
//! # Core Components
//!
//! - [`DecisionCore`]: owns per-agent state and implements
//!   [`crate::DirectionProvider`]
//! - [`TickContext`]: snapshot of the agent and oracles for one tick
//! - [`HotspotMemory`]: append-only memory of sampled tiles

pub mod context;
pub mod features;
pub mod hotspot;
pub mod pellet;
pub mod provider;
pub mod scorer;
pub mod watchdog;

// Re-export public API
pub use context::TickContext;
pub use features::{FeatureVector, NEIGHBOR_RULES, NeighborRule, RuleChain};
pub use hotspot::HotspotMemory;
pub use pellet::PelletTarget;
pub use provider::DecisionCore;
pub use scorer::{AsyncScorer, BlockingScorer, FixedScorer, Scorer, ScorerError, arg_max};
pub use watchdog::{Watchdog, WatchdogKind};
