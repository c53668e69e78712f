//! Public runtime API surface.
//!
//! This module gathers the types exposed to host game loops so the decision
//! internals can stay focused on features, watchdogs, and scoring.

pub mod errors;
pub mod providers;

pub use errors::{DecisionError, Result};
pub use providers::{DirectionProvider, FixedDirectionProvider};
