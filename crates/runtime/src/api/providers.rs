//! Per-tick abstraction for sourcing an agent's movement direction.
//!
//! Host game loops plug in [`DirectionProvider`] implementations so an agent
//! can be driven by the decision core, a scripted fixture, or a human.
use maze_core::{AgentControl, AgentEnv, Direction};

use super::errors::Result;

/// Trait for choosing an agent's direction once per simulation tick.
///
/// Calls for one agent are strictly sequential; implementations may keep
/// mutable per-agent state between ticks.
pub trait DirectionProvider {
    /// Provide the direction the agent should move in this tick.
    ///
    /// # Arguments
    /// * `agent` - Control surface of the agent being steered
    /// * `env` - Read-only maze and score oracles for this tick
    fn provide_direction(
        &mut self,
        agent: &mut dyn AgentControl,
        env: AgentEnv<'_>,
    ) -> Result<Direction>;
}

/// A provider that always returns the same direction.
/// Useful for testing or as a fallback.
#[derive(Debug, Clone, Copy)]
pub struct FixedDirectionProvider(pub Direction);

impl DirectionProvider for FixedDirectionProvider {
    fn provide_direction(
        &mut self,
        _agent: &mut dyn AgentControl,
        _env: AgentEnv<'_>,
    ) -> Result<Direction> {
        Ok(self.0)
    }
}
