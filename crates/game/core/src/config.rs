//! Tunable thresholds and weights for the per-tick decision core.
use std::env;

use crate::direction::Direction;

/// Behaviour configuration for one agent's decision core.
///
/// Feature weights that are added to an existing feature are kept in `f64`;
/// the sum is narrowed back to `f32` after every adjustment so results match
/// scorers trained against that arithmetic.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BehaviorConfig {
    /// Idle ticks tolerated by the score watchdog before it kills the agent.
    pub score_timeout_ticks: u64,
    /// Idle ticks tolerated by the progress watchdog before it kills the agent
    /// and forces the fallback direction.
    pub stall_timeout_ticks: u64,
    /// The agent's tile is sampled into hotspot memory every this many ticks.
    pub hotspot_interval: u64,
    /// Feature value for a direction the agent can legally move in.
    pub move_base: f32,
    /// Bonus for the slot pointing at a pellet.
    pub pellet_reward: f64,
    /// Penalty for the slot pointing at a remembered hotspot.
    pub hotspot_penalty: f64,
    /// Direction returned when the progress watchdog trips.
    pub stall_fallback: Direction,
}

impl BehaviorConfig {
    /// Simulation rate the default timeouts are expressed in.
    pub const TICKS_PER_SECOND: u64 = 60;
    /// Length of the feature vector handed to scorers.
    pub const FEATURE_COUNT: usize = 5;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_SCORE_TIMEOUT_TICKS: u64 = Self::TICKS_PER_SECOND * 40;
    pub const DEFAULT_STALL_TIMEOUT_TICKS: u64 = Self::TICKS_PER_SECOND * 15;
    pub const DEFAULT_HOTSPOT_INTERVAL: u64 = 100;
    pub const DEFAULT_MOVE_BASE: f32 = 0.75;
    pub const DEFAULT_PELLET_REWARD: f64 = 0.10;
    pub const DEFAULT_HOTSPOT_PENALTY: f64 = 0.35;
    pub const DEFAULT_STALL_FALLBACK: Direction = Direction::Right;

    pub fn new() -> Self {
        Self {
            score_timeout_ticks: Self::DEFAULT_SCORE_TIMEOUT_TICKS,
            stall_timeout_ticks: Self::DEFAULT_STALL_TIMEOUT_TICKS,
            hotspot_interval: Self::DEFAULT_HOTSPOT_INTERVAL,
            move_base: Self::DEFAULT_MOVE_BASE,
            pellet_reward: Self::DEFAULT_PELLET_REWARD,
            hotspot_penalty: Self::DEFAULT_HOTSPOT_PENALTY,
            stall_fallback: Self::DEFAULT_STALL_FALLBACK,
        }
    }

    pub fn with_timeouts(score_timeout_ticks: u64, stall_timeout_ticks: u64) -> Self {
        Self {
            score_timeout_ticks,
            stall_timeout_ticks,
            ..Self::new()
        }
    }

    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `AGENT_SCORE_TIMEOUT_TICKS` - Score watchdog threshold (default: 2400)
    /// - `AGENT_STALL_TIMEOUT_TICKS` - Progress watchdog threshold (default: 900)
    /// - `AGENT_HOTSPOT_INTERVAL` - Hotspot sampling interval (default: 100)
    /// - `AGENT_MOVE_BASE` - Legal move feature value (default: 0.75)
    /// - `AGENT_PELLET_REWARD` - Pellet bonus (default: 0.10)
    /// - `AGENT_HOTSPOT_PENALTY` - Hotspot penalty (default: 0.35)
    /// - `AGENT_STALL_FALLBACK` - Fallback direction name (default: right)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(ticks) = read_env::<u64>("AGENT_SCORE_TIMEOUT_TICKS") {
            config.score_timeout_ticks = ticks;
        }
        if let Some(ticks) = read_env::<u64>("AGENT_STALL_TIMEOUT_TICKS") {
            config.stall_timeout_ticks = ticks;
        }
        if let Some(interval) = read_env::<u64>("AGENT_HOTSPOT_INTERVAL") {
            config.hotspot_interval = interval.max(1);
        }
        if let Some(base) = read_env::<f32>("AGENT_MOVE_BASE") {
            config.move_base = base;
        }
        if let Some(reward) = read_env::<f64>("AGENT_PELLET_REWARD") {
            config.pellet_reward = reward;
        }
        if let Some(penalty) = read_env::<f64>("AGENT_HOTSPOT_PENALTY") {
            config.hotspot_penalty = penalty;
        }
        if let Some(direction) = read_env::<Direction>("AGENT_STALL_FALLBACK") {
            config.stall_fallback = direction;
        }

        config
    }
}

impl Default for BehaviorConfig {
    fn default() -> Self {
        Self::new()
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.trim().parse().ok()
}
