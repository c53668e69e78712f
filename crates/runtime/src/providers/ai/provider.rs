//! Feature-based direction provider.

use maze_core::{AgentControl, AgentEnv, BehaviorConfig, Direction, RelativeDirection, Tick};

use super::context::TickContext;
use super::features::{FeatureVector, NEIGHBOR_RULES, RuleChain};
use super::hotspot::HotspotMemory;
use super::pellet;
use super::scorer::{Scorer, arg_max};
use super::watchdog::{Watchdog, WatchdogKind};
use crate::api::{DecisionError, DirectionProvider, Result};

/// Per-agent decision core.
///
/// Owns every piece of state that survives between ticks: both watchdogs,
/// the hotspot memory, and the tick counter. One instance steers one agent
/// for one episode; calls must be sequential.
///
/// # Pipeline
///
/// Each call to [`DecisionCore::decide`]:
/// 1. Advances the tick counter
/// 2. Feeds the score to the score watchdog (kills on trip, keeps going)
/// 3. Feeds the score to the progress watchdog (kills on trip and returns
///    the configured fallback direction)
/// 4. Captures a [`TickContext`] and assembles the [`FeatureVector`]
/// 5. Asks the [`Scorer`] for per-candidate outputs
/// 6. Maps the first maximal output to forward/left/right/behind under the
///    facing captured at the start of the tick
pub struct DecisionCore {
    config: BehaviorConfig,
    scorer: Box<dyn Scorer>,
    score_watchdog: Watchdog,
    progress_watchdog: Watchdog,
    hotspots: HotspotMemory,
    tick: Tick,
    last_features: Option<FeatureVector>,
}

impl DecisionCore {
    /// Creates a core with the default behaviour configuration.
    pub fn new(scorer: impl Scorer + 'static) -> Self {
        Self::with_config(BehaviorConfig::default(), scorer)
    }

    pub fn with_config(config: BehaviorConfig, scorer: impl Scorer + 'static) -> Self {
        Self {
            score_watchdog: Watchdog::new(WatchdogKind::Score, config.score_timeout_ticks),
            progress_watchdog: Watchdog::new(WatchdogKind::Progress, config.stall_timeout_ticks),
            config,
            scorer: Box::new(scorer),
            hotspots: HotspotMemory::new(),
            tick: Tick::ZERO,
            last_features: None,
        }
    }

    /// Chooses this tick's direction for `agent`.
    ///
    /// # Errors
    ///
    /// Fails if the scorer fails, returns no outputs, or selects an index
    /// outside the four candidates. All three abort the tick.
    pub fn decide(&mut self, agent: &mut dyn AgentControl, env: AgentEnv<'_>) -> Result<Direction> {
        self.tick = self.tick.next();

        let score = env.score();
        if self.score_watchdog.observe(score) {
            tracing::warn!(
                tick = %self.tick,
                idle_ticks = self.score_watchdog.ticks_since_change(),
                "{} watchdog tripped, terminating agent",
                WatchdogKind::Score
            );
            agent.kill();
        }

        if self.progress_watchdog.observe(score) {
            tracing::warn!(
                tick = %self.tick,
                idle_ticks = self.progress_watchdog.ticks_since_change(),
                fallback = %self.config.stall_fallback,
                "{} watchdog tripped, terminating agent",
                WatchdogKind::Progress
            );
            agent.kill();
            return Ok(self.config.stall_fallback);
        }

        let ctx = TickContext::capture(self.tick, agent, env);
        let features = self.assemble_features(&ctx);
        self.last_features = Some(features);

        let outputs = self.scorer.score(&features.to_array())?;
        let index = arg_max(&outputs).ok_or(DecisionError::EmptyScorerOutput)?;
        let Some(relative) = RelativeDirection::from_repr(index) else {
            tracing::error!(
                tick = %self.tick,
                index,
                outputs = outputs.len(),
                "scorer selected a candidate outside forward/left/right/behind"
            );
            return Err(DecisionError::InvalidCandidateIndex {
                index,
                outputs: outputs.len(),
            });
        };

        let direction = ctx.resolve(relative);
        tracing::debug!(
            tick = %self.tick,
            facing = %ctx.facing,
            %relative,
            %direction,
            "direction selected"
        );

        Ok(direction)
    }

    /// Builds the feature vector for `ctx`, sampling a hotspot when the tick
    /// lands on the configured interval.
    fn assemble_features(&mut self, ctx: &TickContext<'_>) -> FeatureVector {
        let mut features = FeatureVector::from_mobility(ctx, self.config.move_base);

        let target = pellet::find_target(ctx.maze(), ctx.tile, ctx.facing);
        if let Some(target) = target {
            features.adjust(
                RelativeDirection::slot_for(target.direction),
                self.config.pellet_reward,
            );
        }

        RuleChain::new(&NEIGHBOR_RULES, self.config.pellet_reward)
            .apply(&mut features, |probe| ctx.neighbor_has_pellet(probe));

        if ctx.tick.is_multiple_of(self.config.hotspot_interval) {
            self.hotspots.record(ctx.tile);
            tracing::debug!(tick = %ctx.tick, tile = %ctx.tile, "hotspot sampled");
        }

        let hotspots = &self.hotspots;
        RuleChain::new(&NEIGHBOR_RULES, -self.config.hotspot_penalty)
            .apply(&mut features, |probe| hotspots.contains(ctx.neighbor_tile(probe)));

        features.encode_target(target.map(|target| target.direction));

        tracing::trace!(tick = %ctx.tick, features = ?features.to_array(), "features assembled");

        features
    }

    pub fn config(&self) -> &BehaviorConfig {
        &self.config
    }

    /// Number of decisions made so far this episode.
    pub fn tick(&self) -> Tick {
        self.tick
    }

    pub fn hotspots(&self) -> &HotspotMemory {
        &self.hotspots
    }

    pub fn score_watchdog(&self) -> &Watchdog {
        &self.score_watchdog
    }

    pub fn progress_watchdog(&self) -> &Watchdog {
        &self.progress_watchdog
    }

    /// Features handed to the scorer on the most recent scored tick.
    pub fn last_features(&self) -> Option<FeatureVector> {
        self.last_features
    }
}

impl DirectionProvider for DecisionCore {
    fn provide_direction(
        &mut self,
        agent: &mut dyn AgentControl,
        env: AgentEnv<'_>,
    ) -> Result<Direction> {
        self.decide(agent, env)
    }
}

impl std::fmt::Debug for DecisionCore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DecisionCore")
            .field("config", &self.config)
            .field("score_watchdog", &self.score_watchdog)
            .field("progress_watchdog", &self.progress_watchdog)
            .field("hotspots", &self.hotspots.len())
            .field("tick", &self.tick)
            .finish_non_exhaustive()
    }
}
