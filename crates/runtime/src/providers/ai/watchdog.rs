//! Stagnation watchdogs that terminate agents making no score progress.

use maze_core::Score;

/// Which of the two independent watchdogs a [`Watchdog`] implements.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum WatchdogKind {
    /// Long timeout; a trip only kills the agent.
    Score,
    /// Short timeout; a trip kills the agent and forces the fallback direction.
    Progress,
}

/// Counts ticks since the observed score last increased.
///
/// The counter resets to zero in the tick the score rises and grows by one in
/// every other tick. Once it exceeds the threshold every further idle tick
/// reports a trip.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Watchdog {
    kind: WatchdogKind,
    threshold: u64,
    last_observed_score: Score,
    ticks_since_change: u64,
}

impl Watchdog {
    pub fn new(kind: WatchdogKind, threshold: u64) -> Self {
        Self {
            kind,
            threshold,
            last_observed_score: 0,
            ticks_since_change: 0,
        }
    }

    /// Records this tick's score and returns `true` if the watchdog tripped.
    pub fn observe(&mut self, score: Score) -> bool {
        if score > self.last_observed_score {
            self.last_observed_score = score;
            self.ticks_since_change = 0;
        } else {
            self.ticks_since_change += 1;
        }

        self.is_tripped()
    }

    pub fn is_tripped(&self) -> bool {
        self.ticks_since_change > self.threshold
    }

    pub fn kind(&self) -> WatchdogKind {
        self.kind
    }

    pub fn threshold(&self) -> u64 {
        self.threshold
    }

    pub fn last_observed_score(&self) -> Score {
        self.last_observed_score
    }

    pub fn ticks_since_change(&self) -> u64 {
        self.ticks_since_change
    }
}
