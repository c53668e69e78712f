use crate::state::Score;

/// Level progress counter. Never decreases within an episode.
pub trait ScoreOracle: Send + Sync {
    fn score(&self) -> Score;
}
