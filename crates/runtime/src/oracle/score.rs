use maze_core::{Score, ScoreOracle};

/// Level score held in memory.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScoreBoard {
    score: Score,
}

impl ScoreBoard {
    pub fn new(score: Score) -> Self {
        Self { score }
    }

    pub fn add(&mut self, points: Score) {
        self.score = self.score.saturating_add(points);
    }

    pub fn value(&self) -> Score {
        self.score
    }
}

impl ScoreOracle for ScoreBoard {
    fn score(&self) -> Score {
        self.score
    }
}
