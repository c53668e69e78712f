//! Scorer boundary and candidate selection.
//!
//! The decision core treats the scorer as a black box mapping a feature
//! vector to one output per candidate (forward, left, right, behind). The
//! boundary is synchronous: scorers computed elsewhere are adapted with
//! [`BlockingScorer`], which waits once per tick.

use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScorerError {
    #[error("scorer expects {expected} features, got {found}")]
    FeatureCount { expected: usize, found: usize },

    /// Failure reported by the scorer implementation itself (model server
    /// down, evaluation crashed).
    #[error("scorer backend failed: {0}")]
    Backend(String),

    #[error("failed to start scorer runtime")]
    Runtime(#[source] std::io::Error),
}

/// Synchronous scoring function consulted once per tick.
pub trait Scorer: Send + Sync {
    /// Returns one output per candidate direction.
    fn score(&self, features: &[f32]) -> Result<Vec<f32>, ScorerError>;
}

impl<F> Scorer for F
where
    F: Fn(&[f32]) -> Vec<f32> + Send + Sync,
{
    fn score(&self, features: &[f32]) -> Result<Vec<f32>, ScorerError> {
        Ok(self(features))
    }
}

/// Scorer that ignores its input and returns a constant output.
#[derive(Clone, Debug, PartialEq)]
pub struct FixedScorer {
    outputs: Vec<f32>,
}

impl FixedScorer {
    pub fn new(outputs: impl Into<Vec<f32>>) -> Self {
        Self {
            outputs: outputs.into(),
        }
    }
}

impl Scorer for FixedScorer {
    fn score(&self, _features: &[f32]) -> Result<Vec<f32>, ScorerError> {
        Ok(self.outputs.clone())
    }
}

/// Scorer computed off the calling thread (worker pool, remote evaluator).
#[async_trait]
pub trait AsyncScorer: Send + Sync {
    async fn score(&self, features: Vec<f32>) -> Result<Vec<f32>, ScorerError>;
}

/// Adapts an [`AsyncScorer`] to the synchronous boundary.
///
/// Owns a current-thread tokio runtime and blocks on it for every call, so it
/// must not be used from inside another tokio runtime's async context.
pub struct BlockingScorer<S> {
    inner: S,
    runtime: tokio::runtime::Runtime,
}

impl<S: AsyncScorer> BlockingScorer<S> {
    pub fn new(inner: S) -> Result<Self, ScorerError> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_time()
            .build()
            .map_err(ScorerError::Runtime)?;

        Ok(Self { inner, runtime })
    }

    pub fn inner(&self) -> &S {
        &self.inner
    }
}

impl<S: AsyncScorer> Scorer for BlockingScorer<S> {
    fn score(&self, features: &[f32]) -> Result<Vec<f32>, ScorerError> {
        self.runtime.block_on(self.inner.score(features.to_vec()))
    }
}

impl<S> std::fmt::Debug for BlockingScorer<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BlockingScorer").finish_non_exhaustive()
    }
}

/// Index of the first maximal output, scanning left to right with a strict
/// greater-than comparison. `None` for an empty slice.
pub fn arg_max(outputs: &[f32]) -> Option<usize> {
    let (first, rest) = outputs.split_first()?;

    let mut index = 0;
    let mut max = *first;
    for (offset, &value) in rest.iter().enumerate() {
        if value > max {
            max = value;
            index = offset + 1;
        }
    }

    Some(index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn first_maximum_wins_ties() {
        assert_eq!(arg_max(&[0.5, 0.5, 0.1, 0.1]), Some(0));
        assert_eq!(arg_max(&[0.1, 0.9, 0.9, 0.2]), Some(1));
    }

    #[test]
    fn picks_strict_maximum() {
        assert_eq!(arg_max(&[0.0, 0.0, 0.0, 1.0]), Some(3));
        assert_eq!(arg_max(&[-3.0, -1.0, -2.0, -4.0]), Some(1));
    }

    #[test]
    fn empty_output_has_no_maximum() {
        assert_eq!(arg_max(&[]), None);
    }

    #[test]
    fn closures_are_scorers() {
        let scorer = |features: &[f32]| vec![features.iter().sum::<f32>(), 0.0, 0.0, 0.0];
        let outputs = scorer.score(&[1.0, 2.0, 0.0, 0.0, 0.0]).unwrap();
        assert_eq!(outputs, vec![3.0, 0.0, 0.0, 0.0]);
    }

    #[test]
    fn fixed_scorer_ignores_features() {
        let scorer = FixedScorer::new([0.0, 1.0, 0.0, 0.0]);
        assert_eq!(scorer.score(&[9.0; 5]).unwrap(), vec![0.0, 1.0, 0.0, 0.0]);
    }

    struct DelayedScorer;

    #[async_trait]
    impl AsyncScorer for DelayedScorer {
        async fn score(&self, features: Vec<f32>) -> Result<Vec<f32>, ScorerError> {
            if features.len() != 5 {
                return Err(ScorerError::FeatureCount {
                    expected: 5,
                    found: features.len(),
                });
            }
            tokio::time::sleep(Duration::from_millis(1)).await;
            Ok(vec![0.0, 0.0, 1.0, 0.0])
        }
    }

    #[test]
    fn blocking_scorer_waits_for_async_result() {
        let scorer = BlockingScorer::new(DelayedScorer).unwrap();
        assert_eq!(scorer.score(&[0.0; 5]).unwrap(), vec![0.0, 0.0, 1.0, 0.0]);
    }

    struct OfflineScorer;

    #[async_trait]
    impl AsyncScorer for OfflineScorer {
        async fn score(&self, _features: Vec<f32>) -> Result<Vec<f32>, ScorerError> {
            Err(ScorerError::Backend("evaluator unreachable".into()))
        }
    }

    #[test]
    fn blocking_scorer_surfaces_backend_failures() {
        let scorer = BlockingScorer::new(OfflineScorer).unwrap();
        let err = scorer.score(&[0.0; 5]).unwrap_err();
        assert_eq!(err.to_string(), "scorer backend failed: evaluator unreachable");
    }

    #[test]
    fn blocking_scorer_propagates_errors() {
        let scorer = BlockingScorer::new(DelayedScorer).unwrap();
        let err = scorer.score(&[0.0; 3]).unwrap_err();
        assert!(matches!(
            err,
            ScorerError::FeatureCount {
                expected: 5,
                found: 3
            }
        ));
    }
}
