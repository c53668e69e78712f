//! Unified error types surfaced by the decision runtime.
//!
//! Wraps scorer failures, shape violations, and configuration problems so
//! hosts can bubble them up with consistent context.
use std::path::PathBuf;

use maze_core::{CoreError, ErrorSeverity, MazeError};
use thiserror::Error;

use crate::providers::ai::ScorerError;

pub type Result<T> = std::result::Result<T, DecisionError>;

#[derive(Debug, Error)]
pub enum DecisionError {
    #[error("scorer returned an empty output vector")]
    EmptyScorerOutput,

    #[error("scorer selected candidate {index} but only 4 directions exist ({outputs} outputs)")]
    InvalidCandidateIndex { index: usize, outputs: usize },

    #[error(transparent)]
    Scorer(#[from] ScorerError),

    #[error(transparent)]
    Maze(#[from] MazeError),

    #[error("failed to read behaviour config {path}")]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid behaviour config")]
    ConfigParse(#[source] serde_json::Error),
}

impl CoreError for DecisionError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            DecisionError::EmptyScorerOutput | DecisionError::InvalidCandidateIndex { .. } => {
                ErrorSeverity::Fatal
            }
            DecisionError::Scorer(_) => ErrorSeverity::Internal,
            DecisionError::Maze(err) => err.severity(),
            DecisionError::ConfigIo { .. } | DecisionError::ConfigParse(_) => {
                ErrorSeverity::Validation
            }
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            DecisionError::EmptyScorerOutput => "DECISION_EMPTY_SCORER_OUTPUT",
            DecisionError::InvalidCandidateIndex { .. } => "DECISION_INVALID_CANDIDATE_INDEX",
            DecisionError::Scorer(_) => "DECISION_SCORER",
            DecisionError::Maze(err) => err.error_code(),
            DecisionError::ConfigIo { .. } => "DECISION_CONFIG_IO",
            DecisionError::ConfigParse(_) => "DECISION_CONFIG_PARSE",
        }
    }
}
