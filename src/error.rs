use thiserror::Error;

use crate::scorers::ScorerId;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScoringError {
    #[error("unknown criterion '{id}' for scorer {scorer}")]
    InvalidCriterion { scorer: ScorerId, id: String },

    #[error("unknown scorer '{0}'")]
    InvalidScorer(String),

    #[error("no category band admits score {score} for scorer {scorer}")]
    Unbanded { scorer: ScorerId, score: f64 },
}

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}
