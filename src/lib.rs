pub mod error;
pub mod model;
pub mod registry;
pub mod report;
pub mod scorers;
pub mod tracing;

pub use error::{ReportError, ScoringError};
pub use model::{CategoryBand, CriterionDefinition, CriterionGroup, ScoreResult, SelectionSet};
pub use registry::{Evaluation, evaluate, list_criteria};
pub use scorers::{Scorer, ScorerId};
