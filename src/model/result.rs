use serde::Serialize;

use crate::model::bands::CategoryBand;
use crate::scorers::ScorerId;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoreResult {
    pub scorer: ScorerId,
    pub raw_score: f64,
    pub max_score: f64,
    // index into the band table, 0 = lowest risk
    pub rank: usize,
    pub category: &'static CategoryBand,
}

impl ScoreResult {
    pub fn fraction(&self) -> f64 {
        if self.max_score <= 0.0 {
            return 0.0;
        }
        (self.raw_score / self.max_score).clamp(0.0, 1.0)
    }
}
