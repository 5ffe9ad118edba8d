pub mod checklist;
pub mod cpssmol;
pub mod spesi;
pub mod wells;

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::ScoringError;
use crate::model::bands::classify;
use crate::model::criteria::{find_criterion, group_members};
use crate::model::{CategoryBand, CriterionDefinition, CriterionGroup, ScoreResult, SelectionSet};

pub use checklist::DiagnosticChecklistScorer;
pub use cpssmol::MutationBlastScorer;
pub use spesi::SimplifiedPesiScorer;
pub use wells::WellsScorer;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum ScorerId {
    #[serde(rename = "cpssmol")]
    CpssMol,
    #[serde(rename = "wells")]
    Wells,
    #[serde(rename = "spesi")]
    SimplifiedPesi,
    #[serde(rename = "cmml-prerequisites")]
    DiagnosticChecklist,
}

impl ScorerId {
    pub const ALL: [ScorerId; 4] = [
        ScorerId::CpssMol,
        ScorerId::Wells,
        ScorerId::SimplifiedPesi,
        ScorerId::DiagnosticChecklist,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ScorerId::CpssMol => "cpssmol",
            ScorerId::Wells => "wells",
            ScorerId::SimplifiedPesi => "spesi",
            ScorerId::DiagnosticChecklist => "cmml-prerequisites",
        }
    }
}

impl fmt::Display for ScorerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for ScorerId {
    type Err = ScoringError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        ScorerId::ALL
            .into_iter()
            .find(|id| id.as_str() == wanted)
            .ok_or_else(|| ScoringError::InvalidScorer(s.to_string()))
    }
}

pub trait Scorer: Send + Sync {
    fn id(&self) -> ScorerId;

    fn name(&self) -> &'static str;

    fn criteria(&self) -> &'static [CriterionDefinition];

    fn groups(&self) -> &'static [CriterionGroup] {
        &[]
    }

    fn bands(&self) -> &'static [CategoryBand];

    fn auxiliary_label(&self) -> Option<&'static str> {
        None
    }

    fn validate(&self, selection: &SelectionSet) -> Result<(), ScoringError> {
        for id in selection.iter() {
            self.check_criterion(id)?;
        }
        Ok(())
    }

    fn check_criterion(&self, id: &str) -> Result<(), ScoringError> {
        if find_criterion(self.criteria(), id).is_some() {
            return Ok(());
        }
        tracing::warn!(scorer = %self.id(), criterion = id, "rejecting unknown criterion");
        Err(ScoringError::InvalidCriterion {
            scorer: self.id(),
            id: id.to_string(),
        })
    }

    // grouped criteria score once through their group
    fn raw_score(&self, selection: &SelectionSet) -> f64 {
        weighted_sum(self.criteria(), self.groups(), |id| selection.contains(id))
    }

    fn max_score(&self) -> f64 {
        weighted_sum(self.criteria(), self.groups(), |_| true)
    }

    fn evaluate(&self, selection: &SelectionSet) -> Result<ScoreResult, ScoringError> {
        self.validate(selection)?;
        let raw_score = self.raw_score(selection);
        let (rank, category) =
            classify(self.bands(), raw_score).ok_or(ScoringError::Unbanded {
                scorer: self.id(),
                score: raw_score,
            })?;
        tracing::debug!(
            scorer = %self.id(),
            selected = selection.len(),
            raw_score,
            category = category.label,
            "evaluated selection"
        );
        Ok(ScoreResult {
            scorer: self.id(),
            raw_score,
            max_score: self.max_score(),
            rank,
            category,
        })
    }

    fn toggle(&self, selection: &SelectionSet, id: &str) -> Result<SelectionSet, ScoringError> {
        self.check_criterion(id)?;
        Ok(selection.toggled(id))
    }
}

fn weighted_sum(
    criteria: &[CriterionDefinition],
    groups: &[CriterionGroup],
    is_selected: impl Fn(&str) -> bool,
) -> f64 {
    let mut total = 0.0;
    for criterion in criteria.iter().filter(|c| c.group.is_none()) {
        if is_selected(criterion.id) {
            total += criterion.weight;
        }
    }
    for group in groups {
        let any_member = group_members(criteria, group.id).any(|c| is_selected(c.id));
        if any_member {
            total += group.weight;
        }
    }
    total
}

#[cfg(test)]
#[path = "../../tests/src_inline/scorers/mod.rs"]
mod tests;
