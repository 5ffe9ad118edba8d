use crate::error::ScoringError;
use crate::model::{Bound, CategoryBand, CriterionDefinition, SelectionSet};
use crate::scorers::{Scorer, ScorerId};

pub const CONFIRMATION: &str = "All Prerequisite Criteria Met";

const CRITERIA: &[CriterionDefinition] = &[
    CriterionDefinition::new("mono", "Persistent Absolute Monocytosis (>0.5 x 10⁹/L)", 1.0)
        .with_detail("and relative >10% of WBC"),
    CriterionDefinition::new("blasts", "Blasts <20% in blood and marrow", 1.0)
        .with_detail("Includes promonocytes"),
    CriterionDefinition::new("cml", "Does not meet CML/MPN criteria", 1.0)
        .with_detail("BCR::ABL1 negative"),
];

const BANDS: &[CategoryBand] = &[
    CategoryBand {
        lower: Bound::Inclusive(0.0),
        upper: Bound::Exclusive(3.0),
        label: "Criteria Not Met",
        action: "Not all prerequisite criteria confirmed.",
        auxiliary: None,
    },
    CategoryBand {
        lower: Bound::Inclusive(3.0),
        upper: Bound::Unbounded,
        label: CONFIRMATION,
        action: CONFIRMATION,
        auxiliary: None,
    },
];

#[derive(Debug, Clone, Copy, Default)]
pub struct DiagnosticChecklistScorer;

impl DiagnosticChecklistScorer {
    pub fn is_met(&self, selection: &SelectionSet) -> Result<bool, ScoringError> {
        self.validate(selection)?;
        Ok(CRITERIA.iter().all(|c| selection.contains(c.id)))
    }
}

impl Scorer for DiagnosticChecklistScorer {
    fn id(&self) -> ScorerId {
        ScorerId::DiagnosticChecklist
    }

    fn name(&self) -> &'static str {
        "WHO 2022 Prerequisite Criteria"
    }

    fn criteria(&self) -> &'static [CriterionDefinition] {
        CRITERIA
    }

    fn bands(&self) -> &'static [CategoryBand] {
        BANDS
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/scorers/checklist.rs"]
mod tests;
