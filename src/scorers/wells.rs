use crate::model::{Bound, CategoryBand, CriterionDefinition};
use crate::scorers::{Scorer, ScorerId};

const CRITERIA: &[CriterionDefinition] = &[
    CriterionDefinition::new("dvt", "Clinical signs/symptoms of DVT", 3.0),
    CriterionDefinition::new("alternative", "PE is #1 diagnosis or equally likely", 3.0),
    CriterionDefinition::new("hr", "Heart rate >100 bpm", 1.5),
    CriterionDefinition::new(
        "immobilisation",
        "Immobilisation (>3 days) or surgery in previous 4 weeks",
        1.5,
    ),
    CriterionDefinition::new("previous", "Previous DVT/PE", 1.5),
    CriterionDefinition::new("haemoptysis", "Haemoptysis", 1.0),
    CriterionDefinition::new(
        "malignancy",
        "Malignancy (treatment within 6 months or palliative)",
        1.0,
    ),
];

// Thresholds 1 and 4 belong to the lower band.
const BANDS: &[CategoryBand] = &[
    CategoryBand {
        lower: Bound::Inclusive(0.0),
        upper: Bound::Inclusive(1.0),
        label: "Low",
        action: "D-dimer testing. If negative, PE excluded.",
        auxiliary: None,
    },
    CategoryBand {
        lower: Bound::Exclusive(1.0),
        upper: Bound::Inclusive(4.0),
        label: "Intermediate",
        action: "D-dimer testing. If positive, proceed to CTPA.",
        auxiliary: None,
    },
    CategoryBand {
        lower: Bound::Exclusive(4.0),
        upper: Bound::Unbounded,
        label: "High",
        action: "Proceed directly to CTPA. Do not rely on D-dimer.",
        auxiliary: None,
    },
];

#[derive(Debug, Clone, Copy, Default)]
pub struct WellsScorer;

impl Scorer for WellsScorer {
    fn id(&self) -> ScorerId {
        ScorerId::Wells
    }

    fn name(&self) -> &'static str {
        "Wells Score for PE"
    }

    fn criteria(&self) -> &'static [CriterionDefinition] {
        CRITERIA
    }

    fn bands(&self) -> &'static [CategoryBand] {
        BANDS
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/scorers/wells.rs"]
mod tests;
