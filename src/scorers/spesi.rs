use crate::model::{Bound, CategoryBand, CriterionDefinition};
use crate::scorers::{Scorer, ScorerId};

const CRITERIA: &[CriterionDefinition] = &[
    CriterionDefinition::new("age", "Age >80 years", 1.0),
    CriterionDefinition::new("cancer", "Active cancer", 1.0),
    CriterionDefinition::new("heartfailure", "Heart failure or chronic lung disease", 1.0),
    CriterionDefinition::new("hr", "Heart rate ≥110 bpm", 1.0),
    CriterionDefinition::new("sbp", "Systolic BP <100 mmHg", 1.0),
    CriterionDefinition::new("spo2", "SpO₂ <90%", 1.0),
];

// Mortality is per band, not per score: 1 and 6 both report 10.9%.
const BANDS: &[CategoryBand] = &[
    CategoryBand {
        lower: Bound::Inclusive(0.0),
        upper: Bound::Exclusive(1.0),
        label: "Low Risk",
        action: "Consider outpatient management with DOAC if no other contraindications (Hestia criteria met, adequate support).",
        auxiliary: Some("1.0%"),
    },
    CategoryBand {
        lower: Bound::Inclusive(1.0),
        upper: Bound::Unbounded,
        label: "High Risk",
        action: "Inpatient management. Further stratify with troponin + echo/CT RV assessment. Consider ICU if haemodynamically unstable.",
        auxiliary: Some("10.9%"),
    },
];

#[derive(Debug, Clone, Copy, Default)]
pub struct SimplifiedPesiScorer;

impl Scorer for SimplifiedPesiScorer {
    fn id(&self) -> ScorerId {
        ScorerId::SimplifiedPesi
    }

    fn name(&self) -> &'static str {
        "Simplified PESI (sPESI)"
    }

    fn criteria(&self) -> &'static [CriterionDefinition] {
        CRITERIA
    }

    fn bands(&self) -> &'static [CategoryBand] {
        BANDS
    }

    fn auxiliary_label(&self) -> Option<&'static str> {
        Some("30-Day Mortality")
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/scorers/spesi.rs"]
mod tests;
