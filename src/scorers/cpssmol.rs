use crate::model::{Bound, CategoryBand, CriterionDefinition, CriterionGroup};
use crate::scorers::{Scorer, ScorerId};

pub const BLASTS_HIGH: &str = "blasts_high";
pub const ASXL1: &str = "ASXL1";
pub const SETBP1: &str = "SETBP1";
pub const NRAS: &str = "NRAS";
pub const RUNX1: &str = "RUNX1";
pub const GENE_GROUP: &str = "setbp1_nras_runx1";

const CRITERIA: &[CriterionDefinition] = &[
    CriterionDefinition::new(BLASTS_HIGH, "Marrow blasts >=5%", 1.0)
        .with_detail("Unselected means marrow blasts <5%"),
    CriterionDefinition::new(ASXL1, "ASXL1 mutation", 1.0),
    CriterionDefinition::new(SETBP1, "SETBP1 mutation", 1.0).in_group(GENE_GROUP),
    CriterionDefinition::new(NRAS, "NRAS mutation", 1.0).in_group(GENE_GROUP),
    CriterionDefinition::new(RUNX1, "RUNX1 mutation", 1.0).in_group(GENE_GROUP),
];

const LOW_ACTION: &str = "CPSSmol Low risk group. Reassess per treatment indications.";
const INTERMEDIATE_1_ACTION: &str =
    "CPSSmol Intermediate-1 risk group. Reassess per treatment indications.";
const INTERMEDIATE_2_ACTION: &str =
    "CPSSmol Intermediate-2 risk group. Reassess per treatment indications.";
const HIGH_ACTION: &str = "High risk disease according to CPSSmol should prompt transplantation planning without delay. Recommended approach: HMA ± BCL2-i, Allo-SCT.";

const GROUPS: &[CriterionGroup] = &[CriterionGroup {
    id: GENE_GROUP,
    label: "SETBP1, NRAS or RUNX1 mutation",
    weight: 1.0,
}];

const BANDS: &[CategoryBand] = &[
    CategoryBand {
        lower: Bound::Inclusive(0.0),
        upper: Bound::Exclusive(1.0),
        label: "Low",
        action: LOW_ACTION,
        auxiliary: None,
    },
    CategoryBand {
        lower: Bound::Inclusive(1.0),
        upper: Bound::Exclusive(2.0),
        label: "Intermediate-1",
        action: INTERMEDIATE_1_ACTION,
        auxiliary: None,
    },
    CategoryBand {
        lower: Bound::Inclusive(2.0),
        upper: Bound::Exclusive(3.0),
        label: "Intermediate-2",
        action: INTERMEDIATE_2_ACTION,
        auxiliary: None,
    },
    CategoryBand {
        lower: Bound::Inclusive(3.0),
        upper: Bound::Unbounded,
        label: "High",
        action: HIGH_ACTION,
        auxiliary: None,
    },
];

#[derive(Debug, Clone, Copy, Default)]
pub struct MutationBlastScorer;

impl Scorer for MutationBlastScorer {
    fn id(&self) -> ScorerId {
        ScorerId::CpssMol
    }

    fn name(&self) -> &'static str {
        "CPSSmol Calculator"
    }

    fn criteria(&self) -> &'static [CriterionDefinition] {
        CRITERIA
    }

    fn groups(&self) -> &'static [CriterionGroup] {
        GROUPS
    }

    fn bands(&self) -> &'static [CategoryBand] {
        BANDS
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/scorers/cpssmol.rs"]
mod tests;
