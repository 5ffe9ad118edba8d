pub mod json;
pub mod text;

use serde::Serialize;

use crate::model::{CriterionDefinition, ScoreResult, SelectionSet};
use crate::scorers::{Scorer, ScorerId};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectedCriterion {
    pub id: &'static str,
    pub label: &'static str,
    pub weight: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<&'static str>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreReport {
    pub scorer: ScorerId,
    pub scorer_name: &'static str,
    pub selected: Vec<SelectedCriterion>,
    pub raw_score: f64,
    pub max_score: f64,
    pub fraction: f64,
    pub rank: usize,
    pub category_label: &'static str,
    pub action_text: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auxiliary_label: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auxiliary_metric: Option<&'static str>,
}

impl ScoreReport {
    pub fn new(scorer: &dyn Scorer, selection: &SelectionSet, result: &ScoreResult) -> Self {
        // criteria order, not selection order
        let selected = scorer
            .criteria()
            .iter()
            .filter(|c| selection.contains(c.id))
            .map(SelectedCriterion::from)
            .collect();
        Self {
            scorer: result.scorer,
            scorer_name: scorer.name(),
            selected,
            raw_score: result.raw_score,
            max_score: result.max_score,
            fraction: result.fraction(),
            rank: result.rank,
            category_label: result.category.label,
            action_text: result.category.action,
            auxiliary_label: result.category.auxiliary.and(scorer.auxiliary_label()),
            auxiliary_metric: result.category.auxiliary,
        }
    }
}

impl From<&CriterionDefinition> for SelectedCriterion {
    fn from(def: &CriterionDefinition) -> Self {
        Self {
            id: def.id,
            label: def.label,
            weight: def.weight,
            group: def.group,
        }
    }
}

// 3, 1.5, 12.5
pub fn format_points(v: f64) -> String {
    if v.fract() == 0.0 {
        format!("{:.0}", v)
    } else {
        let s = format!("{:.2}", v);
        s.trim_end_matches('0').to_string()
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/mod.rs"]
mod tests;
