use serde::Serialize;

use crate::error::ScoringError;
use crate::model::{CriterionDefinition, ScoreResult, SelectionSet};
use crate::scorers::{
    DiagnosticChecklistScorer, MutationBlastScorer, Scorer, ScorerId, SimplifiedPesiScorer,
    WellsScorer,
};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CriterionView {
    pub id: &'static str,
    pub label: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<&'static str>,
    pub weight: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<&'static str>,
}

impl From<&CriterionDefinition> for CriterionView {
    fn from(def: &CriterionDefinition) -> Self {
        Self {
            id: def.id,
            label: def.label,
            detail: def.detail,
            weight: def.weight,
            group: def.group,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Evaluation {
    pub scorer: ScorerId,
    pub raw_score: f64,
    pub max_score: f64,
    pub category_label: &'static str,
    pub action_text: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auxiliary_metric: Option<&'static str>,
}

impl From<&ScoreResult> for Evaluation {
    fn from(result: &ScoreResult) -> Self {
        Self {
            scorer: result.scorer,
            raw_score: result.raw_score,
            max_score: result.max_score,
            category_label: result.category.label,
            action_text: result.category.action,
            auxiliary_metric: result.category.auxiliary,
        }
    }
}

pub fn scorer(id: ScorerId) -> &'static dyn Scorer {
    match id {
        ScorerId::CpssMol => &MutationBlastScorer,
        ScorerId::Wells => &WellsScorer,
        ScorerId::SimplifiedPesi => &SimplifiedPesiScorer,
        ScorerId::DiagnosticChecklist => &DiagnosticChecklistScorer,
    }
}

pub fn scorer_by_id(scorer_id: &str) -> Result<&'static dyn Scorer, ScoringError> {
    Ok(scorer(scorer_id.parse()?))
}

pub fn all_scorers() -> impl Iterator<Item = &'static dyn Scorer> {
    ScorerId::ALL.into_iter().map(scorer)
}

pub fn list_criteria(scorer_id: &str) -> Result<Vec<CriterionView>, ScoringError> {
    let scorer = scorer_by_id(scorer_id)?;
    Ok(scorer.criteria().iter().map(CriterionView::from).collect())
}

pub fn evaluate<I, S>(scorer_id: &str, selected_ids: I) -> Result<Evaluation, ScoringError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let scorer = scorer_by_id(scorer_id)?;
    let selection: SelectionSet = selected_ids.into_iter().collect();
    let result = scorer.evaluate(&selection)?;
    Ok(Evaluation::from(&result))
}

#[cfg(test)]
#[path = "../tests/src_inline/registry.rs"]
mod tests;
