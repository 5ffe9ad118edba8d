use serde::Serialize;

use crate::error::ReportError;
use crate::model::CriterionGroup;
use crate::registry::CriterionView;
use crate::report::ScoreReport;
use crate::scorers::{Scorer, ScorerId};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CriteriaListing {
    scorer: ScorerId,
    name: &'static str,
    criteria: Vec<CriterionView>,
    groups: &'static [CriterionGroup],
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ScorerEntry {
    id: ScorerId,
    name: &'static str,
    max_score: f64,
}

pub fn render_report_json(report: &ScoreReport) -> Result<String, ReportError> {
    Ok(serde_json::to_string_pretty(report)?)
}

pub fn render_criteria_json(scorer: &dyn Scorer) -> Result<String, ReportError> {
    let listing = CriteriaListing {
        scorer: scorer.id(),
        name: scorer.name(),
        criteria: scorer.criteria().iter().map(CriterionView::from).collect(),
        groups: scorer.groups(),
    };
    Ok(serde_json::to_string_pretty(&listing)?)
}

pub fn render_scorer_list_json<'a>(
    scorers: impl IntoIterator<Item = &'a dyn Scorer>,
) -> Result<String, ReportError> {
    let entries: Vec<ScorerEntry> = scorers
        .into_iter()
        .map(|s| ScorerEntry {
            id: s.id(),
            name: s.name(),
            max_score: s.max_score(),
        })
        .collect();
    Ok(serde_json::to_string_pretty(&entries)?)
}
