use super::*;
use crate::registry::scorer;
use crate::report::json::{render_criteria_json, render_report_json, render_scorer_list_json};
use crate::report::text::{render_criteria_text, render_report_text, render_scorer_list};

fn report_for(id: ScorerId, ids: &[&str]) -> ScoreReport {
    let scorer = scorer(id);
    let selection: SelectionSet = ids.iter().copied().collect();
    let result = scorer.evaluate(&selection).unwrap();
    ScoreReport::new(scorer, &selection, &result)
}

#[test]
fn test_format_points() {
    assert_eq!(format_points(0.0), "0");
    assert_eq!(format_points(3.0), "3");
    assert_eq!(format_points(1.5), "1.5");
    assert_eq!(format_points(12.5), "12.5");
}

#[test]
fn test_report_lists_selected_in_criteria_order() {
    let report = report_for(ScorerId::Wells, &["malignancy", "dvt"]);
    let ids: Vec<_> = report.selected.iter().map(|c| c.id).collect();
    assert_eq!(ids, vec!["dvt", "malignancy"]);
    assert_eq!(report.raw_score, 4.0);
    assert_eq!(report.fraction, 4.0 / 12.5);
}

#[test]
fn test_text_report_wells() {
    let text = render_report_text(&report_for(ScorerId::Wells, &["hr"]));
    assert!(text.starts_with("Wells Score for PE\n"));
    assert!(text.contains("  - Heart rate >100 bpm (+1.5)\n"));
    assert!(text.contains("Total score: 1.5 / 12.5\n"));
    assert!(text.contains("Category: Intermediate\n"));
    assert!(!text.contains("Mortality"));
}

#[test]
fn test_text_report_spesi_mortality_caption() {
    let text = render_report_text(&report_for(ScorerId::SimplifiedPesi, &[]));
    assert!(text.contains("  (none)\n"));
    assert!(text.contains("30-Day Mortality: 1.0%\n"));
}

#[test]
fn test_text_report_marks_group_members() {
    let text = render_report_text(&report_for(ScorerId::CpssMol, &["NRAS", "SETBP1"]));
    assert!(text.contains("shared via setbp1_nras_runx1"));
    assert!(text.contains("Total score: 1 / 3\n"));
}

#[test]
fn test_json_report_fields() {
    let json = render_report_json(&report_for(ScorerId::SimplifiedPesi, &["hr", "sbp"])).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["scorer"], "spesi");
    assert_eq!(value["rawScore"], 2.0);
    assert_eq!(value["categoryLabel"], "High Risk");
    assert_eq!(value["auxiliaryMetric"], "10.9%");
    assert_eq!(value["auxiliaryLabel"], "30-Day Mortality");
    assert_eq!(value["selected"].as_array().map(Vec::len), Some(2));
    assert!(value.get("raw_score").is_none());
    assert_eq!(value["scorerName"], "Simplified PESI (sPESI)");
}

#[test]
fn test_criteria_renderers() {
    let cpss = scorer(ScorerId::CpssMol);
    let text = render_criteria_text(cpss);
    assert!(text.starts_with("CPSSmol Calculator (cpssmol)\n"));
    assert!(text.contains("group setbp1_nras_runx1"));

    let json = render_criteria_json(cpss).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["criteria"].as_array().map(Vec::len), Some(5));
    assert_eq!(value["groups"][0]["id"], "setbp1_nras_runx1");
}

#[test]
fn test_scorer_list_renderers() {
    let text = render_scorer_list(crate::registry::all_scorers());
    assert_eq!(text.lines().count(), 4);
    assert!(text.contains("cmml-prerequisites"));

    let json = render_scorer_list_json(crate::registry::all_scorers()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value[1]["id"], "wells");
    assert_eq!(value[1]["maxScore"], 12.5);
}
