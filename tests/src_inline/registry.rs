use super::*;

#[test]
fn test_list_criteria_wells() {
    let criteria = list_criteria("wells").unwrap();
    assert_eq!(criteria.len(), 7);
    assert_eq!(criteria[0].id, "dvt");
    assert_eq!(criteria[0].weight, 3.0);
    assert_eq!(criteria[2].id, "hr");
    assert_eq!(criteria[2].weight, 1.5);
}

#[test]
fn test_list_criteria_carries_detail_and_group() {
    let checklist = list_criteria("cmml-prerequisites").unwrap();
    assert_eq!(checklist[0].detail, Some("and relative >10% of WBC"));

    let cpss = list_criteria("cpssmol").unwrap();
    let grouped: Vec<_> = cpss.iter().filter(|c| c.group.is_some()).map(|c| c.id).collect();
    assert_eq!(grouped, vec!["SETBP1", "NRAS", "RUNX1"]);
}

#[test]
fn test_unknown_scorer() {
    assert_eq!(
        list_criteria("geneva").unwrap_err(),
        ScoringError::InvalidScorer("geneva".to_string())
    );
    assert!(matches!(
        evaluate("geneva", ["hr"]),
        Err(ScoringError::InvalidScorer(_))
    ));
}

#[test]
fn test_evaluate_spesi_flattens_result() {
    let eval = evaluate("spesi", ["age"]).unwrap();
    assert_eq!(eval.raw_score, 1.0);
    assert_eq!(eval.max_score, 6.0);
    assert_eq!(eval.category_label, "High Risk");
    assert_eq!(eval.auxiliary_metric, Some("10.9%"));
}

#[test]
fn test_evaluate_rejects_unknown_id() {
    let err = evaluate("cpssmol", vec!["ASXL1".to_string(), "TET2".to_string()]).unwrap_err();
    assert_eq!(
        err,
        ScoringError::InvalidCriterion {
            scorer: ScorerId::CpssMol,
            id: "TET2".to_string(),
        }
    );
}

#[test]
fn test_evaluation_json_uses_camel_case() {
    let eval = evaluate("wells", ["hr"]).unwrap();
    let json = serde_json::to_value(&eval).unwrap();
    assert_eq!(json["scorer"], "wells");
    assert_eq!(json["rawScore"], 1.5);
    assert_eq!(json["maxScore"], 12.5);
    assert_eq!(json["categoryLabel"], "Intermediate");
    assert_eq!(json["actionText"], "D-dimer testing. If positive, proceed to CTPA.");
    assert!(json.get("auxiliaryMetric").is_none());
}

#[test]
fn test_all_scorers_in_id_order() {
    let ids: Vec<_> = all_scorers().map(|s| s.id()).collect();
    assert_eq!(ids, ScorerId::ALL.to_vec());
    for id in ScorerId::ALL {
        assert_eq!(scorer(id).id(), id);
    }
}
