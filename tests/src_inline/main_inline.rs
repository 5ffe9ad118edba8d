use super::*;

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(std::iter::once("clinscore").chain(args.iter().copied())).unwrap()
}

#[test]
fn test_parse_evaluate_defaults_to_text() {
    let cli = parse(&["evaluate", "wells", "hr", "dvt"]);
    assert_eq!(cli.format, OutputFormat::Text);
    assert_eq!(cli.verbose, 0);
    assert_eq!(
        cli.command,
        Command::Evaluate {
            scorer: "wells".to_string(),
            ids: vec!["hr".to_string(), "dvt".to_string()],
        }
    );
}

#[test]
fn test_parse_global_flags_after_subcommand() {
    let cli = parse(&["criteria", "spesi", "--format", "json", "-vv"]);
    assert_eq!(cli.format, OutputFormat::Json);
    assert_eq!(cli.verbose, 2);
}

#[test]
fn test_parse_rejects_unknown_format() {
    let res = Cli::try_parse_from(["clinscore", "scorers", "--format", "xml"]);
    assert!(res.is_err());
}

#[test]
fn test_run_evaluate_text() {
    let out = run(&parse(&["evaluate", "cpssmol", "ASXL1", "NRAS", "SETBP1"])).unwrap();
    assert!(out.contains("Category: Intermediate-2\n"));
}

#[test]
fn test_run_empty_selection() {
    let out = run(&parse(&["evaluate", "cmml-prerequisites"])).unwrap();
    assert!(out.contains("Category: Criteria Not Met\n"));
}

#[test]
fn test_run_reports_errors_as_strings() {
    let err = run(&parse(&["evaluate", "wells", "bogus"])).unwrap_err();
    assert_eq!(err, "unknown criterion 'bogus' for scorer wells");
    let err = run(&parse(&["criteria", "geneva"])).unwrap_err();
    assert_eq!(err, "unknown scorer 'geneva'");
}

fn run_json(args: &[&str]) -> serde_json::Value {
    let out = run(&parse(args)).unwrap();
    assert!(out.ends_with('\n'));
    serde_json::from_str(&out).unwrap()
}

#[test]
fn test_run_scorers_json() {
    let value = run_json(&["scorers", "--format", "json"]);
    let ids: Vec<_> = value
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v["id"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(ids, vec!["cpssmol", "wells", "spesi", "cmml-prerequisites"]);
    assert_eq!(value[0]["maxScore"], 3.0);
}

#[test]
fn test_run_criteria_json() {
    let value = run_json(&["criteria", "wells", "--format", "json"]);
    assert_eq!(value["scorer"], "wells");
    assert_eq!(value["criteria"].as_array().map(Vec::len), Some(7));
    assert_eq!(value["criteria"][2]["id"], "hr");
    assert_eq!(value["criteria"][2]["weight"], 1.5);
}

#[test]
fn test_run_evaluate_json_matches_library_keys() {
    let value = run_json(&["evaluate", "spesi", "age", "--format", "json"]);
    let eval = clinscore::evaluate("spesi", ["age"]).unwrap();
    let lib = serde_json::to_value(&eval).unwrap();

    assert_eq!(value["rawScore"], lib["rawScore"]);
    assert_eq!(value["maxScore"], lib["maxScore"]);
    assert_eq!(value["categoryLabel"], lib["categoryLabel"]);
    assert_eq!(value["actionText"], lib["actionText"]);
    assert_eq!(value["auxiliaryMetric"], lib["auxiliaryMetric"]);
    assert!(value.get("raw_score").is_none());
}
