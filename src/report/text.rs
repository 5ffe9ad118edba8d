use crate::report::{ScoreReport, format_points};
use crate::scorers::Scorer;

pub fn render_report_text(report: &ScoreReport) -> String {
    let mut out = String::new();

    out.push_str(&format!("{}\n", report.scorer_name));
    out.push_str(&format!("{}\n\n", "=".repeat(report.scorer_name.chars().count())));

    out.push_str("Selected criteria:\n");
    if report.selected.is_empty() {
        out.push_str("  (none)\n");
    }
    for c in &report.selected {
        match c.group {
            Some(group) => out.push_str(&format!(
                "  - {} (+{}, shared via {})\n",
                c.label,
                format_points(c.weight),
                group
            )),
            None => out.push_str(&format!("  - {} (+{})\n", c.label, format_points(c.weight))),
        }
    }
    out.push('\n');

    out.push_str(&format!(
        "Total score: {} / {}\n",
        format_points(report.raw_score),
        format_points(report.max_score)
    ));
    out.push_str(&format!("Category: {}\n", report.category_label));
    if let Some(aux) = report.auxiliary_metric {
        let caption = report.auxiliary_label.unwrap_or("Estimate");
        out.push_str(&format!("{}: {}\n", caption, aux));
    }
    out.push_str(&format!("Action: {}\n", report.action_text));

    out
}

pub fn render_criteria_text(scorer: &dyn Scorer) -> String {
    let mut out = String::new();
    out.push_str(&format!("{} ({})\n", scorer.name(), scorer.id()));
    for c in scorer.criteria() {
        out.push_str(&format!("  {:<16} +{:<4} {}", c.id, format_points(c.weight), c.label));
        if let Some(detail) = c.detail {
            out.push_str(&format!(" [{}]", detail));
        }
        out.push('\n');
    }
    for g in scorer.groups() {
        out.push_str(&format!(
            "  group {}: {} counts +{} once\n",
            g.id,
            g.label,
            format_points(g.weight)
        ));
    }
    out
}

pub fn render_scorer_list<'a>(scorers: impl IntoIterator<Item = &'a dyn Scorer>) -> String {
    let mut out = String::new();
    for s in scorers {
        out.push_str(&format!("{:<20} {}\n", s.id(), s.name()));
    }
    out
}
