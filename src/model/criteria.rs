use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CriterionDefinition {
    pub id: &'static str,
    pub label: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<&'static str>,
    pub weight: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<&'static str>,
}

impl CriterionDefinition {
    pub const fn new(id: &'static str, label: &'static str, weight: f64) -> Self {
        Self {
            id,
            label,
            detail: None,
            weight,
            group: None,
        }
    }

    pub const fn with_detail(mut self, detail: &'static str) -> Self {
        self.detail = Some(detail);
        self
    }

    pub const fn in_group(mut self, group: &'static str) -> Self {
        self.group = Some(group);
        self
    }
}

// contributes `weight` once when any member is selected
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CriterionGroup {
    pub id: &'static str,
    pub label: &'static str,
    pub weight: f64,
}

pub fn find_criterion<'a>(
    criteria: &'a [CriterionDefinition],
    id: &str,
) -> Option<&'a CriterionDefinition> {
    criteria.iter().find(|c| c.id == id)
}

pub fn group_members<'a>(
    criteria: &'a [CriterionDefinition],
    group_id: &'a str,
) -> impl Iterator<Item = &'a CriterionDefinition> + 'a {
    criteria.iter().filter(move |c| c.group == Some(group_id))
}
