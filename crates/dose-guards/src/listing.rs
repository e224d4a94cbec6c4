use crate::{evaluate, Badge, Verdict};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use solinfor_core::{
    activity_type_name, field_name, Activity, ActivityId, ActivityType, ActivityTypeId,
    DosageRule, Field, FieldId, ProductMovement,
};

/// Everything the activities view fetches before it evaluates anything.
/// A collection whose fetch failed is simply empty.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ActivitySnapshot {
    #[serde(default)]
    pub activity_types: Vec<ActivityType>,
    #[serde(default)]
    pub fields: Vec<Field>,
    #[serde(default)]
    pub activities: Vec<Activity>,
    #[serde(default)]
    pub movements: Vec<ProductMovement>,
    #[serde(default)]
    pub rules: Vec<DosageRule>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityFilter {
    pub activity_type: Option<ActivityTypeId>,
    pub field: Option<FieldId>,
}

impl ActivityFilter {
    pub fn is_active(&self) -> bool {
        self.activity_type.is_some() || self.field.is_some()
    }

    pub fn matches(&self, activity: &Activity) -> bool {
        self.activity_type
            .map_or(true, |t| activity.activity_type_id == t)
            && self.field.map_or(true, |f| activity.field_id == f)
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ActivityRow {
    pub activity_id: ActivityId,
    pub activity_type: String,
    pub field: String,
    pub date: DateTime<Utc>,
    pub hectares: f64,
    pub verdict: Verdict,
    pub badge: Badge,
    pub author: String,
}

impl ActivityRow {
    pub fn display_date(&self) -> String {
        self.date.format("%d/%m/%Y").to_string()
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(tag = "status", content = "rows", rename_all = "snake_case")]
pub enum Listing {
    Rows(Vec<ActivityRow>),
    /// An active filter matched nothing; the view clears the filter and
    /// tells the user.
    NoMatches,
}

impl ActivitySnapshot {
    pub fn list(&self, filter: ActivityFilter) -> Listing {
        let mut selected: Vec<&Activity> = self
            .activities
            .iter()
            .filter(|a| filter.matches(a))
            .collect();

        if filter.is_active() && selected.is_empty() {
            return Listing::NoMatches;
        }

        selected.sort_by(|a, b| b.date.cmp(&a.date));

        let rows = selected
            .into_iter()
            .filter_map(|activity| {
                let field = field_name(&self.fields, activity.field_id)?;
                let verdict = evaluate(activity, &self.movements, &self.rules);
                Some(ActivityRow {
                    activity_id: activity.id,
                    activity_type: activity_type_name(&self.activity_types, activity.activity_type_id)
                        .unwrap_or_default()
                        .to_string(),
                    field: field.to_string(),
                    date: activity.date,
                    hectares: activity.hectares,
                    verdict,
                    badge: verdict.badge(),
                    author: activity.author.clone(),
                })
            })
            .collect();

        Listing::Rows(rows)
    }
}
