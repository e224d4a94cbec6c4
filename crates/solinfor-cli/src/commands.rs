use crate::config::EvaluateArgs;
use anyhow::{bail, Context, Result};
use dose_guards::{check_rule_set, ActivityFilter, ActivitySnapshot, Listing};
use prometheus_bridge::{evaluate_and_observe, navigate_and_observe, ComplianceMetrics};
use route_guards::{navigation_menu, RoutePaths, RouteTable};
use serde::de::DeserializeOwned;
use solinfor_core::{ActivityRuleSet, SessionUser, ValidatedSession};
use std::path::Path;
use tracing::{info, warn};

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("parsing {}", path.display()))
}

/// Accepts the validation endpoint body or a bare user object.
pub fn load_session(path: Option<&Path>) -> Result<Option<SessionUser>> {
    let Some(path) = path else {
        return Ok(None);
    };
    let value: serde_json::Value = read_json(path)?;
    let user = match serde_json::from_value::<ValidatedSession>(value.clone()) {
        Ok(session) => session.payload,
        Err(_) => serde_json::from_value::<SessionUser>(value)
            .with_context(|| format!("{} is not a session", path.display()))?,
    };
    let unknown = user.unknown_permission_tokens();
    if !unknown.is_empty() {
        warn!(user = %user.username, ?unknown, "ignoring unknown permission tokens");
    }
    Ok(Some(user))
}

pub fn evaluate(args: &EvaluateArgs, metrics: &ComplianceMetrics) -> Result<String> {
    let snapshot: ActivitySnapshot = read_json(&args.snapshot)?;
    for activity in &snapshot.activities {
        evaluate_and_observe(metrics, activity, &snapshot.movements, &snapshot.rules);
    }

    let filter = ActivityFilter {
        activity_type: args.activity_type.map(Into::into),
        field: args.field.map(Into::into),
    };
    let listing = snapshot.list(filter);
    info!(activities = snapshot.activities.len(), "snapshot evaluated");

    if args.json {
        return Ok(serde_json::to_string_pretty(&listing)?);
    }
    Ok(match listing {
        Listing::NoMatches => "no activities match the filter".to_string(),
        Listing::Rows(rows) => {
            let mut out = format!(
                "{:<12} {:<20} {:<20} {:>9}  {:<10} {}\n",
                "FECHA", "ACTIVIDAD", "CAMPO", "HECTAREAS", "VERIFICADO", "AUTOR"
            );
            for row in rows {
                out.push_str(&format!(
                    "{:<12} {:<20} {:<20} {:>9.2}  {:<10} {}\n",
                    row.display_date(),
                    row.activity_type,
                    row.field,
                    row.hectares,
                    row.badge.label,
                    row.author
                ));
            }
            out
        }
    })
}

pub fn navigate(
    path: &str,
    session: Option<&Path>,
    paths: &RoutePaths,
    metrics: &ComplianceMetrics,
) -> Result<String> {
    let user = load_session(session)?;
    let table = RouteTable::solinfor(paths);
    let navigation = navigate_and_observe(metrics, &table, path, &user);
    Ok(serde_json::to_string_pretty(&navigation)?)
}

pub fn menu(session: Option<&Path>, paths: &RoutePaths) -> Result<String> {
    let user = load_session(session)?;
    Ok(serde_json::to_string_pretty(&navigation_menu(paths, &user))?)
}

pub fn check_rules(rules: &Path) -> Result<String> {
    let sets: Vec<ActivityRuleSet> = read_json(rules)?;
    let mut problems = Vec::new();
    for set in &sets {
        for err in check_rule_set(set) {
            problems.push(format!("{}: {}", set.activity_type.name, err));
        }
    }
    if !problems.is_empty() {
        bail!("{} rule problem(s):\n{}", problems.len(), problems.join("\n"));
    }
    Ok(format!("{} rule set(s) ok", sets.len()))
}
