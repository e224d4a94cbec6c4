use crate::ComplianceMetrics;
use dose_guards::{evaluate, Verdict};
use route_guards::{Navigation, PermissionSource, RouteTable};
use solinfor_core::{Activity, DosageRule, ProductMovement};
use tracing::trace;

pub fn evaluate_and_observe(
    metrics: &ComplianceMetrics,
    activity: &Activity,
    movements: &[ProductMovement],
    rules: &[DosageRule],
) -> Verdict {
    let verdict = evaluate(activity, movements, rules);
    trace!(activity = %activity.id, %verdict, "verdict observed");
    metrics.observe_verdict(verdict);
    verdict
}

pub fn navigate_and_observe<S: PermissionSource + ?Sized>(
    metrics: &ComplianceMetrics,
    table: &RouteTable,
    path: &str,
    source: &S,
) -> Navigation {
    let navigation = table.navigate(path, source);
    trace!(path, ?navigation, "navigation observed");
    metrics.observe_navigation(&navigation);
    navigation
}
