use crate::{DoseClass, DoseEnvelope, Verdict};
use serde::Serialize;
use solinfor_core::{Activity, ActivityId, DosageRule, MovementId, ProductId, ProductMovement};
use tracing::debug;

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MovementAssessment {
    pub movement_id: MovementId,
    pub product_id: ProductId,
    pub rate: f64,
    pub class: DoseClass,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ComplianceReport {
    pub activity_id: ActivityId,
    pub verdict: Verdict,
    /// Products required by the activity type's rules that no movement used.
    /// Non-empty means classification was skipped.
    pub missing_products: Vec<ProductId>,
    pub assessments: Vec<MovementAssessment>,
}

/// Classifies an activity's product usage against the dosage rules of its
/// activity type.
pub fn evaluate(
    activity: &Activity,
    movements: &[ProductMovement],
    rules: &[DosageRule],
) -> Verdict {
    assess(activity, movements, rules).verdict
}

pub fn assess(
    activity: &Activity,
    movements: &[ProductMovement],
    rules: &[DosageRule],
) -> ComplianceReport {
    let movements: Vec<&ProductMovement> =
        movements.iter().filter(|m| m.belongs_to(activity)).collect();
    let rules: Vec<&DosageRule> = rules
        .iter()
        .filter(|r| r.applies_to(activity.activity_type_id))
        .collect();

    let mut missing_products: Vec<ProductId> = Vec::new();
    for rule in &rules {
        let used = movements.iter().any(|m| m.product_id == rule.product_id);
        if !used && !missing_products.contains(&rule.product_id) {
            missing_products.push(rule.product_id);
        }
    }

    if !missing_products.is_empty() {
        debug!(
            activity = %activity.id,
            missing = ?missing_products,
            "required products not used"
        );
        return ComplianceReport {
            activity_id: activity.id,
            verdict: Verdict::NonCompliant,
            missing_products,
            assessments: Vec::new(),
        };
    }

    let assessments: Vec<MovementAssessment> = movements
        .iter()
        .filter_map(|m| {
            // Duplicate rules for a product are a data-entry error; the first one is used.
            let rule = rules.iter().find(|r| r.product_id == m.product_id)?;
            let rate = DoseEnvelope::rate(m.quantity, activity.hectares);
            let class = DoseEnvelope::from_rule(rule).classify(rate);
            debug!(activity = %activity.id, movement = %m.id, rate, ?class, "classified movement");
            Some(MovementAssessment {
                movement_id: m.id,
                product_id: m.product_id,
                rate,
                class,
            })
        })
        .collect();

    let verdict = assessments
        .iter()
        .map(|a| a.class.contribution())
        .fold(Verdict::Optimal, Verdict::worst);

    ComplianceReport {
        activity_id: activity.id,
        verdict,
        missing_products,
        assessments,
    }
}
