use solinfor_core::{ActivityRuleSet, DosageRule, ProductId};
use thiserror::Error;

/// Rule-editor validation. The evaluator never calls this; a saved rule set
/// is expected to have passed it.
#[derive(Debug, Error, PartialEq)]
pub enum RuleCheckError {
    #[error("product {product}: min, optimal and max are all required")]
    MissingThreshold { product: ProductId },
    #[error("product {product}: minimum {min} is negative")]
    NegativeMinimum { product: ProductId, min: f64 },
    #[error("product {product}: minimum {min} must be below optimal {optimal}")]
    MinNotBelowOptimal {
        product: ProductId,
        min: f64,
        optimal: f64,
    },
    #[error("product {product}: optimal {optimal} must be below maximum {max}")]
    OptimalNotBelowMax {
        product: ProductId,
        optimal: f64,
        max: f64,
    },
}

pub fn check_rule(rule: &DosageRule) -> Result<(), RuleCheckError> {
    let product = rule.product_id;
    if !rule.has_all_thresholds() {
        return Err(RuleCheckError::MissingThreshold { product });
    }
    if rule.min_per_hectare < 0.0 {
        return Err(RuleCheckError::NegativeMinimum {
            product,
            min: rule.min_per_hectare,
        });
    }
    if rule.min_per_hectare >= rule.optimal_per_hectare {
        return Err(RuleCheckError::MinNotBelowOptimal {
            product,
            min: rule.min_per_hectare,
            optimal: rule.optimal_per_hectare,
        });
    }
    if rule.optimal_per_hectare >= rule.max_per_hectare {
        return Err(RuleCheckError::OptimalNotBelowMax {
            product,
            optimal: rule.optimal_per_hectare,
            max: rule.max_per_hectare,
        });
    }
    Ok(())
}

/// Every problem in the set, in rule order. Empty means the set can be saved.
pub fn check_rule_set(set: &ActivityRuleSet) -> Vec<RuleCheckError> {
    set.rules
        .iter()
        .filter_map(|rule| check_rule(rule).err())
        .collect()
}
