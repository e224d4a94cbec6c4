use crate::Verdict;
use serde::{Deserialize, Serialize};
use solinfor_core::DosageRule;

/// Per-hectare thresholds taken from a dosage rule.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DoseEnvelope {
    pub min_per_hectare: f64,
    pub optimal_per_hectare: f64,
    pub max_per_hectare: f64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DoseClass {
    Underdose,
    Overdose,
    Optimal,
    Acceptable,
}

impl DoseClass {
    pub fn contribution(self) -> Verdict {
        match self {
            DoseClass::Underdose | DoseClass::Overdose => Verdict::NonCompliant,
            DoseClass::Acceptable => Verdict::Acceptable,
            DoseClass::Optimal => Verdict::Optimal,
        }
    }
}

impl DoseEnvelope {
    pub fn from_rule(rule: &DosageRule) -> Self {
        Self {
            min_per_hectare: rule.min_per_hectare,
            optimal_per_hectare: rule.optimal_per_hectare,
            max_per_hectare: rule.max_per_hectare,
        }
    }

    pub fn rate(quantity: f64, hectares: f64) -> f64 {
        quantity / hectares
    }

    /// Raw IEEE comparisons: NaN on either side compares false everywhere,
    /// which lands in `Acceptable`. Out-of-range wins over an exact optimum
    /// when the thresholds are inconsistent.
    pub fn classify(&self, rate: f64) -> DoseClass {
        if rate > self.max_per_hectare {
            DoseClass::Overdose
        } else if rate < self.min_per_hectare {
            DoseClass::Underdose
        } else if rate == self.optimal_per_hectare {
            DoseClass::Optimal
        } else {
            DoseClass::Acceptable
        }
    }
}
