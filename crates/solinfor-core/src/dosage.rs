use crate::ids::{ActivityTypeId, ProductId};
use crate::masterdata::ActivityType;
use serde::{Deserialize, Deserializer, Serialize};

/// Configured application rate envelope (quantity per hectare) for one
/// product within one activity type.
///
/// Thresholds that are absent or `null` on the wire become NaN, so every
/// comparison against them is false. Nothing here checks
/// `min < optimal < max`; see the rule-editor checks in `dose-guards`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DosageRule {
    #[serde(rename = "idNombreActividad")]
    pub activity_type_id: ActivityTypeId,
    #[serde(rename = "idProducto")]
    pub product_id: ProductId,
    #[serde(
        rename = "litrosMinimos",
        default = "missing_threshold",
        deserialize_with = "threshold"
    )]
    pub min_per_hectare: f64,
    #[serde(
        rename = "litrosOptimos",
        default = "missing_threshold",
        deserialize_with = "threshold"
    )]
    pub optimal_per_hectare: f64,
    #[serde(
        rename = "litrosMaximos",
        default = "missing_threshold",
        deserialize_with = "threshold"
    )]
    pub max_per_hectare: f64,
}

impl DosageRule {
    pub fn new(
        activity_type_id: ActivityTypeId,
        product_id: ProductId,
        min_per_hectare: f64,
        optimal_per_hectare: f64,
        max_per_hectare: f64,
    ) -> Self {
        Self {
            activity_type_id,
            product_id,
            min_per_hectare,
            optimal_per_hectare,
            max_per_hectare,
        }
    }

    pub fn applies_to(&self, activity_type_id: ActivityTypeId) -> bool {
        self.activity_type_id == activity_type_id
    }

    pub fn has_all_thresholds(&self) -> bool {
        !(self.min_per_hectare.is_nan()
            || self.optimal_per_hectare.is_nan()
            || self.max_per_hectare.is_nan())
    }
}

/// All rules configured for one activity type, as edited in settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityRuleSet {
    #[serde(rename = "nombreActividad")]
    pub activity_type: ActivityType,
    #[serde(rename = "validaciones", default)]
    pub rules: Vec<DosageRule>,
}

fn missing_threshold() -> f64 {
    f64::NAN
}

fn threshold<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(f64::NAN))
}
