use crate::ids::{ActivityId, ActivityTypeId, FieldId, MovementId, ProductId, UnitId};
use crate::time::{deserialize_instant, serialize_instant};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A recorded field operation. `hectares` must be positive for per-hectare
/// rates to mean anything; nothing here enforces it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Activity {
    pub id: ActivityId,
    #[serde(rename = "nombre")]
    pub activity_type_id: ActivityTypeId,
    #[serde(rename = "campo")]
    pub field_id: FieldId,
    #[serde(
        rename = "fecha",
        deserialize_with = "deserialize_instant",
        serialize_with = "serialize_instant"
    )]
    pub date: DateTime<Utc>,
    #[serde(rename = "hectareas")]
    pub hectares: f64,
    #[serde(rename = "autor", default)]
    pub author: String,
}

/// One recorded application (or stock move) of a product.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProductMovement {
    pub id: MovementId,
    #[serde(rename = "producto")]
    pub product_id: ProductId,
    #[serde(rename = "campo")]
    pub field_id: FieldId,
    #[serde(
        rename = "fecha",
        deserialize_with = "deserialize_instant",
        serialize_with = "serialize_instant"
    )]
    pub date: DateTime<Utc>,
    #[serde(rename = "cantidad")]
    pub quantity: f64,
    #[serde(rename = "unidad")]
    pub unit: UnitId,
    #[serde(rename = "tipo", default)]
    pub kind: String,
    /// Stock entries that are not part of an activity carry no activity.
    #[serde(rename = "actividad", default)]
    pub activity_id: Option<ActivityId>,
}

impl ProductMovement {
    pub fn belongs_to(&self, activity: &Activity) -> bool {
        self.activity_id == Some(activity.id)
    }
}
