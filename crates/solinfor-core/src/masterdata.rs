use crate::ids::{ActivityTypeId, FieldId, ProductId};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ActivityType {
    pub id: ActivityTypeId,
    #[serde(rename = "nombre")]
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Field {
    pub id: FieldId,
    #[serde(rename = "nombre")]
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Product {
    pub id: ProductId,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "marca", default, skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    #[serde(rename = "tipo", default)]
    pub kind: String,
}

/// Selectable product entry. The typed id travels next to the label so the
/// selection never has to be parsed back out of display text.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProductOption {
    pub id: ProductId,
    pub label: String,
}

impl From<&Product> for ProductOption {
    fn from(product: &Product) -> Self {
        let label = match &product.brand {
            Some(brand) if !brand.is_empty() => format!("{} ({})", product.name, brand),
            _ => product.name.clone(),
        };
        Self {
            id: product.id,
            label,
        }
    }
}

pub fn activity_type_name(types: &[ActivityType], id: ActivityTypeId) -> Option<&str> {
    types.iter().find(|t| t.id == id).map(|t| t.name.as_str())
}

pub fn field_name(fields: &[Field], id: FieldId) -> Option<&str> {
    fields.iter().find(|f| f.id == id).map(|f| f.name.as_str())
}
