use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use solinfor_core::{ActivityTypeId, FieldId, PersonnelId, ProductId, ProductOption, SessionUser};
use thiserror::Error;

/// Unvalidated state of the "add activity" form. Numeric inputs stay as
/// typed text until validation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ActivityDraft {
    pub activity_type: Option<ActivityTypeId>,
    pub field: Option<FieldId>,
    pub date: Option<NaiveDate>,
    pub hectares: String,
    pub personnel: Vec<PersonnelId>,
    pub products: Vec<DraftProduct>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DraftProduct {
    pub product: ProductOption,
    pub quantity: String,
    pub unit: String,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DraftError {
    #[error("activity type is required")]
    MissingActivityType,
    #[error("field is required")]
    MissingField,
    #[error("date is required")]
    MissingDate,
    #[error("hectares are required")]
    MissingHectares,
    #[error("hectares must be a number")]
    HectaresNotANumber,
    #[error("hectares must be greater than zero")]
    HectaresNotPositive,
    #[error("at least one person must be assigned")]
    MissingPersonnel,
    #[error("{0}: quantity is required")]
    MissingQuantity(String),
    #[error("{0}: quantity must be a number")]
    QuantityNotANumber(String),
    #[error("{0}: quantity must be greater than zero")]
    QuantityNotPositive(String),
    #[error("{0}: unit is required")]
    MissingUnit(String),
}

/// Create payload for the activity endpoint.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct NewActivity {
    #[serde(rename = "autor")]
    pub author: String,
    #[serde(rename = "nombre")]
    pub activity_type: ActivityTypeId,
    #[serde(rename = "campo")]
    pub field: FieldId,
    #[serde(rename = "fecha")]
    pub date: NaiveDate,
    #[serde(rename = "hectareas")]
    pub hectares: f64,
    #[serde(rename = "personal")]
    pub personnel: Vec<PersonnelId>,
    #[serde(rename = "productos")]
    pub products: Vec<NewActivityProduct>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct NewActivityProduct {
    pub id: ProductId,
    #[serde(rename = "cantidad")]
    pub quantity: f64,
    #[serde(rename = "unidad")]
    pub unit: String,
}

enum Number {
    Empty,
    Invalid,
    NotPositive,
    Ok(f64),
}

fn positive_number(raw: &str) -> Number {
    let raw = raw.trim();
    if raw.is_empty() {
        return Number::Empty;
    }
    match raw.parse::<f64>() {
        Ok(v) if !v.is_finite() => Number::Invalid,
        Ok(v) if v <= 0.0 => Number::NotPositive,
        Ok(v) => Number::Ok(v),
        Err(_) => Number::Invalid,
    }
}

impl ActivityDraft {
    /// Collects every field error rather than stopping at the first one.
    pub fn validate(&self, author: &SessionUser) -> Result<NewActivity, Vec<DraftError>> {
        let mut errors = Vec::new();

        if self.activity_type.is_none() {
            errors.push(DraftError::MissingActivityType);
        }
        if self.field.is_none() {
            errors.push(DraftError::MissingField);
        }
        if self.date.is_none() {
            errors.push(DraftError::MissingDate);
        }
        let hectares = match positive_number(&self.hectares) {
            Number::Empty => {
                errors.push(DraftError::MissingHectares);
                None
            }
            Number::Invalid => {
                errors.push(DraftError::HectaresNotANumber);
                None
            }
            Number::NotPositive => {
                errors.push(DraftError::HectaresNotPositive);
                None
            }
            Number::Ok(v) => Some(v),
        };
        if self.personnel.is_empty() {
            errors.push(DraftError::MissingPersonnel);
        }

        let mut products = Vec::with_capacity(self.products.len());
        for item in &self.products {
            let label = item.product.label.clone();
            let quantity = match positive_number(&item.quantity) {
                Number::Empty => {
                    errors.push(DraftError::MissingQuantity(label.clone()));
                    None
                }
                Number::Invalid => {
                    errors.push(DraftError::QuantityNotANumber(label.clone()));
                    None
                }
                Number::NotPositive => {
                    errors.push(DraftError::QuantityNotPositive(label.clone()));
                    None
                }
                Number::Ok(v) => Some(v),
            };
            if item.unit.trim().is_empty() {
                errors.push(DraftError::MissingUnit(label));
            }
            if let Some(quantity) = quantity {
                products.push(NewActivityProduct {
                    id: item.product.id,
                    quantity,
                    unit: item.unit.trim().to_string(),
                });
            }
        }

        match (self.activity_type, self.field, self.date, hectares) {
            (Some(activity_type), Some(field), Some(date), Some(hectares)) if errors.is_empty() => {
                Ok(NewActivity {
                    author: author.username.clone(),
                    activity_type,
                    field,
                    date,
                    hectares,
                    personnel: self.personnel.clone(),
                    products,
                })
            }
            _ => Err(errors),
        }
    }
}
