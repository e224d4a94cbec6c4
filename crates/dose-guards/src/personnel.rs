use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A first name followed by at least one surname, letters only.
static FULL_NAME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-zÁáÉéÍíÓóÚúÑñ]+(?:\s[A-Za-zÁáÉéÍíÓóÚúÑñ]+)*(?:\s[A-Za-zÁáÉéÍíÓóÚúÑñ]+)+$")
        .expect("full name pattern is valid")
});

/// Cédula with thousands dots and check digit: `1.234.567-8` or `123.456-7`.
static ID_NUMBER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\d\.\d{3}\.\d{3}-\d|\d{3}\.\d{3}-\d)$").expect("id number pattern is valid")
});

/// Unvalidated state of the "add personnel" form.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PersonnelDraft {
    pub full_name: String,
    pub birth_date: Option<NaiveDate>,
    pub hire_date: Option<NaiveDate>,
    pub id_number: String,
    pub contact_phone: String,
    pub documents: Vec<DocumentDraft>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentDraft {
    pub name: String,
    pub expires_on: Option<NaiveDate>,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PersonnelError {
    #[error("name is required")]
    MissingName,
    #[error("name must be a first name and at least one surname")]
    InvalidName,
    #[error("birth date is required")]
    MissingBirthDate,
    #[error("hire date is required")]
    MissingHireDate,
    #[error("id number is required")]
    MissingIdNumber,
    #[error("id number must include the dots and the check digit")]
    InvalidIdNumber,
    #[error("contact phone is required")]
    MissingPhone,
    #[error("at least one document must be attached")]
    MissingDocuments,
    #[error("{0}: expiry date is required")]
    MissingDocumentExpiry(String),
}

/// `personal` part of the create request; the files travel alongside it.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct NewPersonnel {
    #[serde(rename = "nombre")]
    pub full_name: String,
    #[serde(rename = "fechaDeNacimiento")]
    pub birth_date: NaiveDate,
    #[serde(rename = "fechaDeIngreso")]
    pub hire_date: NaiveDate,
    #[serde(rename = "cedula")]
    pub id_number: String,
    #[serde(rename = "telefonoContacto")]
    pub contact_phone: String,
    #[serde(rename = "documentos")]
    pub documents: Vec<NewDocument>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct NewDocument {
    pub name: String,
    #[serde(rename = "fechaDeVencimiento")]
    pub expires_on: NaiveDate,
}

impl PersonnelDraft {
    pub fn validate(&self) -> Result<NewPersonnel, Vec<PersonnelError>> {
        let mut errors = Vec::new();

        if self.full_name.trim().is_empty() {
            errors.push(PersonnelError::MissingName);
        } else if !FULL_NAME.is_match(&self.full_name) {
            errors.push(PersonnelError::InvalidName);
        }
        if self.id_number.trim().is_empty() {
            errors.push(PersonnelError::MissingIdNumber);
        } else if !ID_NUMBER.is_match(&self.id_number) {
            errors.push(PersonnelError::InvalidIdNumber);
        }
        if self.contact_phone.trim().is_empty() {
            errors.push(PersonnelError::MissingPhone);
        }
        if self.hire_date.is_none() {
            errors.push(PersonnelError::MissingHireDate);
        }
        if self.birth_date.is_none() {
            errors.push(PersonnelError::MissingBirthDate);
        }
        if self.documents.is_empty() {
            errors.push(PersonnelError::MissingDocuments);
        }

        let mut documents = Vec::with_capacity(self.documents.len());
        for doc in &self.documents {
            match doc.expires_on {
                Some(expires_on) => documents.push(NewDocument {
                    name: doc.name.clone(),
                    expires_on,
                }),
                None => errors.push(PersonnelError::MissingDocumentExpiry(doc.name.clone())),
            }
        }

        match (self.birth_date, self.hire_date) {
            (Some(birth_date), Some(hire_date)) if errors.is_empty() => Ok(NewPersonnel {
                full_name: self.full_name.clone(),
                birth_date,
                hire_date,
                id_number: self.id_number.clone(),
                contact_phone: self.contact_phone.clone(),
                documents,
            }),
            _ => Err(errors),
        }
    }
}
