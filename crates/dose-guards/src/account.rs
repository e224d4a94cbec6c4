use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

static EMAIL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));
static HAS_DIGIT: Lazy<Regex> = Lazy::new(|| Regex::new(r"[0-9]").expect("digit pattern is valid"));
static HAS_LETTER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[a-zA-Z]").expect("letter pattern is valid"));

const MIN_PASSWORD_CHARS: usize = 8;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AccountError {
    #[error("name is required")]
    MissingName,
    #[error("username is required")]
    MissingUsername,
    #[error("password is required")]
    MissingPassword,
    #[error("password needs at least 8 characters, a letter and a number")]
    WeakPassword,
    #[error("email must be a valid address")]
    InvalidEmail,
    #[error("current password is required")]
    MissingCurrentPassword,
    #[error("new password must differ from the current one")]
    PasswordUnchanged,
    #[error("confirmation is required")]
    MissingConfirmation,
    #[error("confirmation does not match the new password")]
    ConfirmationMismatch,
}

fn password_is_strong(password: &str) -> bool {
    password.chars().filter(|c| *c != '\n' && *c != '\r').count() >= MIN_PASSWORD_CHARS
        && HAS_DIGIT.is_match(password)
        && HAS_LETTER.is_match(password)
}

/// Unvalidated "register user" form. Email is optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserDraft {
    pub name: String,
    pub username: String,
    pub email: String,
    pub role: Option<String>,
    pub password: String,
}

/// Body of the user registration endpoint.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct NewUser {
    pub username: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

impl UserDraft {
    pub fn validate(&self) -> Result<NewUser, Vec<AccountError>> {
        let mut errors = Vec::new();

        if self.name.trim().is_empty() {
            errors.push(AccountError::MissingName);
        }
        if self.username.trim().is_empty() {
            errors.push(AccountError::MissingUsername);
        }
        if self.password.is_empty() {
            errors.push(AccountError::MissingPassword);
        } else if !password_is_strong(&self.password) {
            errors.push(AccountError::WeakPassword);
        }
        let email = Some(self.email.trim()).filter(|e| !e.is_empty());
        if email.is_some_and(|e| !EMAIL.is_match(e)) {
            errors.push(AccountError::InvalidEmail);
        }

        if !errors.is_empty() {
            return Err(errors);
        }
        Ok(NewUser {
            username: self.username.trim().to_string(),
            password: self.password.clone(),
            email: email.map(str::to_string),
            name: self.name.trim().to_string(),
            role: self.role.clone(),
        })
    }
}

/// Change-password form, filled on the page reached from sign-in.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PasswordChange {
    pub current: String,
    pub new: String,
    pub confirm: String,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct PasswordChangeRequest {
    pub username: String,
    pub password: String,
    #[serde(rename = "newPassword")]
    pub new_password: String,
}

impl PasswordChange {
    pub fn validate(&self, username: &str) -> Result<PasswordChangeRequest, Vec<AccountError>> {
        let mut errors = Vec::new();

        if self.current.is_empty() {
            errors.push(AccountError::MissingCurrentPassword);
        }
        if self.new.is_empty() {
            errors.push(AccountError::MissingPassword);
        } else if self.new == self.current {
            errors.push(AccountError::PasswordUnchanged);
        }
        if self.confirm.is_empty() {
            errors.push(AccountError::MissingConfirmation);
        } else if self.confirm != self.new {
            errors.push(AccountError::ConfirmationMismatch);
        }

        if !errors.is_empty() {
            return Err(errors);
        }
        Ok(PasswordChangeRequest {
            username: username.to_string(),
            password: self.current.clone(),
            new_password: self.new.clone(),
        })
    }
}
