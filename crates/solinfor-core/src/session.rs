use crate::permission::PermissionSet;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Role {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub permissions: Vec<String>,
}

/// The authenticated user as returned by sign-in and session validation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SessionUser {
    pub id: u64,
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub client: String,
    #[serde(default)]
    pub role: Option<Role>,
    #[serde(default)]
    pub must_update_password: bool,
}

impl SessionUser {
    /// Granted permissions. A user without a role holds none.
    pub fn permissions(&self) -> PermissionSet {
        match &self.role {
            Some(role) => PermissionSet::from_tokens(&role.permissions).0,
            None => PermissionSet::empty(),
        }
    }

    /// Raw role tokens that do not name a known permission.
    pub fn unknown_permission_tokens(&self) -> Vec<String> {
        match &self.role {
            Some(role) => PermissionSet::from_tokens(&role.permissions).1,
            None => Vec::new(),
        }
    }
}

/// Body of the session validation endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ValidatedSession {
    pub payload: SessionUser,
    pub iat: i64,
    pub exp: i64,
}

impl ValidatedSession {
    pub fn is_expired_at(&self, unix_seconds: i64) -> bool {
        unix_seconds >= self.exp
    }
}
