use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// Capability tokens granted to a role. The wire token is what the backend
/// puts in `role.permissions`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Permission {
    #[serde(rename = "LEER_USUARIOS")]
    ReadUsers,
    #[serde(rename = "CREAR_USUARIOS")]
    CreateUsers,
    #[serde(rename = "DAR_BAJA_USUARIOS")]
    DeactivateUsers,
    #[serde(rename = "EDITAR_USUARIO")]
    EditUser,
    #[serde(rename = "LEER_ACTIVIDAD")]
    ReadActivity,
    #[serde(rename = "AGREGAR_ACTIVIDAD")]
    AddActivity,
    #[serde(rename = "EDITAR_ACTIVIDAD")]
    EditActivity,
    #[serde(rename = "LEER_PRODUCTOS")]
    ReadProducts,
    #[serde(rename = "AGREGAR_PRODUCTO")]
    AddProduct,
    #[serde(rename = "LEER_PERSONAL")]
    ReadPersonnel,
    #[serde(rename = "AGREGAR_PERSONAL")]
    AddPersonnel,
    #[serde(rename = "EDITAR_PERSONAL")]
    EditPersonnel,
    #[serde(rename = "EDITAR_AJUSTES")]
    EditSettings,
}

impl Permission {
    pub const ALL: [Permission; 13] = [
        Permission::ReadUsers,
        Permission::CreateUsers,
        Permission::DeactivateUsers,
        Permission::EditUser,
        Permission::ReadActivity,
        Permission::AddActivity,
        Permission::EditActivity,
        Permission::ReadProducts,
        Permission::AddProduct,
        Permission::ReadPersonnel,
        Permission::AddPersonnel,
        Permission::EditPersonnel,
        Permission::EditSettings,
    ];

    pub fn token(self) -> &'static str {
        match self {
            Permission::ReadUsers => "LEER_USUARIOS",
            Permission::CreateUsers => "CREAR_USUARIOS",
            Permission::DeactivateUsers => "DAR_BAJA_USUARIOS",
            Permission::EditUser => "EDITAR_USUARIO",
            Permission::ReadActivity => "LEER_ACTIVIDAD",
            Permission::AddActivity => "AGREGAR_ACTIVIDAD",
            Permission::EditActivity => "EDITAR_ACTIVIDAD",
            Permission::ReadProducts => "LEER_PRODUCTOS",
            Permission::AddProduct => "AGREGAR_PRODUCTO",
            Permission::ReadPersonnel => "LEER_PERSONAL",
            Permission::AddPersonnel => "AGREGAR_PERSONAL",
            Permission::EditPersonnel => "EDITAR_PERSONAL",
            Permission::EditSettings => "EDITAR_AJUSTES",
        }
    }
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for Permission {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Permission::ALL
            .into_iter()
            .find(|p| p.token() == s)
            .ok_or_else(|| CoreError::UnknownPermission(s.to_string()))
    }
}

/// Permissions granted to the authenticated session. Immutable once built;
/// a permission change means a new session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PermissionSet(BTreeSet<Permission>);

impl PermissionSet {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Builds a set from raw session tokens. Unknown tokens grant nothing and
    /// are handed back so the caller can report them.
    pub fn from_tokens<I, S>(tokens: I) -> (Self, Vec<String>)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut granted = BTreeSet::new();
        let mut unknown = Vec::new();
        for token in tokens {
            match token.as_ref().parse::<Permission>() {
                Ok(p) => {
                    granted.insert(p);
                }
                Err(_) => unknown.push(token.as_ref().to_string()),
            }
        }
        (Self(granted), unknown)
    }

    pub fn contains(&self, permission: Permission) -> bool {
        self.0.contains(&permission)
    }

    pub fn contains_all(&self, required: &[Permission]) -> bool {
        required.iter().all(|p| self.0.contains(p))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = Permission> + '_ {
        self.0.iter().copied()
    }
}

impl FromIterator<Permission> for PermissionSet {
    fn from_iter<T: IntoIterator<Item = Permission>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}
