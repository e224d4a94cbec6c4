use serde::{Deserialize, Serialize};

/// Where each view is mounted. Every entry can be overridden from the
/// environment as `SOLINFOR_ROUTE_<NAME>` (e.g. `SOLINFOR_ROUTE_ADD_ACTIVITY`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoutePaths {
    pub sign_in: String,
    pub change_password: String,
    pub sign_out: String,
    pub main: String,
    pub settings: String,
    pub activities: String,
    pub add_activity: String,
    pub products: String,
    pub audits: String,
    pub add_product: String,
    pub personnel: String,
    pub add_personnel: String,
    pub edit_personnel: String,
    pub users: String,
    pub register_user: String,
    pub edit_user: String,
    pub delete_users: String,
}

impl Default for RoutePaths {
    fn default() -> Self {
        Self {
            sign_in: "/signin".into(),
            change_password: "/cambiar-contrasena".into(),
            sign_out: "/signout".into(),
            main: "/".into(),
            settings: "/ajustes".into(),
            activities: "/actividades".into(),
            add_activity: "/actividades/agregar".into(),
            products: "/productos".into(),
            audits: "/productos/auditoria".into(),
            add_product: "/productos/agregar".into(),
            personnel: "/personal".into(),
            add_personnel: "/personal/agregar".into(),
            edit_personnel: "/personal/editar".into(),
            users: "/usuarios".into(),
            register_user: "/usuarios/registrar".into(),
            edit_user: "/usuarios/editar".into(),
            delete_users: "/usuarios/baja".into(),
        }
    }
}

impl RoutePaths {
    pub const ENV_PREFIX: &'static str = "SOLINFOR_ROUTE_";

    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults, overridden by whatever `lookup` returns for
    /// `SOLINFOR_ROUTE_<NAME>`. Blank values are ignored.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut paths = Self::default();
        for (name, slot) in paths.entries_mut() {
            let key = format!("{}{}", Self::ENV_PREFIX, name);
            if let Some(value) = lookup(&key).filter(|v| !v.trim().is_empty()) {
                *slot = value.trim().to_string();
            }
        }
        paths
    }

    fn entries_mut(&mut self) -> [(&'static str, &mut String); 17] {
        [
            ("SIGN_IN", &mut self.sign_in),
            ("CHANGE_PASSWORD", &mut self.change_password),
            ("SIGN_OUT", &mut self.sign_out),
            ("MAIN", &mut self.main),
            ("SETTINGS", &mut self.settings),
            ("ACTIVITIES", &mut self.activities),
            ("ADD_ACTIVITY", &mut self.add_activity),
            ("PRODUCTS", &mut self.products),
            ("AUDITS", &mut self.audits),
            ("ADD_PRODUCT", &mut self.add_product),
            ("PERSONNEL", &mut self.personnel),
            ("ADD_PERSONNEL", &mut self.add_personnel),
            ("EDIT_PERSONNEL", &mut self.edit_personnel),
            ("USERS", &mut self.users),
            ("REGISTER_USER", &mut self.register_user),
            ("EDIT_USER", &mut self.edit_user),
            ("DELETE_USERS", &mut self.delete_users),
        ]
    }
}
