use crate::paths::RoutePaths;
use crate::source::PermissionSource;
use serde::Serialize;
use solinfor_core::Permission;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MenuItem {
    pub label: &'static str,
    pub path: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Menu {
    pub entries: Vec<MenuItem>,
    pub sign_out: MenuItem,
}

/// Shell navigation: one entry per area the session can read, in fixed
/// order, plus sign-out which is always present.
pub fn navigation_menu<S: PermissionSource + ?Sized>(paths: &RoutePaths, source: &S) -> Menu {
    let granted = source.permissions();
    let areas: [(&'static str, &String, Permission); 5] = [
        ("Actividades", &paths.activities, Permission::ReadActivity),
        ("Productos", &paths.products, Permission::ReadProducts),
        ("Personal", &paths.personnel, Permission::ReadPersonnel),
        ("Usuarios", &paths.users, Permission::ReadUsers),
        ("Ajustes", &paths.settings, Permission::EditSettings),
    ];

    let entries = areas
        .into_iter()
        .filter(|(_, _, required)| granted.contains(*required))
        .map(|(label, path, _)| MenuItem {
            label,
            path: path.clone(),
        })
        .collect();

    Menu {
        entries,
        sign_out: MenuItem {
            label: "Cerrar Sesión",
            path: paths.sign_out.clone(),
        },
    }
}
