use crate::paths::RoutePaths;
use crate::source::PermissionSource;
use serde::{Deserialize, Serialize};
use solinfor_core::{Permission, PermissionSet, SessionUser};

/// Where a redirect route sends the session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RedirectTarget {
    Fixed(String),
    /// `granted` when the session holds `permission`, `otherwise` if not.
    ByPermission {
        permission: Permission,
        granted: String,
        otherwise: String,
    },
}

impl RedirectTarget {
    pub fn resolve(&self, granted: &PermissionSet) -> &str {
        match self {
            RedirectTarget::Fixed(to) => to,
            RedirectTarget::ByPermission {
                permission,
                granted: yes,
                otherwise,
            } => {
                if granted.contains(*permission) {
                    yes
                } else {
                    otherwise
                }
            }
        }
    }
}

/// The main page's target: activities for readers of activities, personnel
/// for everyone else.
pub fn main_landing(paths: &RoutePaths) -> RedirectTarget {
    RedirectTarget::ByPermission {
        permission: Permission::ReadActivity,
        granted: paths.activities.clone(),
        otherwise: paths.personnel.clone(),
    }
}

pub fn landing_path<S: PermissionSource + ?Sized>(paths: &RoutePaths, source: &S) -> String {
    main_landing(paths).resolve(&source.permissions()).to_string()
}

/// Destination right after a successful sign-in. A user flagged to rotate
/// their password goes to the change-password page first.
pub fn after_sign_in(paths: &RoutePaths, user: &SessionUser) -> String {
    if user.must_update_password {
        change_password_path(paths, &user.username)
    } else {
        paths.main.clone()
    }
}

pub fn change_password_path(paths: &RoutePaths, username: &str) -> String {
    format!(
        "{}/{}",
        paths.change_password.trim_end_matches('/'),
        username
    )
}
