pub mod gate;
pub mod landing;
pub mod menu;
pub mod paths;
pub mod routes;
pub mod source;

#[cfg(test)]
mod tests;

pub use gate::{is_authorized, GuardInstance, GuardState, Outlet, RouteGuard};
pub use landing::{
    after_sign_in, change_password_path, landing_path, main_landing, RedirectTarget,
};
pub use menu::{navigation_menu, Menu, MenuItem};
pub use paths::RoutePaths;
pub use routes::{Navigation, RouteKind, RouteNode, RouteTable, View};
pub use source::{PermissionSource, SessionState, SessionStatus};
