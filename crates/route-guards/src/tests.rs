use crate::{
    after_sign_in, is_authorized, landing_path, navigation_menu, GuardState, Navigation, Outlet, PermissionSource, RouteGuard,
    RouteNode, RoutePaths, RouteTable, SessionState, SessionStatus, View,
};
use rand::seq::SliceRandom;
use rand::Rng;
use solinfor_core::{Permission, PermissionSet, Role, SessionUser};

fn granted(perms: &[Permission]) -> PermissionSet {
    perms.iter().copied().collect()
}

fn user(tokens: &[&str]) -> SessionUser {
    SessionUser {
        id: 1,
        username: "ana".into(),
        email: "ana@solinfor.test".into(),
        name: "Ana".into(),
        client: "demo".into(),
        role: Some(Role {
            id: 2,
            name: "operador".into(),
            permissions: tokens.iter().map(|t| t.to_string()).collect(),
        }),
        must_update_password: false,
    }
}

#[test]
fn empty_requirement_is_always_authorized() {
    assert!(is_authorized(&PermissionSet::empty(), &[]));
    assert!(is_authorized(&granted(&Permission::ALL), &[]));
}

#[test]
fn empty_grant_denies_any_requirement() {
    for p in Permission::ALL {
        assert!(!is_authorized(&PermissionSet::empty(), &[p]));
    }
}

#[test]
fn partial_grant_is_denied() {
    let set = granted(&[Permission::ReadActivity]);
    assert!(!is_authorized(
        &set,
        &[Permission::ReadActivity, Permission::EditActivity]
    ));
    let guard = RouteGuard::new([Permission::ReadActivity, Permission::EditActivity]);
    let mut instance = guard.instance();
    assert_eq!(instance.resolve(&set), GuardState::Denied);
    assert_eq!(instance.state().outlet(), Outlet::Unauthorized);
}

#[test]
fn authorization_is_subset_check() {
    let mut rng = rand::thread_rng();
    for _ in 0..200 {
        let mut all = Permission::ALL.to_vec();
        all.shuffle(&mut rng);
        let held = rng.gen_range(0..=all.len());
        let set = granted(&all[..held]);
        let wanted = rng.gen_range(0..4);
        let required: Vec<Permission> = all
            .choose_multiple(&mut rng, wanted)
            .copied()
            .collect();
        let expected = required.iter().all(|p| all[..held].contains(p));
        assert_eq!(is_authorized(&set, &required), expected);
    }
}

#[test]
fn guard_waits_for_session_then_settles_once() {
    let guard = RouteGuard::new([Permission::ReadProducts]);
    let mut instance = guard.instance();
    assert_eq!(instance.state(), GuardState::Pending);
    assert_eq!(instance.state().outlet(), Outlet::Loading);

    assert_eq!(instance.resolve(&SessionState::Loading), GuardState::Pending);

    let session = SessionState::Authenticated(user(&["LEER_PRODUCTOS"]));
    assert_eq!(instance.resolve(&session), GuardState::Authorized);

    // terminal: a later, poorer session does not flip it
    assert_eq!(instance.resolve(&SessionState::Failed), GuardState::Authorized);
    assert_eq!(instance.abandon(), GuardState::Authorized);
}

#[test]
fn failed_or_absent_session_is_denied() {
    let guard = RouteGuard::new([Permission::ReadUsers]);

    let mut failed = guard.instance();
    assert_eq!(failed.resolve(&SessionState::Failed), GuardState::Denied);

    let mut absent = guard.instance();
    assert_eq!(absent.resolve(&None::<SessionUser>), GuardState::Denied);

    let mut never = guard.instance();
    assert_eq!(never.resolve(&SessionState::Loading), GuardState::Pending);
    assert_eq!(never.abandon(), GuardState::Denied);
}

#[test]
fn user_without_role_is_denied() {
    let mut u = user(&[]);
    u.role = None;
    assert_eq!(PermissionSource::status(&u), SessionStatus::Authenticated);
    let guard = RouteGuard::new([Permission::ReadActivity]);
    assert_eq!(guard.instance().resolve(&u), GuardState::Denied);
}

fn table() -> RouteTable {
    RouteTable::solinfor(&RoutePaths::default())
}

#[test]
fn reader_can_open_activities_but_not_add() {
    let session = SessionState::Authenticated(user(&["LEER_ACTIVIDAD"]));
    assert_eq!(
        table().navigate("/actividades", &session),
        Navigation::Render {
            view: View::Activities,
            guards_passed: 1
        }
    );
    assert_eq!(
        table().navigate("/actividades/agregar", &session),
        Navigation::Unauthorized {
            view: View::AddActivity,
            denied_at: 1,
            required: vec![Permission::AddActivity],
        }
    );
}

#[test]
fn parent_denial_blocks_child_even_when_child_is_granted() {
    let session = SessionState::Authenticated(user(&["AGREGAR_ACTIVIDAD"]));
    assert_eq!(
        table().navigate("/actividades/agregar", &session),
        Navigation::Unauthorized {
            view: View::AddActivity,
            denied_at: 0,
            required: vec![Permission::ReadActivity],
        }
    );
}

#[test]
fn nested_grant_renders_child() {
    let session = SessionState::Authenticated(user(&["LEER_USUARIOS", "DAR_BAJA_USUARIOS"]));
    assert_eq!(
        table().navigate("/usuarios/baja", &session),
        Navigation::Render {
            view: View::DeleteUsers,
            guards_passed: 2
        }
    );
}

#[test]
fn unknown_path_renders_not_found_inside_shell() {
    let session = SessionState::Authenticated(user(&[]));
    assert_eq!(
        table().navigate("/no/existe", &session),
        Navigation::Render {
            view: View::NotFound,
            guards_passed: 0
        }
    );
}

#[test]
fn signed_out_visitors_are_redirected_except_public_pages() {
    assert_eq!(
        table().navigate("/actividades", &SessionState::Failed),
        Navigation::RedirectToSignIn
    );
    assert_eq!(
        table().navigate("/whatever", &None::<SessionUser>),
        Navigation::RedirectToSignIn
    );
    assert_eq!(
        table().navigate("/signin", &SessionState::Failed),
        Navigation::Render {
            view: View::SignIn,
            guards_passed: 0
        }
    );
    assert_eq!(
        table().navigate("/cambiar-contrasena/ana?x=1", &SessionState::Failed),
        Navigation::Render {
            view: View::ChangePassword,
            guards_passed: 0
        }
    );
}

#[test]
fn loading_session_shows_loader() {
    assert_eq!(
        table().navigate("/ajustes", &SessionState::Loading),
        Navigation::Loading {
            view: View::Settings
        }
    );
}

#[test]
fn table_without_catch_all_reports_not_found() {
    let t = RouteTable::new(vec![RouteNode::page("/a", View::Main)]);
    assert_eq!(t.navigate("/b", &PermissionSet::empty()), Navigation::NotFound);
}

#[test]
fn paths_follow_environment_overrides() {
    let paths = RoutePaths::from_lookup(|key| match key {
        "SOLINFOR_ROUTE_ACTIVITIES" => Some("/tareas".into()),
        "SOLINFOR_ROUTE_ADD_ACTIVITY" => Some("/tareas/nueva".into()),
        "SOLINFOR_ROUTE_USERS" => Some("   ".into()),
        _ => None,
    });
    assert_eq!(paths.activities, "/tareas");
    assert_eq!(paths.users, "/usuarios");

    let session = granted(&[Permission::ReadActivity, Permission::AddActivity]);
    let t = RouteTable::solinfor(&paths);
    assert_eq!(
        t.navigate("/tareas/nueva", &session),
        Navigation::Render {
            view: View::AddActivity,
            guards_passed: 2
        }
    );
}

#[test]
fn menu_lists_only_readable_areas() {
    let paths = RoutePaths::default();
    let menu = navigation_menu(&paths, &user(&["LEER_PERSONAL", "EDITAR_AJUSTES"]));
    let labels: Vec<&str> = menu.entries.iter().map(|e| e.label).collect();
    assert_eq!(labels, vec!["Personal", "Ajustes"]);
    assert_eq!(menu.sign_out.path, "/signout");

    let empty = navigation_menu(&paths, &SessionState::Failed);
    assert!(empty.entries.is_empty());
}

#[test]
fn navigation_serializes_with_outcome_tag() {
    let nav = Navigation::Unauthorized {
        view: View::Settings,
        denied_at: 0,
        required: vec![Permission::EditSettings],
    };
    let json = serde_json::to_value(&nav).unwrap();
    assert_eq!(json["outcome"], "unauthorized");
    assert_eq!(json["view"], "settings");
    assert_eq!(json["required"][0], "EDITAR_AJUSTES");
}

#[test]
fn main_page_forwards_by_activity_permission() {
    let reader = SessionState::Authenticated(user(&["LEER_ACTIVIDAD", "LEER_PERSONAL"]));
    assert_eq!(
        table().navigate("/", &reader),
        Navigation::Redirect {
            view: View::Main,
            to: "/actividades".into()
        }
    );

    let staff_only = SessionState::Authenticated(user(&["LEER_PERSONAL"]));
    assert_eq!(
        table().navigate("/", &staff_only),
        Navigation::Redirect {
            view: View::Main,
            to: "/personal".into()
        }
    );
    assert_eq!(landing_path(&RoutePaths::default(), &staff_only), "/personal");
}

#[test]
fn main_page_still_requires_a_session() {
    assert_eq!(
        table().navigate("/", &SessionState::Failed),
        Navigation::RedirectToSignIn
    );
    assert_eq!(
        table().navigate("/", &SessionState::Loading),
        Navigation::Loading { view: View::Main }
    );
}

#[test]
fn sign_in_sends_flagged_users_to_change_password() {
    let paths = RoutePaths::default();
    let mut u = user(&["LEER_ACTIVIDAD"]);
    assert_eq!(after_sign_in(&paths, &u), "/");

    u.must_update_password = true;
    let target = after_sign_in(&paths, &u);
    assert_eq!(target, "/cambiar-contrasena/ana");
    assert_eq!(
        table().navigate(&target, &SessionState::Failed),
        Navigation::Render {
            view: View::ChangePassword,
            guards_passed: 0
        }
    );
}
