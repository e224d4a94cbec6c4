use crate::gate::{GuardState, RouteGuard};
use crate::landing::{change_password_path, main_landing, RedirectTarget};
use crate::paths::RoutePaths;
use crate::source::{PermissionSource, SessionStatus};
use serde::{Deserialize, Serialize};
use solinfor_core::Permission;
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum View {
    SignIn,
    ChangePassword,
    SignOut,
    Main,
    NotFound,
    Settings,
    Activities,
    AddActivity,
    Products,
    Audits,
    AddProduct,
    Personnel,
    AddPersonnel,
    EditPersonnel,
    Users,
    RegisterUser,
    EditUser,
    DeleteUsers,
}

impl View {
    pub fn as_str(self) -> &'static str {
        match self {
            View::SignIn => "sign_in",
            View::ChangePassword => "change_password",
            View::SignOut => "sign_out",
            View::Main => "main",
            View::NotFound => "not_found",
            View::Settings => "settings",
            View::Activities => "activities",
            View::AddActivity => "add_activity",
            View::Products => "products",
            View::Audits => "audits",
            View::AddProduct => "add_product",
            View::Personnel => "personnel",
            View::AddPersonnel => "add_personnel",
            View::EditPersonnel => "edit_personnel",
            View::Users => "users",
            View::RegisterUser => "register_user",
            View::EditUser => "edit_user",
            View::DeleteUsers => "delete_users",
        }
    }
}

#[derive(Debug, Clone)]
pub enum RouteKind {
    /// Matches a path; `:name` segments match any single segment.
    Page { pattern: String, view: View },
    /// Matches like a page, then sends the session elsewhere.
    Redirect {
        pattern: String,
        view: View,
        to: RedirectTarget,
    },
    /// Matches anything no page in the table matched.
    CatchAll { view: View },
    /// Children need a signed-in session; otherwise redirect to sign-in.
    RequireSession,
    /// Layout wrapper (navigation menu); no check of its own.
    Shell,
    Guard(RouteGuard),
}

#[derive(Debug, Clone)]
pub struct RouteNode {
    pub kind: RouteKind,
    pub children: Vec<RouteNode>,
}

impl RouteNode {
    pub fn page(pattern: impl Into<String>, view: View) -> Self {
        Self {
            kind: RouteKind::Page {
                pattern: pattern.into(),
                view,
            },
            children: Vec::new(),
        }
    }

    pub fn redirect(pattern: impl Into<String>, view: View, to: RedirectTarget) -> Self {
        Self {
            kind: RouteKind::Redirect {
                pattern: pattern.into(),
                view,
                to,
            },
            children: Vec::new(),
        }
    }

    pub fn catch_all(view: View) -> Self {
        Self {
            kind: RouteKind::CatchAll { view },
            children: Vec::new(),
        }
    }

    pub fn session(children: Vec<RouteNode>) -> Self {
        Self {
            kind: RouteKind::RequireSession,
            children,
        }
    }

    pub fn shell(children: Vec<RouteNode>) -> Self {
        Self {
            kind: RouteKind::Shell,
            children,
        }
    }

    pub fn guarded(required: impl Into<Vec<Permission>>, children: Vec<RouteNode>) -> Self {
        Self {
            kind: RouteKind::Guard(RouteGuard::new(required)),
            children,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Navigation {
    Render {
        view: View,
        guards_passed: usize,
    },
    /// Some level is still waiting for the session.
    Loading { view: View },
    RedirectToSignIn,
    /// Every check passed and the matched route forwards to `to`.
    Redirect { view: View, to: String },
    /// `denied_at` is the depth of the first denying guard, outermost = 0.
    /// That level's fallback is what renders.
    Unauthorized {
        view: View,
        denied_at: usize,
        required: Vec<Permission>,
    },
    NotFound,
}

#[derive(Debug, Clone)]
pub struct RouteTable {
    roots: Vec<RouteNode>,
}

impl RouteTable {
    pub fn new(roots: Vec<RouteNode>) -> Self {
        Self { roots }
    }

    /// The application's routes: public sign-in screens, then everything
    /// else behind the session check, the shell and per-area guards.
    pub fn solinfor(paths: &RoutePaths) -> Self {
        use Permission::*;

        let change_password = change_password_path(paths, ":username");

        Self::new(vec![
            RouteNode::page(&paths.sign_in, View::SignIn),
            RouteNode::page(change_password, View::ChangePassword),
            RouteNode::session(vec![
                RouteNode::shell(vec![
                    RouteNode::catch_all(View::NotFound),
                    RouteNode::redirect(&paths.main, View::Main, main_landing(paths)),
                    RouteNode::guarded(
                        [EditSettings],
                        vec![RouteNode::page(&paths.settings, View::Settings)],
                    ),
                    RouteNode::guarded(
                        [ReadActivity],
                        vec![
                            RouteNode::page(&paths.activities, View::Activities),
                            RouteNode::guarded(
                                [AddActivity],
                                vec![RouteNode::page(&paths.add_activity, View::AddActivity)],
                            ),
                        ],
                    ),
                    RouteNode::guarded(
                        [ReadProducts],
                        vec![
                            RouteNode::page(&paths.products, View::Products),
                            RouteNode::page(&paths.audits, View::Audits),
                            RouteNode::guarded(
                                [AddProduct],
                                vec![RouteNode::page(&paths.add_product, View::AddProduct)],
                            ),
                        ],
                    ),
                    RouteNode::guarded(
                        [ReadPersonnel],
                        vec![
                            RouteNode::page(&paths.personnel, View::Personnel),
                            RouteNode::guarded(
                                [AddPersonnel],
                                vec![RouteNode::page(&paths.add_personnel, View::AddPersonnel)],
                            ),
                            RouteNode::guarded(
                                [EditPersonnel],
                                vec![RouteNode::page(&paths.edit_personnel, View::EditPersonnel)],
                            ),
                        ],
                    ),
                    RouteNode::guarded(
                        [ReadUsers],
                        vec![
                            RouteNode::page(&paths.users, View::Users),
                            RouteNode::guarded(
                                [CreateUsers],
                                vec![RouteNode::page(&paths.register_user, View::RegisterUser)],
                            ),
                            RouteNode::guarded(
                                [EditUser],
                                vec![RouteNode::page(&paths.edit_user, View::EditUser)],
                            ),
                            RouteNode::guarded(
                                [DeactivateUsers],
                                vec![RouteNode::page(&paths.delete_users, View::DeleteUsers)],
                            ),
                        ],
                    ),
                ]),
                RouteNode::page(&paths.sign_out, View::SignOut),
            ]),
        ])
    }

    /// Resolves a navigation. Every guard on the way down is its own check
    /// against `source`; the first one that does not authorize decides.
    pub fn navigate<S: PermissionSource + ?Sized>(&self, path: &str, source: &S) -> Navigation {
        let segments = path_segments(path);
        let mut chain = Vec::new();
        let view = find_chain(&self.roots, &segments, true, &mut chain).or_else(|| {
            chain.clear();
            find_chain(&self.roots, &segments, false, &mut chain)
        });
        let Some(view) = view else {
            debug!(path, "no route matched");
            return Navigation::NotFound;
        };

        let mut guards_passed = 0;
        for node in &chain {
            match &node.kind {
                RouteKind::RequireSession => match source.status() {
                    SessionStatus::Pending => return Navigation::Loading { view },
                    SessionStatus::Unauthenticated => return Navigation::RedirectToSignIn,
                    SessionStatus::Authenticated => {}
                },
                RouteKind::Guard(guard) => {
                    let mut instance = guard.instance();
                    match instance.resolve(source) {
                        GuardState::Pending => return Navigation::Loading { view },
                        GuardState::Denied => {
                            info!(path, ?view, depth = guards_passed, required = ?guard.required(), "navigation denied");
                            return Navigation::Unauthorized {
                                view,
                                denied_at: guards_passed,
                                required: guard.required().to_vec(),
                            };
                        }
                        GuardState::Authorized => guards_passed += 1,
                    }
                }
                RouteKind::Page { .. }
                | RouteKind::Redirect { .. }
                | RouteKind::CatchAll { .. }
                | RouteKind::Shell => {}
            }
        }

        if let Some(RouteKind::Redirect { to, .. }) = chain.last().map(|node| &node.kind) {
            if source.status() == SessionStatus::Pending {
                return Navigation::Loading { view };
            }
            let to = to.resolve(&source.permissions()).to_string();
            debug!(path, ?view, %to, "redirecting");
            return Navigation::Redirect { view, to };
        }

        Navigation::Render {
            view,
            guards_passed,
        }
    }
}

fn path_segments(path: &str) -> Vec<&str> {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    path.split('/').filter(|s| !s.is_empty()).collect()
}

fn pattern_matches(pattern: &str, segments: &[&str]) -> bool {
    let expected = path_segments(pattern);
    expected.len() == segments.len()
        && expected
            .iter()
            .zip(segments)
            .all(|(p, s)| p.starts_with(':') || p == s)
}

/// Depth-first in declaration order. On success `chain` holds the path from
/// a root down to the matched node.
fn find_chain<'t>(
    nodes: &'t [RouteNode],
    segments: &[&str],
    explicit: bool,
    chain: &mut Vec<&'t RouteNode>,
) -> Option<View> {
    for node in nodes {
        chain.push(node);
        let hit = match &node.kind {
            RouteKind::Page { pattern, view } | RouteKind::Redirect { pattern, view, .. }
                if explicit && pattern_matches(pattern, segments) =>
            {
                Some(*view)
            }
            RouteKind::CatchAll { view } if !explicit => Some(*view),
            _ => None,
        };
        if hit.is_some() {
            return hit;
        }
        if let Some(view) = find_chain(&node.children, segments, explicit, chain) {
            return Some(view);
        }
        chain.pop();
    }
    None
}
