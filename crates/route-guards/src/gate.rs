use crate::source::{PermissionSource, SessionStatus};
use serde::{Deserialize, Serialize};
use solinfor_core::{Permission, PermissionSet};
use tracing::debug;

/// True iff every required permission is granted. An empty requirement is
/// always satisfied.
pub fn is_authorized(granted: &PermissionSet, required: &[Permission]) -> bool {
    granted.contains_all(required)
}

/// Required-permission list attached to a subtree of routes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteGuard {
    required: Vec<Permission>,
}

impl RouteGuard {
    pub fn new(required: impl Into<Vec<Permission>>) -> Self {
        Self {
            required: required.into(),
        }
    }

    pub fn required(&self) -> &[Permission] {
        &self.required
    }

    pub fn instance(&self) -> GuardInstance<'_> {
        GuardInstance::new(self)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GuardState {
    Pending,
    Authorized,
    Denied,
}

/// What a guard puts in its place in the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outlet {
    /// Still waiting on the session.
    Loading,
    Guarded,
    Unauthorized,
}

impl GuardState {
    pub fn is_terminal(self) -> bool {
        !matches!(self, GuardState::Pending)
    }

    pub fn outlet(self) -> Outlet {
        match self {
            GuardState::Pending => Outlet::Loading,
            GuardState::Authorized => Outlet::Guarded,
            GuardState::Denied => Outlet::Unauthorized,
        }
    }
}

/// One evaluation of a guard for one navigation: `Pending` until the
/// session resolves, then `Authorized` or `Denied` for good.
#[derive(Debug, Clone)]
pub struct GuardInstance<'g> {
    guard: &'g RouteGuard,
    state: GuardState,
}

impl<'g> GuardInstance<'g> {
    pub fn new(guard: &'g RouteGuard) -> Self {
        Self {
            guard,
            state: GuardState::Pending,
        }
    }

    pub fn state(&self) -> GuardState {
        self.state
    }

    pub fn guard(&self) -> &'g RouteGuard {
        self.guard
    }

    /// Reads the session once it has resolved. A session that failed to
    /// resolve counts as zero permissions. No-op once terminal.
    pub fn resolve<S: PermissionSource + ?Sized>(&mut self, source: &S) -> GuardState {
        if self.state.is_terminal() {
            return self.state;
        }
        match source.status() {
            SessionStatus::Pending => {}
            SessionStatus::Authenticated | SessionStatus::Unauthenticated => {
                self.settle(&source.permissions());
            }
        }
        self.state
    }

    /// The session will never resolve (fetch failed or timed out upstream).
    pub fn abandon(&mut self) -> GuardState {
        if !self.state.is_terminal() {
            self.settle(&PermissionSet::empty());
        }
        self.state
    }

    fn settle(&mut self, granted: &PermissionSet) {
        self.state = if is_authorized(granted, self.guard.required()) {
            GuardState::Authorized
        } else {
            GuardState::Denied
        };
        debug!(required = ?self.guard.required(), state = ?self.state, "route guard resolved");
    }
}
