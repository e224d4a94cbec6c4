use serde::{Deserialize, Serialize};
use solinfor_core::{PermissionSet, SessionUser};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionStatus {
    /// Session validation is still in flight.
    Pending,
    Authenticated,
    /// Validation failed, the refresh was rejected, or nobody signed in.
    Unauthenticated,
}

/// Session accessor handed to every guard level. Guards never look the
/// session up on their own.
pub trait PermissionSource {
    fn status(&self) -> SessionStatus;

    /// Granted permissions; empty unless the session is authenticated.
    fn permissions(&self) -> PermissionSet;
}

impl PermissionSource for PermissionSet {
    fn status(&self) -> SessionStatus {
        SessionStatus::Authenticated
    }

    fn permissions(&self) -> PermissionSet {
        self.clone()
    }
}

impl PermissionSource for SessionUser {
    fn status(&self) -> SessionStatus {
        SessionStatus::Authenticated
    }

    fn permissions(&self) -> PermissionSet {
        SessionUser::permissions(self)
    }
}

/// An absent session holds zero permissions.
impl PermissionSource for Option<SessionUser> {
    fn status(&self) -> SessionStatus {
        match self {
            Some(_) => SessionStatus::Authenticated,
            None => SessionStatus::Unauthenticated,
        }
    }

    fn permissions(&self) -> PermissionSet {
        self.as_ref()
            .map(SessionUser::permissions)
            .unwrap_or_default()
    }
}

/// Lifecycle of the session as seen by the application shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    Loading,
    Authenticated(SessionUser),
    Failed,
}

impl PermissionSource for SessionState {
    fn status(&self) -> SessionStatus {
        match self {
            SessionState::Loading => SessionStatus::Pending,
            SessionState::Authenticated(_) => SessionStatus::Authenticated,
            SessionState::Failed => SessionStatus::Unauthenticated,
        }
    }

    fn permissions(&self) -> PermissionSet {
        match self {
            SessionState::Authenticated(user) => user.permissions(),
            SessionState::Loading | SessionState::Failed => PermissionSet::empty(),
        }
    }
}
