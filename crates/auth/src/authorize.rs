//! Session state and access guards.
//!
//! Every screen or command declares an [`Access`] level. [`decide`] turns the
//! current [`SessionState`] into a [`GuardDecision`] (what an interactive
//! shell should do), and [`require`] turns it into a `Result` for callers
//! that cannot wait or redirect.

use thiserror::Error;

use crate::UserInfo;

/// Authentication state of the console.
///
/// Starts as `Loading` until the stored token has been revalidated.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SessionState {
    #[default]
    Loading,
    Anonymous,
    Authenticated(UserInfo),
}

impl SessionState {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated(_))
    }

    pub fn user(&self) -> Option<&UserInfo> {
        match self {
            Self::Authenticated(user) => Some(user),
            _ => None,
        }
    }
}

/// Access level required by a screen or command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// Login and registration.
    Public,
    /// Any signed-in user.
    Authenticated,
    /// Admins or secretaries.
    Manager,
    /// Admins only.
    Admin,
}

/// What to do with a guarded request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    Allow,
    /// Session revalidation still in flight; show a spinner.
    Pending,
    /// Not signed in.
    RedirectToLogin,
    /// Signed in but lacking the role; back to the dashboard.
    RedirectHome,
}

impl GuardDecision {
    /// Redirect target, if any.
    pub fn target(&self) -> Option<&'static str> {
        match self {
            Self::RedirectToLogin => Some("/login"),
            Self::RedirectHome => Some("/"),
            Self::Allow | Self::Pending => None,
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthzError {
    #[error("session is still loading")]
    SessionLoading,

    #[error("not signed in; run `login` first")]
    Unauthenticated,

    #[error("forbidden: requires {0} access")]
    Forbidden(&'static str),
}

pub fn decide(access: Access, state: &SessionState) -> GuardDecision {
    if access == Access::Public {
        return GuardDecision::Allow;
    }

    let user = match state {
        SessionState::Loading => return GuardDecision::Pending,
        SessionState::Anonymous => return GuardDecision::RedirectToLogin,
        SessionState::Authenticated(user) => user,
    };

    let allowed = match access {
        Access::Public | Access::Authenticated => true,
        Access::Manager => user.can_manage(),
        Access::Admin => user.is_admin(),
    };

    if allowed {
        GuardDecision::Allow
    } else {
        GuardDecision::RedirectHome
    }
}

/// Non-interactive form of [`decide`].
pub fn require(access: Access, state: &SessionState) -> Result<(), AuthzError> {
    match decide(access, state) {
        GuardDecision::Allow => Ok(()),
        GuardDecision::Pending => Err(AuthzError::SessionLoading),
        GuardDecision::RedirectToLogin => Err(AuthzError::Unauthenticated),
        GuardDecision::RedirectHome => Err(AuthzError::Forbidden(match access {
            Access::Admin => "admin",
            _ => "admin or secretary",
        })),
    }
}
