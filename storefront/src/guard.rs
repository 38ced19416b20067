//! Route guard policies.
//!
//! A guard is a pure function of the current [`SessionState`]. It never
//! mutates the session; callers re-run it on every session change.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use crate::identity::Role;
use crate::routes::{HOME_PATH, LOGIN_PATH};
use crate::session::SessionState;

/// Access requirement attached to a route.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GuardPolicy {
    /// Reachable by anyone (login, register).
    Public,
    /// Requires a signed-in identity; redirects to `/login` otherwise.
    Authenticated,
    /// Requires a signed-in admin; redirects to `/` otherwise.
    Admin,
}

/// Why access was refused.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Denial {
    /// Nobody is signed in.
    Unauthenticated,
    /// Signed in without the required role.
    Forbidden,
}

/// Result of evaluating a guard.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardOutcome {
    /// The startup restore has not answered yet.
    Pending,
    /// Access refused; navigate to `redirect`.
    Denied { reason: Denial, redirect: &'static str },
    Granted,
}

impl GuardPolicy {
    #[must_use]
    pub fn evaluate(self, state: &SessionState) -> GuardOutcome {
        if self == Self::Public {
            return GuardOutcome::Granted;
        }
        if state.loading {
            return GuardOutcome::Pending;
        }

        let role = state.identity.as_ref().map(|identity| identity.role);
        match (self, role) {
            (Self::Authenticated, None) => {
                GuardOutcome::Denied { reason: Denial::Unauthenticated, redirect: LOGIN_PATH }
            }
            // An admin route sends everyone it refuses home; the home route's
            // own guard then bounces signed-out visitors on to `/login`.
            (Self::Admin, None) => GuardOutcome::Denied { reason: Denial::Unauthenticated, redirect: HOME_PATH },
            (Self::Admin, Some(role)) if role != Role::Admin => {
                GuardOutcome::Denied { reason: Denial::Forbidden, redirect: HOME_PATH }
            }
            _ => GuardOutcome::Granted,
        }
    }

    #[must_use]
    pub fn is_protected(self) -> bool {
        self != Self::Public
    }
}

impl GuardOutcome {
    /// Redirect target, if access was refused.
    #[must_use]
    pub fn redirect(self) -> Option<&'static str> {
        match self {
            Self::Denied { redirect, .. } => Some(redirect),
            Self::Pending | Self::Granted => None,
        }
    }
}
