//! Session guard
//!
//! Decides what an entry point shows: the public landing view for anonymous
//! viewers, or a redirect to the role's dashboard once a token is stored.

use std::time::Duration;

use crate::config::DEFAULT_REDIRECT_DELAY_MS;
use crate::error::{Error, Result};
use crate::models::{Role, Session};
use crate::services::scope::ViewScope;

use super::store::SessionStore;

/// Client-side navigation targets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Destination {
    Login,
    AdminDashboard,
    StudentDashboard,
}

impl Destination {
    pub fn path(&self) -> &'static str {
        match self {
            Destination::Login => "/login",
            Destination::AdminDashboard => "/admin/dashboard",
            Destination::StudentDashboard => "/student/dashboard",
        }
    }

    /// Dashboard for a stored role.
    ///
    /// `admin` and `staff` go to the admin dashboard. Every other value,
    /// including a missing or unrecognised role, falls back to the student
    /// dashboard.
    pub fn for_role(role: Option<&Role>) -> Self {
        match role {
            Some(role) if role.is_admin_like() => Destination::AdminDashboard,
            Some(Role::Student) => Destination::StudentDashboard,
            Some(other) => {
                log::warn!(
                    "[session] Unrecognised role '{}', defaulting to student dashboard",
                    other.as_str()
                );
                Destination::StudentDashboard
            }
            None => {
                log::warn!("[session] No role stored, defaulting to student dashboard");
                Destination::StudentDashboard
            }
        }
    }
}

/// What the guarded entry point should do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardOutcome {
    /// Anonymous viewer: render the public landing view
    Landing,
    /// Authenticated viewer: navigate after the redirect delay
    Redirect(Destination),
    /// The view went away during the delay; nothing to do
    Cancelled,
}

/// Entry-point guard with a short redirect delay
pub struct SessionGuard {
    delay: Duration,
}

impl SessionGuard {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    /// Read the stored credential and decide the outcome.
    ///
    /// The token is not validated with the server here.
    pub async fn check<S>(&self, store: &S, scope: &ViewScope) -> Result<GuardOutcome>
    where
        S: SessionStore + ?Sized,
    {
        let session = match store.get()? {
            Some(session) => session,
            None => return Ok(GuardOutcome::Landing),
        };

        let destination = Destination::for_role(session.role.as_ref());

        match scope.sleep(self.delay).await {
            Ok(()) => Ok(GuardOutcome::Redirect(destination)),
            Err(Error::Cancelled) => Ok(GuardOutcome::Cancelled),
            Err(e) => Err(e),
        }
    }
}

impl Default for SessionGuard {
    fn default() -> Self {
        Self::new(Duration::from_millis(DEFAULT_REDIRECT_DELAY_MS))
    }
}

/// Session for a protected view; `Unauthenticated` sends the viewer to login
pub fn require_session<S>(store: &S) -> Result<Session>
where
    S: SessionStore + ?Sized,
{
    store.get()?.ok_or(Error::Unauthenticated)
}
