//! # Session State
//!
//! Tracks which role is signed in and decides where the front-end should
//! send a user who opens an area. Guards only redirect; they do not protect
//! any data.
//!
//! ## Route Guard Decisions
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Signed-in role     Requested area     Decision                         │
//! │  ──────────────     ──────────────     ────────                         │
//! │  (none)             admin / client     Redirect → /login                │
//! │  Admin              admin              Allow                            │
//! │  Admin              client             Redirect → /admin                │
//! │  Client             client             Allow                            │
//! │  Client             admin              Redirect → /client               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Mutex, PoisonError};

use carestaff_core::Role;
use serde::{Deserialize, Serialize};

pub const LOGIN_PATH: &str = "/login";
pub const ADMIN_HOME: &str = "/admin";
pub const CLIENT_HOME: &str = "/client";

/// A role-specific section of the front-end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Area {
    Admin,
    Client,
}

impl Area {
    /// The role that may view this area.
    pub fn required_role(&self) -> Role {
        match self {
            Area::Admin => Role::Admin,
            Area::Client => Role::Client,
        }
    }
}

/// Outcome of a route guard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum RouteDecision {
    Allow,
    Redirect { to: String },
}

/// Returns the landing page for a role.
pub fn home_for(role: Role) -> &'static str {
    match role {
        Role::Admin => ADMIN_HOME,
        Role::Client => CLIENT_HOME,
    }
}

/// Decides whether `role` may open `area`.
pub fn guard(role: Option<Role>, area: Area) -> RouteDecision {
    match role {
        None => RouteDecision::Redirect {
            to: LOGIN_PATH.to_string(),
        },
        Some(role) if role == area.required_role() => RouteDecision::Allow,
        Some(role) => RouteDecision::Redirect {
            to: home_for(role).to_string(),
        },
    }
}

/// The signed-in role of the current session.
#[derive(Debug, Default)]
pub struct SessionState {
    role: Mutex<Option<Role>>,
}

impl SessionState {
    /// Creates a signed-out session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a session already signed in as `role`.
    pub fn signed_in(role: Role) -> Self {
        SessionState {
            role: Mutex::new(Some(role)),
        }
    }

    pub fn role(&self) -> Option<Role> {
        *self.role.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn set_role(&self, role: Option<Role>) {
        *self.role.lock().unwrap_or_else(PoisonError::into_inner) = role;
    }

    /// Applies the route guard to the current role.
    pub fn guard(&self, area: Area) -> RouteDecision {
        guard(self.role(), area)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn redirect(to: &str) -> RouteDecision {
        RouteDecision::Redirect { to: to.to_string() }
    }

    #[test]
    fn test_guard_table() {
        assert_eq!(guard(None, Area::Admin), redirect(LOGIN_PATH));
        assert_eq!(guard(None, Area::Client), redirect(LOGIN_PATH));
        assert_eq!(guard(Some(Role::Admin), Area::Admin), RouteDecision::Allow);
        assert_eq!(guard(Some(Role::Admin), Area::Client), redirect(ADMIN_HOME));
        assert_eq!(guard(Some(Role::Client), Area::Client), RouteDecision::Allow);
        assert_eq!(guard(Some(Role::Client), Area::Admin), redirect(CLIENT_HOME));
    }

    #[test]
    fn test_session_sign_in_and_out() {
        let session = SessionState::new();
        assert_eq!(session.role(), None);

        session.set_role(Some(Role::Client));
        assert_eq!(session.guard(Area::Client), RouteDecision::Allow);

        session.set_role(None);
        assert_eq!(session.guard(Area::Client), redirect(LOGIN_PATH));
    }

    #[test]
    fn test_decision_wire_format() {
        let json = serde_json::to_value(redirect(CLIENT_HOME)).unwrap();
        assert_eq!(json, serde_json::json!({ "action": "redirect", "to": "/client" }));
    }
}
