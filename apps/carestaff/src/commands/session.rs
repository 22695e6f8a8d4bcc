//! # Session Commands
//!
//! Sign-in, sign-out and route guarding. Signing in only records the chosen
//! role; there are no credentials to check.

use carestaff_core::{Profile, Role};
use serde::Serialize;
use tracing::{debug, info};

use crate::error::{ApiError, ApiResult, ErrorCode};
use crate::state::{home_for, AppState, Area, RouteDecision, SessionSummary, LOGIN_PATH};

/// Where the front-end lands after a sign-in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignInResponse {
    pub role: Role,
    pub home: String,
}

pub fn sign_in(state: &AppState, role: Role) -> SignInResponse {
    info!(%role, "Signing in");
    state.session.set_role(Some(role));

    SignInResponse {
        role,
        home: home_for(role).to_string(),
    }
}

/// Clears the session and returns the login path.
pub fn sign_out(state: &AppState) -> String {
    info!("Signing out");
    state.session.set_role(None);
    LOGIN_PATH.to_string()
}

pub fn current_role(state: &AppState) -> Option<Role> {
    state.session.role()
}

/// Decides whether the current session may open `area`.
pub fn guard_route(state: &AppState, area: Area) -> RouteDecision {
    let decision = state.session.guard(area);
    debug!(?area, ?decision, "guard_route command");
    decision
}

/// Returns the profile of the signed-in role.
///
/// ## Errors
/// `NOT_FOUND` if nobody is signed in or no profile carries the role.
pub fn current_profile(state: &AppState) -> ApiResult<Profile> {
    let role = state
        .session
        .role()
        .ok_or_else(|| ApiError::new(ErrorCode::NotFound, "No user is signed in"))?;

    state
        .profiles
        .with_store(|s| s.find(|p| p.role == role).cloned())
        .ok_or_else(|| ApiError::not_found("Profile", &role.to_string()))
}

/// Record counts for the dashboard header.
pub fn session_summary(state: &AppState) -> SessionSummary {
    state.summary()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{ADMIN_HOME, CLIENT_HOME};

    #[test]
    fn test_sign_in_lands_on_role_home() {
        let state = AppState::seeded();

        assert_eq!(sign_in(&state, Role::Admin).home, ADMIN_HOME);
        assert_eq!(current_role(&state), Some(Role::Admin));

        assert_eq!(sign_in(&state, Role::Client).home, CLIENT_HOME);
        assert_eq!(current_role(&state), Some(Role::Client));
    }

    #[test]
    fn test_sign_out_redirects_guards() {
        let state = AppState::seeded();
        sign_in(&state, Role::Admin);
        assert_eq!(guard_route(&state, Area::Admin), RouteDecision::Allow);

        assert_eq!(sign_out(&state), LOGIN_PATH);
        assert_eq!(
            guard_route(&state, Area::Admin),
            RouteDecision::Redirect {
                to: LOGIN_PATH.to_string()
            }
        );
    }

    #[test]
    fn test_current_profile() {
        let state = AppState::seeded();
        assert_eq!(current_profile(&state).unwrap_err().code, ErrorCode::NotFound);

        sign_in(&state, Role::Client);
        assert_eq!(current_profile(&state).unwrap().id, "prof-client");
    }

    #[test]
    fn test_current_profile_missing_for_role() {
        let state = AppState::empty();
        sign_in(&state, Role::Admin);

        let err = current_profile(&state).unwrap_err();
        assert_eq!(err.message, "Profile not found: admin");
    }
}
