//! # Config Commands
//!
//! Read access to the configuration the session was started with.

use tracing::debug;

use crate::state::{AppConfig, AppState};

/// Gets the current application configuration.
///
/// ## When Used
/// - App startup (header shows the organization name)
/// - Settings page
pub fn get_config(state: &AppState) -> AppConfig {
    debug!("get_config command");
    state.config.clone()
}
