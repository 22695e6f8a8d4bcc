//! # CareStaff Application Library
//!
//! The session shell around `carestaff-core`: configuration, logging, one
//! shared store per record kind, and the commands the front-end invokes.
//!
//! ## Module Organization
//! ```text
//! carestaff_app/
//! ├── lib.rs          ◄─── You are here (startup & run)
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── app.rs      ◄─── AppState composition root
//! │   ├── store.rs    ◄─── StoreState<T> (shared EntityStore)
//! │   ├── session.rs  ◄─── Signed-in role, route guards
//! │   └── config.rs   ◄─── AppConfig (defaults < toml < env)
//! ├── commands/
//! │   ├── mod.rs      ◄─── Command exports
//! │   ├── entity.rs   ◄─── Generic collection commands
//! │   ├── employee.rs ◄─── Search, dossier, expiry reports
//! │   ├── session.rs  ◄─── Sign-in, guards, current profile
//! │   └── config.rs   ◄─── Configuration retrieval
//! └── error.rs        ◄─── API error type for commands
//! ```

pub mod commands;
pub mod error;
pub mod state;

use carestaff_core::{
    Certificate, Employee, JobDescription, Profile, StoreSnapshot, TrainingRecord,
    VaccinationRecord,
};
use serde::Serialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

use state::{AppConfig, AppState, SessionSummary};

/// What `run` prints: the session summary followed by every collection.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StartupReport {
    pub summary: SessionSummary,
    pub employees: StoreSnapshot<Employee>,
    pub certificates: StoreSnapshot<Certificate>,
    pub trainings: StoreSnapshot<TrainingRecord>,
    pub vaccinations: StoreSnapshot<VaccinationRecord>,
    pub profiles: StoreSnapshot<Profile>,
    pub job_descriptions: StoreSnapshot<JobDescription>,
}

impl StartupReport {
    pub fn collect(state: &AppState) -> Self {
        StartupReport {
            summary: state.summary(),
            employees: state.employees.snapshot(),
            certificates: state.certificates.snapshot(),
            trainings: state.trainings.snapshot(),
            vaccinations: state.vaccinations.snapshot(),
            profiles: state.profiles.snapshot(),
            job_descriptions: state.job_descriptions.snapshot(),
        }
    }
}

/// Boots a session and prints its report as JSON.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Application Startup                               │
/// │                                                                         │
/// │  1. Load Configuration ───────────────────────────────────────────────► │
/// │     • defaults < carestaff.toml < CARESTAFF_* environment               │
/// │                                                                         │
/// │  2. Initialize Logging ───────────────────────────────────────────────► │
/// │     • tracing-subscriber with env filter                                │
/// │     • RUST_LOG wins, otherwise config.log_filter                        │
/// │     • then report the config source and ignored overrides               │
/// │                                                                         │
/// │  3. Build AppState ───────────────────────────────────────────────────► │
/// │     • one StoreState per record kind, seeded if configured              │
/// │     • SessionState signed in as config.default_role                     │
/// │                                                                         │
/// │  4. Print Report ─────────────────────────────────────────────────────► │
/// │     • summary + every snapshot, pretty JSON on stdout                   │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    // Loaded before logging: the default filter comes from the config.
    let loaded = AppConfig::load(None)?;
    init_tracing(&loaded.config.log_filter);
    loaded.report();

    let config = loaded.config;

    info!(
        organization = %config.organization_name,
        "Starting CareStaff session"
    );

    let state = AppState::from_config(config);
    let report = StartupReport::collect(&state);

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=carestaff_app=trace` - Show trace for this crate only
/// - Default: `default_filter` (from `AppConfig::log_filter`)
///
/// Logs go to stderr so stdout stays valid JSON.
fn init_tracing(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    // A subscriber may already be installed (tests, embedding hosts).
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_covers_every_collection() {
        let state = AppState::seeded();
        let report = StartupReport::collect(&state);

        assert_eq!(report.employees.items.len(), report.summary.employees);
        assert_eq!(report.profiles.items.len(), report.summary.profiles);

        let json = serde_json::to_value(&report).unwrap();
        assert!(json["jobDescriptions"]["items"].is_array());
        assert_eq!(json["summary"]["organizationName"], "St. Luke's General Hospital");
    }
}
