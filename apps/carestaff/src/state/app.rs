//! # App State
//!
//! The composition root: owns one store per record kind, the session, and
//! the configuration it was built from.

use carestaff_core::{
    seed, Certificate, Employee, JobDescription, Profile, TrainingRecord, VaccinationRecord,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use super::config::AppConfig;
use super::session::SessionState;
use super::store::StoreState;

/// Everything a CareStaff session holds.
#[derive(Debug)]
pub struct AppState {
    pub config: AppConfig,
    pub session: SessionState,
    pub employees: StoreState<Employee>,
    pub certificates: StoreState<Certificate>,
    pub trainings: StoreState<TrainingRecord>,
    pub vaccinations: StoreState<VaccinationRecord>,
    pub profiles: StoreState<Profile>,
    pub job_descriptions: StoreState<JobDescription>,
}

/// Per-collection record counts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSummary {
    pub organization_name: String,
    pub employees: usize,
    pub active_employees: usize,
    pub certificates: usize,
    pub trainings: usize,
    pub vaccinations: usize,
    pub profiles: usize,
    pub job_descriptions: usize,
}

impl AppState {
    /// Builds a session from `config`, seeding the stores when
    /// `config.seed_mock_data` is set.
    pub fn from_config(config: AppConfig) -> Self {
        let session = match config.default_role {
            Some(role) => SessionState::signed_in(role),
            None => SessionState::new(),
        };

        let state = if config.seed_mock_data {
            AppState {
                config,
                session,
                employees: StoreState::with_items(seed::employees()),
                certificates: StoreState::with_items(seed::certificates()),
                trainings: StoreState::with_items(seed::trainings()),
                vaccinations: StoreState::with_items(seed::vaccinations()),
                profiles: StoreState::with_items(seed::profiles()),
                job_descriptions: StoreState::with_items(seed::job_descriptions()),
            }
        } else {
            AppState {
                config,
                session,
                employees: StoreState::new(),
                certificates: StoreState::new(),
                trainings: StoreState::new(),
                vaccinations: StoreState::new(),
                profiles: StoreState::new(),
                job_descriptions: StoreState::new(),
            }
        };

        let summary = state.summary();
        info!(
            employees = summary.employees,
            certificates = summary.certificates,
            trainings = summary.trainings,
            vaccinations = summary.vaccinations,
            "Session state initialized"
        );
        state
    }

    /// A session seeded with the default mock data.
    pub fn seeded() -> Self {
        Self::from_config(AppConfig::default())
    }

    /// A session with every store empty.
    pub fn empty() -> Self {
        Self::from_config(AppConfig {
            seed_mock_data: false,
            ..AppConfig::default()
        })
    }

    pub fn summary(&self) -> SessionSummary {
        SessionSummary {
            organization_name: self.config.organization_name.clone(),
            employees: self.employees.with_store(|s| s.len()),
            active_employees: self
                .employees
                .with_store(|s| s.iter().filter(|e| e.is_active()).count()),
            certificates: self.certificates.with_store(|s| s.len()),
            trainings: self.trainings.with_store(|s| s.len()),
            vaccinations: self.vaccinations.with_store(|s| s.len()),
            profiles: self.profiles.with_store(|s| s.len()),
            job_descriptions: self.job_descriptions.with_store(|s| s.len()),
        }
    }
}
