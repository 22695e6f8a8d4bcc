//! # Employee Commands
//!
//! Queries that join the employee directory with the record collections.
//!
//! ## Dossier Assembly
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    employee_dossier("emp-001")                          │
//! │                                                                         │
//! │  employees ──────────► Employee ──── job_description_id ──┐            │
//! │                           │                                │            │
//! │                           │ id                             ▼            │
//! │              ┌────────────┼────────────┐        job_descriptions       │
//! │              ▼            ▼            ▼                                │
//! │        certificates   trainings   vaccinations                         │
//! │        (employee_id)  (employee_id) (employee_id)                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use carestaff_core::validation::validate_search_query;
use carestaff_core::{
    Certificate, Employee, JobDescription, TrainingRecord, VaccinationRecord,
};
use chrono::NaiveDate;
use serde::Serialize;
use tracing::debug;

use crate::error::{ApiError, ApiResult};
use crate::state::{AppState, StoreState};

/// Everything on file for one employee.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeDossier {
    pub employee: Employee,
    pub job_description: Option<JobDescription>,
    pub certificates: Vec<Certificate>,
    pub trainings: Vec<TrainingRecord>,
    pub vaccinations: Vec<VaccinationRecord>,

    /// Hours credited by completed trainings only.
    pub completed_training_hours: u32,
}

/// Case-insensitive search over the employee directory.
///
/// An empty query returns every employee.
///
/// ## Errors
/// `VALIDATION_ERROR` if the query is longer than 100 characters.
pub fn search_employees(store: &StoreState<Employee>, query: &str) -> ApiResult<Vec<Employee>> {
    let query = validate_search_query(query)?;
    debug!(query = %query, "search_employees command");

    let needle = query.to_lowercase();
    let matches = store.with_store(|s| {
        s.iter()
            .filter(|employee| employee.matches_query(&needle))
            .cloned()
            .collect::<Vec<_>>()
    });

    debug!(count = matches.len(), "search_employees matched");
    Ok(matches)
}

/// Gathers an employee with their records and job description.
///
/// A dangling `job_description_id` yields `None` rather than an error.
///
/// ## Errors
/// `NOT_FOUND` if the employee does not exist.
pub fn employee_dossier(state: &AppState, employee_id: &str) -> ApiResult<EmployeeDossier> {
    debug!(employee_id = %employee_id, "employee_dossier command");

    let employee = state
        .employees
        .with_store(|s| s.get_required(employee_id).cloned())?;

    let job_description = match employee.job_description_id.as_deref() {
        Some(job_id) => state.job_descriptions.with_store(|s| s.get(job_id).cloned()),
        None => None,
    };

    let certificates = state.certificates.with_store(|s| {
        s.iter()
            .filter(|c| c.employee_id == employee.id)
            .cloned()
            .collect()
    });
    let trainings: Vec<TrainingRecord> = state.trainings.with_store(|s| {
        s.iter()
            .filter(|t| t.employee_id == employee.id)
            .cloned()
            .collect()
    });
    let completed_training_hours = trainings
        .iter()
        .filter(|t| t.is_completed())
        .map(|t| t.hours)
        .sum();
    let vaccinations = state.vaccinations.with_store(|s| {
        s.iter()
            .filter(|v| v.employee_id == employee.id)
            .cloned()
            .collect()
    });

    Ok(EmployeeDossier {
        employee,
        job_description,
        certificates,
        trainings,
        vaccinations,
        completed_training_hours,
    })
}

/// Certificates still valid on `on` that expire within `within_days` days.
///
/// A window too large to represent as a date covers every future expiry.
///
/// ## Errors
/// `VALIDATION_ERROR` if `within_days` is negative.
pub fn expiring_certificates(
    store: &StoreState<Certificate>,
    on: NaiveDate,
    within_days: i64,
) -> ApiResult<Vec<Certificate>> {
    if within_days < 0 {
        return Err(ApiError::validation("within_days must not be negative"));
    }
    debug!(%on, within_days, "expiring_certificates command");

    Ok(store.with_store(|s| {
        s.iter()
            .filter(|c| c.expires_within(on, within_days))
            .cloned()
            .collect()
    }))
}

/// Certificates already expired on `on`.
pub fn expired_certificates(store: &StoreState<Certificate>, on: NaiveDate) -> Vec<Certificate> {
    debug!(%on, "expired_certificates command");
    store.with_store(|s| s.iter().filter(|c| c.is_expired(on)).cloned().collect())
}

/// Vaccinations whose next dose falls on or before `on`.
pub fn due_vaccinations(store: &StoreState<VaccinationRecord>, on: NaiveDate) -> Vec<VaccinationRecord> {
    debug!(%on, "due_vaccinations command");
    store.with_store(|s| s.iter().filter(|v| v.is_due(on)).cloned().collect())
}
