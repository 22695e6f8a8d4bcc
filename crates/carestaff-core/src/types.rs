//! # Domain Types
//!
//! Record types held by the CareStaff stores.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐        ┌─────────────────┐                        │
//! │  │ JobDescription  │◄───────│    Employee     │                        │
//! │  │  ─────────────  │  0..1  │  ─────────────  │                        │
//! │  │  id             │        │  id             │                        │
//! │  │  title          │        │  employee_number│                        │
//! │  │  summary        │        │  status         │                        │
//! │  │ responsibilities│        │                 │                        │
//! │  │  requirements   │        │                 │                        │
//! │  └─────────────────┘        └────────┬────────┘                        │
//! │                                      │ employee_id                      │
//! │             ┌────────────────────────┼────────────────────────┐        │
//! │             ▼                        ▼                        ▼        │
//! │  ┌─────────────────┐   ┌─────────────────────┐   ┌──────────────────┐  │
//! │  │  Certificate    │   │  TrainingRecord     │   │VaccinationRecord │  │
//! │  │  issued_on      │   │  completed_on       │   │ administered_on  │  │
//! │  │  expires_on     │   │  hours, status      │   │ next_due_on      │  │
//! │  └─────────────────┘   └─────────────────────┘   └──────────────────┘  │
//! │                                                                         │
//! │  ┌─────────────────┐                                                   │
//! │  │    Profile      │  signed-in user card, carries the Role            │
//! │  └─────────────────┘                                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Identity
//! Every record carries a string `id`. Seed records use readable ids
//! (`emp-001`); records created at runtime get a UUID v4 from [`new_id`].
//! Cross-references (`employee_id`, `job_description_id`) are plain ids and
//! are not enforced by the stores.

use chrono::{NaiveDate, TimeDelta};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::entity::Entity;
use crate::error::ValidationError;
use crate::patch::{
    CertificatePatch, EmployeePatch, JobDescriptionPatch, ProfilePatch, TrainingPatch,
    VaccinationPatch,
};

/// Mints a fresh record id (UUID v4).
pub fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

// =============================================================================
// Role
// =============================================================================

/// Which area of the front-end a user works in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// HR staff: manages every employee's records.
    Admin,
    /// An employee viewing their own records.
    #[default]
    Client,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Admin => write!(f, "admin"),
            Role::Client => write!(f, "client"),
        }
    }
}

impl std::str::FromStr for Role {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "admin" => Ok(Role::Admin),
            "client" | "employee" => Ok(Role::Client),
            other => Err(ValidationError::InvalidFormat {
                field: "role".to_string(),
                reason: format!("unknown role '{}', expected admin or client", other),
            }),
        }
    }
}

// =============================================================================
// Employee
// =============================================================================

/// Employment status of a staff member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum EmploymentStatus {
    #[default]
    Active,
    OnLeave,
    Terminated,
}

/// A hospital staff member.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    /// Unique identifier.
    pub id: String,

    /// Payroll / badge number shown on screens.
    pub employee_number: String,

    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,

    /// Ward or unit ("Emergency", "Radiology").
    pub department: String,

    pub job_title: String,

    /// Linked job description, if one has been assigned.
    pub job_description_id: Option<String>,

    pub hire_date: NaiveDate,
    pub status: EmploymentStatus,
}

impl Employee {
    /// Returns "First Last".
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Checks if the employee is currently working.
    pub fn is_active(&self) -> bool {
        self.status == EmploymentStatus::Active
    }

    /// Case-insensitive match against name, number, email, department and title.
    ///
    /// `needle` is expected to be lowercase already. An empty needle matches.
    pub fn matches_query(&self, needle: &str) -> bool {
        if needle.is_empty() {
            return true;
        }

        [
            self.first_name.as_str(),
            self.last_name.as_str(),
            self.employee_number.as_str(),
            self.email.as_str(),
            self.department.as_str(),
            self.job_title.as_str(),
        ]
        .iter()
        .any(|field| field.to_lowercase().contains(needle))
            || self.full_name().to_lowercase().contains(needle)
    }
}

impl Entity for Employee {
    const KIND: &'static str = "Employee";
    type Patch = EmployeePatch;

    fn id(&self) -> &str {
        &self.id
    }
}

// =============================================================================
// Certificate
// =============================================================================

/// A professional certificate or licence held by an employee.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Certificate {
    pub id: String,
    pub employee_id: String,

    /// Certificate name ("BLS Provider", "RN Licence").
    pub name: String,

    pub issuer: String,
    pub issued_on: NaiveDate,

    /// None for certificates that never expire.
    pub expires_on: Option<NaiveDate>,

    /// Name of the uploaded scan, if any.
    pub document_name: Option<String>,
}

impl Certificate {
    /// Checks if the certificate has expired as of `on`.
    ///
    /// A certificate is still valid on its expiry date.
    pub fn is_expired(&self, on: NaiveDate) -> bool {
        self.expires_on.is_some_and(|expires| expires < on)
    }

    /// Checks if the certificate is still valid on `on` but expires within
    /// the next `days` days (inclusive).
    ///
    /// A window reaching past the last representable date is open-ended.
    pub fn expires_within(&self, on: NaiveDate, days: i64) -> bool {
        let Some(expires) = self.expires_on else {
            return false;
        };

        let window_end = TimeDelta::try_days(days).and_then(|delta| on.checked_add_signed(delta));
        expires >= on && window_end.map_or(true, |end| expires <= end)
    }
}

impl Entity for Certificate {
    const KIND: &'static str = "Certificate";
    type Patch = CertificatePatch;

    fn id(&self) -> &str {
        &self.id
    }
}

// =============================================================================
// Training Record
// =============================================================================

/// Progress of a training course.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum TrainingStatus {
    #[default]
    Planned,
    InProgress,
    Completed,
}

/// A course an employee attended or is scheduled for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct TrainingRecord {
    pub id: String,
    pub employee_id: String,
    pub title: String,
    pub provider: String,

    /// Set once the course is completed.
    pub completed_on: Option<NaiveDate>,

    /// Credited hours.
    pub hours: u32,

    pub status: TrainingStatus,
}

impl TrainingRecord {
    /// Checks if the course has been completed.
    pub fn is_completed(&self) -> bool {
        self.status == TrainingStatus::Completed
    }
}

impl Entity for TrainingRecord {
    const KIND: &'static str = "TrainingRecord";
    type Patch = TrainingPatch;

    fn id(&self) -> &str {
        &self.id
    }
}

// =============================================================================
// Vaccination Record
// =============================================================================

/// A single administered vaccine dose.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct VaccinationRecord {
    pub id: String,
    pub employee_id: String,

    /// Vaccine name ("Hepatitis B", "Influenza").
    pub vaccine: String,

    /// 1 for the first dose, 2 for the second, ...
    pub dose_number: u8,

    pub administered_on: NaiveDate,

    /// When the next dose or booster is due, if any.
    pub next_due_on: Option<NaiveDate>,

    pub lot_number: Option<String>,
}

impl VaccinationRecord {
    /// Checks if the next dose is due on or before `on`.
    pub fn is_due(&self, on: NaiveDate) -> bool {
        self.next_due_on.is_some_and(|due| due <= on)
    }
}

impl Entity for VaccinationRecord {
    const KIND: &'static str = "VaccinationRecord";
    type Patch = VaccinationPatch;

    fn id(&self) -> &str {
        &self.id
    }
}

// =============================================================================
// Profile
// =============================================================================

/// The account card of a user of the front-end.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub id: String,
    pub display_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub role: Role,
    pub avatar_name: Option<String>,
}

impl Entity for Profile {
    const KIND: &'static str = "Profile";
    type Patch = ProfilePatch;

    fn id(&self) -> &str {
        &self.id
    }
}

// =============================================================================
// Job Description
// =============================================================================

/// A position's description, linked from employees.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct JobDescription {
    pub id: String,
    pub title: String,
    pub department: String,
    pub summary: String,
    pub responsibilities: Vec<String>,
    pub requirements: Vec<String>,
}

impl Entity for JobDescription {
    const KIND: &'static str = "JobDescription";
    type Patch = JobDescriptionPatch;

    fn id(&self) -> &str {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn certificate(expires_on: Option<NaiveDate>) -> Certificate {
        Certificate {
            id: "cert-1".to_string(),
            employee_id: "emp-1".to_string(),
            name: "BLS Provider".to_string(),
            issuer: "American Heart Association".to_string(),
            issued_on: date(2023, 1, 10),
            expires_on,
            document_name: None,
        }
    }

    #[test]
    fn test_role_parsing() {
        assert_eq!("admin".parse::<Role>().unwrap(), Role::Admin);
        assert_eq!(" Client ".parse::<Role>().unwrap(), Role::Client);
        assert_eq!("employee".parse::<Role>().unwrap(), Role::Client);
        assert!("root".parse::<Role>().is_err());
        assert_eq!(Role::Admin.to_string(), "admin");
    }

    #[test]
    fn test_certificate_expiry() {
        let cert = certificate(Some(date(2025, 1, 10)));
        assert!(!cert.is_expired(date(2025, 1, 10)));
        assert!(cert.is_expired(date(2025, 1, 11)));

        let lifetime = certificate(None);
        assert!(!lifetime.is_expired(date(2099, 1, 1)));
    }

    #[test]
    fn test_certificate_expires_within() {
        let cert = certificate(Some(date(2025, 2, 1)));
        assert!(cert.expires_within(date(2025, 1, 10), 30));
        assert!(!cert.expires_within(date(2024, 12, 1), 30));
        // Already expired is not "expiring"
        assert!(!cert.expires_within(date(2025, 2, 2), 30));
        assert!(!certificate(None).expires_within(date(2025, 1, 1), 365));
    }

    #[test]
    fn test_expires_within_huge_window_is_open_ended() {
        let cert = certificate(Some(date(2030, 6, 1)));

        assert!(cert.expires_within(date(2025, 1, 1), i64::MAX));
        assert!(cert.expires_within(date(2025, 1, 1), 100_000_000));
        assert!(!cert.expires_within(date(2031, 1, 1), i64::MAX));
    }

    #[test]
    fn test_status_helpers() {
        let mut employee = crate::seed::employees().remove(0);
        employee.status = EmploymentStatus::Active;
        assert!(employee.is_active());
        employee.status = EmploymentStatus::OnLeave;
        assert!(!employee.is_active());

        let mut training = crate::seed::trainings().remove(0);
        training.status = TrainingStatus::Completed;
        assert!(training.is_completed());
        training.status = TrainingStatus::InProgress;
        assert!(!training.is_completed());
    }

    #[test]
    fn test_vaccination_due() {
        let record = VaccinationRecord {
            id: "vac-1".to_string(),
            employee_id: "emp-1".to_string(),
            vaccine: "Hepatitis B".to_string(),
            dose_number: 1,
            administered_on: date(2024, 3, 1),
            next_due_on: Some(date(2024, 4, 1)),
            lot_number: None,
        };
        assert!(!record.is_due(date(2024, 3, 31)));
        assert!(record.is_due(date(2024, 4, 1)));
    }

    #[test]
    fn test_employee_search_match() {
        let employee = Employee {
            id: "emp-1".to_string(),
            employee_number: "HN-1001".to_string(),
            first_name: "Amara".to_string(),
            last_name: "Okafor".to_string(),
            email: "amara.okafor@stlukes.example".to_string(),
            phone: None,
            department: "Emergency".to_string(),
            job_title: "Registered Nurse".to_string(),
            job_description_id: None,
            hire_date: date(2019, 6, 3),
            status: EmploymentStatus::Active,
        };

        assert!(employee.matches_query(""));
        assert!(employee.matches_query("okafor"));
        assert!(employee.matches_query("amara okafor"));
        assert!(employee.matches_query("hn-1001"));
        assert!(employee.matches_query("emergency"));
        assert!(!employee.matches_query("radiology"));
    }

    #[test]
    fn test_new_id_is_unique() {
        assert_ne!(new_id(), new_id());
    }

    #[test]
    fn test_employee_wire_format() {
        let json = serde_json::json!({
            "id": "emp-9",
            "employeeNumber": "HN-9",
            "firstName": "Lee",
            "lastName": "Park",
            "email": "lee.park@stlukes.example",
            "phone": null,
            "department": "ICU",
            "jobTitle": "Intensivist",
            "jobDescriptionId": null,
            "hireDate": "2021-09-01",
            "status": "on_leave"
        });
        let employee: Employee = serde_json::from_value(json).unwrap();
        assert_eq!(employee.status, EmploymentStatus::OnLeave);
        assert_eq!(employee.hire_date, date(2021, 9, 1));
    }
}
