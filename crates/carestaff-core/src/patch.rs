//! # Record Patches
//!
//! Partial updates for each record type, applied by shallow merge.
//!
//! ## Field Semantics
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Record field          Patch field                JSON                  │
//! │  ────────────          ───────────                ────                  │
//! │  name: String          Option<String>             absent → keep         │
//! │                                                   "x"    → set          │
//! │                                                                         │
//! │  phone: Option<String> Option<Option<String>>     absent → keep         │
//! │                                                   null   → clear        │
//! │                                                   "x"    → set          │
//! │                                                                         │
//! │  id                    (never patched)                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use ts_rs::TS;

use crate::entity::Patch;
use crate::types::{
    Certificate, Employee, EmploymentStatus, JobDescription, Profile, Role, TrainingRecord,
    TrainingStatus, VaccinationRecord,
};

/// Deserializes a present field (including `null`) as `Some(..)`.
///
/// Combined with `#[serde(default)]`, an absent field stays `None`.
fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

#[inline]
fn overlay<T: Clone>(slot: &mut T, value: &Option<T>) {
    if let Some(value) = value {
        *slot = value.clone();
    }
}

// =============================================================================
// Employee
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct EmployeePatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub employee_number: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub first_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub last_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub email: Option<String>,

    #[serde(
        default,
        deserialize_with = "double_option",
        skip_serializing_if = "Option::is_none"
    )]
    #[ts(optional)]
    pub phone: Option<Option<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub department: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub job_title: Option<String>,

    #[serde(
        default,
        deserialize_with = "double_option",
        skip_serializing_if = "Option::is_none"
    )]
    #[ts(optional)]
    pub job_description_id: Option<Option<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub hire_date: Option<NaiveDate>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub status: Option<EmploymentStatus>,
}

impl Patch<Employee> for EmployeePatch {
    fn apply_to(&self, target: &mut Employee) {
        overlay(&mut target.employee_number, &self.employee_number);
        overlay(&mut target.first_name, &self.first_name);
        overlay(&mut target.last_name, &self.last_name);
        overlay(&mut target.email, &self.email);
        overlay(&mut target.phone, &self.phone);
        overlay(&mut target.department, &self.department);
        overlay(&mut target.job_title, &self.job_title);
        overlay(&mut target.job_description_id, &self.job_description_id);
        overlay(&mut target.hire_date, &self.hire_date);
        overlay(&mut target.status, &self.status);
    }

    fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

// =============================================================================
// Certificate
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CertificatePatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub employee_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub issuer: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub issued_on: Option<NaiveDate>,

    #[serde(
        default,
        deserialize_with = "double_option",
        skip_serializing_if = "Option::is_none"
    )]
    #[ts(optional)]
    pub expires_on: Option<Option<NaiveDate>>,

    #[serde(
        default,
        deserialize_with = "double_option",
        skip_serializing_if = "Option::is_none"
    )]
    #[ts(optional)]
    pub document_name: Option<Option<String>>,
}

impl Patch<Certificate> for CertificatePatch {
    fn apply_to(&self, target: &mut Certificate) {
        overlay(&mut target.employee_id, &self.employee_id);
        overlay(&mut target.name, &self.name);
        overlay(&mut target.issuer, &self.issuer);
        overlay(&mut target.issued_on, &self.issued_on);
        overlay(&mut target.expires_on, &self.expires_on);
        overlay(&mut target.document_name, &self.document_name);
    }

    fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

// =============================================================================
// Training
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct TrainingPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub employee_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub title: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub provider: Option<String>,

    #[serde(
        default,
        deserialize_with = "double_option",
        skip_serializing_if = "Option::is_none"
    )]
    #[ts(optional)]
    pub completed_on: Option<Option<NaiveDate>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub hours: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub status: Option<TrainingStatus>,
}

impl Patch<TrainingRecord> for TrainingPatch {
    fn apply_to(&self, target: &mut TrainingRecord) {
        overlay(&mut target.employee_id, &self.employee_id);
        overlay(&mut target.title, &self.title);
        overlay(&mut target.provider, &self.provider);
        overlay(&mut target.completed_on, &self.completed_on);
        overlay(&mut target.hours, &self.hours);
        overlay(&mut target.status, &self.status);
    }

    fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

// =============================================================================
// Vaccination
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct VaccinationPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub employee_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub vaccine: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub dose_number: Option<u8>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub administered_on: Option<NaiveDate>,

    #[serde(
        default,
        deserialize_with = "double_option",
        skip_serializing_if = "Option::is_none"
    )]
    #[ts(optional)]
    pub next_due_on: Option<Option<NaiveDate>>,

    #[serde(
        default,
        deserialize_with = "double_option",
        skip_serializing_if = "Option::is_none"
    )]
    #[ts(optional)]
    pub lot_number: Option<Option<String>>,
}

impl Patch<VaccinationRecord> for VaccinationPatch {
    fn apply_to(&self, target: &mut VaccinationRecord) {
        overlay(&mut target.employee_id, &self.employee_id);
        overlay(&mut target.vaccine, &self.vaccine);
        overlay(&mut target.dose_number, &self.dose_number);
        overlay(&mut target.administered_on, &self.administered_on);
        overlay(&mut target.next_due_on, &self.next_due_on);
        overlay(&mut target.lot_number, &self.lot_number);
    }

    fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

// =============================================================================
// Profile
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ProfilePatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub display_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub email: Option<String>,

    #[serde(
        default,
        deserialize_with = "double_option",
        skip_serializing_if = "Option::is_none"
    )]
    #[ts(optional)]
    pub phone: Option<Option<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub role: Option<Role>,

    #[serde(
        default,
        deserialize_with = "double_option",
        skip_serializing_if = "Option::is_none"
    )]
    #[ts(optional)]
    pub avatar_name: Option<Option<String>>,
}

impl Patch<Profile> for ProfilePatch {
    fn apply_to(&self, target: &mut Profile) {
        overlay(&mut target.display_name, &self.display_name);
        overlay(&mut target.email, &self.email);
        overlay(&mut target.phone, &self.phone);
        overlay(&mut target.role, &self.role);
        overlay(&mut target.avatar_name, &self.avatar_name);
    }

    fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

// =============================================================================
// Job Description
// =============================================================================

/// List fields are replaced wholesale, not appended to.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct JobDescriptionPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub title: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub department: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub summary: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub responsibilities: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub requirements: Option<Vec<String>>,
}

impl Patch<JobDescription> for JobDescriptionPatch {
    fn apply_to(&self, target: &mut JobDescription) {
        overlay(&mut target.title, &self.title);
        overlay(&mut target.department, &self.department);
        overlay(&mut target.summary, &self.summary);
        overlay(&mut target.responsibilities, &self.responsibilities);
        overlay(&mut target.requirements, &self.requirements);
    }

    fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
