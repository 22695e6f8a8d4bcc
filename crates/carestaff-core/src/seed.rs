//! # Seed Data
//!
//! Static mock records used to start a session.
//!
//! ## Seed Graph
//! ```text
//! job-001 Registered Nurse ◄── emp-001 Amara Okafor ── cert-001, cert-002
//!                          ◄── emp-004 Tomas Lindqvist ── cert-005
//! job-002 Radiographer     ◄── emp-002 Priya Raman ── cert-003
//! job-003 Physician        ◄── emp-003 Samuel Adeyemi ── cert-004
//!                              emp-005 Grace Holloway (no job description)
//! ```
//!
//! Ids are stable across runs and unique per collection. Every
//! `employee_id` and `job_description_id` resolves inside the seed set.

use chrono::NaiveDate;

use crate::types::{
    Certificate, Employee, EmploymentStatus, JobDescription, Profile, Role, TrainingRecord,
    TrainingStatus, VaccinationRecord,
};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

#[allow(clippy::too_many_arguments)]
fn employee(
    id: &str,
    number: &str,
    first_name: &str,
    last_name: &str,
    department: &str,
    job_title: &str,
    job_description_id: Option<&str>,
    hire_date: NaiveDate,
    status: EmploymentStatus,
) -> Employee {
    Employee {
        id: id.to_string(),
        employee_number: number.to_string(),
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        email: format!(
            "{}.{}@stlukes.example",
            first_name.to_lowercase(),
            last_name.to_lowercase()
        ),
        phone: None,
        department: department.to_string(),
        job_title: job_title.to_string(),
        job_description_id: job_description_id.map(str::to_string),
        hire_date,
        status,
    }
}

/// Seed employees.
pub fn employees() -> Vec<Employee> {
    let mut amara = employee(
        "emp-001",
        "HN-1001",
        "Amara",
        "Okafor",
        "Emergency",
        "Registered Nurse",
        Some("job-001"),
        date(2019, 6, 3),
        EmploymentStatus::Active,
    );
    amara.phone = Some("555-0141".to_string());

    vec![
        amara,
        employee(
            "emp-002",
            "HN-1002",
            "Priya",
            "Raman",
            "Radiology",
            "Radiographer",
            Some("job-002"),
            date(2020, 2, 17),
            EmploymentStatus::Active,
        ),
        employee(
            "emp-003",
            "HN-1003",
            "Samuel",
            "Adeyemi",
            "Internal Medicine",
            "Attending Physician",
            Some("job-003"),
            date(2016, 9, 12),
            EmploymentStatus::OnLeave,
        ),
        employee(
            "emp-004",
            "HN-1004",
            "Tomas",
            "Lindqvist",
            "Intensive Care",
            "Registered Nurse",
            Some("job-001"),
            date(2022, 11, 7),
            EmploymentStatus::Active,
        ),
        employee(
            "emp-005",
            "HN-1005",
            "Grace",
            "Holloway",
            "Administration",
            "Ward Clerk",
            None,
            date(2018, 4, 23),
            EmploymentStatus::Terminated,
        ),
    ]
}

/// Seed certificates.
pub fn certificates() -> Vec<Certificate> {
    let cert = |id: &str,
                employee_id: &str,
                name: &str,
                issuer: &str,
                issued_on: NaiveDate,
                expires_on: Option<NaiveDate>| Certificate {
        id: id.to_string(),
        employee_id: employee_id.to_string(),
        name: name.to_string(),
        issuer: issuer.to_string(),
        issued_on,
        expires_on,
        document_name: None,
    };

    let mut bls = cert(
        "cert-001",
        "emp-001",
        "BLS Provider",
        "American Heart Association",
        date(2023, 5, 2),
        Some(date(2025, 5, 31)),
    );
    bls.document_name = Some("okafor-bls.pdf".to_string());

    vec![
        bls,
        cert(
            "cert-002",
            "emp-001",
            "Registered Nurse Licence",
            "State Board of Nursing",
            date(2019, 5, 20),
            Some(date(2027, 5, 20)),
        ),
        cert(
            "cert-003",
            "emp-002",
            "Radiation Safety",
            "Radiological Society",
            date(2021, 3, 8),
            None,
        ),
        cert(
            "cert-004",
            "emp-003",
            "ACLS Provider",
            "American Heart Association",
            date(2022, 10, 14),
            Some(date(2024, 10, 31)),
        ),
        cert(
            "cert-005",
            "emp-004",
            "Critical Care Nursing",
            "Association of Critical-Care Nurses",
            date(2023, 1, 30),
            Some(date(2026, 1, 30)),
        ),
    ]
}

/// Seed training records.
pub fn trainings() -> Vec<TrainingRecord> {
    let training = |id: &str,
                    employee_id: &str,
                    title: &str,
                    provider: &str,
                    completed_on: Option<NaiveDate>,
                    hours: u32,
                    status: TrainingStatus| TrainingRecord {
        id: id.to_string(),
        employee_id: employee_id.to_string(),
        title: title.to_string(),
        provider: provider.to_string(),
        completed_on,
        hours,
        status,
    };

    vec![
        training(
            "train-001",
            "emp-001",
            "Infection Prevention and Control",
            "Hospital Education Office",
            Some(date(2024, 2, 9)),
            6,
            TrainingStatus::Completed,
        ),
        training(
            "train-002",
            "emp-001",
            "Sepsis Recognition",
            "Hospital Education Office",
            None,
            4,
            TrainingStatus::InProgress,
        ),
        training(
            "train-003",
            "emp-002",
            "MRI Safety Level 2",
            "Radiological Society",
            Some(date(2023, 11, 21)),
            8,
            TrainingStatus::Completed,
        ),
        training(
            "train-004",
            "emp-004",
            "Ventilator Management",
            "Critical Care Academy",
            None,
            12,
            TrainingStatus::Planned,
        ),
        training(
            "train-005",
            "emp-003",
            "Antimicrobial Stewardship",
            "Hospital Education Office",
            Some(date(2023, 6, 15)),
            3,
            TrainingStatus::Completed,
        ),
    ]
}

/// Seed vaccination records.
pub fn vaccinations() -> Vec<VaccinationRecord> {
    let dose = |id: &str,
                employee_id: &str,
                vaccine: &str,
                dose_number: u8,
                administered_on: NaiveDate,
                next_due_on: Option<NaiveDate>| VaccinationRecord {
        id: id.to_string(),
        employee_id: employee_id.to_string(),
        vaccine: vaccine.to_string(),
        dose_number,
        administered_on,
        next_due_on,
        lot_number: None,
    };

    let mut flu = dose(
        "vac-001",
        "emp-001",
        "Influenza",
        1,
        date(2024, 10, 1),
        Some(date(2025, 10, 1)),
    );
    flu.lot_number = Some("FLU-24-3381".to_string());

    vec![
        flu,
        dose(
            "vac-002",
            "emp-001",
            "Hepatitis B",
            3,
            date(2019, 12, 2),
            None,
        ),
        dose(
            "vac-003",
            "emp-002",
            "Hepatitis B",
            2,
            date(2020, 4, 6),
            Some(date(2020, 9, 6)),
        ),
        dose(
            "vac-004",
            "emp-003",
            "Tdap",
            1,
            date(2016, 9, 1),
            Some(date(2026, 9, 1)),
        ),
        dose(
            "vac-005",
            "emp-004",
            "Influenza",
            1,
            date(2024, 10, 3),
            Some(date(2025, 10, 3)),
        ),
    ]
}

/// Seed profiles: one HR administrator and one employee account.
pub fn profiles() -> Vec<Profile> {
    vec![
        Profile {
            id: "prof-admin".to_string(),
            display_name: "Dana Whitfield".to_string(),
            email: "dana.whitfield@stlukes.example".to_string(),
            phone: Some("555-0100".to_string()),
            role: Role::Admin,
            avatar_name: None,
        },
        Profile {
            id: "prof-client".to_string(),
            display_name: "Amara Okafor".to_string(),
            email: "amara.okafor@stlukes.example".to_string(),
            phone: Some("555-0141".to_string()),
            role: Role::Client,
            avatar_name: Some("okafor.png".to_string()),
        },
    ]
}

/// Seed job descriptions.
pub fn job_descriptions() -> Vec<JobDescription> {
    vec![
        JobDescription {
            id: "job-001".to_string(),
            title: "Registered Nurse".to_string(),
            department: "Nursing".to_string(),
            summary: "Provides and coordinates direct patient care on an assigned unit."
                .to_string(),
            responsibilities: strings(&[
                "Assess, plan and evaluate patient care",
                "Administer medication and treatments",
                "Maintain accurate patient records",
            ]),
            requirements: strings(&["Active RN licence", "BLS certification"]),
        },
        JobDescription {
            id: "job-002".to_string(),
            title: "Radiographer".to_string(),
            department: "Radiology".to_string(),
            summary: "Performs diagnostic imaging examinations.".to_string(),
            responsibilities: strings(&[
                "Operate X-ray, CT and MRI equipment",
                "Position patients and apply radiation protection",
            ]),
            requirements: strings(&["Radiography degree", "Radiation safety certificate"]),
        },
        JobDescription {
            id: "job-003".to_string(),
            title: "Attending Physician".to_string(),
            department: "Medicine".to_string(),
            summary: "Supervises inpatient care and residents.".to_string(),
            responsibilities: strings(&[
                "Diagnose and treat admitted patients",
                "Supervise residents and medical students",
            ]),
            requirements: strings(&["Medical licence", "Board certification", "ACLS"]),
        },
    ]
}
