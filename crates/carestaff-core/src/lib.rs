//! # carestaff-core: Pure Domain Logic for CareStaff
//!
//! This crate holds the records and state containers behind the CareStaff
//! hospital staff screens. It has zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        CareStaff Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Front-end (admin / client areas)             │   │
//! │  │    Employees ──► Certificates ──► Trainings ──► Vaccinations    │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ commands                               │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    carestaff app (session shell)                │   │
//! │  │    AppState, SessionState, commands, config, logging            │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ carestaff-core (THIS CRATE) ★                   │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   patch   │  │   store   │  │   seed    │  │   │
//! │  │   │ Employee  │  │ shallow   │  │EntityStore│  │ mock data │  │   │
//! │  │   │Certificate│  │  merge    │  │ observers │  │           │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK                             │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`entity`] - The `Entity` and `Patch` traits every record implements
//! - [`types`] - Record types (Employee, Certificate, TrainingRecord, ...)
//! - [`patch`] - Partial updates for each record type
//! - [`store`] - `EntityStore<T>`, the generic observable collection
//! - [`seed`] - Static mock data used to start a session
//! - [`validation`] - Shape checks for ids and search input
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use carestaff_core::patch::EmployeePatch;
//! use carestaff_core::{seed, EntityStore};
//!
//! let mut employees = EntityStore::with_items(seed::employees());
//! let first = employees.items()[0].id.clone();
//!
//! let patch = EmployeePatch {
//!     job_title: Some("Charge Nurse".to_string()),
//!     ..Default::default()
//! };
//! assert!(employees.update(&first, &patch));
//! assert_eq!(employees.get(&first).unwrap().job_title, "Charge Nurse");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod entity;
pub mod error;
pub mod patch;
pub mod seed;
pub mod store;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use entity::{Entity, Patch};
pub use error::{StoreError, StoreResult, ValidationError};
pub use store::{Change, EntityStore, LoadStatus, StoreEvent, StoreSnapshot, SubscriptionId};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum length of a free-text search query.
pub const MAX_QUERY_LEN: usize = 100;
