//! # Error Types
//!
//! Domain-specific error types for carestaff-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  carestaff-core errors (this file)                                     │
//! │  ├── StoreError       - Collection operation failures                  │
//! │  └── ValidationError  - Input shape failures                           │
//! │                                                                         │
//! │  app errors (apps/carestaff)                                           │
//! │  ├── ConfigError      - Config file / environment problems             │
//! │  └── ApiError         - What the front-end sees (serialized)           │
//! │                                                                         │
//! │  Flow: ValidationError → StoreError → ApiError → Front-end             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Silent Operations
//! `update` and `remove` on an unknown id are no-ops and never produce an
//! error. Only `add` and the strict lookup `get_required` report failures.

use thiserror::Error;

// =============================================================================
// Store Error
// =============================================================================

/// Errors raised by [`EntityStore`](crate::store::EntityStore) operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    /// A record with this id is already in the collection.
    ///
    /// ## When This Occurs
    /// - `add` called with a record whose id is already present
    /// - `create` commands reusing an id supplied by the client
    #[error("{kind} '{id}' already exists")]
    DuplicateId { kind: &'static str, id: String },

    /// No record with this id is in the collection.
    #[error("{kind} not found: {id}")]
    NotFound { kind: &'static str, id: String },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input shape errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Invalid format (e.g. an unknown role name).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with StoreError.
pub type StoreResult<T> = Result<T, StoreError>;
