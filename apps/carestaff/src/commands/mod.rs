//! # Commands Module
//!
//! Every operation the front-end can invoke. Commands are plain functions
//! that borrow the state they need and return serializable values or
//! `ApiError`.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs       ◄─── You are here (exports)
//! ├── entity.rs    ◄─── Generic list/get/add/update/remove/select
//! ├── employee.rs  ◄─── Directory search, dossier, expiry reports
//! ├── session.rs   ◄─── Sign-in, sign-out, route guards
//! └── config.rs    ◄─── Configuration retrieval
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Command Flow                                         │
//! │                                                                         │
//! │  Front-end                                                              │
//! │  ─────────                                                              │
//! │  certificates.update("cert-001", { expiresOn: null })                   │
//! │         │                                                               │
//! │         │ (JSON patch)                                                  │
//! │         ▼                                                               │
//! │  Rust                                                                   │
//! │  ────                                                                   │
//! │  commands::entity::update(                                              │
//! │      &state.certificates,   ◄── only the store it touches               │
//! │      "cert-001",                                                        │
//! │      &patch,                ◄── CertificatePatch                        │
//! │  ) -> StoreSnapshot<Certificate>                                        │
//! │         │                                                               │
//! │         │ (JSON serialization)                                          │
//! │         ▼                                                               │
//! │  Front-end re-renders from the snapshot                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## State Injection
//! Each command declares only the state it needs:
//! ```rust,ignore
//! // One collection
//! fn list<T: Entity>(store: &StoreState<T>)
//!
//! // Joins across collections
//! fn employee_dossier(state: &AppState, employee_id: &str)
//! ```

pub mod config;
pub mod employee;
pub mod entity;
pub mod session;
