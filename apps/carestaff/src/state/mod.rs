//! # State Module
//!
//! Manages session state for the CareStaff shell.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    AppState (composition root)                  │   │
//! │  │  built once by run(), handed to every command by reference      │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                              │                                          │
//! │       ┌──────────────────────┼──────────────────────┐                  │
//! │       ▼                      ▼                      ▼                   │
//! │  ┌──────────────────┐  ┌──────────────┐  ┌──────────────────┐          │
//! │  │ StoreState<T> ×6 │  │ SessionState │  │    AppConfig     │          │
//! │  │                  │  │              │  │                  │          │
//! │  │ Arc<Mutex<       │  │ Mutex<Option │  │ organization     │          │
//! │  │  EntityStore<T>  │  │   <Role>>    │  │ default role     │          │
//! │  │ >>               │  │              │  │ seed, log filter │          │
//! │  └──────────────────┘  └──────────────┘  └──────────────────┘          │
//! │                                                                         │
//! │  THREAD SAFETY:                                                        │
//! │  • StoreState: one Mutex per collection                                │
//! │  • SessionState: Mutex around the signed-in role                       │
//! │  • AppConfig: Read-only after initialization                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod app;
mod config;
mod session;
mod store;

pub use app::{AppState, SessionSummary};
pub use config::{AppConfig, ConfigLoad, ConfigSource, IgnoredOverride, CONFIG_PATH_ENV};
pub use session::{
    guard, home_for, Area, RouteDecision, SessionState, ADMIN_HOME, CLIENT_HOME, LOGIN_PATH,
};
pub use store::StoreState;
