//! # Store State
//!
//! Shares one `EntityStore<T>` between commands.
//!
//! ## Thread Safety
//! The store is wrapped in `Arc<Mutex<T>>`:
//! 1. Multiple commands may read or modify the same collection
//! 2. Only one command should modify it at a time
//! 3. Clones of a `StoreState` point at the same store
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Command                  StoreState<T>              EntityStore<T>     │
//! │  ───────                  ─────────────              ──────────────     │
//! │                                                                         │
//! │  list / get ─────────────► with_store(|s| ..) ─────► (read only)        │
//! │                                                                         │
//! │  add / update / remove ──► with_store_mut(|s| ..) ─► mutation +         │
//! │  select / set_all                                    observers          │
//! │                                                                         │
//! │  NOTE: Observers run while the lock is held. A callback that calls      │
//! │        back into the same StoreState would deadlock.                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex, MutexGuard, PoisonError, TryLockError};

use carestaff_core::{Entity, EntityStore, StoreEvent, StoreSnapshot, SubscriptionId};
use tracing::warn;

/// Shared handle to one entity collection.
pub struct StoreState<T: Entity> {
    store: Arc<Mutex<EntityStore<T>>>,
}

impl<T: Entity> StoreState<T> {
    /// Creates a state handle around an empty store.
    pub fn new() -> Self {
        Self::with_items(Vec::new())
    }

    /// Creates a state handle around a store seeded with `items`.
    pub fn with_items(items: Vec<T>) -> Self {
        StoreState {
            store: Arc::new(Mutex::new(EntityStore::with_items(items))),
        }
    }

    /// Executes a function with read access to the store.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let count = employees.with_store(|s| s.len());
    /// ```
    pub fn with_store<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&EntityStore<T>) -> R,
    {
        let store = self.lock();
        f(&store)
    }

    /// Executes a function with write access to the store.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// employees.with_store_mut(|s| s.remove("emp-001"));
    /// ```
    pub fn with_store_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut EntityStore<T>) -> R,
    {
        let mut store = self.lock();
        f(&mut store)
    }

    /// Copies the current store state.
    pub fn snapshot(&self) -> StoreSnapshot<T> {
        self.with_store(|s| s.snapshot())
    }

    /// Registers an observer on the underlying store.
    pub fn subscribe<F>(&self, observer: F) -> SubscriptionId
    where
        F: FnMut(&StoreEvent) + Send + 'static,
    {
        self.with_store_mut(|s| s.subscribe(observer))
    }

    /// Removes an observer from the underlying store.
    pub fn unsubscribe(&self, subscription: SubscriptionId) -> bool {
        self.with_store_mut(|s| s.unsubscribe(subscription))
    }

    /// Acquires the lock, recovering the store if a previous holder panicked.
    ///
    /// Store mutations are single assignments, so a poisoned store is still
    /// structurally valid.
    fn lock(&self) -> MutexGuard<'_, EntityStore<T>> {
        self.store.lock().unwrap_or_else(|poisoned: PoisonError<_>| {
            warn!(kind = T::KIND, "Store mutex poisoned, recovering");
            poisoned.into_inner()
        })
    }
}

impl<T: Entity> Clone for StoreState<T> {
    fn clone(&self) -> Self {
        StoreState {
            store: Arc::clone(&self.store),
        }
    }
}

impl<T: Entity> Default for StoreState<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Never blocks: a store that is locked elsewhere (for example by the
/// observer currently being notified) prints as `StoreState { .. }`.
impl<T: Entity + std::fmt::Debug> std::fmt::Debug for StoreState<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let store = match self.store.try_lock() {
            Ok(store) => store,
            Err(TryLockError::Poisoned(poisoned)) => poisoned.into_inner(),
            Err(TryLockError::WouldBlock) => {
                return f.debug_struct("StoreState").finish_non_exhaustive()
            }
        };
        f.debug_struct("StoreState").field("store", &*store).finish()
    }
}
