//! # Entity Store
//!
//! `EntityStore<T>` is the one state container behind every CareStaff
//! screen: an ordered, observable collection of records with a "currently
//! selected" pointer and transient loading/error flags.
//!
//! ## Operations
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Store Operations                                     │
//! │                                                                         │
//! │  UI Action              Store Call            Collection Change         │
//! │  ─────────              ──────────            ─────────────────         │
//! │                                                                         │
//! │  Load screen ─────────► set_all(items) ─────► items = items             │
//! │                                                                         │
//! │  Save new form ───────► add(item) ──────────► items.push(item)          │
//! │                          (duplicate id → DuplicateId, nothing changes)  │
//! │                                                                         │
//! │  Save edit form ──────► update(id, patch) ──► items[i] = patch ⊕ old    │
//! │                          (unknown id → silent no-op)                    │
//! │                                                                         │
//! │  Click delete ────────► remove(id) ─────────► items.retain(id != x)     │
//! │                          (clears the selection if it pointed at x)      │
//! │                                                                         │
//! │  Open detail ─────────► select(Some(item)) ─► selected = item.id        │
//! │  Close detail ────────► select(None) ───────► selected = none           │
//! │                                                                         │
//! │  Every effective change bumps `version` and notifies subscribers.       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Selection
//! The selection is held as an id and resolved against `items` on read, so
//! `selected()` always returns the current value of the record (including
//! updates) and never a stale copy. `select` performs no existence check;
//! a selection that does not resolve reads as `None`.
//!
//! ## Observers
//! Subscribers are invoked synchronously, in subscription order, while the
//! store is mutably borrowed. They receive a [`StoreEvent`] and read the new
//! state through whatever handle they hold; they cannot call back into the
//! store that is notifying them.

use serde::{Deserialize, Serialize};

use crate::entity::{Entity, Patch};
use crate::error::{StoreError, StoreResult};
use crate::validation::validate_id;

/// Callback invoked on every observer-visible change.
pub type Observer = Box<dyn FnMut(&StoreEvent) + Send>;

/// Handle returned by [`EntityStore::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SubscriptionId(u64);

// =============================================================================
// Events
// =============================================================================

/// What changed in a store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Change {
    /// The whole collection was replaced.
    Replaced { len: usize, selection_cleared: bool },

    /// A record was appended.
    Added { id: String },

    /// A record was replaced by a patched copy.
    Updated { id: String },

    /// Every record with this id was dropped.
    Removed {
        id: String,
        count: usize,
        selection_cleared: bool,
    },

    /// The selection was set or cleared.
    SelectionChanged { id: Option<String> },

    /// `is_loading` or `error` changed.
    StatusChanged,
}

/// Notification delivered to subscribers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreEvent {
    /// `Entity::KIND` of the store that changed.
    pub kind: &'static str,

    /// Store version after the change.
    pub version: u64,

    pub change: Change,
}

// =============================================================================
// Status & Snapshot
// =============================================================================

/// Transient status flags for screens that load asynchronously.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoadStatus {
    pub is_loading: bool,
    pub error: Option<String>,
}

/// A serializable copy of a store handed to the UI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreSnapshot<T> {
    pub items: Vec<T>,
    pub selected_id: Option<String>,
    pub is_loading: bool,
    pub error: Option<String>,
    pub version: u64,
}

// =============================================================================
// Entity Store
// =============================================================================

/// An in-memory, observable collection of records.
///
/// ## Invariants
/// - Ids are unique within `items` as long as records only enter through
///   `add` (`set_all` trusts its caller)
/// - `remove` and `set_all` never leave a selection pointing at an id they
///   dropped
/// - Patches never change a record's id
pub struct EntityStore<T: Entity> {
    items: Vec<T>,
    selected: Option<String>,
    status: LoadStatus,
    version: u64,
    observers: Vec<(SubscriptionId, Observer)>,
    next_subscription: u64,
}

impl<T: Entity> EntityStore<T> {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::with_items(Vec::new())
    }

    /// Creates a store seeded with `items`.
    ///
    /// Seeding is not a change: no observers exist yet and `version` is 0.
    pub fn with_items(items: Vec<T>) -> Self {
        EntityStore {
            items,
            selected: None,
            status: LoadStatus::default(),
            version: 0,
            observers: Vec::new(),
            next_subscription: 0,
        }
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Replaces the entire collection.
    ///
    /// No uniqueness check is performed. A selection whose id is not in the
    /// new collection is cleared.
    pub fn set_all(&mut self, items: Vec<T>) {
        self.items = items;

        let selection_cleared = self
            .selected
            .as_deref()
            .is_some_and(|id| !self.contains(id));
        if selection_cleared {
            self.selected = None;
        }

        let len = self.items.len();
        self.emit(Change::Replaced {
            len,
            selection_cleared,
        });
    }

    /// Appends a record to the end of the collection.
    ///
    /// ## Errors
    /// - `StoreError::Validation` if the id is empty or blank
    /// - `StoreError::DuplicateId` if a record with this id already exists
    ///
    /// On error the store is left unchanged.
    pub fn add(&mut self, item: T) -> StoreResult<()> {
        validate_id("id", item.id())?;

        if self.contains(item.id()) {
            return Err(StoreError::DuplicateId {
                kind: T::KIND,
                id: item.id().to_string(),
            });
        }

        let id = item.id().to_string();
        self.items.push(item);
        self.emit(Change::Added { id });
        Ok(())
    }

    /// Overlays `patch` onto the record with this id.
    ///
    /// ## Returns
    /// `true` if a record matched. An unknown id is a silent no-op and
    /// notifies nobody.
    pub fn update(&mut self, id: &str, patch: &T::Patch) -> bool {
        let mut matched = false;
        for item in self.items.iter_mut().filter(|item| item.id() == id) {
            *item = patch.merged(item);
            matched = true;
        }

        if matched {
            self.emit(Change::Updated { id: id.to_string() });
        }
        matched
    }

    /// Drops every record with this id.
    ///
    /// If the selection pointed at `id` it is cleared as part of the same
    /// operation.
    ///
    /// ## Returns
    /// The number of records removed (0 for an unknown id, which is a silent
    /// no-op).
    pub fn remove(&mut self, id: &str) -> usize {
        let before = self.items.len();
        self.items.retain(|item| item.id() != id);
        let count = before - self.items.len();

        if count == 0 {
            return 0;
        }

        let selection_cleared = self.selected.as_deref() == Some(id);
        if selection_cleared {
            self.selected = None;
        }

        self.emit(Change::Removed {
            id: id.to_string(),
            count,
            selection_cleared,
        });
        count
    }

    /// Sets or clears the selection.
    ///
    /// No existence check against the collection is performed. Selecting
    /// the record that is already selected notifies nobody.
    pub fn select(&mut self, item: Option<&T>) {
        self.select_id(item.map(|item| item.id()));
    }

    /// Sets or clears the selection by id.
    pub fn select_id(&mut self, id: Option<&str>) {
        if self.selected.as_deref() == id {
            return;
        }

        self.selected = id.map(str::to_string);
        self.emit(Change::SelectionChanged {
            id: self.selected.clone(),
        });
    }

    /// Sets the loading flag.
    pub fn set_loading(&mut self, is_loading: bool) {
        if self.status.is_loading != is_loading {
            self.status.is_loading = is_loading;
            self.emit(Change::StatusChanged);
        }
    }

    /// Sets or clears the error message.
    pub fn set_error(&mut self, error: Option<String>) {
        if self.status.error != error {
            self.status.error = error;
            self.emit(Change::StatusChanged);
        }
    }

    // =========================================================================
    // Reads
    // =========================================================================

    /// Returns the records in collection order.
    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Returns the first record with this id.
    pub fn get(&self, id: &str) -> Option<&T> {
        self.items.iter().find(|item| item.id() == id)
    }

    /// Returns the record with this id or `StoreError::NotFound`.
    pub fn get_required(&self, id: &str) -> StoreResult<&T> {
        self.get(id).ok_or_else(|| StoreError::NotFound {
            kind: T::KIND,
            id: id.to_string(),
        })
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Returns the first record matching `predicate`.
    pub fn find<P>(&self, mut predicate: P) -> Option<&T>
    where
        P: FnMut(&T) -> bool,
    {
        self.items.iter().find(|item| predicate(item))
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the selected record, resolved against the current collection.
    pub fn selected(&self) -> Option<&T> {
        self.selected.as_deref().and_then(|id| self.get(id))
    }

    /// Returns the raw selected id, whether or not it resolves.
    pub fn selected_id(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn has_selection(&self) -> bool {
        self.selected.is_some()
    }

    pub fn status(&self) -> &LoadStatus {
        &self.status
    }

    /// Number of observer-visible changes since construction.
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Copies the store state for the UI.
    pub fn snapshot(&self) -> StoreSnapshot<T> {
        StoreSnapshot {
            items: self.items.clone(),
            selected_id: self.selected.clone(),
            is_loading: self.status.is_loading,
            error: self.status.error.clone(),
            version: self.version,
        }
    }

    // =========================================================================
    // Observers
    // =========================================================================

    /// Registers a callback for every subsequent change.
    pub fn subscribe<F>(&mut self, observer: F) -> SubscriptionId
    where
        F: FnMut(&StoreEvent) + Send + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Removes a subscription. Returns false if it was not registered.
    pub fn unsubscribe(&mut self, subscription: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(id, _)| *id != subscription);
        self.observers.len() != before
    }

    pub fn subscriber_count(&self) -> usize {
        self.observers.len()
    }

    fn emit(&mut self, change: Change) {
        self.version += 1;
        let event = StoreEvent {
            kind: T::KIND,
            version: self.version,
            change,
        };

        for (_, observer) in self.observers.iter_mut() {
            observer(&event);
        }
    }
}

impl<T: Entity> Default for EntityStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Entity + std::fmt::Debug> std::fmt::Debug for EntityStore<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EntityStore")
            .field("kind", &T::KIND)
            .field("items", &self.items)
            .field("selected", &self.selected)
            .field("status", &self.status)
            .field("version", &self.version)
            .field("observers", &self.observers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[derive(Debug, Clone, PartialEq)]
    struct Item {
        id: String,
        name: String,
    }

    #[derive(Debug, Clone, Default, PartialEq)]
    struct ItemPatch {
        name: Option<String>,
    }

    impl Patch<Item> for ItemPatch {
        fn apply_to(&self, target: &mut Item) {
            if let Some(name) = &self.name {
                target.name = name.clone();
            }
        }

        fn is_empty(&self) -> bool {
            self.name.is_none()
        }
    }

    impl Entity for Item {
        const KIND: &'static str = "Item";
        type Patch = ItemPatch;

        fn id(&self) -> &str {
            &self.id
        }
    }

    fn item(id: &str, name: &str) -> Item {
        Item {
            id: id.to_string(),
            name: name.to_string(),
        }
    }

    fn rename(name: &str) -> ItemPatch {
        ItemPatch {
            name: Some(name.to_string()),
        }
    }

    fn seeded() -> EntityStore<Item> {
        EntityStore::with_items(vec![item("1", "A"), item("2", "B")])
    }

    fn recorder(store: &mut EntityStore<Item>) -> Arc<Mutex<Vec<StoreEvent>>> {
        let events = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&events);
        store.subscribe(move |event| sink.lock().unwrap().push(event.clone()));
        events
    }

    #[test]
    fn test_seeded_store_has_no_history() {
        let store = seeded();
        assert_eq!(store.len(), 2);
        assert_eq!(store.version(), 0);
        assert!(!store.has_selection());
        assert_eq!(store.status(), &LoadStatus::default());
    }

    #[test]
    fn test_scenario_update_remove_select() {
        let mut store = seeded();
        store.select(Some(&item("1", "A")));

        assert!(store.update("2", &rename("B2")));
        assert_eq!(store.items(), &[item("1", "A"), item("2", "B2")]);

        assert_eq!(store.remove("1"), 1);
        assert_eq!(store.items(), &[item("2", "B2")]);

        store.select(None);
        assert!(store.selected().is_none());
        assert!(!store.has_selection());
    }

    #[test]
    fn test_add_appends() {
        let mut store = seeded();
        store.add(item("3", "C")).unwrap();

        assert_eq!(store.len(), 3);
        assert_eq!(store.items().last(), Some(&item("3", "C")));
    }

    #[test]
    fn test_add_rejects_duplicate_id() {
        let mut store = seeded();
        let err = store.add(item("2", "Other")).unwrap_err();

        assert_eq!(
            err,
            StoreError::DuplicateId {
                kind: "Item",
                id: "2".to_string()
            }
        );
        assert_eq!(store.items(), &[item("1", "A"), item("2", "B")]);
        assert_eq!(store.version(), 0);
    }

    #[test]
    fn test_add_rejects_blank_id() {
        let mut store = seeded();
        assert!(matches!(
            store.add(item(" ", "Blank")),
            Err(StoreError::Validation(_))
        ));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_update_unknown_id_is_noop() {
        let mut store = seeded();
        let events = recorder(&mut store);

        assert!(!store.update("9", &rename("Z")));
        assert_eq!(store.items(), &[item("1", "A"), item("2", "B")]);
        assert!(events.lock().unwrap().is_empty());
    }

    #[test]
    fn test_remove_unknown_id_is_noop() {
        let mut store = seeded();
        let events = recorder(&mut store);

        assert_eq!(store.remove("9"), 0);
        assert_eq!(store.len(), 2);
        assert!(events.lock().unwrap().is_empty());
    }

    #[test]
    fn test_remove_clears_matching_selection() {
        let mut store = seeded();
        store.select_id(Some("2"));

        store.remove("1");
        assert_eq!(store.selected_id(), Some("2"));

        store.remove("2");
        assert_eq!(store.selected_id(), None);
    }

    #[test]
    fn test_selected_follows_updates() {
        let mut store = seeded();
        store.select_id(Some("1"));
        store.update("1", &rename("A2"));

        assert_eq!(store.selected(), Some(&item("1", "A2")));
    }

    #[test]
    fn test_select_unknown_id_does_not_resolve() {
        let mut store = seeded();
        store.select_id(Some("9"));

        assert!(store.has_selection());
        assert!(store.selected().is_none());
    }

    #[test]
    fn test_add_accepts_any_non_blank_id() {
        let mut store = seeded();
        store.set_all(vec![item("emp 001", "Spaced")]);
        assert_eq!(store.len(), 1);

        assert_eq!(store.remove("emp 001"), 1);
        store.add(item("emp 001", "Spaced")).unwrap();
        store.add(item(&"x".repeat(200), "Long")).unwrap();

        assert_eq!(store.len(), 2);
        assert!(store.contains("emp 001"));
    }

    #[test]
    fn test_set_all_clears_stale_selection() {
        let mut store = seeded();
        store.select_id(Some("1"));
        let events = recorder(&mut store);

        store.set_all(vec![item("1", "A"), item("3", "C")]);
        assert_eq!(store.selected_id(), Some("1"));

        store.set_all(vec![item("3", "C")]);
        assert_eq!(store.selected_id(), None);
        assert_eq!(store.items(), &[item("3", "C")]);

        let changes: Vec<Change> = events
            .lock()
            .unwrap()
            .iter()
            .map(|event| event.change.clone())
            .collect();
        assert_eq!(
            changes,
            vec![
                Change::Replaced {
                    len: 2,
                    selection_cleared: false,
                },
                Change::Replaced {
                    len: 1,
                    selection_cleared: true,
                },
            ]
        );
        assert_eq!(store.version(), 3);
    }

    #[test]
    fn test_observers_receive_one_event_per_change() {
        let mut store = seeded();
        let events = recorder(&mut store);

        store.add(item("3", "C")).unwrap();
        store.select_id(Some("3"));
        store.select_id(Some("3"));
        store.update("3", &rename("C2"));
        store.remove("3");

        let events = events.lock().unwrap();
        let changes: Vec<&Change> = events.iter().map(|e| &e.change).collect();
        assert_eq!(
            changes,
            vec![
                &Change::Added { id: "3".to_string() },
                &Change::SelectionChanged {
                    id: Some("3".to_string())
                },
                &Change::Updated { id: "3".to_string() },
                &Change::Removed {
                    id: "3".to_string(),
                    count: 1,
                    selection_cleared: true
                },
            ]
        );
        assert_eq!(events.last().map(|e| e.version), Some(4));
        assert!(events.iter().all(|e| e.kind == "Item"));
    }

    #[test]
    fn test_unsubscribe_stops_notifications() {
        let mut store = seeded();
        let count = Arc::new(Mutex::new(0));
        let sink = Arc::clone(&count);
        let subscription = store.subscribe(move |_| *sink.lock().unwrap() += 1);

        store.set_loading(true);
        assert!(store.unsubscribe(subscription));
        assert!(!store.unsubscribe(subscription));
        store.set_loading(false);

        assert_eq!(*count.lock().unwrap(), 1);
        assert_eq!(store.subscriber_count(), 0);
    }

    #[test]
    fn test_status_flags() {
        let mut store = seeded();
        store.set_loading(true);
        store.set_error(Some("offline".to_string()));

        assert!(store.status().is_loading);
        assert_eq!(store.status().error.as_deref(), Some("offline"));
        assert_eq!(store.version(), 2);

        // Same values are not a change
        store.set_loading(true);
        assert_eq!(store.version(), 2);
    }

    #[test]
    fn test_get_required() {
        let store = seeded();
        assert_eq!(store.get_required("1").unwrap(), &item("1", "A"));
        assert!(matches!(
            store.get_required("9"),
            Err(StoreError::NotFound { kind: "Item", .. })
        ));
    }

    #[test]
    fn test_snapshot() {
        let mut store = seeded();
        store.select_id(Some("2"));

        let snapshot = store.snapshot();
        assert_eq!(snapshot.items.len(), 2);
        assert_eq!(snapshot.selected_id.as_deref(), Some("2"));
        assert_eq!(snapshot.version, 1);
        assert!(!snapshot.is_loading);
    }
}
