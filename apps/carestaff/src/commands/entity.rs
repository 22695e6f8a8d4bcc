//! # Collection Commands
//!
//! The CRUD commands every record screen uses, written once for any
//! `Entity`. Each mutation returns the store's new snapshot so the screen
//! can re-render from a single response.
//!
//! ## Screen Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Record Screen Lifecycle                              │
//! │                                                                         │
//! │  ┌──────────┐     ┌──────────┐     ┌──────────┐     ┌──────────┐       │
//! │  │  List    │────►│  Detail  │────►│  Edit    │────►│  Saved   │       │
//! │  │  view    │     │  dialog  │     │  form    │     │          │       │
//! │  └──────────┘     └──────────┘     └──────────┘     └──────────┘       │
//! │       │                │                │                │              │
//! │     list            select           update           list             │
//! │     add / create    clear_selection  remove                            │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use carestaff_core::{new_id, Entity, StoreSnapshot};
use tracing::debug;

use crate::error::ApiResult;
use crate::state::StoreState;

/// Returns the current collection, selection and status.
pub fn list<T: Entity>(store: &StoreState<T>) -> StoreSnapshot<T> {
    debug!(kind = T::KIND, "list command");
    store.snapshot()
}

/// Returns one record.
///
/// ## Errors
/// `NOT_FOUND` if no record has this id.
pub fn get<T: Entity>(store: &StoreState<T>, id: &str) -> ApiResult<T> {
    debug!(kind = T::KIND, id = %id, "get command");
    let item = store.with_store(|s| s.get_required(id).cloned())?;
    Ok(item)
}

/// Appends a record supplied with its own id.
///
/// ## Errors
/// - `CONFLICT` if the id is taken
/// - `VALIDATION_ERROR` if the id is empty or blank
pub fn add<T: Entity>(store: &StoreState<T>, item: T) -> ApiResult<StoreSnapshot<T>> {
    debug!(kind = T::KIND, id = %item.id(), "add command");
    store.with_store_mut(|s| {
        s.add(item)?;
        Ok(s.snapshot())
    })
}

/// Mints a fresh id, builds the record with it and appends it.
///
/// ## Usage
/// ```rust,ignore
/// let cert = commands::entity::create(&state.certificates, |id| Certificate { id, ..form })?;
/// ```
pub fn create<T, F>(store: &StoreState<T>, build: F) -> ApiResult<T>
where
    T: Entity,
    F: FnOnce(String) -> T,
{
    let item = build(new_id());
    debug!(kind = T::KIND, id = %item.id(), "create command");

    store.with_store_mut(|s| {
        s.add(item.clone())?;
        Ok(item)
    })
}

/// Overlays `patch` onto the record with this id.
///
/// An unknown id changes nothing; the unchanged snapshot is returned.
pub fn update<T: Entity>(store: &StoreState<T>, id: &str, patch: &T::Patch) -> StoreSnapshot<T> {
    debug!(kind = T::KIND, id = %id, "update command");
    store.with_store_mut(|s| {
        if !s.update(id, patch) {
            debug!(kind = T::KIND, id = %id, "update matched no record");
        }
        s.snapshot()
    })
}

/// Removes the record with this id, clearing the selection if it pointed
/// there. An unknown id changes nothing.
pub fn remove<T: Entity>(store: &StoreState<T>, id: &str) -> StoreSnapshot<T> {
    debug!(kind = T::KIND, id = %id, "remove command");
    store.with_store_mut(|s| {
        if s.remove(id) == 0 {
            debug!(kind = T::KIND, id = %id, "remove matched no record");
        }
        s.snapshot()
    })
}

/// Selects the record with this id (or clears the selection for `None`).
pub fn select<T: Entity>(store: &StoreState<T>, id: Option<&str>) -> StoreSnapshot<T> {
    debug!(kind = T::KIND, id = ?id, "select command");
    store.with_store_mut(|s| {
        s.select_id(id);
        s.snapshot()
    })
}

pub fn clear_selection<T: Entity>(store: &StoreState<T>) -> StoreSnapshot<T> {
    select(store, None)
}

/// Replaces the whole collection.
pub fn replace_all<T: Entity>(store: &StoreState<T>, items: Vec<T>) -> StoreSnapshot<T> {
    debug!(kind = T::KIND, count = items.len(), "replace_all command");
    store.with_store_mut(|s| {
        s.set_all(items);
        s.snapshot()
    })
}

pub fn set_loading<T: Entity>(store: &StoreState<T>, is_loading: bool) -> StoreSnapshot<T> {
    debug!(kind = T::KIND, is_loading, "set_loading command");
    store.with_store_mut(|s| {
        s.set_loading(is_loading);
        s.snapshot()
    })
}

pub fn set_error<T: Entity>(store: &StoreState<T>, error: Option<String>) -> StoreSnapshot<T> {
    debug!(kind = T::KIND, error = ?error, "set_error command");
    store.with_store_mut(|s| {
        s.set_error(error);
        s.snapshot()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use crate::state::AppState;
    use carestaff_core::patch::CertificatePatch;
    use carestaff_core::Certificate;

    fn certificate(id: &str) -> Certificate {
        let mut cert = carestaff_core::seed::certificates().remove(0);
        cert.id = id.to_string();
        cert
    }

    #[test]
    fn test_add_and_get() {
        let state = AppState::seeded();
        let snapshot = add(&state.certificates, certificate("cert-100")).unwrap();

        assert_eq!(snapshot.items.last().map(|c| c.id.as_str()), Some("cert-100"));
        assert_eq!(get(&state.certificates, "cert-100").unwrap().id, "cert-100");
    }

    #[test]
    fn test_add_duplicate_is_conflict() {
        let state = AppState::seeded();
        let err = add(&state.certificates, certificate("cert-001")).unwrap_err();
        assert_eq!(err.code, ErrorCode::Conflict);
    }

    #[test]
    fn test_get_missing_is_not_found() {
        let state = AppState::seeded();
        let err = get(&state.employees, "emp-404").unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
        assert_eq!(err.message, "Employee not found: emp-404");
    }

    #[test]
    fn test_create_mints_id() {
        let state = AppState::empty();
        let created = create(&state.certificates, |id| Certificate {
            id,
            ..certificate("ignored")
        })
        .unwrap();

        assert_ne!(created.id, "ignored");
        assert_eq!(list(&state.certificates).items, vec![created]);
    }

    #[test]
    fn test_update_and_remove_unknown_ids_are_silent() {
        let state = AppState::seeded();
        let before = list(&state.certificates);

        let after_update = update(&state.certificates, "cert-404", &CertificatePatch::default());
        let after_remove = remove(&state.certificates, "cert-404");

        assert_eq!(after_update, before);
        assert_eq!(after_remove, before);
    }

    #[test]
    fn test_update_patches_record() {
        let state = AppState::seeded();
        let patch = CertificatePatch {
            expires_on: Some(None),
            ..Default::default()
        };

        update(&state.certificates, "cert-001", &patch);
        assert_eq!(get(&state.certificates, "cert-001").unwrap().expires_on, None);
    }

    #[test]
    fn test_remove_selected_clears_selection() {
        let state = AppState::seeded();
        select(&state.employees, Some("emp-002"));

        let snapshot = remove(&state.employees, "emp-002");
        assert_eq!(snapshot.selected_id, None);
        assert!(snapshot.items.iter().all(|e| e.id != "emp-002"));
    }

    #[test]
    fn test_selection_and_status() {
        let state = AppState::seeded();

        let snapshot = select(&state.trainings, Some("train-003"));
        assert_eq!(snapshot.selected_id.as_deref(), Some("train-003"));

        let snapshot = clear_selection(&state.trainings);
        assert_eq!(snapshot.selected_id, None);

        let snapshot = set_loading(&state.trainings, true);
        assert!(snapshot.is_loading);

        let snapshot = set_error(&state.trainings, Some("timeout".to_string()));
        assert_eq!(snapshot.error.as_deref(), Some("timeout"));
    }

    #[test]
    fn test_replace_all() {
        let state = AppState::seeded();
        let snapshot = replace_all(&state.certificates, vec![certificate("cert-900")]);

        assert_eq!(snapshot.items.len(), 1);
        assert_eq!(snapshot.items[0].id, "cert-900");
    }
}
