//! # Entity Traits
//!
//! The two traits that let one generic store hold every record kind.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Entity / Patch Pairing                               │
//! │                                                                         │
//! │   Employee ───────────► EmployeePatch                                   │
//! │   Certificate ────────► CertificatePatch                                │
//! │   TrainingRecord ─────► TrainingPatch                                   │
//! │   VaccinationRecord ──► VaccinationPatch                                │
//! │   Profile ────────────► ProfilePatch                                    │
//! │   JobDescription ─────► JobDescriptionPatch                             │
//! │                                                                         │
//! │   EntityStore<T: Entity>::update(id, &T::Patch)                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

/// A record that can live in an [`EntityStore`](crate::store::EntityStore).
///
/// ## Contract
/// - `id()` is stable for the lifetime of the record
/// - Patches never change the id
pub trait Entity: Clone {
    /// Human-readable kind used in logs and error messages ("Employee").
    const KIND: &'static str;

    /// Partial update type applied by `EntityStore::update`.
    type Patch: Patch<Self>;

    /// Returns the unique identifier of this record.
    fn id(&self) -> &str;
}

/// A partial set of field updates for a record of type `T`.
pub trait Patch<T> {
    /// Overlays every present field of the patch onto `target`.
    ///
    /// Absent fields leave the target untouched (shallow merge).
    fn apply_to(&self, target: &mut T);

    /// Returns true if the patch carries no fields.
    fn is_empty(&self) -> bool;

    /// Returns a new value equal to `base` with the patch overlaid.
    fn merged(&self, base: &T) -> T
    where
        T: Clone,
    {
        let mut next = base.clone();
        self.apply_to(&mut next);
        next
    }
}
