use std::collections::HashSet;

use super::{EntityState, FieldValue};

/// Set of field names whose value differs from the last persisted state.
/// Supplied by the persistence layer alongside each save.
pub type ChangedFields = HashSet<String>;

/// Read contract the dispatch engine requires from a persisted entity.
///
/// The persistence layer owns the entity; the engine only reads it. Every
/// entity is backed by an [`EntityState`] snapshot, which is also what a
/// pre-commit handler captures when it schedules a deferred call.
pub trait Entity: Send + Sync {
    /// Owned snapshot backing this entity.
    fn state(&self) -> &EntityState;

    /// Stable identity of this instance.
    fn identity(&self) -> &str {
        self.state().identity()
    }

    /// Current value of the named field, if the field exists.
    fn field(&self, name: &str) -> Option<FieldValue> {
        self.state().get(name).cloned()
    }

    /// Named boolean computed attribute; `None` when the entity does not
    /// define one by that name.
    fn property(&self, _name: &str) -> Option<bool> {
        None
    }
}
