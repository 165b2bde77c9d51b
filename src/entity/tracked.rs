use super::{ChangedFields, Entity, EntityState, FieldValue};

/// An [`EntityState`] that records which fields changed since the last save.
///
/// The orchestrator expects the host to supply the changed-fields set with
/// each save; hosts that do not track this themselves can write through a
/// `TrackedState` and hand its set over. A field is marked changed when a
/// write stores a different value; writing the original value back does not
/// unmark it.
#[derive(Clone, Debug, Default)]
pub struct TrackedState {
    state: EntityState,
    changed: ChangedFields,
}

impl TrackedState {
    pub fn new(identity: impl Into<String>) -> Self {
        TrackedState {
            state: EntityState::new(identity),
            changed: ChangedFields::new(),
        }
    }

    /// Adopt an existing state with no pending changes.
    pub fn from_state(state: EntityState) -> Self {
        TrackedState {
            state,
            changed: ChangedFields::new(),
        }
    }

    /// Write a field, marking it changed when the stored value differs.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<FieldValue>) {
        let name = name.into();
        let value = value.into();
        if self.state.get(&name) != Some(&value) {
            self.changed.insert(name.clone());
        }
        self.state.set(name, value);
    }

    pub fn changed_fields(&self) -> &ChangedFields {
        &self.changed
    }

    /// Clear the changed set; call after the persistence write succeeds.
    pub fn mark_saved(&mut self) {
        self.changed.clear();
    }
}

impl Entity for TrackedState {
    fn state(&self) -> &EntityState {
        &self.state
    }
}
