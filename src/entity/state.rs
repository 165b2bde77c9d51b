use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{Entity, FieldValue};

/// Owned snapshot of an entity's identity and scalar fields.
///
/// This is the capture format for deferred call records: a pre-commit
/// handler clones the state at scheduling time, so the deferred call sees
/// the values as they were when the dispatcher fired, not a live reference
/// that could mutate before the commit resolves.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct EntityState {
    identity: String,
    fields: BTreeMap<String, FieldValue>,
}

impl EntityState {
    pub fn new(identity: impl Into<String>) -> Self {
        EntityState {
            identity: identity.into(),
            fields: BTreeMap::new(),
        }
    }

    pub fn identity(&self) -> &str {
        &self.identity
    }

    pub fn set_identity(&mut self, identity: impl Into<String>) {
        self.identity = identity.into();
    }

    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.fields.get(name)
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<FieldValue>) {
        self.fields.insert(name.into(), value.into());
    }

    /// Builder-style field assignment, for declaring fixtures and defaults.
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.set(name, value);
        self
    }

    pub fn has_field(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }
}

impl Entity for EntityState {
    fn state(&self) -> &EntityState {
        self
    }
}
