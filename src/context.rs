use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use crate::unit_of_work::UnitOfWork;

/// Ambient call context threaded through a save: captured keyword arguments
/// plus a handle to the currently open unit of work, if any.
///
/// Pre-commit handlers capture the kwargs into their deferred call record;
/// the unit-of-work handle itself is never captured, so a deferred call can
/// not register further deferred calls through it.
#[derive(Clone, Default)]
pub struct Context {
    values: BTreeMap<String, Value>,
    unit_of_work: Option<Arc<dyn UnitOfWork>>,
}

impl Context {
    pub fn new() -> Self {
        Context::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.values.insert(key.into(), value.into());
    }

    /// Builder-style kwarg assignment.
    pub fn with_value(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    /// Attach the open unit of work for this save.
    pub fn with_unit_of_work(mut self, unit_of_work: Arc<dyn UnitOfWork>) -> Self {
        self.unit_of_work = Some(unit_of_work);
        self
    }

    pub fn unit_of_work(&self) -> Option<&Arc<dyn UnitOfWork>> {
        self.unit_of_work.as_ref()
    }

    /// Clone of the kwargs only, for storing in a deferred call record.
    pub fn captured(&self) -> Context {
        Context {
            values: self.values.clone(),
            unit_of_work: None,
        }
    }
}

impl fmt::Debug for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Context")
            .field("values", &self.values)
            .field("unit_of_work", &self.unit_of_work.is_some())
            .finish()
    }
}
