use std::sync::Arc;

use crate::context::Context;
use crate::entity::{ChangedFields, Entity};
use crate::error::DispatchError;
use crate::handler::Handler;

use super::dispatcher::{execute, Dispatch, Phase};

/// Fires when a named boolean computed attribute on the entity is true.
pub struct PropertyDispatcher {
    handler: Arc<dyn Handler>,
    property: String,
    phase: Phase,
}

impl PropertyDispatcher {
    pub fn new(handler: Arc<dyn Handler>, property: impl Into<String>, phase: Phase) -> Self {
        PropertyDispatcher {
            handler,
            property: property.into(),
            phase,
        }
    }

    pub fn property(&self) -> &str {
        &self.property
    }
}

impl Dispatch for PropertyDispatcher {
    fn phase(&self) -> Phase {
        self.phase
    }

    fn evaluate(
        &self,
        entity: &dyn Entity,
        _changed: &ChangedFields,
        _context: &Context,
    ) -> Result<bool, DispatchError> {
        entity
            .property(&self.property)
            .ok_or_else(|| DispatchError::PredicateEvaluation {
                dispatcher: format!("property:{}", self.property),
                detail: format!(
                    "entity {} defines no property {}",
                    entity.identity(),
                    self.property
                ),
            })
    }

    fn invoke(
        &self,
        entity: &dyn Entity,
        _changed: &ChangedFields,
        context: &Context,
    ) -> Result<(), DispatchError> {
        execute(self.handler.as_ref(), entity, context)
    }
}
