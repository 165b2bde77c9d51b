use std::sync::Arc;

use crate::context::Context;
use crate::entity::{ChangedFields, Entity};
use crate::error::DispatchError;
use crate::handler::Handler;

use super::dispatcher::{execute, Dispatch, Phase};

/// A handler acting as its own dispatcher: `can_handle` is the predicate.
pub struct HandlerDispatcher {
    handler: Arc<dyn Handler>,
    phase: Phase,
}

impl HandlerDispatcher {
    pub fn new(handler: Arc<dyn Handler>, phase: Phase) -> Self {
        HandlerDispatcher { handler, phase }
    }

    /// Bind to the phase the handler itself declares.
    pub fn from_handler(handler: Arc<dyn Handler>) -> Result<Self, DispatchError> {
        let phase = handler.phase().ok_or_else(|| {
            DispatchError::MisconfiguredDispatcher(format!(
                "handler {} declares no phase",
                handler.name()
            ))
        })?;
        Ok(HandlerDispatcher { handler, phase })
    }
}

impl Dispatch for HandlerDispatcher {
    fn phase(&self) -> Phase {
        self.phase
    }

    fn evaluate(
        &self,
        entity: &dyn Entity,
        _changed: &ChangedFields,
        context: &Context,
    ) -> Result<bool, DispatchError> {
        Ok(self.handler.can_handle(entity, context))
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
