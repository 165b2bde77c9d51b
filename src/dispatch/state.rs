use std::sync::Arc;

use crate::context::Context;
use crate::entity::{ChangedFields, Entity, FieldValue};
use crate::error::DispatchError;
use crate::handler::Handler;

use super::dispatcher::{execute, Dispatch, Phase};

/// Fires on a state transition: the monitored field must appear in the
/// changed set AND hold the target value for this save.
///
/// A save where the field already sat at the target and was not touched does
/// not fire; reaching the value is the trigger, holding it is not.
pub struct StateDispatcher {
    handler: Arc<dyn Handler>,
    field: String,
    target: FieldValue,
    phase: Phase,
}

impl StateDispatcher {
    pub fn new(
        handler: Arc<dyn Handler>,
        field: impl Into<String>,
        target: impl Into<FieldValue>,
        phase: Phase,
    ) -> Self {
        StateDispatcher {
            handler,
            field: field.into(),
            target: target.into(),
            phase,
        }
    }

    /// Like [`new`], but validates the target against the field's declared
    /// value domain. The domain plays no part in the predicate itself.
    ///
    /// [`new`]: StateDispatcher::new
    pub fn with_domain(
        handler: Arc<dyn Handler>,
        field: impl Into<String>,
        target: impl Into<FieldValue>,
        domain: &[FieldValue],
        phase: Phase,
    ) -> Result<Self, DispatchError> {
        let field = field.into();
        let target = target.into();
        if !domain.contains(&target) {
            return Err(DispatchError::MisconfiguredDispatcher(format!(
                "target value {} is outside the declared domain of field {}",
                target, field
            )));
        }
        Ok(StateDispatcher {
            handler,
            field,
            target,
            phase,
        })
    }

    pub fn field(&self) -> &str {
        &self.field
    }

    pub fn target(&self) -> &FieldValue {
        &self.target
    }
}

impl Dispatch for StateDispatcher {
    fn phase(&self) -> Phase {
        self.phase
    }

    fn evaluate(
        &self,
        entity: &dyn Entity,
        changed: &ChangedFields,
        _context: &Context,
    ) -> Result<bool, DispatchError> {
        let current =
            entity
                .field(&self.field)
                .ok_or_else(|| DispatchError::PredicateEvaluation {
                    dispatcher: format!("state:{}", self.field),
                    detail: format!(
                        "entity {} has no field {}",
                        entity.identity(),
                        self.field
                    ),
                })?;
        Ok(changed.contains(&self.field) && current == self.target)
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
