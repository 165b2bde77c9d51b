use std::sync::Arc;

use log::trace;

use crate::context::Context;
use crate::dispatch::Phase;
use crate::entity::Entity;
use crate::error::HandlerError;

use super::Handler;

/// Decorator that defers the inner handler until the open unit of work
/// commits.
///
/// Firing clones the entity state and the context kwargs into a deferred
/// call record registered on the unit of work's success path; the deferred
/// call sees that snapshot even if the live entity mutates before the commit
/// resolves. A failed or rolled-back unit of work discards the record
/// unexecuted.
///
/// When no unit of work is open at firing time the inner handler runs
/// immediately and synchronously. Defaults to the post phase: side effects
/// with external visibility should follow durable persistence.
pub struct PreCommitHandler {
    inner: Arc<dyn Handler>,
    phase: Phase,
}

impl PreCommitHandler {
    pub fn new(inner: Arc<dyn Handler>) -> Self {
        PreCommitHandler {
            inner,
            phase: Phase::Post,
        }
    }

    pub fn with_phase(inner: Arc<dyn Handler>, phase: Phase) -> Self {
        PreCommitHandler { inner, phase }
    }

    pub fn inner(&self) -> &Arc<dyn Handler> {
        &self.inner
    }
}

impl Handler for PreCommitHandler {
    fn name(&self) -> &str {
        self.inner.name()
    }

    fn can_handle(&self, entity: &dyn Entity, context: &Context) -> bool {
        self.inner.can_handle(entity, context)
    }

    fn handle(&self, entity: &dyn Entity, context: &Context) -> Result<(), HandlerError> {
        match context.unit_of_work().filter(|uow| uow.is_open()) {
            Some(unit_of_work) => {
                let handler = Arc::clone(&self.inner);
                let state = entity.state().clone();
                let captured = context.captured();
                trace!(
                    "deferring handler {} for entity {} until commit",
                    handler.name(),
                    state.identity()
                );
                unit_of_work.register_on_success(Box::new(move || {
                    crate::dispatch::execute(handler.as_ref(), &state, &captured)
                }));
                Ok(())
            }
            None => {
                trace!(
                    "no open unit of work, running handler {} immediately",
                    self.inner.name()
                );
                self.inner.handle(entity, context)
            }
        }
    }

    fn phase(&self) -> Option<Phase> {
        Some(self.phase)
    }
}
