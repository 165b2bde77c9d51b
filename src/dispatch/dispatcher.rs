use std::fmt;

use serde::{Deserialize, Serialize};

use crate::context::Context;
use crate::entity::{ChangedFields, Entity};
use crate::error::DispatchError;
use crate::handler::Handler;

/// Lifecycle phase a dispatcher is bound to, relative to the persistence
/// write.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    Pre,
    Post,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::Pre => write!(f, "pre"),
            Phase::Post => write!(f, "post"),
        }
    }
}

/// A predicate-gated binding between an entity save and a handler.
///
/// [`fire`] is the only entry point the orchestrator calls; [`evaluate`] and
/// [`invoke`] are exposed separately so variants stay composable and each
/// half can be tested on its own. `evaluate` must be pure; `invoke` is only
/// ever called after `evaluate` returned true.
///
/// [`fire`]: Dispatch::fire
/// [`evaluate`]: Dispatch::evaluate
/// [`invoke`]: Dispatch::invoke
pub trait Dispatch: Send + Sync {
    /// The single phase this dispatcher fires in.
    fn phase(&self) -> Phase;

    /// Should this dispatcher fire for the current save? No side effects.
    fn evaluate(
        &self,
        entity: &dyn Entity,
        changed: &ChangedFields,
        context: &Context,
    ) -> Result<bool, DispatchError>;

    /// Run the handler.
    fn invoke(
        &self,
        entity: &dyn Entity,
        changed: &ChangedFields,
        context: &Context,
    ) -> Result<(), DispatchError>;

    /// Evaluate, then invoke iff the predicate holds.
    fn fire(
        &self,
        entity: &dyn Entity,
        changed: &ChangedFields,
        context: &Context,
    ) -> Result<(), DispatchError> {
        if self.evaluate(entity, changed, context)? {
            self.invoke(entity, changed, context)
        } else {
            Ok(())
        }
    }
}

/// Run a handler, wrapping its failure with the handler's name.
pub(crate) fn execute(
    handler: &dyn Handler,
    entity: &dyn Entity,
    context: &Context,
) -> Result<(), DispatchError> {
    handler
        .handle(entity, context)
        .map_err(|err| DispatchError::HandlerExecution {
            handler: handler.name().to_string(),
            message: err.to_string(),
        })
}
