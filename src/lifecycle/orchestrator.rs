use std::sync::Arc;

use log::trace;

use crate::context::Context;
use crate::dispatch::{Dispatch, Phase};
use crate::entity::{ChangedFields, Entity};
use crate::error::DispatchError;

/// Ordered dispatcher list declared for an entity type, in firing order.
///
/// The save sequence asks the orchestrator to construct itself from this,
/// typically via [`Orchestrator::of`].
pub trait Dispatchable {
    fn dispatchers() -> Vec<Arc<dyn Dispatch>>;
}

/// Owns the ordered dispatcher list for an entity type and fires each phase
/// in declaration order.
///
/// The host save sequence calls [`run_pre_phase`] immediately after its
/// internal pre-save step and [`run_post_phase`] immediately after its
/// internal post-save step. Every phase-matching dispatcher is evaluated on
/// every save, whether or not earlier dispatchers fired; the first error
/// aborts the rest of the phase and fails the save.
///
/// [`run_pre_phase`]: Orchestrator::run_pre_phase
/// [`run_post_phase`]: Orchestrator::run_post_phase
#[derive(Default)]
pub struct Orchestrator {
    dispatchers: Vec<Arc<dyn Dispatch>>,
}

impl Orchestrator {
    pub fn new() -> Self {
        Orchestrator::default()
    }

    /// Build from an entity type's declared dispatcher list.
    pub fn of<T: Dispatchable>() -> Self {
        Orchestrator {
            dispatchers: T::dispatchers(),
        }
    }

    /// Append a dispatcher, preserving declaration order.
    pub fn register(&mut self, dispatcher: Arc<dyn Dispatch>) {
        self.dispatchers.push(dispatcher);
    }

    /// Builder-style registration.
    pub fn with(mut self, dispatcher: Arc<dyn Dispatch>) -> Self {
        self.register(dispatcher);
        self
    }

    pub fn len(&self) -> usize {
        self.dispatchers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dispatchers.is_empty()
    }

    pub fn run_pre_phase(
        &self,
        entity: &dyn Entity,
        changed: &ChangedFields,
        context: &Context,
    ) -> Result<(), DispatchError> {
        self.run_phase(Phase::Pre, entity, changed, context)
    }

    pub fn run_post_phase(
        &self,
        entity: &dyn Entity,
        changed: &ChangedFields,
        context: &Context,
    ) -> Result<(), DispatchError> {
        self.run_phase(Phase::Post, entity, changed, context)
    }

    fn run_phase(
        &self,
        phase: Phase,
        entity: &dyn Entity,
        changed: &ChangedFields,
        context: &Context,
    ) -> Result<(), DispatchError> {
        for dispatcher in self.dispatchers.iter().filter(|d| d.phase() == phase) {
            trace!("{} phase for entity {}: firing dispatcher", phase, entity.identity());
            dispatcher.fire(entity, changed, context)?;
        }
        Ok(())
    }

    /// Drive a full save sequence: pre phase, persistence write, post phase.
    ///
    /// The persistence write is the host's closure; its error type only has
    /// to absorb [`DispatchError`].
    pub fn save<F, E>(
        &self,
        entity: &dyn Entity,
        changed: &ChangedFields,
        context: &Context,
        persist: F,
    ) -> Result<(), E>
    where
        F: FnOnce() -> Result<(), E>,
        E: From<DispatchError>,
    {
        self.run_pre_phase(entity, changed, context).map_err(E::from)?;
        persist()?;
        self.run_post_phase(entity, changed, context).map_err(E::from)
    }
}
