use std::sync::Arc;

use log::trace;

use crate::context::Context;
use crate::dispatch::Phase;
use crate::entity::Entity;
use crate::error::HandlerError;

use super::{Handler, OnceGuard, PreCommitHandler};

/// A [`PreCommitHandler`] that schedules at most once per entity identity.
///
/// The guard is consulted and set atomically at scheduling time, not at
/// execution time, so repeat firings inside one open unit of work still
/// dedupe to a single deferred call. An already-marked pair is a silent
/// no-op, not an error.
///
/// The default constructor scopes the guard to this handler instance, which
/// means process lifetime for a long-lived dispatcher list. Pass a shared
/// guard via [`with_guard`] to choose a different scope.
///
/// [`with_guard`]: OneTimePreCommitHandler::with_guard
pub struct OneTimePreCommitHandler {
    inner: PreCommitHandler,
    guard: Arc<OnceGuard>,
}

impl OneTimePreCommitHandler {
    pub fn new(inner: Arc<dyn Handler>) -> Self {
        Self::with_guard(inner, Arc::new(OnceGuard::new()))
    }

    pub fn with_guard(inner: Arc<dyn Handler>, guard: Arc<OnceGuard>) -> Self {
        OneTimePreCommitHandler {
            inner: PreCommitHandler::new(inner),
            guard,
        }
    }

    pub fn with_phase(inner: Arc<dyn Handler>, phase: Phase, guard: Arc<OnceGuard>) -> Self {
        OneTimePreCommitHandler {
            inner: PreCommitHandler::with_phase(inner, phase),
            guard,
        }
    }

    pub fn guard(&self) -> &Arc<OnceGuard> {
        &self.guard
    }
}

impl Handler for OneTimePreCommitHandler {
    fn name(&self) -> &str {
        self.inner.name()
    }

    fn can_handle(&self, entity: &dyn Entity, context: &Context) -> bool {
        self.inner.can_handle(entity, context)
    }

    fn handle(&self, entity: &dyn Entity, context: &Context) -> Result<(), HandlerError> {
        if !self.guard.mark(self.name(), entity.identity()) {
            trace!(
                "handler {} already scheduled for entity {}, skipping",
                self.name(),
                entity.identity()
            );
            return Ok(());
        }
        self.inner.handle(entity, context)
    }

    fn phase(&self) -> Option<Phase> {
        self.inner.phase()
    }
}
