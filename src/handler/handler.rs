use crate::context::Context;
use crate::dispatch::Phase;
use crate::entity::Entity;
use crate::error::HandlerError;

/// An encapsulated side effect fired by the dispatch engine.
///
/// A handler is used two ways: wrapped by a dispatcher, whose predicate
/// gates firing; or standalone as its own dispatcher, in which case
/// [`can_handle`] is the predicate and [`phase`] names the lifecycle point.
///
/// [`can_handle`]: Handler::can_handle
/// [`phase`]: Handler::phase
pub trait Handler: Send + Sync {
    /// Stable name; used for one-time guards and error reporting.
    fn name(&self) -> &str;

    /// Self-gate consulted when the handler acts as its own dispatcher.
    fn can_handle(&self, _entity: &dyn Entity, _context: &Context) -> bool {
        true
    }

    /// Execute the side effect. The return value is ignored beyond error
    /// propagation.
    fn handle(&self, entity: &dyn Entity, context: &Context) -> Result<(), HandlerError>;

    /// Phase this handler binds to when used standalone as a dispatcher.
    fn phase(&self) -> Option<Phase> {
        None
    }
}
