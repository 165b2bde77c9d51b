use crate::error::DispatchError;

/// Callback queued for execution when a unit of work reports success.
pub type SuccessCallback = Box<dyn FnOnce() -> Result<(), DispatchError> + Send>;

/// Narrow view of the host's transactional scope.
///
/// The dispatch engine only needs to know whether a unit of work is open and
/// how to queue work onto its success path; opening, committing, and rolling
/// back belong to the host.
///
/// # Usage constraint
///
/// A success callback must not register further callbacks through the same
/// unit of work: the queue is drained while resolving, and registrations
/// made mid-resolution are silently dropped.
pub trait UnitOfWork: Send + Sync {
    /// Whether this unit of work is still open for registrations.
    fn is_open(&self) -> bool;

    /// Queue a callback to run if and when this unit of work succeeds.
    fn register_on_success(&self, callback: SuccessCallback);
}
