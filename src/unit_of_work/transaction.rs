use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use log::{debug, trace};

use crate::error::DispatchError;

use super::{SuccessCallback, UnitOfWork};

/// In-memory unit of work.
///
/// Stands in for the host's transaction where none exists (tests, simple
/// embedders): open on creation, resolved exactly once by [`commit`] or
/// [`rollback`]. Success callbacks run in registration order on the thread
/// that commits; rollback discards them unexecuted.
///
/// [`commit`]: Transaction::commit
/// [`rollback`]: Transaction::rollback
pub struct Transaction {
    open: AtomicBool,
    on_success: Mutex<Vec<SuccessCallback>>,
}

impl Transaction {
    pub fn new() -> Self {
        Transaction {
            open: AtomicBool::new(true),
            on_success: Mutex::new(Vec::new()),
        }
    }

    /// Open a transaction behind an `Arc`, ready to hand to a [`Context`].
    ///
    /// [`Context`]: crate::Context
    pub fn begin() -> Arc<Self> {
        Arc::new(Transaction::new())
    }

    /// Number of callbacks queued and not yet resolved.
    pub fn pending(&self) -> usize {
        self.callbacks().len()
    }

    /// Resolve successfully: close, then run queued callbacks in order.
    ///
    /// The transaction is closed before the first callback runs, so the data
    /// this unit of work guarded is already considered durable; a callback
    /// error propagates to the caller but cannot roll it back. The first
    /// error aborts the remaining callbacks. Committing twice is a no-op.
    pub fn commit(&self) -> Result<(), DispatchError> {
        if !self.open.swap(false, Ordering::SeqCst) {
            return Ok(());
        }

        let callbacks: Vec<SuccessCallback> = self.callbacks().drain(..).collect();
        debug!("unit of work committed, resolving {} deferred call(s)", callbacks.len());
        for callback in callbacks {
            callback()?;
        }
        Ok(())
    }

    /// Resolve unsuccessfully: close and discard queued callbacks unexecuted.
    pub fn rollback(&self) {
        if !self.open.swap(false, Ordering::SeqCst) {
            return;
        }

        let discarded = self.callbacks().drain(..).count();
        debug!("unit of work rolled back, discarded {} deferred call(s)", discarded);
    }

    fn callbacks(&self) -> std::sync::MutexGuard<'_, Vec<SuccessCallback>> {
        self.on_success.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl UnitOfWork for Transaction {
    fn is_open(&self) -> bool {
        self.open.load(Ordering::SeqCst)
    }

    fn register_on_success(&self, callback: SuccessCallback) {
        // Registrations on a resolved (or resolving) unit of work are dropped.
        if !self.is_open() {
            trace!("dropping success callback registered on a resolved unit of work");
            return;
        }
        self.callbacks().push(callback);
    }
}
