use std::collections::HashSet;
use std::sync::{Mutex, PoisonError};

/// Keyed check-and-set store backing one-time pre-commit handlers.
///
/// Keys are (handler name, entity identity) pairs. The guard's scope is the
/// lifetime of the value itself: share one guard to widen the dedupe scope
/// across handlers or transactions, construct a fresh one to narrow it.
#[derive(Debug, Default)]
pub struct OnceGuard {
    seen: Mutex<HashSet<(String, String)>>,
}

impl OnceGuard {
    pub fn new() -> Self {
        OnceGuard::default()
    }

    /// Atomically mark the pair; returns true when this call set the mark,
    /// false when it was already marked.
    pub fn mark(&self, handler: &str, entity: &str) -> bool {
        self.seen_mut()
            .insert((handler.to_string(), entity.to_string()))
    }

    pub fn is_marked(&self, handler: &str, entity: &str) -> bool {
        self.seen_mut()
            .contains(&(handler.to_string(), entity.to_string()))
    }

    /// Drop the mark for one pair, allowing it to be scheduled again.
    pub fn forget(&self, handler: &str, entity: &str) {
        self.seen_mut()
            .remove(&(handler.to_string(), entity.to_string()));
    }

    /// Reset the guard entirely.
    pub fn clear(&self) {
        self.seen_mut().clear();
    }

    pub fn len(&self) -> usize {
        self.seen_mut().len()
    }

    pub fn is_empty(&self) -> bool {
        self.seen_mut().is_empty()
    }

    fn seen_mut(&self) -> std::sync::MutexGuard<'_, HashSet<(String, String)>> {
        self.seen.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn first_mark_wins() {
        let guard = OnceGuard::new();
        assert!(guard.mark("send_email", "order-1"));
        assert!(!guard.mark("send_email", "order-1"));
        assert!(guard.is_marked("send_email", "order-1"));
    }

    #[test]
    fn pairs_are_independent() {
        let guard = OnceGuard::new();
        guard.mark("send_email", "order-1");

        assert!(guard.mark("send_email", "order-2"));
        assert!(guard.mark("notify_ops", "order-1"));
        assert_eq!(guard.len(), 3);
    }

    #[test]
    fn forget_and_clear() {
        let guard = OnceGuard::new();
        guard.mark("send_email", "order-1");
        guard.forget("send_email", "order-1");
        assert!(guard.mark("send_email", "order-1"));

        guard.clear();
        assert!(guard.is_empty());
    }

    #[test]
    fn concurrent_marks_admit_exactly_one() {
        let guard = Arc::new(OnceGuard::new());
        let wins = Arc::new(AtomicUsize::new(0));

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let guard = Arc::clone(&guard);
                let wins = Arc::clone(&wins);
                thread::spawn(move || {
                    if guard.mark("send_email", "order-1") {
                        wins.fetch_add(1, Ordering::SeqCst);
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }
        assert_eq!(wins.load(Ordering::SeqCst), 1);
    }
}
