//! Single-slot, non-blocking guard used by guarded machines.

use std::sync::atomic::{AtomicBool, Ordering};

/// A mutex that never waits.
///
/// [`TriggerGuard::try_acquire`] either takes the only slot or returns
/// `None` immediately. The slot is not reentrant: a holder that tries to
/// acquire again is refused like any other caller.
#[derive(Debug, Default)]
pub struct TriggerGuard {
    held: AtomicBool,
}

impl TriggerGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take the slot if it is free.
    pub fn try_acquire(&self) -> Option<GuardPermit<'_>> {
        self.held
            .compare_exchange(false, true, Ordering::Acquire, Ordering::Relaxed)
            .ok()
            .map(|_| GuardPermit { guard: self })
    }

    pub fn is_held(&self) -> bool {
        self.held.load(Ordering::Acquire)
    }
}

/// Proof of holding the slot. Releases it on drop.
#[derive(Debug)]
#[must_use = "the guard slot is released as soon as the permit is dropped"]
pub struct GuardPermit<'a> {
    guard: &'a TriggerGuard,
}

impl Drop for GuardPermit<'_> {
    fn drop(&mut self) {
        self.guard.held.store(false, Ordering::Release);
    }
}
