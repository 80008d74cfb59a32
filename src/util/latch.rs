use std::sync::atomic::{AtomicBool, Ordering};

/// A one-way switch that stops all instrumentation once something goes wrong in the hook.
///
/// The latch starts open. [`DisableLatch::trip`] closes it, and nothing opens it again
/// for the lifetime of the owning observer.
#[derive(Debug, Default)]
pub struct DisableLatch {
    tripped: AtomicBool,
}

impl DisableLatch {
    /// Create an open latch.
    pub const fn new() -> Self {
        Self {
            tripped: AtomicBool::new(false),
        }
    }

    /// Has the latch been tripped?
    pub fn is_tripped(&self) -> bool {
        self.tripped.load(Ordering::Acquire)
    }

    /// Trip the latch. Return true if this call is the one that tripped it.
    pub fn trip(&self) -> bool {
        let first = !self.tripped.swap(true, Ordering::AcqRel);
        if first {
            probe!(gc_observer, disabled);
        }
        first
    }
}
