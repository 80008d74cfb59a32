//! Per-observer state shared between the application-facing API and the GC hook.

use crate::util::chain::{ChainPool, CycleChain};
use crate::util::counters::LightCounters;
use crate::util::latch::DisableLatch;
use crate::util::options::{ObserverMode, Options};
use atomic::Atomic;
use atomic_refcell::AtomicRefCell;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// This stores the states of an observer instance that the GC hook reads and writes.
/// The hook holds a reference to the observer and accesses the state through atomics only.
/// Nothing here blocks.
pub struct ObserverState {
    /// Set once on internal failure. After that, the hook does nothing.
    pub(crate) latch: DisableLatch,
    /// The mode the current tracepoint was installed with.
    pub(crate) mode: Atomic<ObserverMode>,
    /// Light-mode accumulators.
    pub(crate) counters: LightCounters,
    /// The records of the cycle in progress (full mode). The runtime delivers events to the hook
    /// one at a time. If two deliveries overlap, the second one fails to borrow this.
    pub(crate) cycle: AtomicRefCell<Option<CycleChain>>,
    /// Storage for cycle chains.
    pub(crate) pool: Arc<ChainPool>,
    /// Sample runtime GC counters with each record?
    pub(crate) capture_runtime_stats: bool,
    /// The number of cycles handed to the runtime for publication.
    pub(crate) cycles_scheduled: AtomicUsize,
    /// The number of cycles whose snapshots were all delivered.
    pub(crate) cycles_published: AtomicUsize,
}

impl ObserverState {
    pub(crate) fn new(options: &Options) -> Self {
        Self {
            latch: DisableLatch::new(),
            mode: Atomic::new(options.mode),
            counters: LightCounters::new(),
            cycle: AtomicRefCell::new(None),
            pool: ChainPool::new(options.chain_pool_size, options.max_records_per_cycle),
            capture_runtime_stats: options.capture_runtime_stats,
            cycles_scheduled: AtomicUsize::new(0),
            cycles_published: AtomicUsize::new(0),
        }
    }

    /// Has the observer been disabled?
    pub fn is_disabled(&self) -> bool {
        self.latch.is_tripped()
    }

    /// The current mode.
    pub fn mode(&self) -> ObserverMode {
        self.mode.load(Ordering::Relaxed)
    }

    pub(crate) fn set_mode(&self, mode: ObserverMode) {
        self.mode.store(mode, Ordering::Relaxed);
    }

    /// Drop the chain of the cycle in progress, if any, returning its buffer to the pool.
    /// Return whether a chain was dropped.
    pub(crate) fn discard_cycle(&self) -> bool {
        match self.cycle.try_borrow_mut() {
            Ok(mut cycle) => cycle.take().is_some(),
            Err(_) => false,
        }
    }

    /// The number of cycles handed to the runtime for publication.
    pub fn cycles_scheduled(&self) -> usize {
        self.cycles_scheduled.load(Ordering::Relaxed)
    }

    /// The number of cycles whose snapshots were all delivered.
    pub fn cycles_published(&self) -> usize {
        self.cycles_published.load(Ordering::Relaxed)
    }

    /// The chain storage.
    pub fn pool(&self) -> &ChainPool {
        &self.pool
    }
}
