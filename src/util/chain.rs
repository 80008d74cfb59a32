//! Storage for the records of the GC cycle in progress.
//!
//! The GC hook must not allocate, so all record storage is created up front by a [`ChainPool`]:
//! a fixed number of buffers, each with room for a fixed number of records. The hook takes one
//! buffer per cycle as a [`CycleChain`], appends records to it, and either hands it to the
//! publisher or drops it. Dropping a chain, wherever that happens, clears the buffer and returns it
//! to the pool. Neither appending nor releasing allocates.
//!
//! The pool counts records appended and records released, so callers (and tests) can check that no
//! record was leaked.

use crate::util::record::{GcPhase, StatRecord};
use crossbeam::queue::ArrayQueue;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// A fixed set of preallocated record buffers.
#[derive(Debug)]
pub struct ChainPool {
    free: ArrayQueue<Vec<StatRecord>>,
    chains: usize,
    records_per_chain: usize,
    records_allocated: AtomicUsize,
    records_released: AtomicUsize,
}

impl ChainPool {
    /// Create a pool of `chains` buffers, each holding up to `records_per_chain` records.
    pub fn new(chains: usize, records_per_chain: usize) -> Arc<Self> {
        assert!(chains > 0, "A chain pool needs at least one chain");
        assert!(
            records_per_chain > 0,
            "A chain needs room for at least one record"
        );
        let free = ArrayQueue::new(chains);
        for _ in 0..chains {
            let pushed = free.push(Vec::with_capacity(records_per_chain));
            debug_assert!(pushed.is_ok());
        }
        Arc::new(Self {
            free,
            chains,
            records_per_chain,
            records_allocated: AtomicUsize::new(0),
            records_released: AtomicUsize::new(0),
        })
    }

    /// Take a free buffer from the pool. Return `None` if every buffer is in use, either by the
    /// cycle being recorded or by cycles waiting to be published.
    pub fn acquire(self: &Arc<Self>) -> Option<CycleChain> {
        self.free.pop().map(|records| CycleChain {
            records,
            consumed: 0,
            pool: Arc::clone(self),
        })
    }

    fn release(&self, mut records: Vec<StatRecord>, unconsumed: usize) {
        self.records_released
            .fetch_add(unconsumed, Ordering::Relaxed);
        records.clear();
        // There is one slot in the queue for each buffer we created, so this never fails.
        let pushed = self.free.push(records);
        debug_assert!(pushed.is_ok());
    }

    /// The number of buffers not currently in use.
    pub fn free_chains(&self) -> usize {
        self.free.len()
    }

    /// The total number of buffers.
    pub fn chains(&self) -> usize {
        self.chains
    }

    /// The maximum number of records one chain can hold.
    pub fn records_per_chain(&self) -> usize {
        self.records_per_chain
    }

    /// The number of records ever appended to chains from this pool.
    pub fn records_allocated(&self) -> usize {
        self.records_allocated.load(Ordering::Relaxed)
    }

    /// The number of records ever released back to this pool.
    pub fn records_released(&self) -> usize {
        self.records_released.load(Ordering::Relaxed)
    }

    /// The number of records appended but not yet released.
    pub fn live_records(&self) -> usize {
        // Both counters are read relaxed, so a concurrent release can be seen first.
        self.records_allocated()
            .saturating_sub(self.records_released())
    }
}

/// The records of one GC cycle, in the order they were appended.
///
/// A chain owns a pool buffer until it is dropped.
#[derive(Debug)]
pub struct CycleChain {
    records: Vec<StatRecord>,
    /// Records before this index were handed out by `pop_front` and are already released.
    consumed: usize,
    pool: Arc<ChainPool>,
}

impl CycleChain {
    /// Append a record. Fails, handing the record back, if the chain is full.
    pub fn push(&mut self, record: StatRecord) -> Result<(), StatRecord> {
        if self.records.len() >= self.pool.records_per_chain {
            return Err(record);
        }
        // Never grows the buffer: the pool reserved `records_per_chain` slots.
        debug_assert!(self.records.len() < self.records.capacity());
        self.records.push(record);
        self.pool.records_allocated.fetch_add(1, Ordering::Relaxed);
        Ok(())
    }

    /// Does the chain already hold a record of `phase`?
    ///
    /// Each phase happens at most once per cycle, so a repeated phase means a second cycle began
    /// before this one ended.
    pub fn contains_phase(&self, phase: GcPhase) -> bool {
        self.records.iter().any(|r| r.phase == phase)
    }

    /// The number of records appended to this chain.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Is the chain empty?
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The number of records not yet taken by [`CycleChain::pop_front`].
    pub fn remaining(&self) -> usize {
        self.records.len() - self.consumed
    }

    /// Iterate over the records not yet taken.
    pub fn iter(&self) -> impl Iterator<Item = &StatRecord> {
        self.records[self.consumed..].iter()
    }

    /// Take the oldest remaining record and release its slot.
    pub fn pop_front(&mut self) -> Option<StatRecord> {
        let record = *self.records.get(self.consumed)?;
        self.consumed += 1;
        self.pool.records_released.fetch_add(1, Ordering::Relaxed);
        Some(record)
    }
}

impl Drop for CycleChain {
    fn drop(&mut self) {
        let records = std::mem::take(&mut self.records);
        let unconsumed = records.len() - self.consumed;
        self.pool.release(records, unconsumed);
    }
}
