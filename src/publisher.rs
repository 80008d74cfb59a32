//! Publication of finished cycles.
//!
//! The hook cannot call the application, so it moves each finished [`CycleChain`] into a
//! [`PublishJob`] and asks the runtime to run it later. The runtime calls [`PublishJob::run`] from
//! a safe point, which converts each record to a [`GcSnapshot`] and hands it to the binding's
//! [`Subscriber`].

use crate::observer::GcObserver;
use crate::util::chain::CycleChain;
use crate::vm::{GcSnapshot, Subscriber, VMBinding};
use std::fmt;
use std::sync::atomic::Ordering;

/// The records of one finished cycle, waiting to be delivered.
///
/// The job owns the chain. However the job ends (run to completion, failed, or dropped without
/// running), every record is released to the observer's pool.
pub struct PublishJob<VM: VMBinding> {
    observer: &'static GcObserver<VM>,
    chain: CycleChain,
}

impl<VM: VMBinding> PublishJob<VM> {
    pub(crate) fn new(observer: &'static GcObserver<VM>, chain: CycleChain) -> Self {
        PublishJob { observer, chain }
    }

    /// The number of records in the job.
    pub fn len(&self) -> usize {
        self.chain.remaining()
    }

    /// Is the job empty?
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Deliver the records to the subscriber in the order they were recorded. Return the number of
    /// snapshots delivered.
    ///
    /// If the subscriber fails, the rest of the cycle is dropped and the error is returned.
    pub fn run(mut self) -> Result<usize, PublishError> {
        let mut delivered = 0;
        while let Some(record) = self.chain.pop_front() {
            let snapshot = GcSnapshot::from_record::<VM>(&record);
            trace!("Publishing {:?}", snapshot);
            if let Err(source) = <VM::VMSubscriber as Subscriber<VM>>::raw_snapshot(snapshot) {
                let remaining = self.chain.remaining();
                warn!(
                    "Subscriber failed after {} snapshots, dropping {}: {}",
                    delivered,
                    remaining,
                    source
                );
                return Err(PublishError {
                    delivered,
                    remaining,
                    source,
                });
            }
            delivered += 1;
        }
        self.observer
            .state
            .cycles_published
            .fetch_add(1, Ordering::Relaxed);
        probe!(gc_observer, cycle_published, delivered);
        debug!("Published a GC cycle of {} snapshots", delivered);
        Ok(delivered)
    }
}

impl<VM: VMBinding> fmt::Debug for PublishJob<VM> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PublishJob")
            .field("records", &self.chain.remaining())
            .finish()
    }
}

/// The subscriber failed while a cycle was being published.
#[derive(Debug)]
pub struct PublishError {
    /// Snapshots delivered before the failure.
    pub delivered: usize,
    /// Records dropped without being delivered, not counting the one that failed.
    pub remaining: usize,
    /// The subscriber's error.
    pub source: Box<dyn std::error::Error + Send + Sync>,
}

impl fmt::Display for PublishError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "GC snapshot subscriber failed after {} snapshots ({} dropped): {}",
            self.delivered, self.remaining, self.source
        )
    }
}

impl std::error::Error for PublishError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(self.source.as_ref())
    }
}
