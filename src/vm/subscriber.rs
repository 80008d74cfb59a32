use super::prelude::*;
use crate::util::record::StatRecord;
use crate::vm::GcStats;

/// The result of delivering one snapshot. An error stops the publication of the cycle.
pub type SubscriberResult = Result<(), Box<dyn std::error::Error + Send + Sync>>;

/// The receiver of published snapshots, usually a callback into the application.
pub trait Subscriber<VM: VMBinding> {
    /// Deliver one snapshot. Called from the deferred job, outside the collector.
    fn raw_snapshot(snapshot: GcSnapshot) -> SubscriberResult;
}

/// The application-visible form of one recorded GC phase.
#[derive(Clone, Debug, PartialEq)]
pub struct GcSnapshot {
    /// The phase.
    pub phase: GcPhase,
    /// Monotonic wall time in seconds.
    pub timestamp: f64,
    /// Peak resident set size in bytes.
    pub peak_rss: usize,
    /// Current resident set size in bytes.
    pub current_rss: usize,
    /// The thread the event was observed on.
    pub thread: OriginThread,
    /// Named runtime GC counters.
    pub gc_stat: Vec<(&'static str, usize)>,
}

impl GcSnapshot {
    /// Build the snapshot of a record, naming the runtime counters with the binding's names.
    pub fn from_record<VM: VMBinding>(record: &StatRecord) -> Self {
        let names = <VM::VMGcStats as GcStats<VM>>::STAT_NAMES;
        GcSnapshot {
            phase: record.phase,
            timestamp: record.timestamp,
            peak_rss: record.peak_rss,
            current_rss: record.current_rss,
            thread: record.thread,
            gc_stat: names
                .iter()
                .copied()
                .zip(record.runtime_stats.as_slice().iter().copied())
                .collect(),
        }
    }

    /// The name of the phase, e.g. `GC_CYCLE_STARTED`.
    pub fn stage(&self) -> &'static str {
        self.phase.name()
    }

    /// Was the event observed on the main thread?
    pub fn is_main_thread(&self) -> bool {
        self.thread == OriginThread::Main
    }

    /// The runtime counter of the given name, if it was captured.
    pub fn stat(&self, name: &str) -> Option<usize> {
        self.gc_stat.iter().find(|(n, _)| *n == name).map(|(_, v)| *v)
    }
}
