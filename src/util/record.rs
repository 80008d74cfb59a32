use strum_macros::{Display, EnumIter, IntoStaticStr};

/// The maximum number of runtime GC counters a record can carry.
pub const RUNTIME_STAT_SLOTS: usize = 16;

/// A phase of a GC cycle, as recorded in a [`StatRecord`].
///
/// Each phase occurs at most once per cycle. The string form (e.g. `GC_CYCLE_STARTED`) is the name applications see.
#[repr(u8)]
#[derive(
    Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Display, IntoStaticStr, EnumIter,
)]
pub enum GcPhase {
    /// The collector started a cycle.
    #[strum(serialize = "GC_CYCLE_STARTED")]
    CycleStarted,
    /// Marking finished.
    #[strum(serialize = "GC_CYCLE_MARK_ENDED")]
    MarkEnded,
    /// Sweeping finished.
    #[strum(serialize = "GC_CYCLE_SWEEP_ENDED")]
    SweepEnded,
    /// The collector entered a (possibly incremental) GC step.
    #[strum(serialize = "GC_CYCLE_ENTERED")]
    CycleEntered,
    /// The collector left a GC step.
    #[strum(serialize = "GC_CYCLE_EXITED")]
    CycleExited,
}

impl GcPhase {
    /// The name applications see for this phase.
    pub fn name(self) -> &'static str {
        self.into()
    }
}

/// The thread a GC event was observed on.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum OriginThread {
    /// The runtime's main thread.
    Main,
    /// Any other thread, identified by the runtime's thread id.
    Thread(u64),
}

/// A fixed-size sample of runtime GC counters. The names of the slots come from
/// [`crate::vm::GcStats::STAT_NAMES`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RuntimeStats {
    values: [usize; RUNTIME_STAT_SLOTS],
    len: usize,
}

impl RuntimeStats {
    /// An empty sample.
    pub const EMPTY: Self = Self {
        values: [0; RUNTIME_STAT_SLOTS],
        len: 0,
    };

    /// Build a sample from the given values. Values beyond [`RUNTIME_STAT_SLOTS`] are dropped.
    pub fn from_slice(values: &[usize]) -> Self {
        let mut stats = Self::EMPTY;
        let len = values.len().min(RUNTIME_STAT_SLOTS);
        stats.values[..len].copy_from_slice(&values[..len]);
        stats.len = len;
        stats
    }

    /// The sampled values.
    pub fn as_slice(&self) -> &[usize] {
        &self.values[..self.len]
    }

    /// Is the sample empty?
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl Default for RuntimeStats {
    fn default() -> Self {
        Self::EMPTY
    }
}

/// One observation at one GC phase.
///
/// Records are plain values so they can be written into preallocated chain storage from
/// inside the GC hook.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct StatRecord {
    /// The phase this record was taken at.
    pub phase: GcPhase,
    /// Monotonic wall time in seconds.
    pub timestamp: f64,
    /// Peak resident set size in bytes.
    pub peak_rss: usize,
    /// Current resident set size in bytes.
    pub current_rss: usize,
    /// The thread the event was delivered on.
    pub thread: OriginThread,
    /// Runtime GC counters sampled with the record.
    pub runtime_stats: RuntimeStats,
}

static_assertions::assert_impl_all!(StatRecord: Copy, Send, Sync);
static_assertions::const_assert!(RUNTIME_STAT_SLOTS > 0);
