use atomic::{Atomic, Ordering};
use std::sync::atomic::AtomicUsize;

/// Counters returned by a light-mode read. The read also resets them.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GcCounters {
    /// Cumulative time spent in GC since the last reset, in milliseconds.
    pub gc_time_ms: u64,
    /// Real time (seconds since the Unix epoch) of the last reset.
    pub last_reset: f64,
    /// The number of completed GC enter/exit pairs since the last reset.
    pub gc_count: usize,
}

/// Aggregate GC time and count for light mode.
///
/// The hook only ever calls [`LightCounters::enter`] and [`LightCounters::exit`] with the current
/// monotonic time, so this does no clock reads itself.
#[derive(Debug)]
pub struct LightCounters {
    /// Monotonic time of the pending GC enter. NaN means there is none.
    pending_start: Atomic<f64>,
    gc_time: Atomic<f64>,
    gc_count: AtomicUsize,
    last_reset: Atomic<f64>,
}

impl LightCounters {
    /// Create zeroed counters.
    pub fn new() -> Self {
        Self {
            pending_start: Atomic::new(f64::NAN),
            gc_time: Atomic::new(0f64),
            gc_count: AtomicUsize::new(0),
            last_reset: Atomic::new(0f64),
        }
    }

    /// Record the start of a GC step.
    pub fn enter(&self, now: f64) {
        self.pending_start.store(now, Ordering::Relaxed);
    }

    /// Record the end of a GC step. Return false if there was no matching enter, in which case
    /// nothing is counted.
    pub fn exit(&self, now: f64) -> bool {
        let start = self.pending_start.swap(f64::NAN, Ordering::Relaxed);
        if start.is_nan() {
            return false;
        }
        // Events are delivered one at a time, so a load/store pair is enough here.
        let total = self.gc_time.load(Ordering::Relaxed) + (now - start);
        self.gc_time.store(total, Ordering::Relaxed);
        self.gc_count.fetch_add(1, Ordering::Relaxed);
        true
    }

    /// Clear the accumulated time and count. `now` is the real time recorded as the reset point.
    pub fn reset(&self, now: f64) {
        self.pending_start.store(f64::NAN, Ordering::Relaxed);
        self.last_reset.store(now, Ordering::Relaxed);
        self.gc_time.store(0f64, Ordering::Relaxed);
        self.gc_count.store(0, Ordering::Relaxed);
    }

    /// Return the counters accumulated since the last reset, then reset them at `now`.
    pub fn read_and_reset(&self, now: f64) -> GcCounters {
        let counters = GcCounters {
            gc_time_ms: (self.gc_time.swap(0f64, Ordering::Relaxed) * 1000.0) as u64,
            last_reset: self.last_reset.swap(now, Ordering::Relaxed),
            gc_count: self.gc_count.swap(0, Ordering::Relaxed),
        };
        trace!("Read and reset GC counters: {:?}", counters);
        counters
    }
}

impl Default for LightCounters {
    fn default() -> Self {
        Self::new()
    }
}
