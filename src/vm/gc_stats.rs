use super::prelude::*;

/// Runtime GC counters captured with each full-mode record, e.g. heap page counts or the number of
/// minor and major collections. A binding that has none can use the defaults.
pub trait GcStats<VM: VMBinding> {
    /// The names of the counters, in the order [`GcStats::sample`] returns them. At most
    /// [`crate::util::record::RUNTIME_STAT_SLOTS`] names are used.
    const STAT_NAMES: &'static [&'static str] = &[];

    /// Sample the counters. This is called from inside the GC hook and must not allocate.
    fn sample() -> RuntimeStats {
        RuntimeStats::EMPTY
    }
}
