//! Utilities used by the observer core and the bindings.

/// Preallocated storage for the records of one GC cycle.
pub mod chain;
/// Light-mode GC time and count accumulation.
pub mod counters;
/// Error types for application-facing calls.
pub mod error;
/// The one-way disable latch.
pub mod latch;
/// Logger initialization
pub mod logger;
/// Clock and resident memory probes.
pub mod measure;
/// Opaque handles the observer stores for the runtime.
pub mod opaque_pointer;
/// Observer options.
pub mod options;
/// Wrapper functions for the OS.
pub(crate) mod os;
/// Per-phase stat records.
pub mod record;

#[cfg(any(test, feature = "test_private"))]
pub mod test_util;

pub use self::opaque_pointer::*;
pub use self::record::{GcPhase, OriginThread, RuntimeStats, StatRecord};
