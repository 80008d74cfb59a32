use std::io::Result;

mod imp;

/// Abstraction for the clocks the observer stamps records with.
///
/// Implementations used inside the GC hook must not allocate.
pub trait Clock {
    /// Monotonic time in seconds. Only the difference between two readings is meaningful.
    fn monotonic_seconds() -> Result<f64>;

    /// Real (wall-clock) time in seconds since the Unix epoch.
    fn realtime_seconds() -> Result<f64>;
}

/// Abstraction for resident memory queries about the current process.
pub trait Process {
    /// The current resident set size in bytes.
    ///
    /// Fallback: platforms without a cheap query may allocate here. Only Linux-like systems
    /// guarantee an allocation-free implementation.
    fn current_rss() -> Result<usize>;

    /// The peak resident set size in bytes since the process started.
    fn peak_rss() -> Result<usize>;
}

/// The operating system the crate is compiled for.
pub use self::imp::OS;

/// The clock implementation for the current OS.
pub type OSClock = OS;
/// The process memory implementation for the current OS.
pub type OSProcess = OS;
