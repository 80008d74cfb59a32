//! Time and memory queries used to stamp every record.
//!
//! These are thin wrappers around [`crate::util::os`]. Errors are never swallowed here:
//! a failing clock or memory query means the execution environment is broken, and the caller
//! decides what to do about it.

use crate::util::os::*;
use std::io::Result;

#[cfg(feature = "test_private")]
static OS_QUERIES_FAILING: std::sync::atomic::AtomicBool =
    std::sync::atomic::AtomicBool::new(false);

/// Make every query in this module fail with an I/O error until switched back.
#[cfg(feature = "test_private")]
pub fn set_os_queries_failing(failing: bool) {
    OS_QUERIES_FAILING.store(failing, std::sync::atomic::Ordering::SeqCst);
}

#[cfg(feature = "test_private")]
fn check_os_queries() -> Result<()> {
    if OS_QUERIES_FAILING.load(std::sync::atomic::Ordering::SeqCst) {
        return Err(std::io::Error::new(
            std::io::ErrorKind::Other,
            "OS queries switched off",
        ));
    }
    Ok(())
}

#[cfg(not(feature = "test_private"))]
#[inline(always)]
fn check_os_queries() -> Result<()> {
    Ok(())
}

/// Monotonic wall time in seconds. Records are stamped with this.
pub fn wall_time() -> Result<f64> {
    check_os_queries()?;
    OSClock::monotonic_seconds()
}

/// Real time in seconds since the Unix epoch. Counter resets are stamped with this.
pub fn real_time() -> Result<f64> {
    check_os_queries()?;
    OSClock::realtime_seconds()
}

/// Current resident set size of the process in bytes.
pub fn current_rss() -> Result<usize> {
    check_os_queries()?;
    OSProcess::current_rss()
}

/// Peak resident set size of the process in bytes.
pub fn peak_rss() -> Result<usize> {
    check_os_queries()?;
    OSProcess::peak_rss()
}
