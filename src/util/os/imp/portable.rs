use crate::util::os::{Clock, Process};
use std::io::{ErrorKind, Result};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{Instant, SystemTime, UNIX_EPOCH};

lazy_static! {
    static ref MONOTONIC_EPOCH: Instant = Instant::now();
}

// There is no portable peak RSS query, so we keep the highest value we have seen.
static PEAK_RSS: AtomicUsize = AtomicUsize::new(0);

/// Operating systems without a dedicated implementation.
pub struct OS;

impl Clock for OS {
    fn monotonic_seconds() -> Result<f64> {
        Ok(MONOTONIC_EPOCH.elapsed().as_secs_f64())
    }

    fn realtime_seconds() -> Result<f64> {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs_f64())
            .map_err(|_| ErrorKind::InvalidData.into())
    }
}

impl Process for OS {
    fn current_rss() -> Result<usize> {
        let rss = super::sysinfo_common::current_rss()?;
        PEAK_RSS.fetch_max(rss, Ordering::Relaxed);
        Ok(rss)
    }

    fn peak_rss() -> Result<usize> {
        let current = Self::current_rss()?;
        Ok(PEAK_RSS.load(Ordering::Relaxed).max(current))
    }
}
