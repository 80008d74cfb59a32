pub mod unix_common;

#[cfg(any(target_os = "linux", target_os = "android"))]
pub mod linux_like;

use crate::util::os::{Clock, Process};
use std::io::Result;

/// Unix-like operating systems.
pub struct OS;

impl Clock for OS {
    fn monotonic_seconds() -> Result<f64> {
        unix_common::clock_seconds(libc::CLOCK_MONOTONIC)
    }

    fn realtime_seconds() -> Result<f64> {
        unix_common::clock_seconds(libc::CLOCK_REALTIME)
    }
}

impl Process for OS {
    fn current_rss() -> Result<usize> {
        cfg_if::cfg_if! {
            if #[cfg(any(target_os = "linux", target_os = "android"))] {
                linux_like::current_rss()
            } else {
                super::sysinfo_common::current_rss()
            }
        }
    }

    fn peak_rss() -> Result<usize> {
        unix_common::peak_rss()
    }
}
