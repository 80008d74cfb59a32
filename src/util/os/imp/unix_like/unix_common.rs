use std::io::Result;

pub fn wrap_libc_call<T: PartialEq>(f: &dyn Fn() -> T, expect: T) -> Result<()> {
    let ret = f();
    if ret == expect {
        Ok(())
    } else {
        Err(std::io::Error::last_os_error())
    }
}

/// Read the given clock and return seconds as a float.
pub fn clock_seconds(clock: libc::clockid_t) -> Result<f64> {
    let mut ts: libc::timespec = unsafe { std::mem::zeroed() };
    let ts_ptr: *mut libc::timespec = &mut ts;
    wrap_libc_call(&|| unsafe { libc::clock_gettime(clock, ts_ptr) }, 0)?;
    Ok(ts.tv_sec as f64 + ts.tv_nsec as f64 * 1e-9)
}

/// Peak resident set size from `getrusage`.
pub fn peak_rss() -> Result<usize> {
    let mut usage: libc::rusage = unsafe { std::mem::zeroed() };
    let usage_ptr: *mut libc::rusage = &mut usage;
    wrap_libc_call(
        &|| unsafe { libc::getrusage(libc::RUSAGE_SELF, usage_ptr) },
        0,
    )?;
    let max_rss = usage.ru_maxrss as usize;
    cfg_if::cfg_if! {
        if #[cfg(any(target_os = "macos", target_os = "ios"))] {
            // Darwin reports bytes.
            Ok(max_rss)
        } else {
            // Everyone else reports kilobytes.
            Ok(max_rss * 1024)
        }
    }
}

/// The size of a virtual memory page.
pub fn page_size() -> Result<usize> {
    let size = unsafe { libc::sysconf(libc::_SC_PAGESIZE) };
    if size <= 0 {
        Err(std::io::Error::last_os_error())
    } else {
        Ok(size as usize)
    }
}
