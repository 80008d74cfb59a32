use std::io::{ErrorKind, Result};
use sysinfo::{ProcessRefreshKind, ProcessesToUpdate, System};

/// Current resident set size through `sysinfo`. This allocates, so platforms using it cannot
/// promise an allocation-free GC hook.
pub fn current_rss() -> Result<usize> {
    let pid = sysinfo::get_current_pid().map_err(|_| ErrorKind::Unsupported)?;
    let mut sys = System::new();
    sys.refresh_processes_specifics(
        ProcessesToUpdate::Some(&[pid]),
        true,
        ProcessRefreshKind::nothing().with_memory(),
    );
    sys.process(pid)
        .map(|process| process.memory() as usize)
        .ok_or_else(|| ErrorKind::NotFound.into())
}
