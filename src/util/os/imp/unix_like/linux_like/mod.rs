use crate::util::os::imp::unix_like::unix_common;
use std::io::{Error, ErrorKind, Result};

const STATM_PATH: &[u8] = b"/proc/self/statm\0";

/// Current resident set size read from `/proc/self/statm`.
///
/// The file is read into a stack buffer with raw syscalls so this can be called from the GC hook.
pub fn current_rss() -> Result<usize> {
    let mut buf = [0u8; 128];
    let fd = unsafe {
        libc::open(
            STATM_PATH.as_ptr() as *const libc::c_char,
            libc::O_RDONLY | libc::O_CLOEXEC,
        )
    };
    if fd < 0 {
        return Err(Error::last_os_error());
    }
    let n = unsafe { libc::read(fd, buf.as_mut_ptr() as *mut libc::c_void, buf.len()) };
    let read_result = if n < 0 {
        Err(Error::last_os_error())
    } else {
        Ok(n as usize)
    };
    unsafe { libc::close(fd) };
    let len = read_result?;

    let resident_pages = parse_resident_pages(&buf[..len]).ok_or(ErrorKind::InvalidData)?;
    Ok(resident_pages * unix_common::page_size()?)
}

/// The second field of statm is the number of resident pages.
fn parse_resident_pages(statm: &[u8]) -> Option<usize> {
    let field = statm
        .split(|b| b.is_ascii_whitespace())
        .filter(|f| !f.is_empty())
        .nth(1)?;
    field.iter().try_fold(0usize, |acc, &b| {
        if b.is_ascii_digit() {
            acc.checked_mul(10)?.checked_add((b - b'0') as usize)
        } else {
            None
        }
    })
}
