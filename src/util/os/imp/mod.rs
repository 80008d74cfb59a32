cfg_if::cfg_if! {
    if #[cfg(unix)] {
        mod unix_like;
        pub use self::unix_like::OS;
    } else {
        mod portable;
        pub use self::portable::OS;
    }
}

#[cfg(not(any(target_os = "linux", target_os = "android")))]
mod sysinfo_common;
