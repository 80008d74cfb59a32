//! The application-facing interface of the observer.
//!
//! We expect a binding to set up an observer in the following steps:
//!
//! 1. Create a [`GcObserverBuilder`] and adjust options with
//!    [`GcObserverBuilder::set_option`]. Options are also read from `GC_OBSERVER_*` environment
//!    variables.
//! 2. Create the observer with [`observer_init`], and leak it (or store it in a static), since the
//!    runtime's hook refers to it for as long as a tracepoint exists.
//! 3. Call [`install_observer`] (or [`install_observer_from_options`]) to start recording.
//!    Calling it again switches modes.
//! 4. In light mode, poll [`read_and_reset_counters`]. In full mode, snapshots arrive at the
//!    binding's [`Subscriber`](crate::vm::Subscriber).
//! 5. Call [`uninstall_observer`] to stop.

use crate::build_info;
use crate::observer::{GcObserver, GcObserverBuilder};
use crate::util::counters::GcCounters;
use crate::util::error::ObserverError;
use crate::util::measure;
use crate::util::options::ObserverMode;
use crate::vm::VMBinding;

/// Create an observer. This will attempt to initialize a logger. If the binding would like to use
/// its own logger, it should initialize the logger before calling this function, or disable the
/// `builtin_env_logger` feature.
///
/// Arguments:
/// * `builder`: The reference to an observer builder.
pub fn observer_init<VM: VMBinding>(builder: &GcObserverBuilder) -> Box<GcObserver<VM>> {
    match crate::util::logger::try_init() {
        Ok(_) => debug!("gc-observer initialized the logger."),
        Err(_) => debug!(
            "gc-observer failed to initialize the logger. Possibly a logger has been initialized by user."
        ),
    }
    let observer = builder.build::<VM>();
    info!(
        "Initialized GC observer in {} mode",
        observer.get_options().mode
    );
    debug!("{}", *build_info::OBSERVER_FULL_BUILD_INFO);
    Box::new(observer)
}

/// Start recording GC events in the given mode. If a tracepoint is already installed, it is
/// disabled and replaced, so only one is ever active.
///
/// Arguments:
/// * `observer`: The observer to record into.
/// * `mode`: Full snapshots or light counters.
///
/// Returns [`ObserverError::UnsupportedMode`] if light counters are requested on a runtime that
/// does not report GC enter/exit, or [`ObserverError::Probe`] if the clock cannot be read.
pub fn install_observer<VM: VMBinding>(
    observer: &'static GcObserver<VM>,
    mode: ObserverMode,
) -> Result<(), ObserverError> {
    observer.install(mode)
}

/// Same as [`install_observer`], with the mode from the observer's `mode` option.
pub fn install_observer_from_options<VM: VMBinding>(
    observer: &'static GcObserver<VM>,
) -> Result<(), ObserverError> {
    observer.install(observer.get_options().mode)
}

/// Stop recording GC events. It is fine to call this when nothing is installed.
pub fn uninstall_observer<VM: VMBinding>(observer: &GcObserver<VM>) {
    observer.uninstall()
}

/// Return the light-mode counters accumulated since the last reset, and reset them.
///
/// Counters are only collected on runtimes that report GC enter/exit. On others, this returns
/// [`ObserverError::CountersUnavailable`].
pub fn read_and_reset_counters<VM: VMBinding>(
    observer: &GcObserver<VM>,
) -> Result<GcCounters, ObserverError> {
    if !VM::SUPPORTS_ENTER_EXIT {
        return Err(ObserverError::CountersUnavailable);
    }
    let now = measure::real_time()?;
    Ok(observer.state.counters.read_and_reset(now))
}

/// The monotonic wall clock, in seconds, that snapshot timestamps use.
pub fn current_wall_time() -> Result<f64, ObserverError> {
    Ok(measure::wall_time()?)
}

/// The current resident set size of the process, in bytes.
pub fn current_rss() -> Result<usize, ObserverError> {
    Ok(measure::current_rss()?)
}

/// The peak resident set size of the process, in bytes.
pub fn peak_rss() -> Result<usize, ObserverError> {
    Ok(measure::peak_rss()?)
}

/// Has an internal failure permanently disabled the observer?
pub fn is_observer_disabled<VM: VMBinding>(observer: &GcObserver<VM>) -> bool {
    observer.is_disabled()
}

/// The number of cycles whose snapshots were all delivered to the subscriber.
pub fn cycles_published<VM: VMBinding>(observer: &GcObserver<VM>) -> usize {
    observer.state.cycles_published()
}
