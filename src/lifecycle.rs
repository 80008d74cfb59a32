//! Installing and removing the observer's tracepoint.
//!
//! An observer holds at most one tracepoint registration. Installing again replaces it, so the
//! runtime never delivers an event to two hooks of the same observer.

use crate::hook::GcEventHook;
use crate::observer::GcObserver;
use crate::util::error::ObserverError;
use crate::util::measure;
use crate::util::opaque_pointer::TracepointHandle;
use crate::util::options::ObserverMode;
use crate::vm::{GcEventSet, Tracepoint, VMBinding};
use std::sync::MutexGuard;

impl<VM: VMBinding> GcObserver<VM> {
    fn tracepoint_slot(&self) -> MutexGuard<'_, Option<TracepointHandle>> {
        self.tracepoint
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Install a tracepoint that records in the given mode, replacing any existing one.
    ///
    /// Entering light mode resets the counters. A half-recorded cycle from a previous installation
    /// is discarded. If the runtime refuses to create a tracepoint, a warning is logged and the
    /// observer stays uninstalled, which is not an error.
    pub(crate) fn install(&'static self, mode: ObserverMode) -> Result<(), ObserverError> {
        if mode == ObserverMode::LightCounters && !VM::SUPPORTS_ENTER_EXIT {
            return Err(ObserverError::UnsupportedMode(mode));
        }
        // Probe before touching anything, so a failure leaves the old installation in place.
        let reset_time = match mode {
            ObserverMode::LightCounters => Some(measure::real_time()?),
            ObserverMode::FullSnapshot => None,
        };

        let mut slot = self.tracepoint_slot();
        if let Some(old) = slot.take() {
            <VM::VMTracepoint as Tracepoint<VM>>::disable(old);
            debug!("Disabled previous GC tracepoint {:?}", old);
        }

        self.state.set_mode(mode);
        if let Some(now) = reset_time {
            self.state.counters.reset(now);
        }
        if self.state.discard_cycle() {
            debug!("Discarded a partially recorded GC cycle");
        }

        let events = GcEventSet::for_binding::<VM>();
        match <VM::VMTracepoint as Tracepoint<VM>>::new_tracepoint(events, GcEventHook::new(self)) {
            Some(handle) => {
                <VM::VMTracepoint as Tracepoint<VM>>::enable(handle);
                *slot = Some(handle);
                info!("Installed GC tracepoint in {} mode", mode);
            }
            None => {
                warn!("Could not install GC tracepoint!");
            }
        }
        Ok(())
    }

    /// Disable and forget the tracepoint, if any. Calling this when nothing is installed does
    /// nothing.
    pub(crate) fn uninstall(&self) {
        if let Some(handle) = self.tracepoint_slot().take() {
            <VM::VMTracepoint as Tracepoint<VM>>::disable(handle);
            info!("Uninstalled GC tracepoint");
        }
    }
}
