//! The GC event hook.
//!
//! The runtime calls [`GcEventHook::call`] from inside its collector, where the heap may be
//! inconsistent and allocation is forbidden. The hook therefore only reads clocks and resident
//! memory, writes into preallocated storage, and hands finished cycles to the runtime's deferred
//! job queue. Anything that goes wrong trips the observer's disable latch instead of unwinding
//! into the runtime.

use crate::observer::GcObserver;
use crate::publisher::PublishJob;
use crate::util::measure;
use crate::util::options::ObserverMode;
use crate::util::record::{RuntimeStats, StatRecord};
use crate::vm::{GcEvent, GcStats, PostponedJob, Threads, VMBinding};

/// The callback a tracepoint delivers GC events to.
pub struct GcEventHook<VM: VMBinding> {
    observer: &'static GcObserver<VM>,
}

impl<VM: VMBinding> Clone for GcEventHook<VM> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<VM: VMBinding> Copy for GcEventHook<VM> {}

impl<VM: VMBinding> GcEventHook<VM> {
    /// Create a hook that records into `observer`.
    pub fn new(observer: &'static GcObserver<VM>) -> Self {
        GcEventHook { observer }
    }

    /// The observer this hook records into.
    pub fn observer(&self) -> &'static GcObserver<VM> {
        self.observer
    }

    /// Handle one GC event. Called by the runtime, once per event, with events of one cycle
    /// delivered in order and never concurrently.
    pub fn call(&self, event: GcEvent) {
        let state = &self.observer.state;
        if state.is_disabled() {
            return;
        }
        match state.mode() {
            ObserverMode::LightCounters => self.count(event),
            ObserverMode::FullSnapshot => self.record(event),
        }
    }

    fn count(&self, event: GcEvent) {
        let counters = &self.observer.state.counters;
        match event {
            GcEvent::CycleEnter => match measure::wall_time() {
                Ok(now) => counters.enter(now),
                Err(e) => self.disable("clock failure", &e),
            },
            GcEvent::CycleExit => match measure::wall_time() {
                Ok(now) => {
                    if !counters.exit(now) {
                        warn!("GC exit without a matching enter. Not counted.");
                    }
                }
                Err(e) => self.disable("clock failure", &e),
            },
            _ => {}
        }
    }

    fn record(&self, event: GcEvent) {
        let state = &self.observer.state;
        let phase = event.phase();

        let Ok(mut cycle) = state.cycle.try_borrow_mut() else {
            // The other delivery owns the chain, leave it alone.
            self.disable("overlapping GC event delivery", &event);
            return;
        };

        if matches!(&*cycle, Some(chain) if chain.contains_phase(phase)) {
            *cycle = None;
            self.disable("reentrant GC cycle", &phase);
            return;
        }

        let record = match self.capture(event) {
            Ok(record) => record,
            Err(e) => {
                *cycle = None;
                self.disable("OS query failure", &e);
                return;
            }
        };

        if cycle.is_none() {
            match state.pool.acquire() {
                Some(chain) => *cycle = Some(chain),
                None => {
                    self.disable("no free cycle chain", &phase);
                    return;
                }
            }
        }
        let Some(chain) = &mut *cycle else {
            return;
        };
        if chain.push(record).is_err() {
            *cycle = None;
            self.disable("cycle chain is full", &phase);
            return;
        }

        if event == GcEvent::terminal::<VM>() {
            let Some(chain) = cycle.take() else {
                return;
            };
            drop(cycle);
            let job = PublishJob::new(self.observer, chain);
            match <VM::VMPostponedJob as PostponedJob<VM>>::register(job) {
                Ok(()) => {
                    state
                        .cycles_scheduled
                        .fetch_add(1, std::sync::atomic::Ordering::Relaxed);
                }
                Err(job) => {
                    // Dropping the job releases its records.
                    drop(job);
                    self.disable("could not schedule publication", &phase);
                }
            }
        }
    }

    fn capture(&self, event: GcEvent) -> std::io::Result<StatRecord> {
        let runtime_stats = if self.observer.state.capture_runtime_stats {
            <VM::VMGcStats as GcStats<VM>>::sample()
        } else {
            RuntimeStats::EMPTY
        };
        Ok(StatRecord {
            phase: event.phase(),
            timestamp: measure::wall_time()?,
            peak_rss: measure::peak_rss()?,
            current_rss: measure::current_rss()?,
            thread: <VM::VMThreads as Threads<VM>>::origin_thread(),
            runtime_stats,
        })
    }

    fn disable(&self, reason: &str, detail: &dyn std::fmt::Display) {
        if self.observer.state.latch.trip() {
            error!("GC observer disabled: {}: {}", reason, detail);
        }
    }
}
