//! A binding whose every function is a [`MockMethod`], for testing the observer without a runtime.
//!
//! The default mock behaves like a small, well-behaved runtime: tracepoints are kept in a table
//! and [`fire`] delivers an event to the enabled ones, deferred jobs are queued until
//! [`run_postponed_jobs`], and delivered snapshots are collected for [`take_published`].

use crate::hook::GcEventHook;
use crate::publisher::{PublishError, PublishJob};
use crate::util::opaque_pointer::*;
use crate::util::record::RuntimeStats;
use crate::vm::*;

use super::mock_method::*;

use std::sync::Mutex;

lazy_static! {
    // The mutex may get poisoned any time. Accessing this mutex needs to deal with the poisoned case.
    // One can use read/write_mockvm to access mock vm.
    static ref MOCK_VM_INSTANCE: Mutex<MockVM> = Mutex::new(MockVM::default());

    // The state of the mock runtime. These are kept outside `MockVM` so the default mock closures
    // can update them while the mock itself is locked.
    static ref TRACEPOINTS: Mutex<Vec<MockTracepoint>> = Mutex::new(vec![]);
    static ref POSTPONED_JOBS: Mutex<Vec<PublishJob<MockVM>>> = Mutex::new(vec![]);
    static ref PUBLISHED: Mutex<Vec<GcSnapshot>> = Mutex::new(vec![]);
}

macro_rules! mock {
    ($fn: ident($($arg:expr),*)) => {
        write_mockvm(|mock| mock.$fn.call(($($arg),*)))
    };
}

fn lock<T>(mutex: &Mutex<T>) -> std::sync::MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

pub fn read_mockvm<F, R>(func: F) -> R
where
    F: FnOnce(&MockVM) -> R,
{
    func(&lock(&*MOCK_VM_INSTANCE))
}

pub fn write_mockvm<F, R>(func: F) -> R
where
    F: FnOnce(&mut MockVM) -> R,
{
    func(&mut lock(&*MOCK_VM_INSTANCE))
}

pub fn with_mockvm<S, T, C>(setup: S, test: T, cleanup: C)
where
    S: FnOnce() -> MockVM,
    T: FnOnce() + std::panic::UnwindSafe,
    C: FnOnce(),
{
    super::serial_test(|| {
        // Setup
        reset_mock_runtime();
        {
            write_mockvm(|mock| *mock = setup());
        }
        super::with_cleanup(test, cleanup);
    })
}

pub fn default_setup() -> MockVM {
    MockVM::default()
}

pub fn no_cleanup() {}

/// Forget all tracepoints, queued jobs and published snapshots.
pub fn reset_mock_runtime() {
    lock(&*TRACEPOINTS).clear();
    lock(&*POSTPONED_JOBS).clear();
    lock(&*PUBLISHED).clear();
}

/// A tracepoint created by the mock runtime.
pub struct MockTracepoint {
    pub events: GcEventSet,
    pub hook: GcEventHook<MockVM>,
    pub enabled: bool,
}

fn handle_index(handle: TracepointHandle) -> usize {
    // Handles are 1-based so that they are never null.
    handle.0.to_usize() - 1
}

/// Create a tracepoint in the mock runtime's table.
pub fn create_tracepoint(events: GcEventSet, hook: GcEventHook<MockVM>) -> TracepointHandle {
    let mut tracepoints = lock(&*TRACEPOINTS);
    tracepoints.push(MockTracepoint {
        events,
        hook,
        enabled: false,
    });
    TracepointHandle(OpaquePointer::from_usize(tracepoints.len()))
}

pub fn set_tracepoint_enabled(handle: TracepointHandle, enabled: bool) {
    lock(&*TRACEPOINTS)[handle_index(handle)].enabled = enabled;
}

/// The number of tracepoints ever created.
pub fn tracepoints_created() -> usize {
    lock(&*TRACEPOINTS).len()
}

/// The number of tracepoints currently enabled.
pub fn tracepoints_enabled() -> usize {
    lock(&*TRACEPOINTS).iter().filter(|t| t.enabled).count()
}

/// The events the given tracepoint subscribed to.
pub fn tracepoint_events(handle: TracepointHandle) -> GcEventSet {
    lock(&*TRACEPOINTS)[handle_index(handle)].events
}

/// Deliver an event to every enabled tracepoint that subscribed to it, like the runtime's
/// collector would.
pub fn fire(event: GcEvent) {
    let hooks: Vec<GcEventHook<MockVM>> = lock(&*TRACEPOINTS)
        .iter()
        .filter(|t| t.enabled && t.events.contains(event))
        .map(|t| t.hook)
        .collect();
    for hook in hooks {
        hook.call(event);
    }
}

pub fn fire_all(events: &[GcEvent]) {
    for event in events {
        fire(*event);
    }
}

/// Queue a job, as the mock runtime's deferred-job mechanism.
pub fn queue_postponed_job(job: PublishJob<MockVM>) {
    lock(&*POSTPONED_JOBS).push(job);
}

pub fn postponed_jobs() -> usize {
    lock(&*POSTPONED_JOBS).len()
}

/// Run the queued jobs in the order they were queued, as the runtime would at its next safe point.
pub fn run_postponed_jobs() -> Vec<Result<usize, PublishError>> {
    let jobs: Vec<PublishJob<MockVM>> = lock(&*POSTPONED_JOBS).drain(..).collect();
    jobs.into_iter().map(PublishJob::run).collect()
}

/// Drop the queued jobs without running them.
pub fn drop_postponed_jobs() {
    let jobs: Vec<PublishJob<MockVM>> = lock(&*POSTPONED_JOBS).drain(..).collect();
    drop(jobs);
}

pub fn record_published(snapshot: GcSnapshot) {
    lock(&*PUBLISHED).push(snapshot);
}

/// Take the snapshots delivered so far.
pub fn take_published() -> Vec<GcSnapshot> {
    std::mem::take(&mut *lock(&*PUBLISHED))
}

pub const MOCK_THREAD_ID: u64 = 7;
pub const MOCK_STAT_NAMES: &[&str] = &["count", "heap_live_slots"];

pub struct MockVM {
    // tracepoint
    pub new_tracepoint: MockMethod<(GcEventSet, GcEventHook<MockVM>), Option<TracepointHandle>>,
    pub enable_tracepoint: MockMethod<TracepointHandle, ()>,
    pub disable_tracepoint: MockMethod<TracepointHandle, ()>,
    // threads
    pub is_main_thread: MockMethod<(), bool>,
    pub current_thread_id: MockMethod<(), u64>,
    // postponed job
    pub register_postponed_job: MockMethod<PublishJob<MockVM>, Result<(), PublishJob<MockVM>>>,
    // subscriber
    pub raw_snapshot: MockMethod<GcSnapshot, SubscriberResult>,
    // gc stats
    pub sample_gc_stats: MockMethod<(), RuntimeStats>,
}

impl Default for MockVM {
    fn default() -> Self {
        Self {
            new_tracepoint: MockMethod::new_fixed(Box::new(|(events, hook)| {
                Some(create_tracepoint(events, hook))
            })),
            enable_tracepoint: MockMethod::new_fixed(Box::new(|handle| {
                set_tracepoint_enabled(handle, true)
            })),
            disable_tracepoint: MockMethod::new_fixed(Box::new(|handle| {
                set_tracepoint_enabled(handle, false)
            })),

            is_main_thread: MockMethod::new_fixed(Box::new(|_| true)),
            current_thread_id: MockMethod::new_fixed(Box::new(|_| MOCK_THREAD_ID)),

            register_postponed_job: MockMethod::new_fixed(Box::new(|job| {
                queue_postponed_job(job);
                Ok(())
            })),

            raw_snapshot: MockMethod::new_fixed(Box::new(|snapshot| {
                record_published(snapshot);
                Ok(())
            })),

            sample_gc_stats: MockMethod::new_fixed(Box::new(|_| RuntimeStats::from_slice(&[1, 2]))),
        }
    }
}

unsafe impl Sync for MockVM {}
unsafe impl Send for MockVM {}

impl VMBinding for MockVM {
    type VMTracepoint = MockVM;
    type VMThreads = MockVM;
    type VMPostponedJob = MockVM;
    type VMSubscriber = MockVM;
    type VMGcStats = MockVM;
}

impl Tracepoint<MockVM> for MockVM {
    fn new_tracepoint(events: GcEventSet, hook: GcEventHook<MockVM>) -> Option<TracepointHandle> {
        mock!(new_tracepoint(events, hook))
    }

    fn enable(handle: TracepointHandle) {
        mock!(enable_tracepoint(handle))
    }

    fn disable(handle: TracepointHandle) {
        mock!(disable_tracepoint(handle))
    }
}

impl Threads<MockVM> for MockVM {
    fn is_main_thread() -> bool {
        mock!(is_main_thread())
    }

    fn current_thread_id() -> u64 {
        mock!(current_thread_id())
    }
}

impl PostponedJob<MockVM> for MockVM {
    fn register(job: PublishJob<MockVM>) -> Result<(), PublishJob<MockVM>> {
        mock!(register_postponed_job(job))
    }
}

impl Subscriber<MockVM> for MockVM {
    fn raw_snapshot(snapshot: GcSnapshot) -> SubscriberResult {
        mock!(raw_snapshot(snapshot))
    }
}

impl GcStats<MockVM> for MockVM {
    const STAT_NAMES: &'static [&'static str] = MOCK_STAT_NAMES;

    fn sample() -> RuntimeStats {
        mock!(sample_gc_stats())
    }
}
