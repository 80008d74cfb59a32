//! The binding interface: traits a managed runtime implements so the observer can subscribe to its
//! GC events, ask about its threads, defer work to a safe point, and deliver snapshots.
//!
//! The observer core calls these traits with static dispatch, e.g.
//! `VM::VMTracepoint::new_tracepoint(...)`. Functions marked as hook-safe are called from inside the
//! collector and must neither allocate nor call back into the runtime heap.

mod event;
mod gc_stats;
mod postponed_job;
pub(crate) mod prelude;
mod subscriber;
mod threads;
mod tracepoint;
mod vmbinding;

pub use self::event::{GcEvent, GcEventSet};
pub use self::gc_stats::GcStats;
pub use self::postponed_job::PostponedJob;
pub use self::subscriber::{GcSnapshot, Subscriber, SubscriberResult};
pub use self::threads::Threads;
pub use self::tracepoint::Tracepoint;
pub use self::vmbinding::VMBinding;

#[cfg(test)]
mod tests;
