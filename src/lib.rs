// Warn on undocumented public items.
#![warn(missing_docs)]

//! gc-observer instruments the garbage collector of a managed language runtime.
//!
//! A runtime reports discrete GC lifecycle events (cycle start, end of marking,
//! end of sweeping, and on newer runtimes, fine-grained enter/exit) to a hook.
//! The hook runs inside the collector, where the runtime heap may be inconsistent
//! and allocation is forbidden, so it only uses preallocated storage. Once a cycle
//! completes, the collected records are handed to the runtime's deferred-job
//! mechanism and delivered to a subscriber from a safe context.
//!
//! Two modes are supported:
//! * [`ObserverMode::FullSnapshot`]: one [`GcSnapshot`](vm::GcSnapshot) per phase
//!   with timestamp, resident memory and thread identity.
//! * [`ObserverMode::LightCounters`]: cumulative GC time and count only, read
//!   with [`api::read_and_reset_counters`].
//!
//! Any internal failure trips a disable latch, after which the observer is inert.
//!
//! A runtime plugs in by implementing [`vm::VMBinding`] and its associated traits.
//! The application-facing entry points live in [`api`].

#[macro_use]
extern crate lazy_static;
#[macro_use]
extern crate log;
#[macro_use]
extern crate probe;

pub mod api;
pub mod build_info;
pub mod global_state;
pub mod hook;
pub(crate) mod lifecycle;
mod observer;
pub mod publisher;
pub mod util;
pub mod vm;

pub use crate::hook::GcEventHook;
pub use crate::observer::GcObserver;
pub use crate::observer::GcObserverBuilder;
pub use crate::publisher::{PublishError, PublishJob};
pub use crate::util::error::ObserverError;
pub use crate::util::options::ObserverMode;
