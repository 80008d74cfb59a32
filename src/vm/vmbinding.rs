use super::{GcStats, PostponedJob, Subscriber, Threads, Tracepoint};

/// The `VMBinding` trait associates with each trait, and provides runtime-specific constants.
pub trait VMBinding
where
    Self: Sized + 'static + Send + Sync + Default,
{
    /// Subscribing to the runtime's GC events.
    type VMTracepoint: Tracepoint<Self>;
    /// Thread identity queries.
    type VMThreads: Threads<Self>;
    /// The runtime's deferred-job mechanism.
    type VMPostponedJob: PostponedJob<Self>;
    /// The receiver of published snapshots.
    type VMSubscriber: Subscriber<Self>;
    /// Runtime GC counters sampled with each record.
    type VMGcStats: GcStats<Self>;

    /// Does the runtime report [`GcEvent::CycleEnter`](crate::vm::GcEvent::CycleEnter) and
    /// [`GcEvent::CycleExit`](crate::vm::GcEvent::CycleExit)?
    ///
    /// Older runtimes only report start, end of marking and end of sweeping. For those, a cycle
    /// ends at [`GcEvent::SweepEnd`](crate::vm::GcEvent::SweepEnd), and the light counters mode
    /// is not available.
    const SUPPORTS_ENTER_EXIT: bool = true;
}
