use super::prelude::*;

/// Thread identity queries. Both functions are called from inside the GC hook, so they must not
/// allocate.
pub trait Threads<VM: VMBinding> {
    /// Is the current thread the runtime's main thread?
    fn is_main_thread() -> bool;

    /// A stable identifier for the current thread.
    fn current_thread_id() -> u64;

    /// The thread the current GC event is observed on.
    fn origin_thread() -> OriginThread {
        if Self::is_main_thread() {
            OriginThread::Main
        } else {
            OriginThread::Thread(Self::current_thread_id())
        }
    }
}
