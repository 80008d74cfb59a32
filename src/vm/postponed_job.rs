use super::prelude::*;

/// The runtime's deferred-job mechanism.
pub trait PostponedJob<VM: VMBinding> {
    /// Schedule `job` to run at the runtime's next safe point, where allocation and calls into the
    /// runtime are allowed. This is called from inside the GC hook and must not allocate.
    ///
    /// When the job runs, the runtime calls [`PublishJob::run`] and decides what to do with its
    /// result. If the job cannot be scheduled, hand it back in `Err`.
    fn register(job: PublishJob<VM>) -> Result<(), PublishJob<VM>>;
}
