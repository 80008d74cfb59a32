use super::prelude::*;

/// Subscribing to the runtime's GC events.
///
/// The runtime owns the subscription. The observer keeps the returned [`TracepointHandle`] and
/// hands it back to enable or disable delivery.
pub trait Tracepoint<VM: VMBinding> {
    /// Create a disabled subscription that delivers the given events to `hook`. Return `None` if
    /// the runtime refuses to create one.
    ///
    /// The runtime calls [`GcEventHook::call`] once per event, inside the collector.
    fn new_tracepoint(events: GcEventSet, hook: GcEventHook<VM>) -> Option<TracepointHandle>;

    /// Start delivering events for the subscription.
    fn enable(handle: TracepointHandle);

    /// Stop delivering events for the subscription. Once this returns, the hook of the subscription
    /// must not be called again.
    fn disable(handle: TracepointHandle);
}
