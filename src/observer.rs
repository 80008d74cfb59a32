use crate::global_state::ObserverState;
use crate::util::opaque_pointer::TracepointHandle;
use crate::util::options::Options;
use crate::vm::VMBinding;
use std::marker::PhantomData;
use std::sync::{Arc, Mutex};

/// GcObserverBuilder is used for creating a [`GcObserver`] instance.
/// The options are read from `GC_OBSERVER_*` environment variables on creation and can be changed
/// with [`GcObserverBuilder::set_option`] before [`GcObserverBuilder::build`].
pub struct GcObserverBuilder {
    /// The options for this instance.
    pub options: Options,
}

impl GcObserverBuilder {
    /// Create a builder with options read from environment variables.
    pub fn new() -> Self {
        GcObserverBuilder {
            options: Options::default(),
        }
    }

    /// Create a builder with default options, ignoring environment variables.
    pub fn new_no_env_vars() -> Self {
        GcObserverBuilder {
            options: Options::without_env_vars(),
        }
    }

    /// Set an option by name. Return false (and log a warning) if the name is unknown or the value
    /// cannot be parsed or is invalid.
    pub fn set_option(&mut self, name: &str, val: &str) -> bool {
        self.options.set_from_str(name, val)
    }

    /// Build an observer. This preallocates the record storage.
    pub fn build<VM: VMBinding>(&self) -> GcObserver<VM> {
        GcObserver::new(Arc::new(self.options.clone()))
    }
}

impl Default for GcObserverBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// An observer of one runtime's garbage collector.
///
/// The GC hook keeps a reference to the observer for as long as a tracepoint may deliver events,
/// so observers that get installed live for `'static`. [`crate::api::observer_init`] returns a
/// box the binding can leak.
pub struct GcObserver<VM: VMBinding> {
    pub(crate) options: Arc<Options>,
    pub(crate) state: ObserverState,
    /// The tracepoint registration, if installed. Only touched from application context.
    pub(crate) tracepoint: Mutex<Option<TracepointHandle>>,
    _binding: PhantomData<VM>,
}

impl<VM: VMBinding> GcObserver<VM> {
    pub(crate) fn new(options: Arc<Options>) -> Self {
        let state = ObserverState::new(&options);
        debug!(
            "Created observer: {} chains of {} records",
            options.chain_pool_size, options.max_records_per_cycle
        );
        GcObserver {
            options,
            state,
            tracepoint: Mutex::new(None),
            _binding: PhantomData,
        }
    }

    /// The options this observer was built with.
    pub fn get_options(&self) -> &Options {
        &self.options
    }

    /// The state shared with the GC hook.
    pub fn state(&self) -> &ObserverState {
        &self.state
    }

    /// Has an internal failure disabled this observer?
    pub fn is_disabled(&self) -> bool {
        self.state.is_disabled()
    }

    /// Is a tracepoint registration currently held?
    pub fn is_installed(&self) -> bool {
        self.tracepoint
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .is_some()
    }
}
