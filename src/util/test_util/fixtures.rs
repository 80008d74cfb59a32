// Some tests are conditionally compiled. So not all the code in this module will be used. We simply allow dead code in this module.
#![allow(dead_code)]

use crate::api;
use crate::util::options::ObserverMode;
use crate::util::test_util::mock_vm::MockVM;
use crate::GcObserver;
use crate::GcObserverBuilder;

/// An observer of the mock runtime. Each fixture leaks its observer, since the mock runtime's
/// tracepoints refer to it with a `'static` lifetime. Observers are not shared between tests, so
/// a latch tripped in one test does not affect another.
pub struct ObserverFixture {
    pub observer: &'static GcObserver<MockVM>,
}

impl ObserverFixture {
    pub fn create() -> Self {
        Self::create_with_builder(|_| {})
    }

    /// Create an observer with options set through the builder. Environment variables are ignored.
    pub fn create_with_builder<F>(initialize_builder: F) -> Self
    where
        F: FnOnce(&mut GcObserverBuilder),
    {
        let mut builder = GcObserverBuilder::new_no_env_vars();
        initialize_builder(&mut builder);
        let observer = Box::leak(api::observer_init::<MockVM>(&builder));
        ObserverFixture { observer }
    }

    /// Create an observer and install it in the given mode.
    pub fn create_installed(mode: ObserverMode) -> Self {
        let fixture = Self::create();
        fixture.install(mode);
        fixture
    }

    pub fn install(&self, mode: ObserverMode) {
        api::install_observer(self.observer, mode).unwrap();
    }

    pub fn observer(&self) -> &'static GcObserver<MockVM> {
        self.observer
    }

    pub fn is_disabled(&self) -> bool {
        api::is_observer_disabled(self.observer)
    }

    /// Records appended to chains of this observer and not yet released.
    pub fn live_records(&self) -> usize {
        self.observer.state().pool().live_records()
    }

    /// Chain buffers of this observer currently in use.
    pub fn chains_in_use(&self) -> usize {
        let pool = self.observer.state().pool();
        pool.chains() - pool.free_chains()
    }
}
