// Mock tests can be placed anywhere in the source directory `src` or the test directory `tests`.
// * They need to be conditional compiled when the feature `mock_test` is enabled. Otherwise they cannot access `MockVM`.
// * They should have the prefix 'mock_test_' in their file name so they will be picked up by the CI testing scripts.

// Common includes for mock tests.
pub(crate) mod mock_test_prelude {
    pub use crate::api;
    pub use crate::util::opaque_pointer::*;
    pub use crate::util::options::ObserverMode;
    pub use crate::util::record::{GcPhase, OriginThread};
    pub use crate::util::test_util::fixtures::*;
    pub use crate::util::test_util::mock_method::*;
    pub use crate::util::test_util::mock_vm::*;
    pub use crate::vm::*;
}

mod mock_test_disabled_observer;
mod mock_test_full_cycle;
mod mock_test_light_counters;
mod mock_test_mode_switch;
mod mock_test_os_failure;
mod mock_test_pool_exhaustion;
mod mock_test_reentrant_cycle;
mod mock_test_schedule_failure;
mod mock_test_subscriber_error;
