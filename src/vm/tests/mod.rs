// All the tests with prefix 'mock_test_' and with the feature 'mock_test' use MockVM.
// Each test creates its own observer through `crate::util::test_util::fixtures`, and
// `with_mockvm` runs the tests serially since the mock runtime is shared.

#[cfg(feature = "mock_test")]
mod mock_tests;
