use super::mock_test_prelude::*;
use crate::util::measure;

/// An OS query failing in the middle of a cycle disables the observer, and the partial cycle
/// is released without being published.
#[test]
pub fn failed_os_query_disables_observer() {
    with_mockvm(
        default_setup,
        || {
            let fixture = ObserverFixture::create_installed(ObserverMode::FullSnapshot);
            fire(GcEvent::CycleStart);
            assert_eq!(fixture.live_records(), 1);
            assert!(!fixture.is_disabled());

            measure::set_os_queries_failing(true);
            fire(GcEvent::MarkEnd);
            measure::set_os_queries_failing(false);

            assert!(fixture.is_disabled());
            assert_eq!(fixture.live_records(), 0);
            assert_eq!(fixture.chains_in_use(), 0);
            assert_eq!(postponed_jobs(), 0);

            // The rest of the cycle is ignored.
            fire_all(&[GcEvent::SweepEnd, GcEvent::CycleExit]);
            assert_eq!(fixture.live_records(), 0);
            assert_eq!(postponed_jobs(), 0);
        },
        || measure::set_os_queries_failing(false),
    )
}
