use super::mock_test_prelude::*;

/// A second cycle start before the current cycle ended disables the observer and nothing from
/// the cycle is published.
#[test]
pub fn second_start_disables() {
    with_mockvm(
        default_setup,
        || {
            let fixture = ObserverFixture::create_installed(ObserverMode::FullSnapshot);

            fire_all(&[GcEvent::CycleStart, GcEvent::MarkEnd, GcEvent::CycleStart]);
            assert!(fixture.is_disabled());
            assert_eq!(fixture.live_records(), 0);
            assert_eq!(fixture.chains_in_use(), 0);

            // The rest of the cycle is ignored.
            fire_all(&[GcEvent::SweepEnd, GcEvent::CycleEnter, GcEvent::CycleExit]);
            assert_eq!(postponed_jobs(), 0);
            assert!(run_postponed_jobs().is_empty());
            assert!(take_published().is_empty());
        },
        no_cleanup,
    )
}

/// Entering the collector again before exiting is also an overlapping cycle.
#[test]
pub fn second_enter_disables() {
    with_mockvm(
        default_setup,
        || {
            let fixture = ObserverFixture::create_installed(ObserverMode::FullSnapshot);

            fire_all(&[GcEvent::CycleEnter, GcEvent::CycleStart, GcEvent::CycleEnter]);
            assert!(fixture.is_disabled());
            assert_eq!(fixture.live_records(), 0);
            fire(GcEvent::CycleExit);
            assert_eq!(postponed_jobs(), 0);
        },
        no_cleanup,
    )
}
