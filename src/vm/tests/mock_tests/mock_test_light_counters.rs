use super::mock_test_prelude::*;
use std::thread::sleep;
use std::time::Duration;

/// N completed enter/exit pairs add up to their total duration and a count of N. Reading resets
/// them.
#[test]
pub fn counts_enter_exit_pairs() {
    with_mockvm(
        default_setup,
        || {
            let fixture = ObserverFixture::create_installed(ObserverMode::LightCounters);
            let installed_at = std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .unwrap()
                .as_secs_f64();

            for _ in 0..3 {
                fire(GcEvent::CycleEnter);
                sleep(Duration::from_millis(20));
                fire(GcEvent::CycleExit);
            }
            // Light mode ignores the coarse events and records nothing.
            fire_all(&[GcEvent::CycleStart, GcEvent::MarkEnd, GcEvent::SweepEnd]);
            assert_eq!(postponed_jobs(), 0);
            assert_eq!(fixture.observer().state().pool().records_allocated(), 0);

            let counters = api::read_and_reset_counters(fixture.observer()).unwrap();
            assert_eq!(counters.gc_count, 3);
            assert!(counters.gc_time_ms >= 60, "{:?}", counters);
            assert!(counters.gc_time_ms < 60_000, "{:?}", counters);
            assert!((counters.last_reset - installed_at).abs() < 5.0);

            let again = api::read_and_reset_counters(fixture.observer()).unwrap();
            assert_eq!(again.gc_count, 0);
            assert_eq!(again.gc_time_ms, 0);
            assert!(again.last_reset >= counters.last_reset);
        },
        no_cleanup,
    )
}

/// An exit without a matching enter is not counted and does not disable the observer.
#[test]
pub fn exit_without_enter() {
    with_mockvm(
        default_setup,
        || {
            let fixture = ObserverFixture::create_installed(ObserverMode::LightCounters);

            fire(GcEvent::CycleExit);
            fire_all(&[GcEvent::CycleEnter, GcEvent::CycleExit, GcEvent::CycleExit]);

            assert!(!fixture.is_disabled());
            let counters = api::read_and_reset_counters(fixture.observer()).unwrap();
            assert_eq!(counters.gc_count, 1);
        },
        no_cleanup,
    )
}
