use super::mock_test_prelude::*;

/// Once disabled, the hook does nothing: no probes, no runtime calls, no records.
#[test]
pub fn disabled_observer_is_inert() {
    with_mockvm(
        default_setup,
        || {
            let fixture = ObserverFixture::create_installed(ObserverMode::FullSnapshot);
            fire_all(&[GcEvent::CycleStart, GcEvent::CycleStart]);
            assert!(fixture.is_disabled());

            let samples = read_mockvm(|mock| mock.sample_gc_stats.call_count());
            let thread_queries = read_mockvm(|mock| mock.is_main_thread.call_count());

            fire_all(&[
                GcEvent::CycleStart,
                GcEvent::MarkEnd,
                GcEvent::SweepEnd,
                GcEvent::CycleEnter,
                GcEvent::CycleExit,
            ]);

            assert_eq!(read_mockvm(|mock| mock.sample_gc_stats.call_count()), samples);
            assert_eq!(
                read_mockvm(|mock| mock.is_main_thread.call_count()),
                thread_queries
            );
            assert!(!read_mockvm(|mock| mock.register_postponed_job.is_called()));
            assert_eq!(fixture.live_records(), 0);
            assert_eq!(fixture.observer().state().pool().records_allocated(), 1);
        },
        no_cleanup,
    )
}

/// Reinstalling does not reopen the latch, in either mode.
#[test]
pub fn reinstall_does_not_reenable() {
    with_mockvm(
        default_setup,
        || {
            let fixture = ObserverFixture::create_installed(ObserverMode::FullSnapshot);
            fire_all(&[GcEvent::CycleEnter, GcEvent::CycleEnter]);
            assert!(fixture.is_disabled());

            fixture.install(ObserverMode::FullSnapshot);
            assert!(fixture.is_disabled());
            fire_all(&[GcEvent::CycleEnter, GcEvent::CycleExit]);
            assert_eq!(postponed_jobs(), 0);

            fixture.install(ObserverMode::LightCounters);
            fire_all(&[GcEvent::CycleEnter, GcEvent::CycleExit]);
            let counters = api::read_and_reset_counters(fixture.observer()).unwrap();
            assert_eq!(counters.gc_count, 0);
        },
        no_cleanup,
    )
}
