use super::mock_test_prelude::*;

const FULL_CYCLE: [GcEvent; 5] = [
    GcEvent::CycleStart,
    GcEvent::MarkEnd,
    GcEvent::SweepEnd,
    GcEvent::CycleEnter,
    GcEvent::CycleExit,
];

/// One snapshot per event arrives at the subscriber, in delivery order, once the runtime runs the
/// deferred job.
#[test]
pub fn full_cycle_is_published_in_order() {
    with_mockvm(
        default_setup,
        || {
            let fixture = ObserverFixture::create_installed(ObserverMode::FullSnapshot);

            fire_all(&FULL_CYCLE);
            // Nothing is delivered from inside the collector.
            assert!(take_published().is_empty());
            assert_eq!(postponed_jobs(), 1);

            let results = run_postponed_jobs();
            assert_eq!(results.len(), 1);
            assert_eq!(*results[0].as_ref().unwrap(), 5);

            let published = take_published();
            let stages: Vec<&str> = published.iter().map(|s| s.stage()).collect();
            assert_eq!(
                stages,
                vec![
                    "GC_CYCLE_STARTED",
                    "GC_CYCLE_MARK_ENDED",
                    "GC_CYCLE_SWEEP_ENDED",
                    "GC_CYCLE_ENTERED",
                    "GC_CYCLE_EXITED"
                ]
            );
            assert_eq!(published[0].phase, GcPhase::CycleStarted);
            assert_eq!(published[4].phase, GcPhase::CycleExited);
            assert!(published
                .windows(2)
                .all(|w| w[0].timestamp <= w[1].timestamp));
            for snapshot in published.iter() {
                assert!(snapshot.is_main_thread());
                assert!(snapshot.current_rss > 0);
                assert_eq!(
                    snapshot.gc_stat,
                    vec![("count", 1), ("heap_live_slots", 2)]
                );
            }

            assert_eq!(api::cycles_published(fixture.observer()), 1);
            assert_eq!(fixture.live_records(), 0);
            assert_eq!(fixture.chains_in_use(), 0);
            assert!(!fixture.is_disabled());
        },
        no_cleanup,
    )
}

/// Consecutive cycles are published separately.
#[test]
pub fn consecutive_cycles() {
    with_mockvm(
        default_setup,
        || {
            let fixture = ObserverFixture::create_installed(ObserverMode::FullSnapshot);

            fire_all(&FULL_CYCLE);
            fire_all(&[GcEvent::CycleEnter, GcEvent::MarkEnd, GcEvent::CycleExit]);
            assert_eq!(postponed_jobs(), 2);

            let delivered: Vec<usize> = run_postponed_jobs()
                .into_iter()
                .map(|r| r.unwrap())
                .collect();
            assert_eq!(delivered, vec![5, 3]);
            assert_eq!(take_published().len(), 8);
            assert_eq!(api::cycles_published(fixture.observer()), 2);
            assert_eq!(fixture.observer().state().cycles_scheduled(), 2);
        },
        no_cleanup,
    )
}

/// Events observed off the main thread carry the runtime's thread id, and runtime stats are left
/// out when the observer is configured not to capture them.
#[test]
pub fn thread_identity_and_stats_option() {
    with_mockvm(
        || MockVM {
            is_main_thread: MockMethod::new_fixed(Box::new(|_| false)),
            ..MockVM::default()
        },
        || {
            let fixture = ObserverFixture::create_with_builder(|builder| {
                assert!(builder.set_option("capture_runtime_stats", "false"));
            });
            fixture.install(ObserverMode::FullSnapshot);

            fire_all(&FULL_CYCLE);
            run_postponed_jobs();

            let published = take_published();
            assert_eq!(published.len(), 5);
            for snapshot in published.iter() {
                assert_eq!(snapshot.thread, OriginThread::Thread(MOCK_THREAD_ID));
                assert!(snapshot.gc_stat.is_empty());
            }
            assert!(!read_mockvm(|mock| mock.sample_gc_stats.is_called()));
        },
        no_cleanup,
    )
}
