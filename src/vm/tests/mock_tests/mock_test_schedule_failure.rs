use super::mock_test_prelude::*;

/// If the runtime cannot schedule the publication, the cycle is released and the observer is
/// disabled.
#[test]
pub fn schedule_failure_releases_cycle() {
    with_mockvm(
        || MockVM {
            register_postponed_job: MockMethod::new_fixed(Box::new(|job| Err(job))),
            ..MockVM::default()
        },
        || {
            let fixture = ObserverFixture::create_installed(ObserverMode::FullSnapshot);

            fire_all(&[GcEvent::CycleEnter, GcEvent::MarkEnd, GcEvent::CycleExit]);
            assert!(read_mockvm(|mock| mock.register_postponed_job.is_called()));
            assert!(fixture.is_disabled());
            assert_eq!(fixture.live_records(), 0);
            assert_eq!(fixture.chains_in_use(), 0);
            assert_eq!(fixture.observer().state().cycles_scheduled(), 0);

            fire_all(&[GcEvent::CycleEnter, GcEvent::CycleExit]);
            assert_eq!(
                read_mockvm(|mock| mock.register_postponed_job.call_count()),
                1
            );
        },
        no_cleanup,
    )
}

/// A job the runtime drops without running still releases its records.
#[test]
pub fn dropped_job_releases_cycle() {
    with_mockvm(
        default_setup,
        || {
            let fixture = ObserverFixture::create_installed(ObserverMode::FullSnapshot);

            fire_all(&[GcEvent::CycleEnter, GcEvent::SweepEnd, GcEvent::CycleExit]);
            assert_eq!(fixture.live_records(), 3);

            drop_postponed_jobs();
            assert_eq!(fixture.live_records(), 0);
            assert_eq!(fixture.chains_in_use(), 0);
            assert!(take_published().is_empty());
            assert!(!fixture.is_disabled());
        },
        no_cleanup,
    )
}
