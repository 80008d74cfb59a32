use super::mock_test_prelude::*;

/// A chain with room for one record overflows on the second record of the cycle. The observer is
/// disabled, nothing is published and every record is released.
#[test]
pub fn chain_full_on_second_record() {
    with_mockvm(
        default_setup,
        || {
            let fixture = ObserverFixture::create_with_builder(|builder| {
                assert!(builder.set_option("max_records_per_cycle", "1"));
            });
            fixture.install(ObserverMode::FullSnapshot);

            fire_all(&[GcEvent::CycleStart, GcEvent::MarkEnd]);
            assert!(fixture.is_disabled());

            fire_all(&[GcEvent::SweepEnd, GcEvent::CycleEnter, GcEvent::CycleExit]);
            assert_eq!(postponed_jobs(), 0);
            assert!(take_published().is_empty());

            let pool = fixture.observer().state().pool();
            assert_eq!(pool.records_allocated(), 1);
            assert_eq!(pool.records_allocated(), pool.records_released());
            assert_eq!(fixture.chains_in_use(), 0);
        },
        no_cleanup,
    )
}

/// When every chain is waiting to be published, the next cycle has nowhere to go. Cycles already
/// handed to the runtime are still delivered.
#[test]
pub fn no_free_chain() {
    with_mockvm(
        default_setup,
        || {
            let fixture = ObserverFixture::create_with_builder(|builder| {
                assert!(builder.set_option("chain_pool_size", "1"));
            });
            fixture.install(ObserverMode::FullSnapshot);

            fire_all(&[GcEvent::CycleEnter, GcEvent::CycleExit]);
            assert_eq!(postponed_jobs(), 1);
            assert_eq!(fixture.chains_in_use(), 1);

            fire(GcEvent::CycleEnter);
            assert!(fixture.is_disabled());

            let results = run_postponed_jobs();
            assert_eq!(*results[0].as_ref().unwrap(), 2);
            assert_eq!(take_published().len(), 2);
            assert_eq!(fixture.live_records(), 0);
            assert_eq!(fixture.chains_in_use(), 0);
        },
        no_cleanup,
    )
}
