use super::mock_test_prelude::*;

/// Installing light mode resets the counters, even when light mode was already active.
#[test]
pub fn switching_to_light_resets_counters() {
    with_mockvm(
        default_setup,
        || {
            let fixture = ObserverFixture::create_installed(ObserverMode::LightCounters);
            fire_all(&[GcEvent::CycleEnter, GcEvent::CycleExit]);
            fire_all(&[GcEvent::CycleEnter, GcEvent::CycleExit]);

            fixture.install(ObserverMode::LightCounters);
            let counters = api::read_and_reset_counters(fixture.observer()).unwrap();
            assert_eq!(counters.gc_count, 0);
            assert_eq!(counters.gc_time_ms, 0);
        },
        no_cleanup,
    )
}

/// A cycle recorded halfway in full mode is dropped when the mode changes, and the new mode takes
/// effect for the next event.
#[test]
pub fn switching_modes_drops_partial_cycle() {
    with_mockvm(
        default_setup,
        || {
            let fixture = ObserverFixture::create_installed(ObserverMode::FullSnapshot);
            fire_all(&[GcEvent::CycleEnter, GcEvent::CycleStart]);
            assert_eq!(fixture.live_records(), 2);

            fixture.install(ObserverMode::LightCounters);
            assert_eq!(fixture.observer().state().mode(), ObserverMode::LightCounters);
            assert_eq!(fixture.live_records(), 0);
            assert_eq!(fixture.chains_in_use(), 0);

            fire_all(&[GcEvent::CycleEnter, GcEvent::CycleExit]);
            assert_eq!(postponed_jobs(), 0);
            let counters = api::read_and_reset_counters(fixture.observer()).unwrap();
            assert_eq!(counters.gc_count, 1);

            // And back to full mode.
            fixture.install(ObserverMode::FullSnapshot);
            fire_all(&[GcEvent::CycleEnter, GcEvent::CycleExit]);
            assert_eq!(postponed_jobs(), 1);
            assert!(!fixture.is_disabled());
        },
        no_cleanup,
    )
}

/// Reinstalling light mode between an enter and its exit forgets the enter, so the exit is not
/// counted.
#[test]
pub fn reinstalling_light_forgets_pending_enter() {
    with_mockvm(
        default_setup,
        || {
            let fixture = ObserverFixture::create_installed(ObserverMode::LightCounters);
            fire(GcEvent::CycleEnter);
            std::thread::sleep(std::time::Duration::from_millis(20));

            fixture.install(ObserverMode::LightCounters);
            fire(GcEvent::CycleExit);

            let counters = api::read_and_reset_counters(fixture.observer()).unwrap();
            assert_eq!(counters.gc_count, 0);
            assert_eq!(counters.gc_time_ms, 0);
            assert!(!fixture.is_disabled());
        },
        no_cleanup,
    )
}
