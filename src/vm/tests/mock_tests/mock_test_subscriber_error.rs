use super::mock_test_prelude::*;
use std::io;

/// A failing subscriber stops the walk. The error reports how far delivery got, and the records
/// not delivered are released.
#[test]
pub fn subscriber_error_stops_publication() {
    with_mockvm(
        || MockVM {
            raw_snapshot: MockMethod::new_sequence(vec![
                Box::new(|snapshot| -> SubscriberResult {
                    record_published(snapshot);
                    Ok(())
                }),
                Box::new(|_| -> SubscriberResult {
                    Err(io::Error::new(io::ErrorKind::Other, "callback raised").into())
                }),
            ]),
            ..MockVM::default()
        },
        || {
            let fixture = ObserverFixture::create_installed(ObserverMode::FullSnapshot);

            fire_all(&[
                GcEvent::CycleStart,
                GcEvent::MarkEnd,
                GcEvent::SweepEnd,
                GcEvent::CycleEnter,
                GcEvent::CycleExit,
            ]);
            let mut results = run_postponed_jobs();
            let err = results.pop().unwrap().unwrap_err();
            assert_eq!(err.delivered, 1);
            assert_eq!(err.remaining, 3);
            assert_eq!(err.source.to_string(), "callback raised");

            assert_eq!(take_published().len(), 1);
            assert_eq!(fixture.live_records(), 0);
            assert_eq!(fixture.chains_in_use(), 0);
            assert_eq!(api::cycles_published(fixture.observer()), 0);
            // Subscriber errors are the application's, the observer keeps going.
            assert!(!fixture.is_disabled());
        },
        no_cleanup,
    )
}
