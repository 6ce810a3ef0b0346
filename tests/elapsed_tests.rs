use chrono::{DateTime, Duration as ChronoDuration, FixedOffset, TimeZone, Utc};
use rtimesince::core::clock::{Clock, FixedClock};
use rtimesince::core::elapsed::{Elapsed, Sign};
use rtimesince::utils::elapsed2readable;

fn at(s: &str) -> DateTime<FixedOffset> {
    DateTime::parse_from_rfc3339(s).expect("valid rfc3339")
}

#[test]
fn test_one_hour_thirty_minutes_ago() {
    let now = at("2026-10-19T12:00:00+02:00");
    let reference = now - ChronoDuration::minutes(90);

    let e = Elapsed::between(&reference, &now);
    assert_eq!(e.sign, Sign::Positive);
    assert_eq!((e.days, e.hours, e.minutes, e.seconds), (0, 1, 30, 0));
}

#[test]
fn test_reference_in_the_future_is_negative() {
    let now = at("2026-10-19T12:00:00+02:00");
    let reference = now + ChronoDuration::seconds(5);

    let e = Elapsed::between(&reference, &now);
    assert_eq!(e.sign, Sign::Negative);
    assert!(e.is_negative());
    assert_eq!((e.days, e.hours, e.minutes, e.seconds), (0, 0, 0, 5));
    assert_eq!(e.total_seconds(), -5);
}

#[test]
fn test_same_instant_is_zero_positive() {
    let now = at("2026-10-19T12:00:00Z");
    let e = Elapsed::between(&now, &now);
    assert_eq!(e, Elapsed::from_seconds(0));
    assert_eq!(e.sign, Sign::Positive);
}

#[test]
fn test_fields_never_exceed_their_modulus() {
    let now = at("2026-10-19T12:00:00Z");
    let reference = now
        - ChronoDuration::days(3)
        - ChronoDuration::hours(23)
        - ChronoDuration::minutes(59)
        - ChronoDuration::seconds(59);

    let e = Elapsed::between(&reference, &now);
    assert_eq!((e.days, e.hours, e.minutes, e.seconds), (3, 23, 59, 59));

    let e = Elapsed::between(&(reference - ChronoDuration::seconds(1)), &now);
    assert_eq!((e.days, e.hours, e.minutes, e.seconds), (4, 0, 0, 0));
}

#[test]
fn test_offsets_do_not_matter() {
    // same instant expressed in two zones
    let reference = at("2026-10-19T10:00:00+02:00");
    let now = Utc.with_ymd_and_hms(2026, 10, 19, 9, 0, 0).unwrap();

    let e = Elapsed::between(&reference, &now);
    assert_eq!((e.days, e.hours, e.minutes, e.seconds), (0, 1, 0, 0));
}

#[test]
fn test_sub_second_truncated() {
    let now = at("2026-10-19T12:00:00.900Z");
    let reference = at("2026-10-19T12:00:00Z");
    assert_eq!(Elapsed::between(&reference, &now).seconds, 0);
}

#[test]
fn test_recompute_does_not_touch_reference() {
    let reference = at("2026-10-18T12:00:00Z");
    let before = reference;

    let clock = FixedClock(at("2026-10-19T12:00:01Z"));
    let a = Elapsed::between(&reference, &clock.now());
    let b = Elapsed::between(&reference, &clock.now());

    assert_eq!(a, b);
    assert_eq!(reference, before);
    assert_eq!((a.days, a.seconds), (1, 1));
}

#[test]
fn test_readable_hides_zero_fields_except_seconds() {
    assert_eq!(elapsed2readable(&Elapsed::from_seconds(0)), "0 seconds");
    assert_eq!(elapsed2readable(&Elapsed::from_seconds(-5)), "- 5 seconds");
    assert_eq!(
        elapsed2readable(&Elapsed::from_seconds(90 * 60)),
        "1 hour 30 minutes 0 seconds"
    );
    assert_eq!(
        elapsed2readable(&Elapsed::from_seconds(2 * 86_400 + 61)),
        "2 days 1 minute 1 second"
    );
}
