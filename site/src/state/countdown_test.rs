use chrono::{Duration, TimeZone};

use super::*;

fn target() -> DateTime<FixedOffset> {
    DateTime::parse_from_rfc3339("2025-07-21T19:00:00+05:30").unwrap()
}

fn at(offset_secs: i64) -> DateTime<Utc> {
    target().with_timezone(&Utc) + Duration::seconds(offset_secs)
}

// =============================================================
// Countdown::between
// =============================================================

#[test]
fn splits_remaining_seconds_into_units() {
    // 2 days, 3 hours, 4 minutes, 5 seconds before the target.
    let before = 2 * 86_400 + 3 * 3_600 + 4 * 60 + 5;
    let countdown = Countdown::between(target(), at(-before)).unwrap();
    assert_eq!(countdown, Countdown { days: 2, hours: 3, minutes: 4, seconds: 5 });
}

#[test]
fn hours_minutes_seconds_wrap() {
    let countdown = Countdown::between(target(), at(-(86_400 - 1))).unwrap();
    assert_eq!(countdown, Countdown { days: 0, hours: 23, minutes: 59, seconds: 59 });
}

#[test]
fn reached_or_passed_target_yields_none() {
    assert_eq!(Countdown::between(target(), at(0)), None);
    assert_eq!(Countdown::between(target(), at(30)), None);
}

#[test]
fn sub_second_remainder_is_still_running() {
    let now = target().with_timezone(&Utc) - Duration::milliseconds(400);
    assert_eq!(Countdown::between(target(), now), Some(Countdown::default()));
}

#[test]
fn target_in_other_offset_compares_instants() {
    let now = Utc.with_ymd_and_hms(2025, 7, 21, 13, 29, 0).unwrap();
    let countdown = Countdown::between(target(), now).unwrap();
    assert_eq!(countdown, Countdown { days: 0, hours: 0, minutes: 1, seconds: 0 });
}

// =============================================================
// CountdownState::tick
// =============================================================

#[test]
fn ten_second_countdown_freezes_at_zero() {
    let mut state = CountdownState::new(target(), at(-10));
    assert_eq!(state.remaining.seconds, 10);
    assert!(!state.finished);

    for secs in -9..0 {
        assert!(state.tick(at(secs)));
    }
    assert_eq!(state.remaining.seconds, 1);

    assert!(!state.tick(at(1)));
    assert!(state.finished);
    assert_eq!(state.remaining, Countdown::default());

    // Later ticks do not move it, even if the clock jumps backwards.
    assert!(!state.tick(at(5)));
    assert!(!state.tick(at(-100)));
    assert_eq!(state.remaining, Countdown::default());
    assert!(state.finished);
}

#[test]
fn new_after_target_starts_finished() {
    let state = CountdownState::new(target(), at(60));
    assert!(state.finished);
    assert_eq!(state.remaining, Countdown::default());
}
