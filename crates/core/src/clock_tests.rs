// SPDX-License-Identifier: MIT

use super::*;
use chrono::TimeZone;

#[test]
fn fake_clock_formats_canonical_timestamp() {
    let clock = FakeClock::new();
    clock.set(Utc.with_ymd_and_hms(2026, 1, 2, 3, 4, 5).unwrap());
    assert_eq!(clock.now_string(), "2026-01-02 03:04:05");
}

#[test]
fn fake_clock_advances() {
    let clock = FakeClock::new();
    clock.set(Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap());
    clock.advance(chrono::Duration::seconds(90));
    assert_eq!(clock.now_string(), "2026-01-01 00:01:30");
}
