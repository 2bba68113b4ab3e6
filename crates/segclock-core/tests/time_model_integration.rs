//! Integration tests for the time display model.

use chrono::{DateTime, Duration, TimeZone, Utc};
use proptest::prelude::*;
use segclock_core::{current_text, format_hms, DisplayMode, TimeSource, TimerState};

fn t0() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap()
}

fn parse_hms(text: &str) -> (u64, u64, u64) {
    let parts: Vec<u64> = text.split(':').map(|p| p.parse().unwrap()).collect();
    assert_eq!(parts.len(), 3, "expected HH:MM:SS, got {text}");
    (parts[0], parts[1], parts[2])
}

proptest! {
    #[test]
    fn format_decomposes_exactly(total in 0u64..10_000_000) {
        let text = format_hms(total);
        let (h, m, s) = parse_hms(&text);
        prop_assert_eq!(h * 3600 + m * 60 + s, total);
        prop_assert!(m < 60);
        prop_assert!(s < 60);
        let fields: Vec<&str> = text.split(':').collect();
        prop_assert!(fields[0].len() >= 2);
        prop_assert_eq!(fields[1].len(), 2);
        prop_assert_eq!(fields[2].len(), 2);
    }

    #[test]
    fn reset_always_reads_zero(run_ms in 0i64..100_000_000, extra_ms in 0i64..10_000_000) {
        let mut state = TimerState::new();
        state.start(t0());
        state.stop(t0() + Duration::milliseconds(run_ms));
        state.start(t0() + Duration::milliseconds(run_ms));
        state.reset(t0() + Duration::milliseconds(run_ms + extra_ms));
        let later = t0() + Duration::milliseconds(run_ms + 2 * extra_ms);
        prop_assert_eq!(current_text(DisplayMode::Stopwatch, &state, &later), "00:00:00");
    }

    #[test]
    fn stop_start_pairs_never_lose_time(spans in proptest::collection::vec(0i64..3_600_000, 1..20)) {
        let mut state = TimerState::new();
        let mut now = t0();
        state.start(now);
        for span in &spans {
            now += Duration::milliseconds(*span);
            state.stop(now);
            state.start(now);
        }
        let total: i64 = spans.iter().sum();
        prop_assert_eq!(state.elapsed_ms(now), total as u64);
    }
}

#[test]
fn stopwatch_scenario_truncates_partial_seconds() {
    let mut sw = TimeSource::new(DisplayMode::Stopwatch);
    sw.start(t0());
    sw.stop(t0() + Duration::milliseconds(5_400));
    assert_eq!(sw.current_text(&(t0() + Duration::seconds(60))), "00:00:05");
}

#[test]
fn elapsed_beyond_a_hundred_hours() {
    let mut sw = TimeSource::new(DisplayMode::Timer);
    sw.start(t0());
    let later = t0() + Duration::hours(123) + Duration::seconds(4);
    assert_eq!(sw.current_text(&later), "123:00:04");
}

#[test]
fn missed_ticks_do_not_drift() {
    let mut sw = TimeSource::new(DisplayMode::Stopwatch);
    sw.start(t0());
    // Only two ticks delivered across ten minutes, as when minimised.
    sw.tick(t0() + Duration::seconds(1));
    sw.tick(t0() + Duration::minutes(10));
    assert_eq!(sw.current_text(&(t0() + Duration::minutes(10))), "00:10:00");
}

#[test]
fn clock_scenario_at_midnight() {
    let state = TimerState::new();
    let before = Utc.with_ymd_and_hms(2024, 12, 31, 23, 59, 59).unwrap();
    assert_eq!(current_text(DisplayMode::Clock, &state, &before), "23:59:59");
    let after = before + Duration::seconds(1);
    assert_eq!(current_text(DisplayMode::Clock, &state, &after), "00:00:00");
}
