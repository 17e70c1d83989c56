use super::common::*;
use crate::scoring::{fitness_score, meditation_score, mood_score, sleep_score};

fn approx(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-6,
        "expected {expected}, got {actual}"
    );
}

#[test]
fn fitness_scores_minutes_logged_this_week() {
    let logs = vec![exercise(days_ago(1), 45.0), exercise(days_ago(3), 30.0)];
    approx(fitness_score(&logs, Some(150.0), today()), 50.0);
}

#[test]
fn fitness_ignores_logs_from_previous_weeks() {
    // 2025-03-08 is the Saturday before the current week.
    let logs = vec![exercise(days_ago(4), 120.0), exercise(days_ago(0), 30.0)];
    approx(fitness_score(&logs, Some(150.0), today()), 20.0);
}

#[test]
fn fitness_caps_at_one_hundred() {
    let logs = vec![exercise(days_ago(0), 400.0)];
    approx(fitness_score(&logs, Some(150.0), today()), 100.0);
}

#[test]
fn fitness_without_goal_or_logs_is_zero() {
    let logs = vec![exercise(days_ago(0), 60.0)];
    approx(fitness_score(&logs, None, today()), 0.0);
    approx(fitness_score(&logs, Some(0.0), today()), 0.0);
    approx(fitness_score(&[], Some(150.0), today()), 0.0);
}

#[test]
fn fitness_skips_malformed_durations() {
    let logs = vec![
        exercise(days_ago(0), f64::NAN),
        exercise(days_ago(1), -30.0),
        exercise(days_ago(2), 75.0),
    ];
    approx(fitness_score(&logs, Some(150.0), today()), 50.0);
}

#[test]
fn sleep_blends_duration_and_quality() {
    let logs = vec![sleep(days_ago(1), time(23, 0), time(7, 0), 8.0)];
    approx(sleep_score(&logs, Some(8.0), today()), 94.0);
}

#[test]
fn sleep_averages_over_the_trailing_week() {
    let logs = vec![
        sleep(days_ago(0), time(22, 0), time(6, 0), 10.0),
        sleep(days_ago(6), time(0, 30), time(4, 30), 6.0),
        sleep(days_ago(7), time(23, 0), time(3, 0), 1.0),
    ];
    // avg duration 6h -> 75, avg quality 8 -> 80
    approx(sleep_score(&logs, Some(8.0), today()), 0.7 * 75.0 + 0.3 * 80.0);
}

#[test]
fn sleep_caps_at_one_hundred() {
    let logs = vec![sleep(days_ago(0), time(20, 0), time(10, 0), 10.0)];
    approx(sleep_score(&logs, Some(6.0), today()), 100.0);
}

#[test]
fn sleep_skips_entries_with_invalid_quality() {
    let logs = vec![
        sleep(days_ago(0), time(23, 0), time(7, 0), 8.0),
        sleep(days_ago(1), time(23, 0), time(1, 0), 42.0),
        sleep(days_ago(2), time(23, 0), time(1, 0), f64::NAN),
    ];
    approx(sleep_score(&logs, Some(8.0), today()), 94.0);
}

#[test]
fn sleep_without_goal_or_recent_logs_is_zero() {
    let logs = vec![sleep(days_ago(1), time(23, 0), time(7, 0), 8.0)];
    approx(sleep_score(&logs, None, today()), 0.0);
    let stale = vec![sleep(days_ago(10), time(23, 0), time(7, 0), 8.0)];
    approx(sleep_score(&stale, Some(8.0), today()), 0.0);
}

#[test]
fn mood_rescales_the_all_time_average() {
    let logs = vec![
        mood(days_ago(0), "happy"),
        mood(days_ago(1), "okay"),
        mood(days_ago(300), "sad"),
    ];
    approx(mood_score(&logs), 100.0 * (11.0 / 3.0 - 1.0) / 4.0);
}

#[test]
fn mood_extremes_map_to_bounds() {
    approx(mood_score(&[mood(days_ago(0), "angry")]), 0.0);
    approx(mood_score(&[mood(days_ago(0), "happy")]), 100.0);
    approx(mood_score(&[]), 0.0);
}

#[test]
fn unrecognized_mood_counts_as_neutral() {
    approx(mood_score(&[mood(days_ago(0), "bewildered")]), 50.0);
}

#[test]
fn meditation_sums_every_supplied_log() {
    let logs = vec![meditation(days_ago(0), 20.0), meditation(days_ago(60), 15.0)];
    approx(meditation_score(&logs, Some(70.0)), 50.0);
}

#[test]
fn meditation_without_goal_is_zero() {
    let logs = vec![meditation(days_ago(0), 300.0)];
    approx(meditation_score(&logs, None), 0.0);
    approx(meditation_score(&logs, Some(-5.0)), 0.0);
}

#[test]
fn fitness_ignores_logs_dated_after_today() {
    // 2025-03-15 is the Saturday closing the current week.
    let logs = vec![exercise(days_ago(-3), 75.0)];
    approx(fitness_score(&logs, Some(150.0), today()), 0.0);

    let logs = vec![exercise(days_ago(-3), 75.0), exercise(days_ago(0), 30.0)];
    approx(fitness_score(&logs, Some(150.0), today()), 20.0);
}

#[test]
fn windows_at_the_calendar_limits_do_not_panic() {
    use chrono::NaiveDate;

    for limit in [NaiveDate::MIN, NaiveDate::MAX] {
        let exercises = vec![exercise(limit, 75.0)];
        approx(fitness_score(&exercises, Some(150.0), limit), 50.0);

        let nights = vec![sleep(limit, time(23, 0), time(7, 0), 8.0)];
        approx(sleep_score(&nights, Some(8.0), limit), 94.0);
    }
}
