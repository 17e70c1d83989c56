//! Domain normalizers turning raw logs into a 0–100 score.
//!
//! Each normalizer is pure and only reads its inputs. A malformed entry
//! (negative or non-finite minutes, out-of-range sleep quality) contributes
//! nothing instead of poisoning the whole score.

use chrono::{Datelike, Days, NaiveDate};
use tracing::debug;

use super::domain::{ExerciseLog, MeditationLog, MoodLog, SleepLog};

pub(crate) const MAX_SCORE: f64 = 100.0;
const SLEEP_WINDOW_DAYS: u64 = 7;
const SLEEP_DURATION_WEIGHT: f64 = 0.7;
const SLEEP_QUALITY_WEIGHT: f64 = 0.3;
const SLEEP_QUALITY_RANGE: std::ops::RangeInclusive<f64> = 1.0..=10.0;
const SECONDS_PER_HOUR: f64 = 3600.0;
const HOURS_PER_DAY: f64 = 24.0;

/// Progress toward the weekly exercise goal for the current week so far.
///
/// Weeks start on Sunday; logs dated after `today` are not counted.
pub fn fitness_score(
    logs: &[ExerciseLog],
    weekly_goal_minutes: Option<f64>,
    today: NaiveDate,
) -> f64 {
    let Some(goal) = positive_target(weekly_goal_minutes) else {
        return 0.0;
    };

    let week_start = week_start(today);
    let this_week: Vec<&ExerciseLog> = logs
        .iter()
        .filter(|log| log.date >= week_start && log.date <= today)
        .collect();
    if this_week.is_empty() {
        return 0.0;
    }

    let total_minutes: f64 = this_week
        .iter()
        .map(|log| minutes_contribution("exercise", log.date, log.duration_minutes))
        .sum();

    progress_ratio(total_minutes, goal)
}

/// Blend of average sleep duration against the nightly goal and average quality,
/// over the trailing seven days including `today`.
pub fn sleep_score(logs: &[SleepLog], nightly_goal_hours: Option<f64>, today: NaiveDate) -> f64 {
    let Some(goal) = positive_target(nightly_goal_hours) else {
        return 0.0;
    };

    let window_start = days_before(today, SLEEP_WINDOW_DAYS - 1);
    let recent: Vec<&SleepLog> = logs
        .iter()
        .filter(|log| log.date >= window_start && log.date <= today)
        .filter(|log| {
            let valid = log.quality.is_finite() && SLEEP_QUALITY_RANGE.contains(&log.quality);
            if !valid {
                debug!(
                    date = %log.date,
                    quality = log.quality,
                    "skipping sleep log with invalid quality"
                );
            }
            valid
        })
        .collect();
    if recent.is_empty() {
        return 0.0;
    }

    let count = recent.len() as f64;
    let avg_duration = recent.iter().map(|log| sleep_hours(log)).sum::<f64>() / count;
    let avg_quality = recent.iter().map(|log| log.quality).sum::<f64>() / count;

    let duration_score = MAX_SCORE * avg_duration / goal;
    let quality_score = avg_quality / 10.0 * MAX_SCORE;
    let blended = SLEEP_DURATION_WEIGHT * duration_score + SLEEP_QUALITY_WEIGHT * quality_score;

    finite_or_zero(blended).clamp(0.0, MAX_SCORE)
}

/// All-time average mood rescaled from the 1–5 scale to 0–100.
pub fn mood_score(logs: &[MoodLog]) -> f64 {
    if logs.is_empty() {
        return 0.0;
    }

    let avg = logs.iter().map(|log| log.mood.value()).sum::<f64>() / logs.len() as f64;
    finite_or_zero(MAX_SCORE * (avg - 1.0) / 4.0).clamp(0.0, MAX_SCORE)
}

/// Progress toward the meditation goal over every supplied log.
///
/// Callers choose the window by filtering `logs` beforehand.
pub fn meditation_score(logs: &[MeditationLog], goal_minutes: Option<f64>) -> f64 {
    let Some(goal) = positive_target(goal_minutes) else {
        return 0.0;
    };
    if logs.is_empty() {
        return 0.0;
    }

    let total_minutes: f64 = logs
        .iter()
        .map(|log| minutes_contribution("meditation", log.date, log.duration_minutes))
        .sum();

    progress_ratio(total_minutes, goal)
}

/// Most recent Sunday on or before `today`.
pub(crate) fn week_start(today: NaiveDate) -> NaiveDate {
    days_before(today, u64::from(today.weekday().num_days_from_sunday()))
}

/// `today` minus `days`, saturating at the earliest representable date.
pub(crate) fn days_before(today: NaiveDate, days: u64) -> NaiveDate {
    today.checked_sub_days(Days::new(days)).unwrap_or(NaiveDate::MIN)
}

fn sleep_hours(log: &SleepLog) -> f64 {
    let seconds = log.waketime.signed_duration_since(log.bedtime).num_seconds() as f64;
    let hours = seconds / SECONDS_PER_HOUR;
    if hours < 0.0 {
        hours + HOURS_PER_DAY
    } else {
        hours
    }
}

fn positive_target(target: Option<f64>) -> Option<f64> {
    target.filter(|value| value.is_finite() && *value > 0.0)
}

fn minutes_contribution(kind: &str, date: NaiveDate, minutes: f64) -> f64 {
    if minutes.is_finite() && minutes >= 0.0 {
        minutes
    } else {
        debug!(kind, %date, minutes, "ignoring malformed duration");
        0.0
    }
}

fn progress_ratio(total: f64, goal: f64) -> f64 {
    finite_or_zero(MAX_SCORE * total / goal).clamp(0.0, MAX_SCORE)
}

pub(crate) fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}
