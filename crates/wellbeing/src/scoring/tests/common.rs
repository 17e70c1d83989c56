use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use chrono::{Duration, NaiveDate, NaiveTime};

use crate::scoring::{
    ActivityLogs, ComponentWeights, ExerciseLog, GoalTargets, MeditationLog, MoodLabel, MoodLog,
    ScoreEngine, ScoringConfig, SleepLog, StoreError, UserId, WeightMap, WeightStore,
    WellbeingService,
};

/// Wednesday; the fitness week runs 2025-03-09 (Sun) through 2025-03-15.
pub(super) fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, 12).expect("valid date")
}

pub(super) fn days_ago(days: i64) -> NaiveDate {
    today() - Duration::days(days)
}

pub(super) fn user() -> UserId {
    UserId("user-42".to_string())
}

pub(super) fn time(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).expect("valid time")
}

pub(super) fn exercise(date: NaiveDate, minutes: f64) -> ExerciseLog {
    ExerciseLog {
        date,
        duration_minutes: minutes,
        calories_burned: minutes * 8.0,
    }
}

pub(super) fn sleep(
    date: NaiveDate,
    bedtime: NaiveTime,
    waketime: NaiveTime,
    quality: f64,
) -> SleepLog {
    SleepLog {
        date,
        bedtime,
        waketime,
        quality,
    }
}

pub(super) fn mood(date: NaiveDate, label: &str) -> MoodLog {
    MoodLog {
        date,
        mood: MoodLabel::from(label),
        notes: None,
    }
}

pub(super) fn meditation(date: NaiveDate, minutes: f64) -> MeditationLog {
    MeditationLog {
        date,
        duration_minutes: minutes,
    }
}

pub(super) fn goals() -> GoalTargets {
    GoalTargets {
        weekly_exercise_minutes: Some(150.0),
        sleep_hours_per_night: Some(8.0),
        target_mood_score: Some(4.0),
        weekly_meditation_minutes: Some(70.0),
    }
}

/// Fitness 50, sleep 94, mood 66.67, meditation 50 against [`goals`].
pub(super) fn sample_logs() -> ActivityLogs {
    ActivityLogs {
        exercises: vec![exercise(days_ago(1), 45.0), exercise(days_ago(3), 30.0)],
        sleep_logs: vec![sleep(days_ago(1), time(23, 0), time(7, 0), 8.0)],
        moods: vec![
            mood(days_ago(0), "happy"),
            mood(days_ago(2), "okay"),
            mood(days_ago(40), "sad"),
        ],
        meditations: vec![meditation(days_ago(0), 20.0), meditation(days_ago(4), 15.0)],
    }
}

pub(super) fn weight_map(fitness: f64, sleep: f64, mood: f64, meditation: f64) -> WeightMap {
    [
        ("fitness", fitness),
        ("sleep", sleep),
        ("mood", mood),
        ("meditation", meditation),
    ]
    .into_iter()
    .map(|(key, value)| (key.to_string(), value))
    .collect()
}

pub(super) fn build_service() -> (WellbeingService<MemoryWeightStore>, Arc<MemoryWeightStore>) {
    let store = Arc::new(MemoryWeightStore::default());
    let engine = ScoreEngine::new(ScoringConfig::default());
    let service = WellbeingService::new(store.clone(), engine);
    (service, store)
}

#[derive(Default, Clone)]
pub(super) struct MemoryWeightStore {
    pub(super) records: Arc<Mutex<HashMap<UserId, ComponentWeights>>>,
}

impl MemoryWeightStore {
    pub(super) fn stored(&self, user_id: &UserId) -> Option<ComponentWeights> {
        self.records
            .lock()
            .expect("store mutex poisoned")
            .get(user_id)
            .copied()
    }
}

impl WeightStore for MemoryWeightStore {
    fn load(&self, user_id: &UserId) -> Result<Option<ComponentWeights>, StoreError> {
        Ok(self.stored(user_id))
    }

    fn save(&self, user_id: &UserId, weights: ComponentWeights) -> Result<(), StoreError> {
        let mut guard = self.records.lock().expect("store mutex poisoned");
        guard.insert(user_id.clone(), weights);
        Ok(())
    }
}

pub(super) struct UnavailableStore;

impl WeightStore for UnavailableStore {
    fn load(&self, _user_id: &UserId) -> Result<Option<ComponentWeights>, StoreError> {
        Err(StoreError::Unavailable("connection refused".to_string()))
    }

    fn save(&self, _user_id: &UserId, _weights: ComponentWeights) -> Result<(), StoreError> {
        Err(StoreError::Unavailable("connection refused".to_string()))
    }
}
