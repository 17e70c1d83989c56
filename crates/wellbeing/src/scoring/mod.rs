//! Wellbeing score aggregation.
//!
//! Normalizers turn each domain's logs into a 0–100 component score, the
//! aggregator combines them under per-user weights, and the advisor bands and
//! annotates each component. [`compute_wellbeing`] runs the whole pipeline
//! without I/O; [`WellbeingService`] adds weight persistence on top.

mod advice;
mod aggregate;
pub mod domain;
mod normalizers;
pub mod repository;
pub mod router;
pub mod service;
mod weights;

#[cfg(test)]
mod tests;

pub use advice::{advice, advice_for_key, category, Category};
pub use aggregate::aggregate;
pub use domain::{
    ActivityLogs, Component, ExerciseLog, GoalTargets, MeditationLog, MoodLabel, MoodLog,
    PerComponent, SleepLog, UnknownComponent, UserId,
};
pub use normalizers::{fitness_score, meditation_score, mood_score, sleep_score};
pub use repository::{StoreError, WeightStore};
pub use router::{wellbeing_router, ScoreRequest, WeightUpdateRequest};
pub use service::{WeightServiceError, WellbeingService};
pub use weights::{
    validate_weights, ComponentWeights, InvalidWeights, WeightMap, WeightScale, DEFAULT_WEIGHT,
    WEIGHT_TOLERANCE, WEIGHT_TOTAL,
};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Which meditation logs count toward the meditation goal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MeditationWindow {
    /// Every supplied log.
    All,
    /// Logs dated within the last `n` days, today included.
    TrailingDays(u32),
}

impl MeditationWindow {
    /// `0` selects [`MeditationWindow::All`].
    pub fn from_days(days: u32) -> Self {
        if days == 0 {
            Self::All
        } else {
            Self::TrailingDays(days)
        }
    }

    fn admits(self, date: NaiveDate, today: NaiveDate) -> bool {
        match self {
            MeditationWindow::All => true,
            MeditationWindow::TrailingDays(days) => {
                let start = normalizers::days_before(today, u64::from(days.saturating_sub(1)));
                date >= start && date <= today
            }
        }
    }
}

/// Engine-wide settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoringConfig {
    pub meditation_window: MeditationWindow,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            meditation_window: MeditationWindow::TrailingDays(7),
        }
    }
}

/// Per-call inputs that are not logs, goals, or weights.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoringContext {
    /// Reference date that anchors the fitness week and the trailing windows.
    pub today: NaiveDate,
    pub meditation_window: MeditationWindow,
}

/// Output of one scoring pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WellbeingResult {
    pub user_id: UserId,
    pub overall_score: u8,
    pub component_scores: PerComponent<f64>,
    pub category: PerComponent<Category>,
    pub advice: PerComponent<String>,
}

/// Scores one user's logs against their goals and weights.
pub fn compute_wellbeing(
    user_id: &UserId,
    logs: &ActivityLogs,
    goals: &GoalTargets,
    weights: &ComponentWeights,
    context: &ScoringContext,
) -> WellbeingResult {
    let windowed_meditations: Vec<MeditationLog> = logs
        .meditations
        .iter()
        .filter(|log| context.meditation_window.admits(log.date, context.today))
        .cloned()
        .collect();

    let component_scores = PerComponent {
        fitness: fitness_score(
            &logs.exercises,
            goals.weekly_exercise_minutes,
            context.today,
        ),
        sleep: sleep_score(&logs.sleep_logs, goals.sleep_hours_per_night, context.today),
        mood: mood_score(&logs.moods),
        meditation: meditation_score(&windowed_meditations, goals.weekly_meditation_minutes),
    };

    let overall_score = aggregate(&component_scores, weights);
    debug!(
        user = %user_id,
        overall_score,
        fitness = component_scores.fitness,
        sleep = component_scores.sleep,
        mood = component_scores.mood,
        meditation = component_scores.meditation,
        "computed wellbeing score"
    );

    WellbeingResult {
        user_id: user_id.clone(),
        overall_score,
        category: component_scores.map(|_, score| category(*score)),
        advice: component_scores.map(|component, score| advice(component, *score).to_string()),
        component_scores,
    }
}

/// Stateless scorer carrying the configured defaults.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScoreEngine {
    config: ScoringConfig,
}

impl ScoreEngine {
    pub fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    pub fn score(
        &self,
        user_id: &UserId,
        logs: &ActivityLogs,
        goals: &GoalTargets,
        weights: &ComponentWeights,
        today: NaiveDate,
    ) -> WellbeingResult {
        let context = ScoringContext {
            today,
            meditation_window: self.config.meditation_window,
        };
        compute_wellbeing(user_id, logs, goals, weights, &context)
    }
}
