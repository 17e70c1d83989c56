use serde::{Deserialize, Serialize};

use super::domain::Component;

const MEDIUM_THRESHOLD: f64 = 33.0;
const HIGH_THRESHOLD: f64 = 66.0;

const FALLBACK_ADVICE: &str =
    "Keep logging your activities to get personalized recommendations.";

/// Coarse banding of a 0–100 score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Low,
    Medium,
    High,
}

impl Category {
    pub fn label(self) -> &'static str {
        match self {
            Category::Low => "low",
            Category::Medium => "medium",
            Category::High => "high",
        }
    }
}

/// Bands a score; 33 and 66 belong to the upper band. Non-finite scores are low.
pub fn category(score: f64) -> Category {
    if !score.is_finite() || score < MEDIUM_THRESHOLD {
        Category::Low
    } else if score < HIGH_THRESHOLD {
        Category::Medium
    } else {
        Category::High
    }
}

/// Canned guidance for a component at the given score.
pub fn advice(component: Component, score: f64) -> &'static str {
    match (component, category(score)) {
        (Component::Fitness, Category::Low) => {
            "Try to fit in short walks or light workouts on most days to build momentum."
        }
        (Component::Fitness, Category::Medium) => {
            "You're making progress. Add one longer session this week to reach your goal."
        }
        (Component::Fitness, Category::High) => {
            "Great job staying active! Mix in strength or mobility work to stay balanced."
        }
        (Component::Sleep, Category::Low) => {
            "Aim for a consistent bedtime and limit screens in the hour before sleep."
        }
        (Component::Sleep, Category::Medium) => {
            "Your sleep is improving. Keep a regular wake time, even on weekends."
        }
        (Component::Sleep, Category::High) => {
            "You're well rested. Keep protecting your sleep routine."
        }
        (Component::Mood, Category::Low) => {
            "It's been a tough stretch. Reach out to someone you trust or try a short journaling session."
        }
        (Component::Mood, Category::Medium) => {
            "Your mood is steady. Notice what lifts your days and make room for more of it."
        }
        (Component::Mood, Category::High) => {
            "You're feeling good! Take a moment to note what's working for you."
        }
        (Component::Meditation, Category::Low) => {
            "Start with five minutes of guided breathing each day."
        }
        (Component::Meditation, Category::Medium) => {
            "Nice consistency. Try extending one session a few minutes longer."
        }
        (Component::Meditation, Category::High) => {
            "Your practice is strong. Explore a new technique to keep it fresh."
        }
    }
}

/// Like [`advice`], keyed by component name. Unknown names get generic guidance.
pub fn advice_for_key(component: &str, score: f64) -> &'static str {
    match component.parse::<Component>() {
        Ok(component) => advice(component, score),
        Err(_) => FALLBACK_ADVICE,
    }
}
