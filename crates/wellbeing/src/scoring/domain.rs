use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// Opaque user identifier supplied by the caller's auth layer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct UserId(pub String);

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One of the four tracked wellbeing domains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Component {
    Fitness,
    Sleep,
    Mood,
    Meditation,
}

impl Component {
    pub const ALL: [Component; 4] = [
        Component::Fitness,
        Component::Sleep,
        Component::Mood,
        Component::Meditation,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Component::Fitness => "fitness",
            Component::Sleep => "sleep",
            Component::Mood => "mood",
            Component::Meditation => "meditation",
        }
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Returned when a string does not name a [`Component`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown wellbeing component '{0}'")]
pub struct UnknownComponent(pub String);

impl FromStr for Component {
    type Err = UnknownComponent;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "fitness" => Ok(Component::Fitness),
            "sleep" => Ok(Component::Sleep),
            "mood" => Ok(Component::Mood),
            "meditation" => Ok(Component::Meditation),
            _ => Err(UnknownComponent(value.to_string())),
        }
    }
}

/// One value per component, serialized as `{fitness, sleep, mood, meditation}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PerComponent<T> {
    pub fitness: T,
    pub sleep: T,
    pub mood: T,
    pub meditation: T,
}

impl<T> PerComponent<T> {
    pub fn from_fn(mut f: impl FnMut(Component) -> T) -> Self {
        Self {
            fitness: f(Component::Fitness),
            sleep: f(Component::Sleep),
            mood: f(Component::Mood),
            meditation: f(Component::Meditation),
        }
    }

    pub fn get(&self, component: Component) -> &T {
        match component {
            Component::Fitness => &self.fitness,
            Component::Sleep => &self.sleep,
            Component::Mood => &self.mood,
            Component::Meditation => &self.meditation,
        }
    }

    pub fn map<U>(&self, mut f: impl FnMut(Component, &T) -> U) -> PerComponent<U> {
        PerComponent::from_fn(|component| f(component, self.get(component)))
    }

    pub fn iter(&self) -> impl Iterator<Item = (Component, &T)> {
        Component::ALL
            .into_iter()
            .map(move |component| (component, self.get(component)))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseLog {
    pub date: NaiveDate,
    pub duration_minutes: f64,
    #[serde(default)]
    pub calories_burned: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SleepLog {
    pub date: NaiveDate,
    pub bedtime: NaiveTime,
    pub waketime: NaiveTime,
    /// Self-reported quality on a 1–10 scale.
    pub quality: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoodLog {
    pub date: NaiveDate,
    pub mood: MoodLabel,
    /// Journal text attached to the entry; never scored.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeditationLog {
    pub date: NaiveDate,
    pub duration_minutes: f64,
}

/// Fixed mood vocabulary. Labels outside it are kept verbatim and score neutral.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum MoodLabel {
    Angry,
    Stressed,
    Sad,
    Okay,
    Calm,
    Happy,
    Unrecognized(String),
}

impl MoodLabel {
    pub const NEUTRAL_VALUE: f64 = 3.0;

    /// Position on the 1–5 mood scale.
    pub fn value(&self) -> f64 {
        match self {
            MoodLabel::Angry => 1.0,
            MoodLabel::Stressed => 2.0,
            MoodLabel::Sad | MoodLabel::Okay => 3.0,
            MoodLabel::Calm => 4.0,
            MoodLabel::Happy => 5.0,
            MoodLabel::Unrecognized(_) => Self::NEUTRAL_VALUE,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            MoodLabel::Angry => "angry",
            MoodLabel::Stressed => "stressed",
            MoodLabel::Sad => "sad",
            MoodLabel::Okay => "okay",
            MoodLabel::Calm => "calm",
            MoodLabel::Happy => "happy",
            MoodLabel::Unrecognized(raw) => raw,
        }
    }
}

impl From<String> for MoodLabel {
    fn from(value: String) -> Self {
        match value.as_str() {
            "angry" => MoodLabel::Angry,
            "stressed" => MoodLabel::Stressed,
            "sad" => MoodLabel::Sad,
            "okay" => MoodLabel::Okay,
            "calm" => MoodLabel::Calm,
            "happy" => MoodLabel::Happy,
            _ => MoodLabel::Unrecognized(value),
        }
    }
}

impl From<&str> for MoodLabel {
    fn from(value: &str) -> Self {
        MoodLabel::from(value.to_string())
    }
}

impl From<MoodLabel> for String {
    fn from(value: MoodLabel) -> Self {
        value.as_str().to_string()
    }
}

/// Already-fetched logs for one user. Absent arrays deserialize as empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ActivityLogs {
    #[serde(default)]
    pub exercises: Vec<ExerciseLog>,
    #[serde(default)]
    pub sleep_logs: Vec<SleepLog>,
    #[serde(default)]
    pub moods: Vec<MoodLog>,
    #[serde(default)]
    pub meditations: Vec<MeditationLog>,
}

/// Per-user targets. A missing or non-positive target scores its domain as 0.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GoalTargets {
    #[serde(default)]
    pub weekly_exercise_minutes: Option<f64>,
    #[serde(default)]
    pub sleep_hours_per_night: Option<f64>,
    /// Advisory only; mood is scored on its absolute scale.
    #[serde(default)]
    pub target_mood_score: Option<f64>,
    #[serde(default)]
    pub weekly_meditation_minutes: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mood_labels_deserialize_case_insensitively() {
        let log: MoodLog =
            serde_json::from_str(r#"{"date":"2025-03-10","mood":"Happy"}"#).expect("valid log");
        assert_eq!(log.mood, MoodLabel::Happy);
        assert_eq!(log.mood.value(), 5.0);
    }

    #[test]
    fn unknown_mood_label_is_neutral_and_preserved() {
        let label = MoodLabel::from("elated");
        assert_eq!(label.value(), MoodLabel::NEUTRAL_VALUE);
        assert_eq!(String::from(label), "elated");
    }

    #[test]
    fn missing_log_arrays_default_to_empty() {
        let logs: ActivityLogs =
            serde_json::from_str(r#"{"moods":[{"date":"2025-03-10","mood":"calm"}]}"#)
                .expect("partial logs parse");
        assert!(logs.exercises.is_empty());
        assert!(logs.sleep_logs.is_empty());
        assert!(logs.meditations.is_empty());
        assert_eq!(logs.moods.len(), 1);
    }

    #[test]
    fn component_keys_parse() {
        for component in Component::ALL {
            assert_eq!(component.key().parse::<Component>(), Ok(component));
        }
        assert!("hydration".parse::<Component>().is_err());
        assert!("Fitness".parse::<Component>().is_err());
        assert!(" sleep".parse::<Component>().is_err());
    }
}
