use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::domain::{Component, PerComponent};

/// Percentage each component receives by default.
pub const DEFAULT_WEIGHT: f64 = 25.0;
/// Required total of a percentage weight set.
pub const WEIGHT_TOTAL: f64 = 100.0;
/// Allowed deviation from [`WEIGHT_TOTAL`].
pub const WEIGHT_TOLERANCE: f64 = 0.1;

/// Raw weight edit keyed by component name, as submitted by a caller.
///
/// Keys must match [`Component::key`] exactly; `"Fitness"` or `" sleep"` is
/// an unknown key.
pub type WeightMap = BTreeMap<String, f64>;

/// Scale a raw [`WeightMap`] is expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeightScale {
    /// Percentages summing to 100.
    #[default]
    Percent,
    /// Fractions summing to 1.0.
    Fraction,
}

impl WeightScale {
    fn factor(self) -> f64 {
        match self {
            WeightScale::Percent => 1.0,
            WeightScale::Fraction => WEIGHT_TOTAL,
        }
    }
}

/// Why a weight edit was rejected.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InvalidWeights {
    #[error("missing weight for {0}")]
    MissingKey(Component),
    #[error("unknown weight key '{0}'")]
    UnknownKey(String),
    #[error("weight for {component} must not be negative (got {value})")]
    Negative { component: Component, value: f64 },
    #[error("weight for {component} must be a finite number")]
    NonFinite { component: Component },
    #[error("weights must sum to 100 (got {sum:.2})")]
    SumOutOfTolerance { sum: f64 },
}

/// Relative contribution of each component to the overall score, in percent.
///
/// Values built through [`ComponentWeights::try_from_map`] or
/// [`ComponentWeights::from_fractions`] are validated; [`ComponentWeights::new`]
/// is unchecked and the aggregator normalizes whatever it is given.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ComponentWeights(PerComponent<f64>);

impl ComponentWeights {
    pub fn new(fitness: f64, sleep: f64, mood: f64, meditation: f64) -> Self {
        Self(PerComponent {
            fitness,
            sleep,
            mood,
            meditation,
        })
    }

    /// Validates a percentage map and converts it into weights.
    pub fn try_from_map(weights: &WeightMap) -> Result<Self, InvalidWeights> {
        Self::try_from_scaled(weights, WeightScale::Percent)
    }

    /// Validates a map of fractions summing to 1.0, stored as percentages.
    pub fn from_fractions(weights: &WeightMap) -> Result<Self, InvalidWeights> {
        Self::try_from_scaled(weights, WeightScale::Fraction)
    }

    pub fn try_from_scaled(
        weights: &WeightMap,
        scale: WeightScale,
    ) -> Result<Self, InvalidWeights> {
        let factor = scale.factor();
        let scaled: WeightMap = weights
            .iter()
            .map(|(key, value)| (key.clone(), value * factor))
            .collect();
        validate_weights(&scaled)?;

        Ok(Self(PerComponent::from_fn(|component| {
            scaled.get(component.key()).copied().unwrap_or_default()
        })))
    }

    pub fn get(&self, component: Component) -> f64 {
        *self.0.get(component)
    }

    pub fn total(&self) -> f64 {
        self.0.iter().map(|(_, weight)| *weight).sum()
    }

    pub fn as_map(&self) -> WeightMap {
        self.0
            .iter()
            .map(|(component, weight)| (component.key().to_string(), *weight))
            .collect()
    }
}

impl Default for ComponentWeights {
    fn default() -> Self {
        Self::new(DEFAULT_WEIGHT, DEFAULT_WEIGHT, DEFAULT_WEIGHT, DEFAULT_WEIGHT)
    }
}

/// Checks a percentage weight map: exactly the four component keys, each
/// finite and non-negative, summing to 100 within [`WEIGHT_TOLERANCE`].
pub fn validate_weights(weights: &WeightMap) -> Result<(), InvalidWeights> {
    if let Some(unknown) = weights
        .keys()
        .find(|key| key.parse::<Component>().is_err())
    {
        return Err(InvalidWeights::UnknownKey(unknown.clone()));
    }

    let mut sum = 0.0;
    for component in Component::ALL {
        let value = *weights
            .get(component.key())
            .ok_or(InvalidWeights::MissingKey(component))?;
        if !value.is_finite() {
            return Err(InvalidWeights::NonFinite { component });
        }
        if value < 0.0 {
            return Err(InvalidWeights::Negative { component, value });
        }
        sum += value;
    }

    if (sum - WEIGHT_TOTAL).abs() > WEIGHT_TOLERANCE {
        return Err(InvalidWeights::SumOutOfTolerance { sum });
    }

    Ok(())
}
