use std::sync::Arc;

use chrono::NaiveDate;
use tracing::{info, warn};

use super::domain::{ActivityLogs, GoalTargets, UserId};
use super::repository::{StoreError, WeightStore};
use super::weights::{ComponentWeights, InvalidWeights, WeightMap, WeightScale};
use super::{ScoreEngine, WellbeingResult};

/// Service composing the weight store with the scoring engine.
pub struct WellbeingService<S> {
    store: Arc<S>,
    engine: ScoreEngine,
}

impl<S> WellbeingService<S>
where
    S: WeightStore + 'static,
{
    pub fn new(store: Arc<S>, engine: ScoreEngine) -> Self {
        Self { store, engine }
    }

    pub fn engine(&self) -> &ScoreEngine {
        &self.engine
    }

    /// Current weights for a user. First use persists and returns the defaults.
    pub fn weights(&self, user_id: &UserId) -> Result<ComponentWeights, WeightServiceError> {
        if let Some(weights) = self.store.load(user_id)? {
            return Ok(weights);
        }

        let defaults = ComponentWeights::default();
        self.store.save(user_id, defaults)?;
        info!(user = %user_id, "initialized default wellbeing weights");
        Ok(defaults)
    }

    /// Replace a user's weights with a validated percentage map.
    pub fn update_weights(
        &self,
        user_id: &UserId,
        weights: &WeightMap,
    ) -> Result<ComponentWeights, WeightServiceError> {
        self.update_scaled_weights(user_id, weights, WeightScale::Percent)
    }

    /// Replace a user's weights with a validated map of fractions summing to 1.0.
    pub fn update_fractional_weights(
        &self,
        user_id: &UserId,
        weights: &WeightMap,
    ) -> Result<ComponentWeights, WeightServiceError> {
        self.update_scaled_weights(user_id, weights, WeightScale::Fraction)
    }

    /// Invalid edits are rejected before the store is touched, so the
    /// previously persisted weights stay in effect.
    pub fn update_scaled_weights(
        &self,
        user_id: &UserId,
        weights: &WeightMap,
        scale: WeightScale,
    ) -> Result<ComponentWeights, WeightServiceError> {
        let validated = ComponentWeights::try_from_scaled(weights, scale).map_err(|error| {
            warn!(user = %user_id, %error, "rejected wellbeing weight update");
            error
        })?;

        self.store.save(user_id, validated)?;
        info!(user = %user_id, "updated wellbeing weights");
        Ok(validated)
    }

    /// Restore the default weights.
    pub fn reset_weights(&self, user_id: &UserId) -> Result<ComponentWeights, WeightServiceError> {
        let defaults = ComponentWeights::default();
        self.store.save(user_id, defaults)?;
        info!(user = %user_id, "reset wellbeing weights to defaults");
        Ok(defaults)
    }

    /// Score already-fetched logs with the user's stored weights.
    pub fn score(
        &self,
        user_id: &UserId,
        logs: &ActivityLogs,
        goals: &GoalTargets,
        today: NaiveDate,
    ) -> Result<WellbeingResult, WeightServiceError> {
        let weights = self.weights(user_id)?;
        Ok(self.engine.score(user_id, logs, goals, &weights, today))
    }
}

/// Error raised by the wellbeing service.
#[derive(Debug, thiserror::Error)]
pub enum WeightServiceError {
    #[error(transparent)]
    InvalidWeights(#[from] InvalidWeights),
    #[error(transparent)]
    Store(#[from] StoreError),
}
