use super::domain::UserId;
use super::weights::ComponentWeights;

/// Per-user weight persistence so the service can be exercised in isolation.
///
/// Implementations replace a user's weights wholesale on `save`; concurrent
/// writers resolve as last-write-wins.
pub trait WeightStore: Send + Sync {
    fn load(&self, user_id: &UserId) -> Result<Option<ComponentWeights>, StoreError>;
    fn save(&self, user_id: &UserId, weights: ComponentWeights) -> Result<(), StoreError>;
}

/// Error enumeration for store failures.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("weight store unavailable: {0}")]
    Unavailable(String),
}
