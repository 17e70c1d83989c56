use chrono::NaiveDate;
use metrics_exporter_prometheus::PrometheusHandle;
use std::collections::HashMap;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};
use wellbeing::scoring::{ComponentWeights, StoreError, UserId, WeightStore};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Process-local weight store; the map lock keeps each save atomic.
#[derive(Default, Clone)]
pub(crate) struct InMemoryWeightStore {
    records: Arc<Mutex<HashMap<UserId, ComponentWeights>>>,
}

impl WeightStore for InMemoryWeightStore {
    fn load(&self, user_id: &UserId) -> Result<Option<ComponentWeights>, StoreError> {
        let guard = self
            .records
            .lock()
            .map_err(|_| StoreError::Unavailable("weight store lock poisoned".to_string()))?;
        Ok(guard.get(user_id).copied())
    }

    fn save(&self, user_id: &UserId, weights: ComponentWeights) -> Result<(), StoreError> {
        let mut guard = self
            .records
            .lock()
            .map_err(|_| StoreError::Unavailable("weight store lock poisoned".to_string()))?;
        guard.insert(user_id.clone(), weights);
        Ok(())
    }
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}
