use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::domain::{ActivityLogs, GoalTargets, UserId};
use super::repository::WeightStore;
use super::service::{WeightServiceError, WellbeingService};
use super::weights::{ComponentWeights, WeightMap, WeightScale};

/// Body of a scoring request. Every field may be omitted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScoreRequest {
    #[serde(default)]
    pub logs: ActivityLogs,
    #[serde(default)]
    pub goals: GoalTargets,
    /// Reference date; defaults to the server's local date.
    #[serde(default)]
    pub today: Option<NaiveDate>,
}

/// Body of a weight edit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeightUpdateRequest {
    pub weights: WeightMap,
    #[serde(default)]
    pub scale: WeightScale,
}

#[derive(Debug, Clone, Serialize)]
struct WeightsView {
    user_id: UserId,
    weights: ComponentWeights,
}

/// Router builder exposing scoring and weight management endpoints.
pub fn wellbeing_router<S>(service: Arc<WellbeingService<S>>) -> Router
where
    S: WeightStore + 'static,
{
    Router::new()
        .route(
            "/api/v1/wellbeing/:user_id/score",
            post(score_handler::<S>),
        )
        .route(
            "/api/v1/wellbeing/:user_id/weights",
            get(weights_handler::<S>)
                .put(update_weights_handler::<S>)
                .delete(reset_weights_handler::<S>),
        )
        .with_state(service)
}

pub(crate) async fn score_handler<S>(
    State(service): State<Arc<WellbeingService<S>>>,
    Path(user_id): Path<String>,
    axum::Json(request): axum::Json<ScoreRequest>,
) -> Response
where
    S: WeightStore + 'static,
{
    let user_id = UserId(user_id);
    let today = request
        .today
        .unwrap_or_else(|| Local::now().date_naive());

    match service.score(&user_id, &request.logs, &request.goals, today) {
        Ok(result) => (StatusCode::OK, axum::Json(result)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn weights_handler<S>(
    State(service): State<Arc<WellbeingService<S>>>,
    Path(user_id): Path<String>,
) -> Response
where
    S: WeightStore + 'static,
{
    let user_id = UserId(user_id);
    match service.weights(&user_id) {
        Ok(weights) => weights_response(user_id, weights),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn update_weights_handler<S>(
    State(service): State<Arc<WellbeingService<S>>>,
    Path(user_id): Path<String>,
    axum::Json(request): axum::Json<WeightUpdateRequest>,
) -> Response
where
    S: WeightStore + 'static,
{
    let user_id = UserId(user_id);
    match service.update_scaled_weights(&user_id, &request.weights, request.scale) {
        Ok(weights) => weights_response(user_id, weights),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn reset_weights_handler<S>(
    State(service): State<Arc<WellbeingService<S>>>,
    Path(user_id): Path<String>,
) -> Response
where
    S: WeightStore + 'static,
{
    let user_id = UserId(user_id);
    match service.reset_weights(&user_id) {
        Ok(weights) => weights_response(user_id, weights),
        Err(error) => error_response(error),
    }
}

fn weights_response(user_id: UserId, weights: ComponentWeights) -> Response {
    let view = WeightsView { user_id, weights };
    (StatusCode::OK, axum::Json(view)).into_response()
}

fn error_response(error: WeightServiceError) -> Response {
    let status = match error {
        WeightServiceError::InvalidWeights(_) => StatusCode::UNPROCESSABLE_ENTITY,
        WeightServiceError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    let payload = json!({
        "error": error.to_string(),
    });
    (status, axum::Json(payload)).into_response()
}
