use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use uuid::Uuid;

use crate::controllers::journey_controller::JourneyController;
use crate::dto::journey_dto::{JourneyListQuery, JourneyPageResponse, JourneyResponse};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_journey_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_journeys))
        .route("/latest/:sales_id", get(latest_journey))
}

async fn list_journeys(
    State(state): State<AppState>,
    Query(query): Query<JourneyListQuery>,
) -> Result<Json<JourneyPageResponse>, AppError> {
    let controller = JourneyController::new(state.pool.clone());
    let response = controller.list(query).await?;
    Ok(Json(response))
}

async fn latest_journey(
    State(state): State<AppState>,
    Path(sales_id): Path<Uuid>,
) -> Result<Json<JourneyResponse>, AppError> {
    let controller = JourneyController::new(state.pool.clone());
    let response = controller.latest(sales_id).await?;
    Ok(Json(response))
}
