use axum::{
    extract::{Query, State},
    routing::{get, post},
    Json, Router,
};

use crate::controllers::fillup_controller::FillupController;
use crate::dto::common_dto::ApiResponse;
use crate::dto::fillup_dto::{CreateFillupRequest, FillupListQuery, FillupResponse};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_fillup_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_fillups))
        .route("/", post(create_fillup))
}

async fn list_fillups(
    State(state): State<AppState>,
    Query(query): Query<FillupListQuery>,
) -> Result<Json<Vec<FillupResponse>>, AppError> {
    let controller = FillupController::new(state.pool.clone(), state.redis.clone());
    let response = controller.list(query).await?;
    Ok(Json(response))
}

async fn create_fillup(
    State(state): State<AppState>,
    Json(request): Json<CreateFillupRequest>,
) -> Result<Json<ApiResponse<FillupResponse>>, AppError> {
    let controller = FillupController::new(state.pool.clone(), state.redis.clone());
    let response = controller.create(request).await?;
    Ok(Json(ApiResponse::success_with_message(
        response,
        "Fillup registrado exitosamente".to_string(),
    )))
}
