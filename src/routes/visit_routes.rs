use axum::{extract::State, routing::post, Json, Router};

use crate::controllers::journey_controller::JourneyController;
use crate::dto::common_dto::ApiResponse;
use crate::dto::journey_dto::{BulkCreateVisitsRequest, BulkCreateVisitsResponse};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_visit_router() -> Router<AppState> {
    Router::new().route("/bulk-create", post(bulk_create_visits))
}

async fn bulk_create_visits(
    State(state): State<AppState>,
    Json(request): Json<BulkCreateVisitsRequest>,
) -> Result<Json<ApiResponse<BulkCreateVisitsResponse>>, AppError> {
    let controller = JourneyController::new(state.pool.clone());
    let response = controller.bulk_create(request).await?;
    let message = format!(
        "{} visitas creadas, {} saltadas",
        response.count, response.skipped
    );
    Ok(Json(ApiResponse::success_with_message(response, message)))
}
