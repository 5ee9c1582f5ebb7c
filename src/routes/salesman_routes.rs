use axum::{extract::State, routing::get, Json, Router};

use crate::controllers::salesman_controller::SalesmanController;
use crate::dto::salesman_dto::SalesmanResponse;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_salesman_router() -> Router<AppState> {
    Router::new().route("/", get(list_salesmen))
}

async fn list_salesmen(
    State(state): State<AppState>,
) -> Result<Json<Vec<SalesmanResponse>>, AppError> {
    let controller =
        SalesmanController::new(state.pool.clone(), state.config.recent_journeys_limit);
    let response = controller.list().await?;
    Ok(Json(response))
}
