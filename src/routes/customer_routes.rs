use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};

use crate::controllers::customer_controller::CustomerController;
use crate::dto::customer_dto::{CustomerPageResponse, CustomerSearchQuery};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_customer_router() -> Router<AppState> {
    Router::new().route("/", get(search_customers))
}

async fn search_customers(
    State(state): State<AppState>,
    Query(query): Query<CustomerSearchQuery>,
) -> Result<Json<CustomerPageResponse>, AppError> {
    let controller = CustomerController::new(state.pool.clone());
    let response = controller.search(query).await?;
    Ok(Json(response))
}
