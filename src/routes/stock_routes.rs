use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use uuid::Uuid;

use crate::controllers::stock_controller::StockController;
use crate::dto::stock_dto::{StockQuery, StockSnapshotResponse};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_stock_router() -> Router<AppState> {
    Router::new().route("/:sales_id", get(stock_snapshot))
}

async fn stock_snapshot(
    State(state): State<AppState>,
    Path(sales_id): Path<Uuid>,
    Query(query): Query<StockQuery>,
) -> Result<Json<StockSnapshotResponse>, AppError> {
    let controller = StockController::new(
        state.pool.clone(),
        state.redis.clone(),
        state.config.stock_cache_ttl_secs,
    );
    let response = controller.snapshot(sales_id, query).await?;
    Ok(Json(response))
}
