use axum::{extract::State, routing::get, Json, Router};

use crate::models::region::Region;
use crate::repositories::region_repository::RegionRepository;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_region_router() -> Router<AppState> {
    Router::new().route("/", get(list_regions))
}

async fn list_regions(State(state): State<AppState>) -> Result<Json<Vec<Region>>, AppError> {
    let repository = RegionRepository::new(state.pool.clone());
    let regions = repository.find_all().await?;
    Ok(Json(regions))
}
