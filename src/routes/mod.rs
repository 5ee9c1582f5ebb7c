use axum::Router;

use crate::state::AppState;

pub mod customer_routes;
pub mod fillup_routes;
pub mod journey_routes;
pub mod region_routes;
pub mod salesman_routes;
pub mod stock_routes;
pub mod visit_routes;

/// Router completo de la API bajo /api
pub fn create_api_router() -> Router<AppState> {
    Router::new()
        .nest("/api/salesmen", salesman_routes::create_salesman_router())
        .nest("/api/customers", customer_routes::create_customer_router())
        .nest("/api/regions", region_routes::create_region_router())
        .nest("/api/visits", visit_routes::create_visit_router())
        .nest("/api/journeys", journey_routes::create_journey_router())
        .nest("/api/fillups", fillup_routes::create_fillup_router())
        .nest("/api/stock", stock_routes::create_stock_router())
}
