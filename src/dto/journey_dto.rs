use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::journey::{journey_duration, Journey};

// Request para crear un tour con su batch de visitas
#[derive(Debug, Deserialize)]
pub struct BulkCreateVisitsRequest {
    pub salesman_id: Uuid,
    /// Orden de visita previsto; los duplicados se descartan en el borde
    pub customer_ids: Vec<Uuid>,
}

// Resultado del batch: cuántas visitas se crearon y cuántas se saltaron
// por ya existir una visita equivalente pendiente para ese cliente
#[derive(Debug, Serialize)]
pub struct BulkCreateVisitsResponse {
    pub count: i64,
    pub skipped: i64,
}

// Query de listado de journeys
#[derive(Debug, Deserialize)]
pub struct JourneyListQuery {
    pub salesman_id: Option<Uuid>,
    /// YYYY-MM-DD inclusive
    pub start_date: Option<String>,
    /// YYYY-MM-DD inclusive
    pub end_date: Option<String>,
    pub page: Option<i64>,
    pub limit: Option<i64>,
}

// Response de journey con estado derivado
#[derive(Debug, Serialize)]
pub struct JourneyResponse {
    pub id: Uuid,
    pub salesman_id: Uuid,
    pub region_id: Option<Uuid>,
    pub started_at: Option<DateTime<Utc>>,
    pub ended_at: Option<DateTime<Utc>>,
    pub state: &'static str,
    /// Solo presente cuando el journey está completado
    pub duration_seconds: Option<i64>,
    pub visit_count: i64,
    pub created_at: DateTime<Utc>,
}

impl JourneyResponse {
    pub fn build(journey: Journey, visit_count: i64) -> Self {
        let state = journey.state().as_str();
        let duration_seconds =
            journey_duration(journey.started_at, journey.ended_at).map(|d| d.num_seconds());
        Self {
            id: journey.id,
            salesman_id: journey.salesman_id,
            region_id: journey.region_id,
            started_at: journey.started_at,
            ended_at: journey.ended_at,
            state,
            duration_seconds,
            visit_count,
            created_at: journey.created_at,
        }
    }
}

// Response paginada de journeys
#[derive(Debug, Serialize)]
pub struct JourneyPageResponse {
    pub journeys: Vec<JourneyResponse>,
    pub total: i64,
    pub total_pages: i64,
    pub has_more: bool,
}
