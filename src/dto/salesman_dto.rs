use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::models::journey::JourneySummary;
use crate::models::region::Region;
use crate::models::salesman::{Eligibility, Salesman};

// Resumen de journey embebido en la respuesta de vendedor
// (ordenado más-reciente-primero)
#[derive(Debug, Serialize)]
pub struct JourneySummaryResponse {
    pub id: Uuid,
    pub started_at: Option<DateTime<Utc>>,
    pub ended_at: Option<DateTime<Utc>>,
    pub state: &'static str,
    pub created_at: DateTime<Utc>,
}

impl From<&JourneySummary> for JourneySummaryResponse {
    fn from(journey: &JourneySummary) -> Self {
        Self {
            id: journey.id,
            started_at: journey.started_at,
            ended_at: journey.ended_at,
            state: journey.state().as_str(),
            created_at: journey.created_at,
        }
    }
}

// Response de vendedor con regiones, journeys recientes y elegibilidad
#[derive(Debug, Serialize)]
pub struct SalesmanResponse {
    pub sales_id: Uuid,
    pub name: String,
    pub phone: Option<String>,
    pub status: &'static str,
    pub available: bool,
    pub selectable: bool,
    pub reason: Option<&'static str>,
    pub regions: Vec<Region>,
    pub journeys: Vec<JourneySummaryResponse>,
    pub created_at: DateTime<Utc>,
}

impl SalesmanResponse {
    pub fn build(
        salesman: Salesman,
        regions: Vec<Region>,
        journeys: &[JourneySummary],
        eligibility: Eligibility,
    ) -> Self {
        Self {
            sales_id: salesman.id,
            name: salesman.name,
            phone: salesman.phone,
            status: salesman.status.as_str(),
            available: salesman.available,
            selectable: eligibility.selectable,
            reason: eligibility.reason.map(|r| r.code()),
            regions,
            journeys: journeys.iter().map(JourneySummaryResponse::from).collect(),
            created_at: salesman.created_at,
        }
    }
}
