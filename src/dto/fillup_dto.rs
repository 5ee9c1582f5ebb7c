use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::fillup::{Fillup, FillupItem};

// Item del request de fillup: cantidad estrictamente positiva
#[derive(Debug, Deserialize, Validate)]
pub struct FillupItemRequest {
    pub prod_id: Uuid,

    #[validate(range(min = 1))]
    pub quantity: i64,

    #[validate(length(min = 1, max = 20))]
    pub uom: String,
}

// Request para crear un fillup
#[derive(Debug, Deserialize, Validate)]
pub struct CreateFillupRequest {
    pub journey_id: Uuid,
    pub sales_id: Uuid,

    // La lista vacía se rechaza en el controller antes de tocar la base
    #[validate]
    pub items: Vec<FillupItemRequest>,
}

// Query de listado de fillups
#[derive(Debug, Deserialize)]
pub struct FillupListQuery {
    pub sales_id: Uuid,
}

// Response de fillup con sus items
#[derive(Debug, Serialize)]
pub struct FillupResponse {
    pub fillup_id: Uuid,
    pub journey_id: Uuid,
    pub sales_id: Uuid,
    pub items: Vec<FillupItem>,
    pub created_at: DateTime<Utc>,
}

impl From<Fillup> for FillupResponse {
    fn from(fillup: Fillup) -> Self {
        Self {
            fillup_id: fillup.id,
            journey_id: fillup.journey_id,
            sales_id: fillup.salesman_id,
            items: fillup.items.0,
            created_at: fillup.created_at,
        }
    }
}
