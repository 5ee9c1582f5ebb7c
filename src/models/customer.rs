//! Modelo de Customer
//!
//! Este módulo contiene el struct Customer que mapea exactamente
//! a la tabla customers del schema PostgreSQL.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Cliente visitable en una ruta
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Customer {
    pub id: Uuid,
    pub name: String,
    pub address: String,
    pub phone: String,
    pub region_id: Option<Uuid>,
    pub industry: Option<String>,
    pub created_at: DateTime<Utc>,
}
