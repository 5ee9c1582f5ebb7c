//! Modelo de Product

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Producto que un vendedor puede llevar en stock
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    pub category: Option<String>,
    /// Unidad de medida base (pcs, kg, lt, ...)
    pub uom: String,
    pub created_at: DateTime<Utc>,
}
