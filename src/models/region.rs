//! Modelo de Region

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Región comercial asignable a vendedores y clientes
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Region {
    pub id: Uuid,
    pub region: String,
    pub city: String,
    pub country: String,
}
