use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::stock::StockLine;

// Query del snapshot de stock
#[derive(Debug, Deserialize)]
pub struct StockQuery {
    /// Búsqueda libre sobre nombre o id de producto
    pub q: Option<String>,
}

// Response del snapshot de stock de un vendedor
#[derive(Debug, Serialize)]
pub struct StockSnapshotResponse {
    pub sales_id: Uuid,
    pub lines: Vec<StockLine>,
    /// true si el snapshot salió del cache en vez de recalcularse
    pub cached: bool,
}
