//! Modelo de StockLine
//!
//! Vista derivada del stock acumulado de un vendedor. Se recalcula bajo
//! demanda a partir de sus fillups; nunca se persiste.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Línea agregada de stock por producto
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StockLine {
    pub product_id: Uuid,
    /// Suma de cantidades sobre todos los fillups del vendedor
    pub quantity: i64,
    /// Cantidad de fillups distintos que aportaron a este producto
    pub fillup_count: i64,
    pub product_name: String,
    pub category: Option<String>,
    pub uom: String,
}
