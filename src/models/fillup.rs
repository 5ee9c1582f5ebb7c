//! Modelo de Fillup (asignación de stock)
//!
//! Un fillup registra el stock entregado a un vendedor para un journey.
//! Los items se guardan como JSONB; las filas son append-only, nunca se
//! mutan ni se borran desde este sistema.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::types::Json;
use sqlx::FromRow;
use uuid::Uuid;

/// Cantidad de un item de fillup tal como llega del upstream.
///
/// Las filas históricas traen la cantidad como número o como string
/// numérico; cualquier otra cosa cuenta como 0 al agregar, para que datos
/// malformados degraden sin romper el ledger.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum Quantity {
    Units(i64),
    Raw(Value),
}

impl Quantity {
    /// Interpretación leniente: número entero, string numérico, o 0.
    /// Nunca NaN, nunca panic.
    pub fn units(&self) -> i64 {
        match self {
            Quantity::Units(n) => *n,
            Quantity::Raw(Value::Number(n)) => n.as_i64().unwrap_or(0),
            Quantity::Raw(Value::String(s)) => s.trim().parse().unwrap_or(0),
            Quantity::Raw(_) => 0,
        }
    }
}

/// Item de un fillup. Pertenece exclusivamente a su fillup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FillupItem {
    pub product_id: Uuid,
    pub quantity: Quantity,
    pub uom: String,
    // Metadata de display denormalizada al momento de crear el fillup
    pub product_name: String,
    pub category: Option<String>,
}

/// Fillup - mapea exactamente a la tabla fillups (items como JSONB)
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Fillup {
    pub id: Uuid,
    pub journey_id: Uuid,
    pub salesman_id: Uuid,
    pub items: Json<Vec<FillupItem>>,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_quantity_integer() {
        assert_eq!(Quantity::Units(5).units(), 5);
    }

    #[test]
    fn test_quantity_numeric_string() {
        let q: Quantity = serde_json::from_value(json!("5")).unwrap();
        assert_eq!(q.units(), 5);
    }

    #[test]
    fn test_quantity_garbage_counts_as_zero() {
        let q: Quantity = serde_json::from_value(json!("abc")).unwrap();
        assert_eq!(q.units(), 0);

        let q: Quantity = serde_json::from_value(json!(null)).unwrap();
        assert_eq!(q.units(), 0);

        let q: Quantity = serde_json::from_value(json!({"value": 3})).unwrap();
        assert_eq!(q.units(), 0);
    }

    #[test]
    fn test_quantity_json_number_roundtrip() {
        let q: Quantity = serde_json::from_value(json!(8)).unwrap();
        assert_eq!(q.units(), 8);
        assert_eq!(serde_json::to_value(&q).unwrap(), json!(8));
    }
}
