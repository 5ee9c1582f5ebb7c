//! Ledger de stock de campo
//!
//! Agrega los fillups históricos de un vendedor en una vista por producto.
//! El ledger es puramente aditivo: no hay modelo de consumo ni depleción.

use std::collections::HashMap;

use uuid::Uuid;

use crate::models::fillup::Fillup;
use crate::models::stock::StockLine;

/// Agregar fillups en líneas de stock por producto.
///
/// Suma cantidades con parsing leniente (ver [`crate::models::fillup::Quantity`]),
/// cuenta fillups distintos por producto, y toma la metadata de display del
/// item visto más recientemente. Salida ordenada por cantidad descendente
/// (empates por nombre de producto).
pub fn aggregate(fillups: &[Fillup]) -> Vec<StockLine> {
    // Recorrer en orden cronológico para que la metadata más reciente gane
    let mut ordered: Vec<&Fillup> = fillups.iter().collect();
    ordered.sort_by_key(|f| f.created_at);

    let mut lines: HashMap<Uuid, StockLine> = HashMap::new();

    for fillup in ordered {
        let mut touched: Vec<Uuid> = Vec::new();

        for item in fillup.items.iter() {
            let line = lines.entry(item.product_id).or_insert_with(|| StockLine {
                product_id: item.product_id,
                quantity: 0,
                fillup_count: 0,
                product_name: item.product_name.clone(),
                category: item.category.clone(),
                uom: item.uom.clone(),
            });

            line.quantity += item.quantity.units();
            // Metadata del item más reciente que referencia al producto
            line.product_name = item.product_name.clone();
            line.category = item.category.clone();
            line.uom = item.uom.clone();

            if !touched.contains(&item.product_id) {
                touched.push(item.product_id);
            }
        }

        // Un fillup cuenta una sola vez por producto, aunque repita items
        for product_id in touched {
            if let Some(line) = lines.get_mut(&product_id) {
                line.fillup_count += 1;
            }
        }
    }

    let mut result: Vec<StockLine> = lines.into_values().collect();
    result.sort_by(|a, b| {
        b.quantity
            .cmp(&a.quantity)
            .then_with(|| a.product_name.cmp(&b.product_name))
    });
    result
}

/// Filtrar líneas por búsqueda libre: substring case-insensitive sobre
/// nombre de producto o id. Texto vacío devuelve todo.
pub fn filter_lines(lines: Vec<StockLine>, search: &str) -> Vec<StockLine> {
    let needle = search.trim().to_lowercase();
    if needle.is_empty() {
        return lines;
    }
    lines
        .into_iter()
        .filter(|line| {
            line.product_name.to_lowercase().contains(&needle)
                || line.product_id.to_string().to_lowercase().contains(&needle)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::fillup::{FillupItem, Quantity};
    use chrono::{TimeZone, Utc};
    use serde_json::json;
    use sqlx::types::Json;

    fn fillup_at(secs: i64, items: Vec<FillupItem>) -> Fillup {
        Fillup {
            id: Uuid::new_v4(),
            journey_id: Uuid::new_v4(),
            salesman_id: Uuid::new_v4(),
            items: Json(items),
            created_at: Utc.timestamp_opt(secs, 0).unwrap(),
        }
    }

    fn item(product_id: Uuid, quantity: Quantity, name: &str) -> FillupItem {
        FillupItem {
            product_id,
            quantity,
            uom: "pcs".to_string(),
            product_name: name.to_string(),
            category: Some("bebidas".to_string()),
        }
    }

    #[test]
    fn test_string_and_number_quantities_sum() {
        // [{quantity: "5"}, {quantity: 3}] => quantity 8, fillup_count 2
        let product = Uuid::new_v4();
        let five: Quantity = serde_json::from_value(json!("5")).unwrap();
        let fillups = vec![
            fillup_at(100, vec![item(product, five, "Agua 1L")]),
            fillup_at(200, vec![item(product, Quantity::Units(3), "Agua 1L")]),
        ];

        let lines = aggregate(&fillups);
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].product_id, product);
        assert_eq!(lines[0].quantity, 8);
        assert_eq!(lines[0].fillup_count, 2);
    }

    #[test]
    fn test_garbage_quantity_contributes_zero_not_nan() {
        let product = Uuid::new_v4();
        let garbage: Quantity = serde_json::from_value(json!("abc")).unwrap();
        let fillups = vec![
            fillup_at(100, vec![item(product, garbage, "Agua 1L")]),
            fillup_at(200, vec![item(product, Quantity::Units(4), "Agua 1L")]),
        ];

        let lines = aggregate(&fillups);
        assert_eq!(lines[0].quantity, 4);
        assert_eq!(lines[0].fillup_count, 2);
    }

    #[test]
    fn test_metadata_from_most_recent_item_wins() {
        let product = Uuid::new_v4();
        // El orden de entrada es más-reciente-primero, como viene del repo
        let fillups = vec![
            fillup_at(200, vec![item(product, Quantity::Units(1), "Agua Mineral 1L")]),
            fillup_at(100, vec![item(product, Quantity::Units(1), "Agua 1L")]),
        ];

        let lines = aggregate(&fillups);
        assert_eq!(lines[0].product_name, "Agua Mineral 1L");
    }

    #[test]
    fn test_repeated_product_in_one_fillup_counts_once() {
        let product = Uuid::new_v4();
        let fillups = vec![fillup_at(
            100,
            vec![
                item(product, Quantity::Units(2), "Agua 1L"),
                item(product, Quantity::Units(3), "Agua 1L"),
            ],
        )];

        let lines = aggregate(&fillups);
        assert_eq!(lines[0].quantity, 5);
        assert_eq!(lines[0].fillup_count, 1);
    }

    #[test]
    fn test_sorted_by_descending_quantity() {
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        let fillups = vec![fillup_at(
            100,
            vec![
                item(a, Quantity::Units(2), "Agua 1L"),
                item(b, Quantity::Units(9), "Gaseosa 2L"),
            ],
        )];

        let lines = aggregate(&fillups);
        assert_eq!(lines[0].product_id, b);
        assert_eq!(lines[1].product_id, a);
    }

    #[test]
    fn test_filter_by_name_or_id() {
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        let fillups = vec![fillup_at(
            100,
            vec![
                item(a, Quantity::Units(2), "Agua 1L"),
                item(b, Quantity::Units(9), "Gaseosa 2L"),
            ],
        )];

        let lines = aggregate(&fillups);
        let by_name = filter_lines(lines.clone(), "agua");
        assert_eq!(by_name.len(), 1);
        assert_eq!(by_name[0].product_id, a);

        let prefix = b.to_string()[..8].to_string();
        let by_id = filter_lines(lines.clone(), &prefix);
        assert_eq!(by_id.len(), 1);
        assert_eq!(by_id[0].product_id, b);

        assert_eq!(filter_lines(lines, "").len(), 2);
    }

    #[test]
    fn test_empty_fillups_yield_empty_ledger() {
        assert!(aggregate(&[]).is_empty());
    }
}
