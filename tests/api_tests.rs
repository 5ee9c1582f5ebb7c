use serde_json::json;

#[test]
fn test_bulk_create_request_shape() {
    // El contrato del batch: salesman_id + customer_ids ordenados
    let body = json!({
        "salesman_id": "7e57d004-2b97-0e7a-b45f-5387367791cd",
        "customer_ids": [
            "a4a70900-24e1-11df-8924-001ff3591711",
            "b5b80a11-35f2-22e0-9a35-112ff4602822"
        ]
    });

    let parsed: field_sales::dto::journey_dto::BulkCreateVisitsRequest =
        serde_json::from_value(body).unwrap();
    assert_eq!(parsed.customer_ids.len(), 2);
}

#[test]
fn test_bulk_create_response_reports_counts() {
    let response = field_sales::dto::journey_dto::BulkCreateVisitsResponse {
        count: 2,
        skipped: 1,
    };
    let value = serde_json::to_value(&response).unwrap();
    assert_eq!(value, json!({"count": 2, "skipped": 1}));
}

#[test]
fn test_fillup_request_rejects_non_positive_quantity() {
    use validator::Validate;

    let body = json!({
        "journey_id": "7e57d004-2b97-0e7a-b45f-5387367791cd",
        "sales_id": "a4a70900-24e1-11df-8924-001ff3591711",
        "items": [{"prod_id": "b5b80a11-35f2-22e0-9a35-112ff4602822", "quantity": 0, "uom": "pcs"}]
    });

    let parsed: field_sales::dto::fillup_dto::CreateFillupRequest =
        serde_json::from_value(body).unwrap();
    assert!(parsed.validate().is_err());
}
