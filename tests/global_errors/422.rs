//! tests/global_errors/422.rs
//! Validation failures carry their per-field messages under `errors`.

#[path = "../mod.rs"]
mod common;

use pretty_assertions::assert_eq;
use reqwest::StatusCode;
use serde_json::json;

#[tokio::test]
async fn validation_errors_are_grouped_by_field() {
    let base_url: String = common::spawn_app();

    let (status, content_type, json) = common::get_json(format!("{}/test/validation", base_url)).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(content_type, common::PROBLEM_JSON);
    assert_eq!(
        json,
        json!({
            "status": 422,
            "title": "Unprocessable Entity",
            "detail": "Se produjeron uno o más errores de validación",
            "instance": "/test/validation",
            "errors": {
                "nombre": [
                    "El nombre es requerido",
                    "El nombre debe tener al menos 3 caracteres"
                ],
                "zona": ["La zona no existe"]
            }
        })
    );
}

#[tokio::test]
async fn sorting_on_unknown_column_is_rejected() {
    let base_url: String = common::spawn_app();

    let (status, _, json) =
        common::get_json(format!("{}/balances/betting-pools?sort=saldo&page_size=0", base_url)).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(json["errors"]["sort"].is_array());
    assert!(json["errors"]["page_size"].is_array());
}
