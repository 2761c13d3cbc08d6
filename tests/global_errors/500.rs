//! tests/global_errors/500.rs
//! Unexpected failures, unknown database errors and panics map to 500.

#[path = "../mod.rs"]
mod common;

use reqwest::StatusCode;

#[tokio::test]
async fn unexpected_error_returns_its_message() {
    let base_url: String = common::spawn_app();

    let (status, content_type, json) = common::get_json(format!("{}/test/unexpected", base_url)).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(content_type, common::PROBLEM_JSON);
    assert_eq!(json["title"], "Internal Server Error");
    assert_eq!(json["detail"], "disk quota exceeded");
}

#[tokio::test]
async fn unmapped_database_number_is_generic() {
    let base_url: String = common::spawn_app();

    let (status, _, json) = common::get_json(format!("{}/test/db/1205", base_url)).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["detail"], "Error de base de datos");
}

#[tokio::test]
async fn panicking_handler_is_classified() {
    let base_url: String = common::spawn_app();

    let (status, _, json) = common::get_json(format!("{}/test/panic", base_url)).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["detail"], "Error interno del servidor");
    assert_eq!(json["instance"], "/test/panic");
    assert!(!json.to_string().contains("ledger"));
}
