//! tests/global_errors/400.rs
//! Malformed input and NOT NULL violations are reported as 400.

#[path = "../mod.rs"]
mod common;

use reqwest::StatusCode;

#[tokio::test]
async fn not_null_violation_reports_missing_data() {
    let base_url: String = common::spawn_app();

    let (status, content_type, json) = common::get_json(format!("{}/test/db/515", base_url)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(content_type, common::PROBLEM_JSON);
    assert_eq!(json["title"], "Bad Request");
    assert_eq!(json["detail"], "Faltan datos requeridos");
}

#[tokio::test]
async fn undecodable_query_string_is_a_bad_argument() {
    let base_url: String = common::spawn_app();

    let (status, _, json) = common::get_json(format!("{}/balances/zones?page=abc", base_url)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["status"], 400);
    assert_eq!(json["instance"], "/balances/zones");
    assert!(json.get("errors").is_none());
}

#[tokio::test]
async fn non_numeric_path_id_is_a_bad_argument() {
    let base_url: String = common::spawn_app();

    let (status, _, json) = common::get_json(format!("{}/zones/norte", base_url)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["title"], "Bad Request");
    assert!(json["detail"].as_str().is_some_and(|d: &str| !d.is_empty()));
    assert!(json.get("data").is_none());
}
