//! tests/global_errors/404.rs
//! Unknown routes and missing resources return HTTP 404 problems.

#[path = "../mod.rs"]
mod common;

use reqwest::StatusCode;

#[tokio::test]
async fn returns_404_for_nonexistent_route() {
    let base_url: String = common::spawn_app();

    let (status, content_type, json) = common::get_json(format!("{}/does-not-exist", base_url)).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(content_type, common::PROBLEM_JSON);
    assert_eq!(json["status"], 404);
    assert_eq!(json["title"], "Not Found");
    assert_eq!(json["instance"], "/does-not-exist");
}

#[tokio::test]
async fn missing_user_names_resource_and_id() {
    let base_url: String = common::spawn_app();

    let (status, _, json) = common::get_json(format!("{}/test/users/42", base_url)).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["detail"], "Usuario con ID '42' no fue encontrado");
    assert_eq!(json["instance"], "/test/users/42");
    assert!(json.get("errors").is_none());
}

#[tokio::test]
async fn missing_betting_pool_and_zone() {
    let base_url: String = common::spawn_app();

    let (status, _, json) = common::get_json(format!("{}/balances/betting-pools/999", base_url)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["detail"], "Banca con ID '999' no fue encontrado");

    let (status, _, json) = common::get_json(format!("{}/zones/77", base_url)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["detail"], "Zona con ID '77' no fue encontrado");
}
