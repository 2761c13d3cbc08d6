//! tests/global_errors/401.rs
//! Domain authorization failures keep their default message.

#[path = "../mod.rs"]
mod common;

use reqwest::StatusCode;

#[tokio::test]
async fn unauthorized_domain_error_returns_401() {
    let base_url: String = common::spawn_app();

    let (status, content_type, json) = common::get_json(format!("{}/test/unauthorized", base_url)).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(content_type, common::PROBLEM_JSON);
    assert_eq!(json["title"], "Unauthorized");
    assert_eq!(json["detail"], "No autorizado para realizar esta acción");
    assert_eq!(json["instance"], "/test/unauthorized");
}
