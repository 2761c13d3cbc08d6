//! tests/global_errors/408.rs
//! Requests outliving the timeout and database timeouts both become 408.

#[path = "../mod.rs"]
mod common;

use reqwest::StatusCode;
use serde_json::Value;
use std::time::Duration;
use tokio::time::timeout;

#[tokio::test]
async fn returns_408_when_request_times_out() {
    let base_url: String = common::spawn_app();

    // The server timeout is one second; the handler sleeps for three
    let resp_result: Result<Result<reqwest::Response, reqwest::Error>, tokio::time::error::Elapsed> = timeout(
        Duration::from_secs(5),
        async {
            reqwest::Client::new()
                .get(format!("{}/test/slow", base_url))
                .send()
                .await
        },
    )
    .await;

    assert!(resp_result.is_ok(), "Client timed out waiting for server.");
    let resp: reqwest::Response = resp_result.unwrap().expect("Request failed unexpectedly.");

    assert_eq!(resp.status(), StatusCode::REQUEST_TIMEOUT);

    let json: Value = resp.json().await.unwrap();
    assert_eq!(json["status"], 408);
    assert_eq!(json["title"], "Error");
    assert_eq!(json["detail"], "La operación tardó demasiado tiempo");
    assert_eq!(json["instance"], "/test/slow");
}

#[tokio::test]
async fn database_timeout_returns_408() {
    let base_url: String = common::spawn_app();

    let (status, _, json) = common::get_json(format!("{}/test/db/-2", base_url)).await;

    assert_eq!(status, StatusCode::REQUEST_TIMEOUT);
    assert_eq!(json["detail"], "La operación tardó demasiado tiempo");
}
