//! tests/global_errors/413.rs
//! Sending a payload above the configured body limit triggers 413.

#[path = "../mod.rs"]
mod common;

use reqwest::StatusCode;
use serde_json::Value;

#[tokio::test]
async fn returns_413_when_payload_exceeds_global_limit() {
    let base_url: String = common::spawn_app();

    let oversized_payload: Vec<u8> = vec![b'X'; common::BODY_LIMIT + 100];

    let resp: reqwest::Response = reqwest::Client::new()
        .post(format!("{}/test/echo", base_url))
        .body(oversized_payload)
        .send()
        .await
        .expect("Failed to send large request.");

    assert_eq!(resp.status(), StatusCode::PAYLOAD_TOO_LARGE);

    let json: Value = resp.json().await.unwrap();
    assert_eq!(json["status"], 413);
    assert_eq!(json["title"], "Error");
    assert_eq!(json["detail"], "El cuerpo de la solicitud es demasiado grande");
}

#[tokio::test]
async fn payload_within_limit_is_accepted() {
    let base_url: String = common::spawn_app();

    let resp: reqwest::Response = reqwest::Client::new()
        .post(format!("{}/test/echo", base_url))
        .body(vec![b'X'; 10])
        .send()
        .await
        .expect("Failed to send request.");

    assert_eq!(resp.status(), StatusCode::OK);
    let json: Value = resp.json().await.unwrap();
    assert_eq!(json["data"]["length"], 10);
}
