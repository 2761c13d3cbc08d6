//! tests/mod.rs
//! Shared helper that spawns the app on an ephemeral port, backed by the
//! in-memory fixtures, with a few extra routes that fail on purpose.

#![allow(dead_code)]

use std::time::Duration;

use anyhow::anyhow;
use axum::{
    body::Bytes,
    extract::Path,
    http::StatusCode,
    routing::{get, post},
    serve, Router,
};
use lottery_backoffice::config::{
    environment::{DataSource, EnvironmentVariables},
    state::AppState,
};
use lottery_backoffice::core::server::{api_routes, with_middleware};
use lottery_backoffice::utils::error_handler::{AppError, DatabaseFailure, DomainError, PersistenceError};
use lottery_backoffice::utils::response_handler::HandlerResponse;
use serde_json::json;
use tokio::net::TcpListener as TokioTcpListener;

pub const PROBLEM_JSON: &str = "application/problem+json";
pub const BODY_LIMIT: usize = 1024;

/// Configuration used by every integration test: fixture data, a one second
/// timeout and a small body limit.
pub fn test_environment() -> EnvironmentVariables {
    EnvironmentVariables {
        data_source: DataSource::Fixtures,
        default_timeout_seconds: 1,
        max_request_body_size: BODY_LIMIT,
        ..EnvironmentVariables::default()
    }
}

async fn panicking_handler() -> HandlerResponse {
    panic!("ticket ledger corrupted")
}

/// Routes that raise each failure kind on demand.
fn failing_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/test/validation",
            get(|| async {
                Err::<HandlerResponse, AppError>(
                    DomainError::invalid_fields([
                        ("nombre", "El nombre es requerido"),
                        ("nombre", "El nombre debe tener al menos 3 caracteres"),
                        ("zona", "La zona no existe"),
                    ])
                    .into(),
                )
            }),
        )
        .route(
            "/test/users/{id}",
            get(|Path(id): Path<i32>| async move {
                Err::<HandlerResponse, AppError>(DomainError::not_found("Usuario", id).into())
            }),
        )
        .route(
            "/test/duplicate",
            get(|| async {
                Err::<HandlerResponse, AppError>(DomainError::duplicate("Zona", "nombre", "NORTE").into())
            }),
        )
        .route(
            "/test/unauthorized",
            get(|| async { Err::<HandlerResponse, AppError>(DomainError::unauthorized().into()) }),
        )
        .route(
            "/test/db/{number}",
            get(|Path(number): Path<i32>| async move {
                Err::<HandlerResponse, AppError>(
                    PersistenceError::wrapping(
                        "An error occurred while saving the entity changes",
                        DatabaseFailure::new(number, "engine message that must stay server side"),
                    )
                    .into(),
                )
            }),
        )
        .route(
            "/test/invalid-state",
            get(|| async { Err::<HandlerResponse, AppError>(AppError::InvalidState("El sorteo ya está cerrado".into())) }),
        )
        .route(
            "/test/unexpected",
            get(|| async { Err::<HandlerResponse, AppError>(anyhow!("disk quota exceeded").into()) }),
        )
        .route("/test/panic", get(panicking_handler))
        .route(
            "/test/slow",
            get(|| async {
                tokio::time::sleep(Duration::from_secs(3)).await;
                HandlerResponse::new(StatusCode::OK)
            }),
        )
        .route(
            "/test/echo",
            post(|body: Bytes| async move {
                HandlerResponse::new(StatusCode::OK).data(json!({ "length": body.len() }))
            }),
        )
}

/// Spawns the app on a random unused port and returns its base URL.
pub fn spawn_app() -> String {
    let state: AppState = AppState::new(test_environment());
    let app: Router = with_middleware(api_routes().merge(failing_routes()), state);

    // Bind an ephemeral port using std::net::TcpListener.
    let std_listener: std::net::TcpListener =
        std::net::TcpListener::bind("127.0.0.1:0").expect("Failed to bind random port");
    std_listener.set_nonblocking(true).unwrap();

    let tokio_listener: TokioTcpListener =
        TokioTcpListener::from_std(std_listener).expect("Failed to convert to tokio listener");
    let addr: std::net::SocketAddr = tokio_listener.local_addr().unwrap();

    // Spawn the server in a background task.
    tokio::spawn(async move {
        serve(tokio_listener, app).await.expect("Server failed");
    });

    format!("http://{}", addr)
}

/// Sends a GET and returns status, content type and parsed body.
pub async fn get_json(url: String) -> (reqwest::StatusCode, String, serde_json::Value) {
    let resp: reqwest::Response = reqwest::Client::new()
        .get(url)
        .send()
        .await
        .expect("Failed to execute request.");

    let status: reqwest::StatusCode = resp.status();
    let content_type: String = resp
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_owned();
    let body: serde_json::Value = resp.json().await.expect("Body is not JSON");

    (status, content_type, body)
}
