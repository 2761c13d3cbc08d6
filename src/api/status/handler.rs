// Service health endpoint

use axum::{extract::State, http::StatusCode};
use serde_json::json;
use tracing::{instrument, warn};

use crate::config::state::AppState;
use crate::utils::response_handler::HandlerResponse;

/// Reports version, environment and whether the row source answers.
/// An unreachable database degrades the status instead of failing the request.
#[instrument(name = "status", skip_all)]
pub async fn status_handler(State(state): State<AppState>) -> HandlerResponse {
    let (status, database) = match state.balances.health_check().await {
        Ok(()) => ("ok", "up"),
        Err(err) => {
            warn!("Row source health check failed: {}", err);
            ("degraded", "down")
        }
    };

    HandlerResponse::new(StatusCode::OK)
        .data(json!({
            "version": env!("CARGO_PKG_VERSION"),
            "status": status,
            "environment": state.environment.environment,
            "data_source": state.balances.source_name(),
            "database": database,
        }))
        .message(format!("Service is {status}"))
}
