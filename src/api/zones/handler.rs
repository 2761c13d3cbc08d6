// Zone lookup

use axum::{
    extract::{rejection::PathRejection, Path, State},
    http::StatusCode,
};
use serde_json::json;
use tracing::instrument;

use crate::config::state::AppState;
use crate::models::Zone;
use crate::utils::error_handler::{AppError, DomainError};
use crate::utils::response_handler::HandlerResponse;

#[instrument(name = "zone", skip(state))]
pub async fn zone_handler(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<HandlerResponse, AppError> {
    let Path(id) = id?;

    let zone: Zone = state
        .balances
        .zone(id)
        .await?
        .ok_or_else(|| DomainError::not_found("Zona", id))?;

    Ok(HandlerResponse::new(StatusCode::OK).data(json!(zone)))
}
