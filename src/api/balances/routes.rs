// Balance screen route definitions

use axum::{routing::get, Router};

use super::handler;
use crate::config::state::AppState;

pub fn balance_routes() -> Router<AppState> {
    Router::new()
        .route("/balances/betting-pools", get(handler::betting_pool_balances_handler))
        .route("/balances/betting-pools/{id}", get(handler::betting_pool_balance_handler))
        .route("/balances/banks", get(handler::bank_balances_handler))
        .route("/balances/zones", get(handler::zone_balances_handler))
}
