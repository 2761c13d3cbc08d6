// Health route

use axum::{routing::get, Router};

use super::handler;
use crate::config::state::AppState;

pub fn status_routes() -> Router<AppState> {
    Router::new().route("/status", get(handler::status_handler))
}
