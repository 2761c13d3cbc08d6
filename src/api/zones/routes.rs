// Zone routes

use axum::{routing::get, Router};

use super::handler;
use crate::config::state::AppState;

pub fn zone_routes() -> Router<AppState> {
    Router::new().route("/zones/{id}", get(handler::zone_handler))
}
